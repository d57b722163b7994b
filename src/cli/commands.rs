//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use inspectorgen_core::{FieldDescriptor, TypeRef};

use crate::codegen::{EditorGenerator, GeneratorConfig};
use crate::output::{OsFileSystem, WriteOutcome};
use crate::reflect::{ReflectionProvider, SchemaProvider, classify_type};
use crate::session::InspectorSession;

use super::{CliError, CliResult, ExitCode};

/// Options for the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub script: String,
    pub skip: Vec<String>,
    pub only: Vec<String>,
    pub include_target_reference: bool,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub indent_spaces: Option<usize>,
}

/// Load the type manifest, rendering load errors as a diagnostic report.
pub fn load_schema(path: &Path) -> CliResult<SchemaProvider> {
    SchemaProvider::load(path).map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))
}

/// List the types a manifest can resolve.
pub fn list_types(schema: &Path) -> CliResult<ExitCode> {
    let provider = load_schema(schema)?;
    for entry in provider.entries() {
        let script = entry.script.as_deref().unwrap_or("-");
        if entry.compiled {
            println!("{}  ({})", entry.type_ref(), script);
        } else {
            println!("{}  ({}, does not compile)", entry.type_ref(), script);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Show the eligible fields of a script's type.
pub fn show_fields(schema: &Path, script: &str) -> CliResult<ExitCode> {
    let provider = load_schema(schema)?;
    let (ty, fields) = eligible_fields(&provider, script)?;
    println!("{}", ty);
    if fields.is_empty() {
        println!("  (no serializable fields; the editor will draw the default inspector)");
    }
    for field in &fields {
        let marker = if field.is_collection { " (collection)" } else { "" };
        println!("  [x] {}: {}{}", field.name, field.declared_type, marker);
    }
    Ok(ExitCode::SUCCESS)
}

/// Generate an editor for a script's type and write, append or print it.
pub fn generate(schema: &Path, options: &GenerateOptions) -> CliResult<ExitCode> {
    let provider = load_schema(schema)?;

    let mut session = InspectorSession::new();
    session.set_script(&provider, &options.script);
    let Some(ty) = session.type_ref().cloned() else {
        return Err(unresolved(&options.script));
    };

    if !options.only.is_empty() {
        session.select_all(false);
        for name in &options.only {
            check_field(&mut session, name, true, &ty.name)?;
        }
    }
    for name in &options.skip {
        check_field(&mut session, name, false, &ty.name)?;
    }
    session.set_include_target_reference(options.include_target_reference);

    let mut config = GeneratorConfig::new();
    if let Some(width) = options.indent_spaces {
        config = config.with_indent_spaces(width);
    }
    let generator = EditorGenerator::with_config(config);

    if options.stdout {
        let Some(request) = session.build_request() else {
            return Err(unresolved(&options.script));
        };
        print!("{}", generator.generate(&request));
        return Ok(ExitCode::SUCCESS);
    }

    let path = match &options.output {
        Some(path) => path.clone(),
        None => session
            .default_save_path(&provider)
            .ok_or_else(|| unresolved(&options.script))?,
    };

    let outcome = session
        .create(&OsFileSystem, &generator, Some(&path))
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;

    match outcome {
        Some(WriteOutcome::Created) => println!("Created {}", path.display()),
        Some(WriteOutcome::Appended { import_inserted: true }) => {
            println!("Appended to {} (inserted editor import)", path.display())
        }
        Some(WriteOutcome::Appended { import_inserted: false }) => println!("Appended to {}", path.display()),
        None => tracing::debug!("nothing written"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve `script` once and classify the fields of the resolved type.
fn eligible_fields(provider: &dyn ReflectionProvider, script: &str) -> CliResult<(TypeRef, Vec<FieldDescriptor>)> {
    let ty = provider.resolve_type(script).ok_or_else(|| unresolved(script))?;
    let fields = classify_type(provider, &ty);
    Ok((ty, fields))
}

fn check_field(session: &mut InspectorSession, name: &str, checked: bool, type_name: &str) -> CliResult<()> {
    if session.set_checked_by_name(name, checked) {
        Ok(())
    } else {
        Err(CliError::failure(format!(
            "'{}' is not a serializable field of {}",
            name, type_name
        )))
    }
}

fn unresolved(script: &str) -> CliError {
    CliError::failure(format!("'{}' does not resolve to a compiled type", script))
}
