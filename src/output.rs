//! Write generated editors to disk, merging into files that already exist.
//!
//! ## Notes
//!
//! - The merge is line based and append only. An existing file is never parsed: the only things looked at are
//!   whether some line starts with the editor import, and where the first top-level declaration starts.
//! - Appending the same editor twice yields two copies of the class. Nothing deduplicates them.
//! - IO errors are returned as-is; nothing is retried and a partially written file is left alone.
//! - [`OsFileSystem::write_text`] creates missing parent directories before writing.

use std::fs;
use std::io;
use std::path::Path;

use inspectorgen_core::naming::{DECLARATION_PREFIXES, EDITOR_IMPORT, EDITOR_IMPORT_MARKER};

/// Whole-file access to wherever generated editors are stored.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }
}

/// What [`write_editor`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed; the generated text is the whole file.
    Created,
    /// The generated text was appended to an existing file.
    Appended {
        /// A guarded editor import had to be inserted.
        import_inserted: bool,
    },
}

/// Check whether any line already imports the editor framework.
pub fn has_editor_import(lines: &[String]) -> bool {
    lines.iter().any(|l| l.starts_with(EDITOR_IMPORT_MARKER))
}

/// The guarded import block placed in front of the first declaration.
pub fn guarded_import(guard_symbol: &str) -> String {
    format!("#if {guard_symbol}\n{EDITOR_IMPORT}\n#endif\n")
}

/// Insert a guarded editor import in front of the first top-level declaration line, unless one is present.
///
/// ## Returns
/// - `true` if `lines` was modified. Nothing is inserted when the import exists or no line starts a namespace
///   or a public/internal type.
pub fn insert_editor_import(lines: &mut [String], guard_symbol: &str) -> bool {
    if has_editor_import(lines) {
        return false;
    }

    let Some(line) = lines
        .iter_mut()
        .find(|l| DECLARATION_PREFIXES.iter().any(|prefix| l.starts_with(prefix)))
    else {
        tracing::warn!("no namespace or type declaration found; editor import not inserted");
        return false;
    };

    line.insert_str(0, &guarded_import(guard_symbol));
    true
}

/// Merge `generated` into the text of an existing file.
///
/// ## Returns
/// - The new file contents and whether an import was inserted.
pub fn merge_into_existing(existing: &str, generated: &str, guard_symbol: &str) -> (String, bool) {
    let mut lines: Vec<String> = existing.split('\n').map(str::to_string).collect();
    let inserted = insert_editor_import(&mut lines, guard_symbol);

    let mut merged = lines.join("\n");
    merged.push('\n');
    merged.push_str(generated);
    (merged, inserted)
}

/// Write `generated` to `path`, appending to the file if it exists.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_editor(
    fs: &dyn FileSystem,
    path: &Path,
    generated: &str,
    guard_symbol: &str,
) -> io::Result<WriteOutcome> {
    if !fs.exists(path) {
        fs.write_text(path, generated)?;
        tracing::info!("created editor file");
        return Ok(WriteOutcome::Created);
    }

    let existing = fs.read_text(path)?;
    let (merged, import_inserted) = merge_into_existing(&existing, generated, guard_symbol);
    fs.write_text(path, &merged)?;
    tracing::info!(import_inserted, "appended editor to existing file");
    Ok(WriteOutcome::Appended { import_inserted })
}
