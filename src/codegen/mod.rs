//! Editor source generation
//!
//! Turns a [`GenerationRequest`] into the text of a custom inspector class. Generation is a pure function of the
//! request and the [`GeneratorConfig`]; writing the text to disk is [`crate::output`]'s job.
//!
//! ## Module Organization
//!
//! - `config` - indentation, line ending and guard symbol settings
//! - `writer` - line writer with balanced block depth
//! - `editor` - the editor class template

mod config;
mod editor;
mod writer;

pub use config::GeneratorConfig;
pub use editor::{EditorGenerator, GenerationRequest};
pub use writer::SourceWriter;
