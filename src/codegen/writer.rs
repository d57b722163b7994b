//! Line writer with indentation tracking
//!
//! Every line, blank ones included, is prefixed with one indent unit per open block. Blocks are opened through
//! [`SourceWriter::block`], which closes them again once the body returns, so depth is balanced by construction.

use super::config::GeneratorConfig;

/// Writer that tracks indentation depth and builds generated source
pub struct SourceWriter<'a> {
    /// The output buffer
    output: String,
    /// Current indentation depth
    depth: usize,
    /// Configuration
    config: &'a GeneratorConfig,
}

impl<'a> SourceWriter<'a> {
    /// Create a new writer with the given config
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write a line at the current depth
    pub fn line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.config.indent_unit);
        }
        self.output.push_str(s);
        self.output.push_str(&self.config.line_ending);
    }

    /// Write an empty line, still indented to the current depth
    pub fn blank_line(&mut self) {
        self.line("");
    }

    /// Write `header`, then the body one level deeper between braces on their own lines
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.braced(f);
    }

    /// Write the body one level deeper between braces on their own lines
    pub fn braced<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line("{");
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Get current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Line tests
    // ========================================

    #[test]
    fn test_new_writer_empty_output() {
        let config = GeneratorConfig::default();
        let writer = SourceWriter::new(&config);
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_line_adds_terminator() {
        let config = GeneratorConfig::default();
        let mut writer = SourceWriter::new(&config);
        writer.line("using UnityEditor;");
        assert_eq!(writer.finish(), "using UnityEditor;\n");
    }

    #[test]
    fn test_blank_line_keeps_depth_indent() {
        let config = GeneratorConfig::default();
        let mut writer = SourceWriter::new(&config);
        writer.block("class A", |w| {
            w.line("int a;");
            w.blank_line();
            w.line("int b;");
        });
        assert_eq!(writer.finish(), "class A\n{\n\tint a;\n\t\n\tint b;\n}\n");
    }

    #[test]
    fn test_blank_line_at_top_level_is_bare() {
        let config = GeneratorConfig::default();
        let mut writer = SourceWriter::new(&config);
        writer.line("using UnityEditor;");
        writer.blank_line();
        assert_eq!(writer.finish(), "using UnityEditor;\n\n");
    }

    // ========================================
    // Block tests
    // ========================================

    #[test]
    fn test_nested_blocks() {
        let config = GeneratorConfig::default();
        let mut writer = SourceWriter::new(&config);
        writer.block("namespace Game", |w| {
            w.block("public class A", |w| {
                assert_eq!(w.depth(), 2);
                w.line("x();");
            });
        });
        let expected = "namespace Game\n{\n\tpublic class A\n\t{\n\t\tx();\n\t}\n}\n";
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn test_block_restores_depth() {
        let config = GeneratorConfig::default();
        let mut writer = SourceWriter::new(&config);
        writer.block("a", |w| w.block("b", |_| {}));
        assert_eq!(writer.depth(), 0);
    }

    #[test]
    fn test_custom_indent_and_line_ending() {
        let config = GeneratorConfig::new().with_indent_spaces(2).with_line_ending("\r\n");
        let mut writer = SourceWriter::new(&config);
        writer.braced(|w| w.line("x"));
        assert_eq!(writer.finish(), "{\r\n  x\r\n}\r\n");
    }
}
