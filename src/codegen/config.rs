//! Generator configuration
//!
//! Defaults match what the editor framework's own templates produce: tab indentation, `\n` line endings.

use inspectorgen_core::naming::EDITOR_GUARD_SYMBOL;

/// Configuration for editor generation and merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Text emitted once per indentation level
    pub indent_unit: String,
    /// Line terminator for generated text
    pub line_ending: String,
    /// Preprocessor symbol guarding an import inserted into an existing file
    pub guard_symbol: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            line_ending: "\n".to_string(),
            guard_symbol: EDITOR_GUARD_SYMBOL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent with `width` spaces instead of tabs
    pub fn with_indent_spaces(mut self, width: usize) -> Self {
        self.indent_unit = " ".repeat(width);
        self
    }

    /// Set the indentation unit
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Set the line terminator
    pub fn with_line_ending(mut self, ending: impl Into<String>) -> Self {
        self.line_ending = ending.into();
        self
    }

    /// Set the guard symbol for inserted imports
    pub fn with_guard_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.guard_symbol = symbol.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.indent_unit, "\t");
        assert_eq!(config.line_ending, "\n");
        assert_eq!(config.guard_symbol, "UNITY_EDITOR");
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GeneratorConfig::new(), GeneratorConfig::default());
    }

    #[test]
    fn test_with_indent_spaces() {
        let config = GeneratorConfig::new().with_indent_spaces(4);
        assert_eq!(config.indent_unit, "    ");
        assert_eq!(config.line_ending, "\n");
    }

    #[test]
    fn test_builder_override() {
        let config = GeneratorConfig::new().with_indent_spaces(2).with_indent_unit("\t");
        assert_eq!(config.indent_unit, "\t"); // Last value wins
    }

    #[test]
    fn test_builder_chain_all() {
        let config = GeneratorConfig::new()
            .with_indent_spaces(2)
            .with_line_ending("\r\n")
            .with_guard_symbol("MY_EDITOR");
        assert_eq!(config.indent_unit, "  ");
        assert_eq!(config.line_ending, "\r\n");
        assert_eq!(config.guard_symbol, "MY_EDITOR");
    }
}
