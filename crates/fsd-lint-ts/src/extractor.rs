//! Language-agnostic extraction types and trait.
//!
//! `LanguageExtractor` is the extension point for adding new source dialects.
//! Implement it to teach fsd-lint-ts how to pull import specifiers out of a
//! file via Tree-sitter.

use fsd_lint_core::ImportRef;

/// A single import statement extracted from source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    /// Line of the specifier literal (1-indexed).
    pub line: usize,
    /// Column of the specifier literal (1-indexed byte column).
    pub column: usize,
    /// Byte offset of the literal, opening quote included.
    pub offset: usize,
    /// Byte length of the literal, both quotes included.
    pub length: usize,
    /// Module specifier without quotes (e.g., `entities/Article/model`).
    pub specifier: String,
}

impl ImportInfo {
    /// Borrows this import as the view rules evaluate.
    #[must_use]
    pub fn as_import_ref(&self) -> ImportRef<'_> {
        ImportRef {
            specifier: &self.specifier,
            line: self.line,
            column: self.column,
            offset: self.offset,
            length: self.length,
        }
    }
}

/// Result of analyzing a single source file with Tree-sitter.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    /// All import declarations found, in source order.
    pub imports: Vec<ImportInfo>,
    /// Whether the parser had to recover from syntax errors.
    pub has_syntax_errors: bool,
}

/// Errors raised while extracting imports.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader error detail.
        message: String,
    },
    /// The parser produced no tree.
    #[error("failed to parse {language} source")]
    Parse {
        /// Language identifier.
        language: &'static str,
    },
}

/// Trait for language-specific Tree-sitter extraction.
///
/// The extractor receives raw source text and returns a [`FileAnalysis`]
/// listing every import specifier with its span.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"typescript"`, `"tsx"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".ts", ".mts"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extract import declarations from source code.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing is aborted.
    fn analyze(&self, source: &str) -> Result<FileAnalysis, ExtractError>;
}
