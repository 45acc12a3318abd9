//! # fsd-lint-ts
//!
//! Tree-sitter based host for fsd-lint import rules.
//!
//! This crate parses TypeScript and JavaScript sources, hands every import
//! declaration to the rules from `fsd-lint-rules` and turns their verdicts
//! into `fsd-lint-core` violations. It provides:
//!
//! - [`LanguageExtractor`] trait for pluggable source dialects
//! - [`TypeScriptExtractor`] for `.ts`/`.js` and `.tsx`/`.jsx` import extraction
//! - [`ImportRuleEngine`] for running rules with config overrides
//! - [`apply_fixes`] for writing autofixes back into source text

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod extractor;
pub mod typescript;

pub use engine::{apply_fixes, Fixed, ImportRuleEngine};
pub use extractor::{ExtractError, FileAnalysis, ImportInfo, LanguageExtractor};
pub use typescript::{default_extractors, TypeScriptExtractor};
