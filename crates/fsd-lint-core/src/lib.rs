//! # fsd-lint-core
//!
//! Core framework for linting imports in feature-sliced front-end projects.
//!
//! This crate provides the foundational traits and types shared by rules,
//! the tree-sitter engine and the CLI:
//!
//! - [`ImportRule`] trait for per-import rules with optional autofix
//! - [`LayerTable`] for the recognized layers and their public API policy
//! - [`paths`] for specifier classification and location of source files
//! - [`Violation`] and [`LintResult`] for representing lint findings
//! - [`Config`] for `fsd-lint.toml`
//!
//! ## Example
//!
//! ```ignore
//! use fsd_lint_core::{FileContext, ImportRef, ImportRule};
//!
//! let ctx = FileContext::standalone(path, &source);
//! if let Some(violation) = rule.check(&ImportRef::bare("entities/Article/model"), &ctx) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod layers;
mod rule;
mod types;

pub mod paths;

pub use config::{
    AnalyzerConfig, Config, ConfigError, LayersConfig, RuleConfig, TEST_FILES_PATTERNS_KEY,
};
pub use context::FileContext;
pub use layers::{LayerTable, DEFAULT_LAYERS, DEFAULT_PUBLIC_API_EXEMPT};
pub use paths::LogicalLocation;
pub use rule::{ImportRef, ImportRule, RuleBox, Verdict};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
