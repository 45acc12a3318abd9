//! # fsd-lint-rules
//!
//! Built-in import rules for feature-sliced projects.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FSD001 | `path-checker` | Imports inside one slice must be relative (autofixable) |
//! | FSD002 | `public-api-imports` | Other slices must be imported through their public API |
//! | FSD003 | `public-api-imports` | A slice's testing API may only be imported from test files |
//!
//! ## Usage
//!
//! ```ignore
//! use fsd_lint_core::{FileContext, ImportRef, ImportRule};
//! use fsd_lint_rules::{PathChecker, PublicApiImports};
//!
//! let rules: Vec<Box<dyn ImportRule>> = vec![
//!     Box::new(PathChecker::new().alias("@")),
//!     Box::new(PublicApiImports::new().test_files_patterns(["**/*.test.ts"])?),
//! ];
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod path_checker;
pub mod public_api_imports;
mod presets;

pub use path_checker::PathChecker;
pub use presets::{all_rules, configured_rules, rule_by_name};
pub use public_api_imports::PublicApiImports;

/// Re-export core types for convenience.
pub use fsd_lint_core::{ImportRule, Severity, Verdict, Violation};
