//! FSD002 / FSD003: Import slices through their public API.
//!
//! Code outside a slice may only import the slice's entry point
//! (`layer/slice`, i.e. its `index.ts`). The one exception is the slice's
//! testing entry point (`layer/slice/testing`), and that may only be used by
//! test files.
//!
//! # Detected Patterns
//!
//! ```ignore
//! import { Article } from 'entities/Article';              // GOOD
//! import { Article } from 'entities/Article/model/types';  // FSD002
//! import { mockArticle } from 'entities/Article/testing';  // GOOD in *.test.ts
//! import { mockArticle } from 'entities/Article/testing';  // FSD003 elsewhere
//! ```
//!
//! The `shared` layer has no slices and is never checked.

use fsd_lint_core::paths::{is_relative, strip_alias};
use fsd_lint_core::{
    Config, FileContext, ImportRef, ImportRule, LayerTable, LogicalLocation, Severity, Verdict,
    TEST_FILES_PATTERNS_KEY,
};
use glob::{MatchOptions, Pattern};

/// Rule code for imports that bypass the public API.
pub const CODE: &str = "FSD002";

/// Rule code for testing API imports from non-test files.
pub const TESTING_CODE: &str = "FSD003";

/// Rule name for public-api-imports.
pub const NAME: &str = "public-api-imports";

/// Message for imports that reach below `layer/slice`.
pub const MESSAGE: &str = "Absolute imports are only allowed from the public API (index.ts)";

/// Message for testing API imports outside test files.
pub const TESTING_MESSAGE: &str =
    "Test data must be imported from the public testing API (testing.ts) in test files only";

/// Segment naming the testing entry point of a slice.
const TESTING_SEGMENT: &str = "testing";

/// Where an absolute import lands relative to the slice's public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportTarget {
    /// `layer` or `layer/slice`.
    PublicApi,
    /// `layer/slice/testing`.
    TestingApi,
    /// Anything nested below `layer/slice`.
    Internal,
}

impl ImportTarget {
    fn classify(target: &LogicalLocation) -> Self {
        let is_testing = target.rest().first().map(String::as_str) == Some(TESTING_SEGMENT)
            && target.len() < 4;

        if is_testing {
            Self::TestingApi
        } else if target.len() > 2 {
            Self::Internal
        } else {
            Self::PublicApi
        }
    }
}

/// Requires cross-slice imports to go through the slice's public API.
#[derive(Debug, Clone)]
pub struct PublicApiImports {
    alias: Option<String>,
    layers: LayerTable,
    test_files_patterns: Vec<Pattern>,
}

impl PublicApiImports {
    /// Creates the rule with the default layer table, no alias and no test patterns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alias: None,
            layers: LayerTable::feature_sliced(),
            test_files_patterns: Vec::new(),
        }
    }

    /// Creates the rule from `[analyzer]`, `[layers]` and `[rules.public-api-imports]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a test file pattern is not a valid glob.
    pub fn from_config(config: &Config) -> Result<Self, glob::PatternError> {
        let patterns = config
            .rule(NAME)
            .map(|c| c.get_str_array(TEST_FILES_PATTERNS_KEY))
            .unwrap_or_default();

        Self {
            alias: config.rule_alias(NAME),
            layers: config.layer_table(),
            test_files_patterns: Vec::new(),
        }
        .test_files_patterns(patterns)
    }

    /// Sets the bundler alias stripped from specifiers.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into()).filter(|a| !a.is_empty());
        self
    }

    /// Replaces the layer table.
    #[must_use]
    pub fn layers(mut self, layers: LayerTable) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the glob patterns identifying test files.
    ///
    /// Patterns are matched against the importer's absolute path with `/`
    /// separators. `*` does not cross a `/`, so a bare `*.test.ts` never
    /// matches an absolute path; use `**/*.test.ts`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not a valid glob.
    pub fn test_files_patterns<I, S>(mut self, patterns: I) -> Result<Self, glob::PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.test_files_patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    fn is_test_file(&self, ctx: &FileContext<'_>) -> bool {
        // `*` stays within one path segment; only `**` crosses directories.
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        self.test_files_patterns
            .iter()
            .any(|p| p.matches_with(&ctx.normalized_path, options))
    }
}

impl Default for PublicApiImports {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportRule for PublicApiImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires imports from other slices to use their public API"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn evaluate(&self, import: &ImportRef<'_>, ctx: &FileContext<'_>) -> Verdict {
        let target = strip_alias(import.specifier, self.alias.as_deref());
        if is_relative(target) {
            return Verdict::Pass;
        }

        let target = LogicalLocation::parse(target);
        if !target
            .layer()
            .is_some_and(|layer| self.layers.enforces_public_api(layer))
        {
            return Verdict::Pass;
        }

        match ImportTarget::classify(&target) {
            ImportTarget::PublicApi => Verdict::Pass,
            ImportTarget::Internal => Verdict::Violation {
                code: CODE,
                message: MESSAGE,
            },
            ImportTarget::TestingApi if self.is_test_file(ctx) => Verdict::Pass,
            ImportTarget::TestingApi => {
                tracing::debug!(
                    specifier = import.specifier,
                    file = %ctx.relative_path.display(),
                    "testing API imported from non-test file"
                );
                Verdict::Violation {
                    code: TESTING_CODE,
                    message: TESTING_MESSAGE,
                }
            }
        }
    }
}
