//! Rule trait for import-level lint rules.

use crate::context::FileContext;
use crate::types::{Location, Replacement, Severity, Suggestion, Violation};

/// A single import statement as seen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRef<'a> {
    /// Module specifier exactly as written, without quotes.
    pub specifier: &'a str,
    /// Line of the specifier literal (1-indexed).
    pub line: usize,
    /// Column of the specifier literal (1-indexed).
    pub column: usize,
    /// Byte offset of the literal, including its opening quote.
    pub offset: usize,
    /// Byte length of the literal, including both quotes.
    pub length: usize,
}

impl<'a> ImportRef<'a> {
    /// An import with no source position, for evaluating bare specifiers.
    #[must_use]
    pub fn bare(specifier: &'a str) -> Self {
        Self {
            specifier,
            line: 1,
            column: 1,
            offset: 0,
            length: 0,
        }
    }

    /// Location of the specifier literal within `ctx`'s file.
    #[must_use]
    pub fn location(&self, ctx: &FileContext<'_>) -> Location {
        Location::new(ctx.relative_path.clone(), self.line, self.column)
            .with_span(self.offset, self.length)
    }
}

/// Outcome of evaluating one import against one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The import is acceptable, or the rule does not apply to it.
    Pass,
    /// The import breaks the rule.
    Violation {
        /// Code of the broken check (a rule may own several).
        code: &'static str,
        /// Fixed message for this kind of violation.
        message: &'static str,
    },
}

impl Verdict {
    /// Returns true if this verdict reports a violation.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }
}

/// A lint rule evaluated once per import statement.
///
/// Rules are pure functions of the import, the file context and their own
/// read-only configuration, so one instance may be shared across threads.
///
/// # Example
///
/// ```ignore
/// use fsd_lint_core::{FileContext, ImportRef, ImportRule, Verdict};
///
/// pub struct NoLodash;
///
/// impl ImportRule for NoLodash {
///     fn name(&self) -> &'static str { "no-lodash" }
///     fn code(&self) -> &'static str { "FSD100" }
///
///     fn evaluate(&self, import: &ImportRef<'_>, _ctx: &FileContext<'_>) -> Verdict {
///         if import.specifier == "lodash" {
///             Verdict::Violation { code: self.code(), message: "lodash is banned" }
///         } else {
///             Verdict::Pass
///         }
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "path-checker").
    fn name(&self) -> &'static str;

    /// Returns the primary rule code (e.g., "FSD001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Decides whether `import` breaks this rule.
    fn evaluate(&self, import: &ImportRef<'_>, ctx: &FileContext<'_>) -> Verdict;

    /// Replacement text for the import's specifier literal, quotes included.
    ///
    /// Only consulted after [`evaluate`](Self::evaluate) reported a violation.
    fn compute_fix(&self, _import: &ImportRef<'_>, _ctx: &FileContext<'_>) -> Option<String> {
        None
    }

    /// Evaluates `import` and builds a [`Violation`] with its fix attached.
    fn check(&self, import: &ImportRef<'_>, ctx: &FileContext<'_>) -> Option<Violation> {
        let Verdict::Violation { code, message } = self.evaluate(import, ctx) else {
            return None;
        };

        let location = import.location(ctx);
        let mut violation = Violation::new(
            code,
            self.name(),
            self.default_severity(),
            location.clone(),
            message,
        );

        if let Some(new_text) = self.compute_fix(import, ctx) {
            violation = violation.with_suggestion(Suggestion::with_fix(
                format!("Replace with {new_text}"),
                Replacement::new(location, new_text),
            ));
        }

        Some(violation)
    }
}

/// Type alias for boxed `ImportRule` trait objects.
pub type RuleBox = Box<dyn ImportRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct NoLodash;

    impl ImportRule for NoLodash {
        fn name(&self) -> &'static str {
            "no-lodash"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn evaluate(&self, import: &ImportRef<'_>, _ctx: &FileContext<'_>) -> Verdict {
            if import.specifier == "lodash" {
                Verdict::Violation {
                    code: self.code(),
                    message: "lodash is banned",
                }
            } else {
                Verdict::Pass
            }
        }

        fn compute_fix(&self, _import: &ImportRef<'_>, _ctx: &FileContext<'_>) -> Option<String> {
            Some("'lodash-es'".to_string())
        }
    }

    #[test]
    fn check_builds_violation_with_fix() {
        let ctx = FileContext::standalone(Path::new("src/a.ts"), "import x from 'lodash';");
        let import = ImportRef {
            specifier: "lodash",
            line: 1,
            column: 15,
            offset: 14,
            length: 8,
        };

        let v = NoLodash.check(&import, &ctx).expect("violation expected");
        assert_eq!(v.code, "TEST001");
        assert_eq!(v.rule, "no-lodash");
        assert_eq!(v.severity, Severity::Error);
        assert_eq!(v.location.byte_range(), 14..22);
        assert_eq!(v.fix().map(|r| r.new_text.as_str()), Some("'lodash-es'"));
    }

    #[test]
    fn check_passes_through() {
        let ctx = FileContext::standalone(Path::new("src/a.ts"), "");
        assert!(NoLodash.check(&ImportRef::bare("react"), &ctx).is_none());
        assert!(!NoLodash
            .evaluate(&ImportRef::bare("react"), &ctx)
            .is_violation());
    }
}
