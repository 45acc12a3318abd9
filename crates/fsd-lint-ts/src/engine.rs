//! Import rule engine.
//!
//! Runs every enabled [`ImportRule`] against the imports of a
//! [`FileAnalysis`], producing [`Violation`]s from fsd-lint-core, and writes
//! autofixes back into source text.

use fsd_lint_core::{Config, FileContext, RuleBox, Violation};

use crate::extractor::FileAnalysis;

/// Evaluates import rules against extracted file analysis.
pub struct ImportRuleEngine {
    config: Config,
    rules: Vec<RuleBox>,
}

impl ImportRuleEngine {
    /// Create a new engine from config and a rule set.
    #[must_use]
    pub fn new(config: Config, rules: Vec<RuleBox>) -> Self {
        Self { config, rules }
    }

    /// Number of rules that will actually run.
    #[must_use]
    pub fn active_rule_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| self.config.is_rule_enabled(r.name()))
            .count()
    }

    /// Check every import of one file.
    #[must_use]
    pub fn check(&self, ctx: &FileContext<'_>, analysis: &FileAnalysis) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                tracing::debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let severity = self.config.rule_severity(rule.name());
            for import in &analysis.imports {
                if let Some(mut violation) = rule.check(&import.as_import_ref(), ctx) {
                    if let Some(severity) = severity {
                        violation.severity = severity;
                    }
                    violations.push(violation);
                }
            }
        }

        violations.sort_by_key(|v| v.location.offset);
        violations
    }
}

/// Source text after applying fixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    /// Rewritten source.
    pub content: String,
    /// Number of replacements applied.
    pub applied: usize,
}

/// Applies the replacements carried by `violations` to `content`.
///
/// Replacements are applied back to front so earlier offsets stay valid.
/// A replacement overlapping one already applied, or falling outside the
/// content, is skipped.
#[must_use]
pub fn apply_fixes(content: &str, violations: &[Violation]) -> Fixed {
    let mut edits: Vec<_> = violations.iter().filter_map(Violation::fix).collect();
    edits.sort_by_key(|r| std::cmp::Reverse(r.location.offset));

    let mut out = content.to_string();
    let mut applied = 0;
    let mut floor = content.len();

    for edit in edits {
        let range = edit.location.byte_range();
        let in_bounds = range.end <= floor
            && out.is_char_boundary(range.start)
            && out.is_char_boundary(range.end);
        if !in_bounds {
            tracing::debug!(
                "Skipping overlapping fix at {}:{}",
                edit.location.file.display(),
                edit.location.line
            );
            continue;
        }
        out.replace_range(range.clone(), &edit.new_text);
        floor = range.start;
        applied += 1;
    }

    Fixed {
        content: out,
        applied,
    }
}
