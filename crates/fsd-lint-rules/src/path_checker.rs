//! FSD001: Require relative imports inside a slice.
//!
//! A slice must stay self-contained and relocatable, so files of one slice
//! refer to each other with relative specifiers only.
//!
//! # Detected Patterns
//!
//! ```ignore
//! // src/entities/Article/ui/ArticleCard.tsx
//! import { selectArticle } from 'entities/Article/model';   // BAD
//! import { selectArticle } from '@/entities/Article/model'; // BAD (alias "@")
//! import { selectArticle } from '../model';                 // GOOD
//! import { Button } from 'shared/ui';                       // GOOD, other slice
//! ```
//!
//! The autofix rewrites the specifier to the relative path.

use fsd_lint_core::paths::{is_relative, locate, relative_path, strip_alias, DEFAULT_SOURCE_ROOT};
use fsd_lint_core::{
    Config, FileContext, ImportRef, ImportRule, LayerTable, LogicalLocation, Severity, Verdict,
};

/// Rule code for path-checker.
pub const CODE: &str = "FSD001";

/// Rule name for path-checker.
pub const NAME: &str = "path-checker";

/// Message reported for absolute imports inside the importer's own slice.
pub const MESSAGE: &str = "Imports within a single slice must be relative";

/// Requires same-slice imports to be relative.
#[derive(Debug, Clone)]
pub struct PathChecker {
    alias: Option<String>,
    layers: LayerTable,
    source_root: String,
}

impl PathChecker {
    /// Creates the rule with the default layer table and no alias.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alias: None,
            layers: LayerTable::feature_sliced(),
            source_root: DEFAULT_SOURCE_ROOT.to_string(),
        }
    }

    /// Creates the rule from `[analyzer]`, `[layers]` and `[rules.path-checker]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            alias: config.rule_alias(NAME),
            layers: config.layer_table(),
            source_root: config.analyzer.source_root.clone(),
        }
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

    /// Sets the folder name marking the start of layered sources.
    #[must_use]
    pub fn source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = source_root.into();
        self
    }

    /// Import target with the alias removed, unless the rule does not apply.
    fn target<'a>(&self, specifier: &'a str) -> Option<&'a str> {
        let target = strip_alias(specifier, self.alias.as_deref());
        (!is_relative(target)).then_some(target)
    }

    /// Layer and slice of a location, if the layer is recognized.
    fn layer_slice<'l>(&self, loc: &'l LogicalLocation) -> Option<(&'l str, &'l str)> {
        let layer = loc.layer()?;
        let slice = loc.slice()?;
        self.layers.is_layer(layer).then_some((layer, slice))
    }

    /// Importer location when `specifier` points into the importer's own slice.
    fn same_slice_importer(
        &self,
        specifier: &str,
        ctx: &FileContext<'_>,
    ) -> Option<(LogicalLocation, LogicalLocation)> {
        let target = LogicalLocation::parse(self.target(specifier)?);
        let (to_layer, to_slice) = self.layer_slice(&target)?;

        let importer = locate(&ctx.normalized_path, &self.source_root)?;
        let (from_layer, from_slice) = self.layer_slice(&importer)?;

        if from_layer == to_layer && from_slice == to_slice {
            Some((importer, target))
        } else {
            None
        }
    }
}

impl Default for PathChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportRule for PathChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires relative imports between files of the same slice"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn evaluate(&self, import: &ImportRef<'_>, ctx: &FileContext<'_>) -> Verdict {
        if self.same_slice_importer(import.specifier, ctx).is_some() {
            tracing::debug!(
                specifier = import.specifier,
                file = %ctx.relative_path.display(),
                "absolute import within own slice"
            );
            Verdict::Violation {
                code: CODE,
                message: MESSAGE,
            }
        } else {
            Verdict::Pass
        }
    }

    fn compute_fix(&self, import: &ImportRef<'_>, ctx: &FileContext<'_>) -> Option<String> {
        let (importer, target) = self.same_slice_importer(import.specifier, ctx)?;
        let mut relative = relative_path(&importer.parent_dir(), &target.to_absolute());
        if !relative.starts_with('.') {
            relative.insert_str(0, "./");
        }
        Some(format!("'{relative}'"))
    }
}
