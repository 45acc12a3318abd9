//! Check command implementation.
//!
//! Discovers TypeScript/JavaScript sources, runs the import rules through the
//! tree-sitter engine and optionally writes autofixes back to disk.

use anyhow::{Context, Result};
use fsd_lint_core::{
    Config, FileContext, ImportRule, LintResult, RuleBox, Violation, ViolationDiagnostic,
};
use fsd_lint_rules::{configured_rules, rule_by_name};
use fsd_lint_ts::{apply_fixes, default_extractors, ImportRuleEngine, LanguageExtractor};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options of the `check` subcommand.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes to run instead of all rules.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Write fixes back to disk.
    pub fix: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let rules = match &options.rules {
        Some(filter) => filter_rules(filter, &config)?,
        None => configured_rules(&config).context("Invalid rule configuration")?,
    };

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Cannot access {}", root.display()))?;

    let mut exclude = config.analyzer.exclude.clone();
    exclude.extend(options.exclude.iter().cloned());
    let exclude = compile_excludes(&exclude)?;

    let extractors = default_extractors();
    let files = discover_files(&root, &exclude, &extractors, config.analyzer.respect_gitignore)?;

    let engine = ImportRuleEngine::new(config, rules);
    tracing::info!(
        "Analyzing {} files with {} rules",
        files.len(),
        engine.active_rule_count()
    );

    let mut result = LintResult::new();

    for file_path in &files {
        let Some(extractor) = extractor_for(file_path, &extractors) else {
            continue;
        };

        let Some(report) = lint_file(&engine, extractor, file_path, &root, options.fix)? else {
            continue;
        };
        result.fixes_applied += report.fixes_applied;

        if options.format == OutputFormat::Pretty {
            print_pretty(&report.violations, &report.content);
        }

        result.violations.extend(report.violations);
        result.files_checked += 1;
    }

    result.sort();

    super::output::print(&result, options.format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Outcome of linting one file on disk.
struct FileReport {
    /// Violations left in the file, after fixing when enabled.
    violations: Vec<Violation>,
    /// Final file content, which the violation spans refer to.
    content: String,
    fixes_applied: usize,
}

/// Lints one file and, with `fix`, writes its autofixes back.
///
/// Returns `None` when the file cannot be analyzed; the file is skipped with
/// a warning.
fn lint_file(
    engine: &ImportRuleEngine,
    extractor: &dyn LanguageExtractor,
    file_path: &Path,
    root: &Path,
    fix: bool,
) -> Result<Option<FileReport>> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let violations = match lint_source(engine, extractor, file_path, root, &content) {
        Ok(violations) => violations,
        Err(e) => {
            tracing::warn!("Skipping file: {e:#}");
            return Ok(None);
        }
    };

    if !fix || violations.iter().all(|v| v.fix().is_none()) {
        return Ok(Some(FileReport {
            violations,
            content,
            fixes_applied: 0,
        }));
    }

    let fixed = apply_fixes(&content, &violations);
    std::fs::write(file_path, &fixed.content)
        .with_context(|| format!("Failed to write {}", file_path.display()))?;
    tracing::debug!("Applied {} fix(es) to {}", fixed.applied, file_path.display());

    // The fixes are on disk already, so a failed re-check only loses the
    // remaining violations of this file.
    let violations = lint_source(engine, extractor, file_path, root, &fixed.content)
        .unwrap_or_else(|e| {
            tracing::warn!("Skipping re-check after fixing: {e:#}");
            Vec::new()
        });

    Ok(Some(FileReport {
        violations,
        content: fixed.content,
        fixes_applied: fixed.applied,
    }))
}

/// Extracts imports from one file and runs the engine over them.
fn lint_source(
    engine: &ImportRuleEngine,
    extractor: &dyn LanguageExtractor,
    file_path: &Path,
    root: &Path,
    content: &str,
) -> Result<Vec<Violation>> {
    tracing::debug!(
        "Linting {} as {}",
        file_path.display(),
        extractor.language_id()
    );
    let analysis = extractor
        .analyze(content)
        .with_context(|| format!("Failed to analyze {}", file_path.display()))?;

    if analysis.has_syntax_errors {
        tracing::warn!(
            "Syntax errors in {}, imports may be incomplete",
            file_path.display()
        );
    }

    let ctx = FileContext::new(file_path, content, root);
    Ok(engine.check(&ctx, &analysis))
}

fn print_pretty(violations: &[Violation], content: &str) {
    for violation in violations {
        let name = violation.location.file.display().to_string();
        let report = miette::Report::new(ViolationDiagnostic::from(violation))
            .with_source_code(miette::NamedSource::new(name, content.to_string()));
        eprintln!("{report:?}");
    }
}

fn filter_rules(filter: &str, config: &Config) -> Result<Vec<RuleBox>> {
    let mut rules: Vec<RuleBox> = Vec::new();
    let mut seen = Vec::new();

    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match rule_by_name(name, config).context("Invalid rule configuration")? {
            Some(rule) if !seen.contains(&rule.name()) => {
                seen.push(rule.name());
                rules.push(rule);
            }
            Some(_) => {}
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    Ok(rules)
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

fn extractor_for<'a>(
    path: &Path,
    extractors: &'a [Box<dyn LanguageExtractor>],
) -> Option<&'a dyn LanguageExtractor> {
    let ext = extension_of(path);
    extractors
        .iter()
        .find(|e| e.extensions().contains(&ext.as_str()))
        .map(|e| &**e)
}

fn discover_files(
    root: &Path,
    exclude: &[glob::Pattern],
    extractors: &[Box<dyn LanguageExtractor>],
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || extractor_for(path, extractors).is_none() {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel_str = fsd_lint_core::paths::normalize_separators(&rel.to_string_lossy());
        if exclude.iter().any(|p| p.matches(&rel_str)) {
            tracing::debug!("Excluding: {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_ts::{ExtractError, FileAnalysis, TypeScriptExtractor};
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_supported_files_and_honours_excludes() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/entities/User/index.ts", "");
        write(tmp.path(), "src/pages/Main/ui/Main.tsx", "");
        write(tmp.path(), "src/app/styles/index.scss", "");
        write(tmp.path(), "node_modules/react/index.js", "");

        let exclude = compile_excludes(&["**/node_modules/**".to_string()]).unwrap();
        let files = discover_files(tmp.path(), &exclude, &default_extractors(), false).unwrap();

        let rel: Vec<String> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, ["src/entities/User/index.ts", "src/pages/Main/ui/Main.tsx"]);
    }

    #[test]
    fn lint_and_fix_on_disk_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let src = "import { getUser } from 'entities/User/model/selectors';\n";
        write(&root, "src/entities/User/ui/Card.ts", src);

        let config = Config::default();
        let engine = ImportRuleEngine::new(config.clone(), configured_rules(&config).unwrap());
        let extractors = default_extractors();
        let file = root.join("src/entities/User/ui/Card.ts");
        let extractor = extractor_for(&file, &extractors).unwrap();

        let violations = lint_source(&engine, extractor, &file, &root, src).unwrap();
        assert_eq!(violations[0].code, "FSD001");
        assert_eq!(
            violations[0].location.file,
            PathBuf::from("src/entities/User/ui/Card.ts")
        );

        let fixed = apply_fixes(src, &violations);
        assert_eq!(fixed.content, "import { getUser } from '../model/selectors';\n");
        assert!(lint_source(&engine, extractor, &file, &root, &fixed.content)
            .unwrap()
            .is_empty());
    }

    /// Fails on any source that already contains a relative import.
    struct RejectsRelative(TypeScriptExtractor);

    impl LanguageExtractor for RejectsRelative {
        fn language_id(&self) -> &'static str {
            self.0.language_id()
        }

        fn extensions(&self) -> &'static [&'static str] {
            self.0.extensions()
        }

        fn analyze(&self, source: &str) -> Result<FileAnalysis, ExtractError> {
            if source.contains("'../") {
                return Err(ExtractError::Parse {
                    language: "typescript",
                });
            }
            self.0.analyze(source)
        }
    }

    fn default_engine() -> ImportRuleEngine {
        let config = Config::default();
        ImportRuleEngine::new(config.clone(), configured_rules(&config).unwrap())
    }

    #[test]
    fn lint_file_writes_fixes() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        write(&root, "src/entities/User/ui/Card.ts", "import { a } from 'entities/User/model';\n");
        let file = root.join("src/entities/User/ui/Card.ts");

        let extractor = TypeScriptExtractor::typescript();
        let report = lint_file(&default_engine(), &extractor, &file, &root, true)
            .unwrap()
            .unwrap();

        assert_eq!(report.fixes_applied, 1);
        assert!(report.violations.is_empty());
        assert_eq!(report.content, "import { a } from '../model';\n");
        assert_eq!(fs::read_to_string(&file).unwrap(), report.content);
    }

    #[test]
    fn failed_recheck_after_fix_does_not_abort() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        write(&root, "src/entities/User/ui/Card.ts", "import { a } from 'entities/User/model';\n");
        let file = root.join("src/entities/User/ui/Card.ts");

        let extractor = RejectsRelative(TypeScriptExtractor::typescript());
        let report = lint_file(&default_engine(), &extractor, &file, &root, true)
            .unwrap()
            .unwrap();

        assert_eq!(report.fixes_applied, 1);
        assert!(report.violations.is_empty());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "import { a } from '../model';\n"
        );
    }

    #[test]
    fn unanalyzable_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        write(&root, "src/entities/User/ui/Card.ts", "import { a } from '../model';\n");
        let file = root.join("src/entities/User/ui/Card.ts");

        let extractor = RejectsRelative(TypeScriptExtractor::typescript());
        let report = lint_file(&default_engine(), &extractor, &file, &root, true).unwrap();
        assert!(report.is_none());
    }

    #[test]
    fn filter_rules_deduplicates_and_skips_unknown() {
        let rules = filter_rules("FSD002, public-api-imports,bogus,FSD001", &Config::default())
            .unwrap();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["public-api-imports", "path-checker"]);
    }

    #[test]
    fn invalid_exclude_is_an_error() {
        assert!(compile_excludes(&["[".to_string()]).is_err());
    }
}
