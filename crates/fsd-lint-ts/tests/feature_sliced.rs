//! Integration test: TypeScript source → extractor → rules → fixes.
//!
//! Exercises the built-in rules through the same pipeline the CLI uses,
//! on in-memory sources placed at realistic feature-sliced paths.

use fsd_lint_core::{Config, FileContext, Violation};
use fsd_lint_rules::configured_rules;
use fsd_lint_ts::{apply_fixes, ImportRuleEngine, LanguageExtractor, TypeScriptExtractor};
use std::path::Path;

const CONFIG: &str = r#"
[analyzer]
alias = "@"

[rules.public-api-imports]
test_files_patterns = ["**/*.test.ts", "**/*.test.tsx"]
"#;

fn engine() -> ImportRuleEngine {
    let config = Config::parse(CONFIG).expect("fixture config should parse");
    let rules = configured_rules(&config).expect("fixture rules should build");
    ImportRuleEngine::new(config, rules)
}

fn lint(path: &str, source: &str) -> Vec<Violation> {
    let extractor = if path.ends_with(".tsx") {
        TypeScriptExtractor::tsx()
    } else {
        TypeScriptExtractor::typescript()
    };
    let analysis = extractor.analyze(source).expect("source should parse");
    let ctx = FileContext::new(Path::new(path), source, Path::new("/project"));
    engine().check(&ctx, &analysis)
}

fn codes(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.code.as_str()).collect()
}

const ARTICLE_CARD: &str = "/project/src/entities/Article/ui/ArticleCard/ArticleCard.tsx";

const ARTICLE_CARD_SRC: &str = r"import { memo } from 'react';
import { Text } from '@/shared/ui/Text';
import { User } from '@/entities/User';
import { getArticleData } from '@/entities/Article/model/selectors/getArticleData';
import type { Article } from 'entities/Article/model/types/article';
import cls from './ArticleCard.module.scss';

export const ArticleCard = memo(() => <Text />);
";

#[test]
fn same_slice_imports_are_flagged_and_fixed() {
    let violations = lint(ARTICLE_CARD, ARTICLE_CARD_SRC);

    // Each same-slice import breaks both rules: it is absolute and deep.
    assert_eq!(
        codes(&violations),
        ["FSD001", "FSD002", "FSD001", "FSD002"],
        "unexpected violations: {violations:#?}"
    );
    assert_eq!(violations[0].location.line, 4);
    assert_eq!(
        violations[0].location.file,
        Path::new("src/entities/Article/ui/ArticleCard/ArticleCard.tsx")
    );

    let fixed = apply_fixes(ARTICLE_CARD_SRC, &violations);
    assert_eq!(fixed.applied, 2);
    assert!(fixed
        .content
        .contains("import { getArticleData } from '../../model/selectors/getArticleData';"));
    assert!(fixed
        .content
        .contains("import type { Article } from '../../model/types/article';"));
    assert!(fixed.content.contains("import { Text } from '@/shared/ui/Text';"));
}

#[test]
fn fixed_source_is_clean() {
    let violations = lint(ARTICLE_CARD, ARTICLE_CARD_SRC);
    let fixed = apply_fixes(ARTICLE_CARD_SRC, &violations);

    assert!(lint(ARTICLE_CARD, &fixed.content).is_empty());
}

#[test]
fn cross_slice_deep_import_is_reported_without_fix() {
    let src = "import { ArticleList } from '@/entities/Article/ui/ArticleList/ArticleList';\n";
    let violations = lint("/project/src/pages/ArticlesPage/ui/ArticlesPage.tsx", src);

    assert_eq!(codes(&violations), ["FSD002"]);
    assert!(violations[0].fix().is_none());
    assert_eq!(apply_fixes(src, &violations).applied, 0);
}

#[test]
fn testing_api_depends_on_importing_file() {
    let src = "import { mockUser } from '@/entities/User/testing';\n";

    assert!(lint("/project/src/features/Auth/ui/LoginForm.test.tsx", src).is_empty());
    assert_eq!(
        codes(&lint("/project/src/features/Auth/ui/LoginForm.tsx", src)),
        ["FSD003"]
    );
}

#[test]
fn files_outside_source_root_only_get_public_api_checks() {
    let src = "import { x } from 'entities/Article/model';\n";
    let violations = lint("/project/scripts/entities/Article/seed.ts", src);
    assert_eq!(codes(&violations), ["FSD002"]);
}

#[test]
fn shared_layer_imports_inside_shared() {
    let src = "import { Text } from '@/shared/ui/Text/Text';\n";
    let violations = lint("/project/src/shared/ui/Button/Button.tsx", src);
    assert_eq!(codes(&violations), ["FSD001"]);

    let fixed = apply_fixes(src, &violations);
    assert_eq!(
        fixed.content,
        "import { Text } from '../Text/Text';\n"
    );
}
