//! Rule sets built from defaults or from configuration.

use crate::{path_checker, public_api_imports, PathChecker, PublicApiImports};
use fsd_lint_core::{Config, RuleBox};

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PathChecker::new()),
        Box::new(PublicApiImports::new()),
    ]
}

/// Returns every built-in rule configured from `config`.
///
/// Disabled rules are still returned; the engine skips them.
///
/// # Errors
///
/// Returns an error if a test file pattern is not a valid glob.
pub fn configured_rules(config: &Config) -> Result<Vec<RuleBox>, glob::PatternError> {
    Ok(vec![
        Box::new(PathChecker::from_config(config)),
        Box::new(PublicApiImports::from_config(config)?),
    ])
}

/// Builds a single rule by name or code (e.g. `path-checker` or `FSD001`).
///
/// Returns `Ok(None)` for unknown names.
///
/// # Errors
///
/// Returns an error if a test file pattern is not a valid glob.
pub fn rule_by_name(name: &str, config: &Config) -> Result<Option<RuleBox>, glob::PatternError> {
    let rule: RuleBox = match name {
        path_checker::NAME | path_checker::CODE => Box::new(PathChecker::from_config(config)),
        public_api_imports::NAME | public_api_imports::CODE | public_api_imports::TESTING_CODE => {
            Box::new(PublicApiImports::from_config(config)?)
        }
        _ => return Ok(None),
    };
    Ok(Some(rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_have_unique_names() {
        let rules = all_rules();
        assert_eq!(rules.len(), 2);
        assert_ne!(rules[0].name(), rules[1].name());
    }

    #[test]
    fn configured_rules_from_default_config() {
        let rules = configured_rules(&Config::default()).expect("default config is valid");
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["path-checker", "public-api-imports"]);
    }

    #[test]
    fn lookup_by_name_or_code() {
        let config = Config::default();
        for key in ["path-checker", "FSD001"] {
            let rule = rule_by_name(key, &config).expect("valid").expect("known");
            assert_eq!(rule.name(), "path-checker");
        }
        for key in ["public-api-imports", "FSD002", "FSD003"] {
            let rule = rule_by_name(key, &config).expect("valid").expect("known");
            assert_eq!(rule.name(), "public-api-imports");
        }
        assert!(rule_by_name("no-unwrap-expect", &config)
            .expect("valid")
            .is_none());
    }
}
