//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# fsd-lint configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "."

# Glob patterns to exclude, matched against paths relative to the root
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Directory segment that marks the start of the layered source tree
source_root = "src"

# Import alias prefix, e.g. "@" for `@/entities/User`
# alias = "@"

# Respect .gitignore files
respect_gitignore = true

[layers]
# Recognized layers
names = ["shared", "entities", "features", "widgets", "pages"]
# Layers whose internals may be imported directly
public_api_exempt = ["shared"]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.path-checker]
enabled = true
# severity = "warning"

[rules.public-api-imports]
enabled = true
# Files allowed to import `<layer>/<slice>/testing`
test_files_patterns = [
    "**/*.test.ts",
    "**/*.test.tsx",
    "**/*.stories.tsx",
]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("fsd-lint.toml"), force)?;

    println!("Created fsd-lint.toml");
    println!("\nNext steps:");
    println!("  1. Set `alias` if your project uses path aliases");
    println!("  2. Run: fsd-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn template_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("path-checker"));
        assert_eq!(config.analyzer.source_root, "src");
        assert_eq!(
            config
                .rule("public-api-imports")
                .unwrap()
                .get_str_array("test_files_patterns")
                .len(),
            3
        );
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fsd-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
