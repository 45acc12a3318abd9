//! List rules command implementation.

use fsd_lint_rules::{all_rules, public_api_imports};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }
    println!(
        "{:<10} {:<25} {}",
        public_api_imports::TESTING_CODE,
        public_api_imports::NAME,
        public_api_imports::TESTING_MESSAGE
    );

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  fsd-lint check --rules path-checker");
    println!("  fsd-lint check --rules FSD001,FSD002");
}
