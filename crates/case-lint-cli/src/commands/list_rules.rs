//! List rules command implementation.

use case_lint_core::CaseRule;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<18} {:<34} Example", "Key", "Pattern");
    println!("{}", "-".repeat(70));

    for rule in CaseRule::ALL {
        println!("{:<18} {:<34} {}", rule.key(), rule.pattern(), rule.example());
    }

    println!("\nDefaults:");
    println!("  constants  - {}", CaseRule::UpperSnakeCase);
    println!("  functions  - {}", CaseRule::CamelCase);

    println!("\nOverride per run, e.g.:");
    println!("  case-lint check --constant-case PascalCase --function-case camelCase");
}
