//! Localized violation messages.

use serde::{Deserialize, Serialize};

use crate::types::{Violation, ViolationKind};

/// Language used for violation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Locale {
    fn kind_label(self, kind: ViolationKind) -> &'static str {
        match (self, kind) {
            (Self::En, ViolationKind::Constant) => "Constant name",
            (Self::En, ViolationKind::Function) => "Function name",
            (Self::Ja, ViolationKind::Constant) => "定数名",
            (Self::Ja, ViolationKind::Function) => "関数名",
        }
    }
}

/// Formats a violation message in the default locale.
#[must_use]
pub fn format_message(violation: &Violation) -> String {
    format_message_in(violation, Locale::default())
}

/// Formats a violation message in `locale`.
///
/// The message names the identifier, the rule key, and the rule's
/// canonical example.
#[must_use]
pub fn format_message_in(violation: &Violation, locale: Locale) -> String {
    let label = locale.kind_label(violation.kind);
    let example = violation.example();
    match locale {
        Locale::En => format!(
            "{label} \"{}\" does not follow {} (e.g. {example})",
            violation.name, violation.rule
        ),
        Locale::Ja => format!(
            "{label} \"{}\" は {} に従っていません（例: {example}）",
            violation.name, violation.rule
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(name: &str, kind: ViolationKind, rule: &str) -> Violation {
        Violation {
            name: name.into(),
            line: 0,
            character: 6,
            end_character: 6 + name.len(),
            kind,
            rule: rule.into(),
            offset: 6,
        }
    }

    #[test]
    fn constant_message_in_english() {
        let v = violation("pi", ViolationKind::Constant, "UPPER_SNAKE_CASE");
        insta::assert_snapshot!(
            format_message(&v),
            @r#"Constant name "pi" does not follow UPPER_SNAKE_CASE (e.g. MAX_RETRY)"#
        );
    }

    #[test]
    fn function_message_in_english() {
        let v = violation("FetchData", ViolationKind::Function, "camelCase");
        insta::assert_snapshot!(
            format_message(&v),
            @r#"Function name "FetchData" does not follow camelCase (e.g. fetchData)"#
        );
    }

    #[test]
    fn constant_message_in_japanese() {
        let v = violation("pi", ViolationKind::Constant, "UPPER_SNAKE_CASE");
        insta::assert_snapshot!(
            format_message_in(&v, Locale::Ja),
            @r#"定数名 "pi" は UPPER_SNAKE_CASE に従っていません（例: MAX_RETRY）"#
        );
    }

    #[test]
    fn function_message_in_japanese() {
        let v = violation("do_thing", ViolationKind::Function, "PascalCase");
        insta::assert_snapshot!(
            format_message_in(&v, Locale::Ja),
            @r#"関数名 "do_thing" は PascalCase に従っていません（例: FetchData）"#
        );
    }

    #[test]
    fn unknown_rule_uses_key_as_example() {
        let v = violation("x", ViolationKind::Constant, "SCREAMING");
        let msg = format_message(&v);
        assert!(msg.contains("does not follow SCREAMING (e.g. SCREAMING)"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let v = violation("pi", ViolationKind::Constant, "UPPER_SNAKE_CASE");
        assert_eq!(format_message(&v), format_message(&v));
    }
}
