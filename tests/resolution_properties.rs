//! Property-based tests for reference scanning and resolution.

use proptest::prelude::*;
use yamlrun::runner::{resolve, scan_references, Value, VariableTable};

/// Strategy for variable names
fn arb_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

/// Strategy for template text without any `$`
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[^$]{0,40}"
}

/// Strategy for text that cannot extend a preceding reference
fn arb_separator() -> impl Strategy<Value = String> {
    "[ ./:-]{1,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn templates_without_references_are_unchanged(text in arb_plain_text(), quote in any::<bool>()) {
        let vars = VariableTable::new();
        prop_assert_eq!(resolve(&text, &vars, true, quote), Value::from(text.as_str()));
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,60}") {
        let vars = VariableTable::new();
        let _ = resolve(&text, &vars, false, true);
    }

    #[test]
    fn references_are_ordered_and_disjoint(text in ".{0,60}") {
        let references = scan_references(&text);
        let mut last_end = 0;
        for reference in &references {
            prop_assert!(reference.span.start >= last_end);
            prop_assert_eq!(&text[reference.span.clone()], reference.raw);
            prop_assert!(reference.raw.starts_with('$'));
            last_end = reference.span.end;
        }
    }

    #[test]
    fn bare_and_braced_forms_agree(name in arb_name(), value in "[a-z0-9 ]{0,12}", sep in arb_separator()) {
        let mut vars = VariableTable::new();
        vars.insert(name.clone(), Value::from(value.as_str()));

        let bare = resolve(&format!("<${}{}>", name, sep), &vars, false, false);
        let braced = resolve(&format!("<${{{}}}{}>", name, sep), &vars, false, false);
        prop_assert_eq!(&bare, &braced);
        prop_assert_eq!(bare, Value::from(format!("<{}{}>", value, sep)));
    }

    #[test]
    fn missing_names_without_environment_vanish(name in arb_name(), prefix in arb_plain_text()) {
        let vars = VariableTable::new();
        let template = format!("{} ${}", prefix, name);
        prop_assert_eq!(
            resolve(&template, &vars, false, false),
            Value::from(format!("{} ", prefix))
        );
    }

    #[test]
    fn sequence_indexing_matches_vec(items in prop::collection::vec("[a-z]{1,5}", 1..6), index in 0usize..8) {
        let mut vars = VariableTable::new();
        vars.insert(
            "list".to_string(),
            Value::Sequence(items.iter().map(|s| Value::from(s.as_str())).collect()),
        );

        let template = format!("$list[{}]", index);
        let expected = match items.get(index) {
            Some(item) => Value::from(item.as_str()),
            None => Value::from(template.as_str()),
        };
        prop_assert_eq!(resolve(&template, &vars, false, false), expected);
    }
}
