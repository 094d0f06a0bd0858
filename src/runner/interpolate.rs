//! Variable interpolation for templates
//!
//! Replaces `$name`, `${name}` and `$name['key'][0]` references with values
//! from the variable table. Lookups are lenient:
//!
//! - a base name missing from the table falls back to the process environment
//!   (or to an empty string when the environment is disabled);
//! - a subkey chain that misses (absent key, index out of range, value not
//!   indexable) leaves the reference text in place untouched.

use crate::runner::reference::{scan_references, Reference, Subkey};
use crate::runner::value::{Value, VariableTable};
use std::borrow::Cow;
use std::collections::HashMap;
use std::env;

/// Resolve every reference in `template`
///
/// When the whole template is one reference and `quote_collections` is off,
/// the referenced value is returned as is, so sequences and mappings keep
/// their shape. Otherwise the result is always a [`Value::String`] with each
/// resolved reference replaced by its rendered text; with `quote_collections`
/// rendered sequences and mappings are wrapped in single quotes.
pub fn resolve(
    template: &str,
    vars: &VariableTable,
    use_environment: bool,
    quote_collections: bool,
) -> Value {
    let references = scan_references(template);
    if references.is_empty() {
        return Value::from(template);
    }

    let mut resolved: HashMap<&str, Option<Value>> = HashMap::new();
    for reference in &references {
        resolved
            .entry(reference.raw)
            .or_insert_with(|| resolve_reference(reference, vars, use_environment));
    }

    if !quote_collections && references[0].raw == template {
        return resolved
            .remove(template)
            .flatten()
            .unwrap_or_else(|| Value::from(template));
    }

    let mut result = String::with_capacity(template.len());
    let mut last = 0;
    for reference in &references {
        result.push_str(&template[last..reference.span.start]);
        match &resolved[reference.raw] {
            Some(value) => result.push_str(&value.render(quote_collections)),
            None => result.push_str(reference.raw),
        }
        last = reference.span.end;
    }
    result.push_str(&template[last..]);

    Value::String(result)
}

/// Resolve a template and render the result as text
pub fn resolve_to_string(
    template: &str,
    vars: &VariableTable,
    use_environment: bool,
    quote_collections: bool,
) -> String {
    match resolve(template, vars, use_environment, quote_collections) {
        Value::String(s) => s,
        other => other.render(quote_collections),
    }
}

/// Resolve a single reference, or `None` if its subkey chain misses
pub fn resolve_reference(
    reference: &Reference<'_>,
    vars: &VariableTable,
    use_environment: bool,
) -> Option<Value> {
    let base = lookup(reference.name, vars, use_environment);

    let mut current: &Value = &base;
    for subkey in &reference.subkeys {
        let key = match subkey {
            Subkey::Key(key) => Cow::Owned(Value::from(*key)),
            Subkey::Index(index) => Cow::Owned(Value::Integer(*index)),
            Subkey::Nested(name) => lookup(name, vars, use_environment),
        };
        current = current.select(&key)?;
    }

    Some(current.clone())
}

/// Look up a base name in the table, then in the environment
pub fn lookup<'v>(name: &str, vars: &'v VariableTable, use_environment: bool) -> Cow<'v, Value> {
    match vars.get(name) {
        Some(value) => Cow::Borrowed(value),
        None => Cow::Owned(Value::String(environment_value(name, use_environment))),
    }
}

fn environment_value(name: &str, use_environment: bool) -> String {
    if use_environment {
        env::var_os(name)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        String::new()
    }
}
