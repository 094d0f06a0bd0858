//! Values stored in the variable table
//!
//! Variables hold whatever the document declared: strings, numbers, booleans,
//! sequences and mappings. Strings are the only kind that gets interpolated;
//! everything else is carried through unchanged and rendered back to text
//! when it lands inside a larger template.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Insertion-ordered table of resolved variables, keyed by name without `$`
pub type VariableTable = IndexMap<String, Value>;

/// A resolved variable value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Whether this value is a sequence or a mapping
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Select one element by subkey
    ///
    /// Sequences require a key that coerces to an integer (negative counts from
    /// the end); anything else is treated as a mapping keyed by the key's text.
    /// Returns `None` when the index is out of range, the key is absent, or the
    /// value cannot be indexed at all.
    pub fn select(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Sequence(items) => {
                let index = key.as_index()?;
                let index = if index < 0 {
                    items.len().checked_sub(index.unsigned_abs() as usize)?
                } else {
                    usize::try_from(index).ok()?
                };
                items.get(index)
            }
            Value::Mapping(map) => map.get(key.as_key()?.as_str()),
            _ => None,
        }
    }

    /// Coerce to a sequence index
    fn as_index(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::String(s) => s.trim().parse().ok(),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Coerce to a mapping key
    fn as_key(&self) -> Option<String> {
        if self.is_collection() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Render as text for substitution into a template
    ///
    /// Collections become pretty-printed JSON; with `quote` they are also
    /// wrapped in single quotes so they survive shell-style word splitting.
    pub fn render(&self, quote: bool) -> String {
        if quote && self.is_collection() {
            format!("'{}'", self)
        } else {
            self.to_string()
        }
    }

    fn to_pretty_json(&self) -> String {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        match self.serialize(&mut ser) {
            Ok(()) => String::from_utf8(buf).unwrap_or_default(),
            Err(_) => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if uses_exponent(*x) => write_exponent(f, *x),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Sequence(_) | Value::Mapping(_) => f.write_str(&self.to_pretty_json()),
        }
    }
}

/// Floats outside `[1e-4, 1e16)` are written in exponent form
fn uses_exponent(x: f64) -> bool {
    x.is_finite() && x != 0.0 && (x.abs() >= 1e16 || x.abs() < 1e-4)
}

/// Write `x` as `1.5e+20` / `1e-05`: signed exponent, at least two digits
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = format!("{:e}", x);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value as Yaml;

        match value {
            Yaml::Null => Value::Null,
            Yaml::Bool(b) => Value::Bool(b),
            Yaml::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Yaml::String(s) => Value::String(s),
            Yaml::Sequence(seq) => Value::Sequence(seq.into_iter().map(Value::from).collect()),
            Yaml::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Value::from(v)))
                    .collect(),
            ),
            Yaml::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Turn a YAML mapping key into a table key
pub fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => Value::from(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, Value)]) -> Value {
        Value::Mapping(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(Value::from("text").to_string(), "text");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_float_exponent_rendering() {
        assert_eq!(Value::Float(1e20).to_string(), "1e+20");
        assert_eq!(Value::Float(-1.5e16).to_string(), "-1.5e+16");
        assert_eq!(Value::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Value::Float(2.5e-120).to_string(), "2.5e-120");
        assert_eq!(Value::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Value::Float(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_collection_rendering_keeps_order() {
        let value = mapping(&[("zeta", Value::Integer(1)), ("alpha", Value::from("a"))]);
        assert_eq!(
            value.to_string(),
            "{\n    \"zeta\": 1,\n    \"alpha\": \"a\"\n}"
        );
    }

    #[test]
    fn test_render_quotes_only_collections() {
        let list = Value::Sequence(vec![Value::from("a")]);
        assert_eq!(list.render(true), "'[\n    \"a\"\n]'");
        assert_eq!(list.render(false), "[\n    \"a\"\n]");
        assert_eq!(Value::from("a b").render(true), "a b");
    }

    #[test]
    fn test_select_sequence() {
        let list = Value::Sequence(vec![Value::from("first"), Value::from("second")]);
        assert_eq!(list.select(&Value::Integer(0)), Some(&Value::from("first")));
        assert_eq!(list.select(&Value::from("1")), Some(&Value::from("second")));
        assert_eq!(list.select(&Value::Integer(-1)), Some(&Value::from("second")));
        assert_eq!(list.select(&Value::Integer(2)), None);
        assert_eq!(list.select(&Value::Integer(-3)), None);
        assert_eq!(list.select(&Value::from("first")), None);
    }

    #[test]
    fn test_select_mapping() {
        let map = mapping(&[("b", Value::Integer(1)), ("2", Value::from("two"))]);
        assert_eq!(map.select(&Value::from("b")), Some(&Value::Integer(1)));
        assert_eq!(map.select(&Value::Integer(2)), Some(&Value::from("two")));
        assert_eq!(map.select(&Value::from("missing")), None);
    }

    #[test]
    fn test_select_scalar_misses() {
        assert_eq!(Value::from("abc").select(&Value::Integer(0)), None);
        assert_eq!(Value::Integer(3).select(&Value::from("x")), None);
    }

    #[test]
    fn test_from_yaml_preserves_structure() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("b: [1, 2.5, true, ~]\na: text\n1: one").unwrap();
        let value = Value::from(yaml);
        let Value::Mapping(map) = value else {
            panic!("expected a mapping");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "1"]);
        assert_eq!(
            map["b"],
            Value::Sequence(vec![
                Value::Integer(1),
                Value::Float(2.5),
                Value::Bool(true),
                Value::Null
            ])
        );
    }
}
