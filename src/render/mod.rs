//! Hierarchical text rendering of API responses.
//!
//! # Layout
//! ```text
//! best
//!                   height            1024
//!                   hash              00ab...
//!
//! mining
//!                   0: POW_YES
//! ```
//!
//! Mapping keys are left-aligned in a column `indent_width` wide, sequence
//! entries are prefixed with their index. Structured values continue on the
//! next line, one column further in, followed by a blank line.

use serde_json::{Map, Value};
use std::fmt::Write;

/// Key column width used by the dashboard panels.
pub const DEFAULT_INDENT_WIDTH: usize = 18;

/// Nesting depth past which values are printed as compact JSON.
pub const MAX_DEPTH: usize = 64;

/// Render `value` as an indented text block.
///
/// Pure and total over any JSON value: the same input and width always
/// produce the same text.
pub fn render(value: &Value, indent_width: usize, prefix: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent_width, prefix, 0);
    out
}

/// Render only the first `limit` top-level entries of a mapping or sequence.
pub fn render_capped(value: &Value, limit: usize, indent_width: usize) -> String {
    let capped = match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .take(limit)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().take(limit).cloned().collect()),
        scalar => scalar.clone(),
    };
    render(&capped, indent_width, "")
}

/// String form of a leaf value. Strings are shown without quotes.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn write_value(out: &mut String, value: &Value, width: usize, prefix: &str, depth: usize) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let _ = write!(out, "{prefix}{index}: ");
                write_entry(out, item, width, prefix, depth);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                let _ = write!(out, "{prefix}{key:<width$}");
                write_entry(out, item, width, prefix, depth);
            }
        }
        scalar => {
            out.push_str(prefix);
            out.push_str(&scalar_text(scalar));
            out.push('\n');
        }
    }
}

fn write_entry(out: &mut String, item: &Value, width: usize, prefix: &str, depth: usize) {
    if is_structured(item) && depth < MAX_DEPTH {
        let nested = format!("{prefix}{}", " ".repeat(width));
        out.push('\n');
        write_value(out, item, width, &nested, depth + 1);
        out.push('\n');
    } else {
        out.push_str(&scalar_text(item));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_level_block() {
        let value = json!({"a": 1, "b": {"c": 2}});
        let text = render(&value, 4, "");
        assert_eq!(text, "a   1\nb   \n    c   2\n\n");
        // Deterministic for identical input.
        assert_eq!(text, render(&value, 4, ""));
    }

    #[test]
    fn test_sequence_entries() {
        let value = json!(["x", {"k": true}]);
        let text = render(&value, 3, "");
        assert_eq!(text, "0: x\n1: \n   k  true\n\n");
    }

    #[test]
    fn test_long_key_is_not_truncated() {
        let value = json!({"confirmations": 6});
        assert_eq!(render(&value, 4, ""), "confirmations6\n");
    }

    #[test]
    fn test_scalars_and_null() {
        assert_eq!(render(&json!(null), 4, ""), "null\n");
        assert_eq!(render(&json!("hello"), 4, "> "), "> hello\n");
        assert_eq!(render(&json!({"n": null, "f": 1.5}), 2, ""), "n null\nf 1.5\n");
    }

    #[test]
    fn test_default_width_prefix() {
        let value = json!({"height": 10});
        let text = render(&value, DEFAULT_INDENT_WIDTH, "  ");
        assert_eq!(text, format!("  height{}10\n", " ".repeat(12)));
    }

    #[test]
    fn test_every_leaf_appears_once() {
        let value = json!({
            "alpha": ["leaf-1", {"beta": "leaf-2", "gamma": ["leaf-3"]}],
            "delta": {"epsilon": {"zeta": "leaf-4"}},
            "eta": "leaf-5"
        });
        let text = render(&value, DEFAULT_INDENT_WIDTH, "");
        for leaf in ["leaf-1", "leaf-2", "leaf-3", "leaf-4", "leaf-5"] {
            assert_eq!(text.matches(leaf).count(), 1, "{leaf} in {text}");
        }
    }

    #[test]
    fn test_depth_guard_terminates() {
        let mut value = json!("bottom");
        for _ in 0..(MAX_DEPTH + 10) {
            value = json!([value]);
        }
        let text = render(&value, 1, "");
        assert_eq!(text.matches("bottom").count(), 1);
    }

    #[test]
    fn test_capped_keeps_first_entries_in_order() {
        let mut map = Map::new();
        for i in 0..20 {
            map.insert(format!("k{i:02}"), json!(i));
        }
        let text = render_capped(&Value::Object(map), 15, 4);
        assert_eq!(text.lines().count(), 15);
        assert!(text.starts_with("k00 0\n"));
        assert!(text.contains("k14 14\n"));
        assert!(!text.contains("k15"));
    }
}
