// src/json/mod.rs

use serde_json::Value;

/// Walk `path` through nested objects, returning the leaf if every hop lands
/// on an object that has the key. Missing or mismatched intermediates are
/// `None`, never an error.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = root;
    for key in path {
        node = node.as_object()?.get(*key)?;
    }
    Some(node)
}

/// Leaf value rendered for a CSV cell. Missing paths and JSON null become the
/// empty string; arrays and objects fall back to compact JSON.
pub fn scalar_string(root: &Value, path: &[&str]) -> String {
    match lookup(root, path) {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn str_field<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(root, path).and_then(Value::as_str)
}

pub fn f64_field(root: &Value, path: &[&str]) -> Option<f64> {
    lookup(root, path).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_objects() {
        let v = json!({"metaData": {"calendarDate": "2021-03-10"}});
        assert_eq!(
            str_field(&v, &["metaData", "calendarDate"]),
            Some("2021-03-10")
        );
    }

    #[test]
    fn missing_or_mismatched_intermediate_is_none() {
        let v = json!({"metaData": {"calendarDate": "2021-03-10"}});
        assert_eq!(lookup(&v, &["metaData", "missing"]), None);
        assert_eq!(lookup(&v, &["missing", "calendarDate"]), None);
        // calendarDate is a string, not an object to descend into
        assert_eq!(lookup(&v, &["metaData", "calendarDate", "deeper"]), None);
        assert_eq!(lookup(&json!([1, 2, 3]), &["key"]), None);
    }

    #[test]
    fn scalar_string_renders_cells() {
        let v = json!({"n": 42.5, "s": "run", "b": true, "nil": null});
        assert_eq!(scalar_string(&v, &["n"]), "42.5");
        assert_eq!(scalar_string(&v, &["s"]), "run");
        assert_eq!(scalar_string(&v, &["b"]), "true");
        assert_eq!(scalar_string(&v, &["nil"]), "");
        assert_eq!(scalar_string(&v, &["absent"]), "");
    }

    #[test]
    fn f64_field_reads_integers_too() {
        let v = json!({"deepSleepSeconds": 7200});
        assert_eq!(f64_field(&v, &["deepSleepSeconds"]), Some(7200.0));
        assert_eq!(f64_field(&v, &["remSleepSeconds"]), None);
    }
}
