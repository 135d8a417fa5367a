// Export / import of the collection as an interchange JSON file.
use crate::model::Event;
use crate::storage::LocalStorage;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialize the collection as pretty-printed (2-space indent) JSON at
/// `path`. Non-destructive; the store is not touched.
pub fn export_to(path: &Path, events: &[Event]) -> Result<()> {
    let json = serde_json::to_string_pretty(events)?;
    LocalStorage::atomic_write(path, json)
        .with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}

/// Read and validate an import file. The store is not touched; the caller
/// decides what to do with the result.
pub fn parse_import(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path).context("Could not read or parse the JSON file.")?;
    parse_events(&content)
}

/// Validate import text: a JSON array whose every element carries a truthy
/// `name` and a truthy `date`. Truthiness is the JSON kind: null, false,
/// 0 and "" fail, everything else passes, numbers and objects included.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let value: Value =
        serde_json::from_str(json).context("Could not read or parse the JSON file.")?;

    let Value::Array(items) = value else {
        bail!("Invalid JSON file format.");
    };

    let mut events = Vec::with_capacity(items.len());
    for item in &items {
        let Some(event) = entry_to_event(item) else {
            bail!("Invalid JSON file format.");
        };
        events.push(event);
    }
    Ok(events)
}

/// One import entry, or None when it is not an object with truthy `name`
/// and `date` fields.
fn entry_to_event(item: &Value) -> Option<Event> {
    let map = item.as_object()?;
    let name = truthy_text(map.get("name")?)?;
    let date = truthy_text(map.get("date")?)?;
    Some(Event { name, date })
}

/// JSON truthiness plus text coercion: falsy values come back as None,
/// strings pass through as-is, anything else keeps its JSON rendering.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => b.then(|| value.to_string()),
        Value::Number(n) => {
            if n.as_f64().is_some_and(|f| f != 0.0) {
                Some(value.to_string())
            } else {
                None
            }
        }
        Value::String(s) => (!s.is_empty()).then(|| s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_array_parses() {
        let events =
            parse_events(r#"[{"name":"Moved","date":"2019-06-01"}]"#).unwrap();
        assert_eq!(events, vec![Event::new("Moved", "2019-06-01")]);
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_events(r#""not an array""#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON file format.");
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse_events(r#"[{"name":"X"}]"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON file format.");
    }

    #[test]
    fn rejects_falsy_fields() {
        for body in [
            r#"[{"name":"","date":"2020-01-01"}]"#,
            r#"[{"name":"X","date":0}]"#,
            r#"[{"name":false,"date":"2020-01-01"}]"#,
            r#"[{"name":"X","date":null}]"#,
        ] {
            assert!(parse_events(body).is_err(), "should reject: {}", body);
        }
    }

    #[test]
    fn rejects_non_object_elements() {
        assert!(parse_events(r#"[42]"#).is_err());
        assert!(parse_events(r#"[null]"#).is_err());
        assert!(parse_events(r#"[[{"name":"X","date":"d"}]]"#).is_err());
    }

    #[test]
    fn truthy_non_strings_pass_and_keep_their_json_text() {
        let events = parse_events(r#"[{"name":7,"date":"2020-01-01"}]"#).unwrap();
        assert_eq!(events[0].name, "7");

        let events = parse_events(r#"[{"name":{"x":1},"date":true}]"#).unwrap();
        assert_eq!(events[0].name, r#"{"x":1}"#);
        assert_eq!(events[0].date, "true");
    }

    #[test]
    fn parse_error_has_the_generic_message() {
        let err = parse_events("{{{").unwrap_err();
        assert_eq!(err.to_string(), "Could not read or parse the JSON file.");
    }

    #[test]
    fn empty_array_is_a_valid_import() {
        assert_eq!(parse_events("[]").unwrap(), vec![]);
    }
}
