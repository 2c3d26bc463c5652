//! Nested value snapshots.
//!
//! Dotted field names become nested groups:
//! `bodyMeasurements.waist = "80"` is stored as
//! `{"bodyMeasurements": {"waist": "80"}}`.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Group(BTreeMap<String, FormValue>),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(value) => Some(value),
            FormValue::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&BTreeMap<String, FormValue>> {
        match self {
            FormValue::Group(group) => Some(group),
            FormValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues {
    root: BTreeMap<String, FormValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under the dotted `path`, creating groups on the way.
    ///
    /// A path that runs through an existing text value is ignored.
    pub fn insert(&mut self, path: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return;
        };
        let mut group = &mut self.root;
        for segment in segments {
            let entry = group
                .entry(segment.to_string())
                .or_insert_with(|| FormValue::Group(BTreeMap::new()));
            match entry {
                FormValue::Group(inner) => group = inner,
                FormValue::Text(_) => {
                    warn!(path, segment, "value path conflicts with a plain field");
                    return;
                }
            }
        }
        group.insert(leaf.to_string(), FormValue::Text(value.into()));
    }

    /// Look up a value or group by dotted path.
    pub fn get(&self, path: &str) -> Option<&FormValue> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_group()?.get(segment)?;
        }
        Some(current)
    }

    /// Text value at a dotted path.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_text()
    }

    pub fn top_level(&self) -> &BTreeMap<String, FormValue> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_paths_nest() {
        let mut values = FormValues::new();
        values.insert("itemType", "sweater");
        values.insert("bodyMeasurements.waist", "80");
        values.insert("bodyMeasurements.chest", "95");

        assert_eq!(values.text("itemType"), Some("sweater"));
        assert_eq!(values.text("bodyMeasurements.waist"), Some("80"));
        let group = values
            .get("bodyMeasurements")
            .and_then(FormValue::as_group)
            .unwrap();
        assert_eq!(group.len(), 2);
        let keys: Vec<&str> = values.top_level().keys().map(String::as_str).collect();
        assert_eq!(keys, ["bodyMeasurements", "itemType"]);
        assert_eq!(values.text("bodyMeasurements"), None);
        assert_eq!(values.get("bodyMeasurements.neck"), None);
    }

    #[test]
    fn conflicting_path_is_ignored() {
        let mut values = FormValues::new();
        values.insert("size", "M");
        values.insert("size.label", "Medium");
        assert_eq!(values.text("size"), Some("M"));
    }
}
