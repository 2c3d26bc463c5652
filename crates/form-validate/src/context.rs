use std::collections::{BTreeMap, HashMap};

/// Read access to the other fields of a form.
///
/// Constraints such as `same:password` need a sibling's value, and messages
/// name fields by label, so evaluation always runs against a lookup.
pub trait FieldLookup {
    /// Current value of a field, `None` when the form has no such field.
    fn value(&self, name: &str) -> Option<&str>;

    /// Display label of a field. Defaults to the name.
    fn label<'a>(&'a self, name: &'a str) -> &'a str {
        name
    }
}

impl FieldLookup for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldLookup for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
