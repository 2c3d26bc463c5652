//! English validation messages.
//!
//! Templates use `:attribute`, `:min`, `:max`, `:values` and `:other`
//! placeholders. Size constraints have a numeric and a string wording.

const REQUIRED: &str = "The :attribute field is required.";
const NUMERIC: &str = "The :attribute must be a number.";
const STRING: &str = "The :attribute must be a string.";
const EMAIL: &str = "The :attribute format is invalid.";
const MIN_NUMERIC: &str = "The :attribute must be at least :min.";
const MIN_STRING: &str = "The :attribute must be at least :min characters.";
const MAX_NUMERIC: &str = "The :attribute must not exceed :max.";
const MAX_STRING: &str = "The :attribute must not exceed :max characters.";
const BETWEEN_NUMERIC: &str = "The :attribute must be between :min and :max.";
const BETWEEN_STRING: &str = "The :attribute must be between :min and :max characters.";
const IN: &str = "The :attribute must be one of: :values.";
const SAME: &str = "The :attribute and :other must match.";

/// Message templates keyed by constraint name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    required: String,
    numeric: String,
    string: String,
    email: String,
    min: (String, String),
    max: (String, String),
    between: (String, String),
    in_list: String,
    same: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: REQUIRED.to_string(),
            numeric: NUMERIC.to_string(),
            string: STRING.to_string(),
            email: EMAIL.to_string(),
            min: (MIN_NUMERIC.to_string(), MIN_STRING.to_string()),
            max: (MAX_NUMERIC.to_string(), MAX_STRING.to_string()),
            between: (BETWEEN_NUMERIC.to_string(), BETWEEN_STRING.to_string()),
            in_list: IN.to_string(),
            same: SAME.to_string(),
        }
    }
}

impl MessageCatalog {
    /// Template for a constraint. `numeric` picks the wording of size
    /// constraints; other constraints ignore it.
    pub fn template(&self, constraint: &str, numeric: bool) -> Option<&str> {
        let text = match constraint {
            "required" => &self.required,
            "numeric" => &self.numeric,
            "string" => &self.string,
            "email" => &self.email,
            "min" if numeric => &self.min.0,
            "min" => &self.min.1,
            "max" if numeric => &self.max.0,
            "max" => &self.max.1,
            "between" if numeric => &self.between.0,
            "between" => &self.between.1,
            "in" => &self.in_list,
            "same" => &self.same,
            _ => return None,
        };
        Some(text.as_str())
    }

    /// Replace one template, e.g. to customise the `required` wording.
    pub fn with_template(
        mut self,
        constraint: &str,
        numeric: bool,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        match constraint {
            "required" => self.required = text,
            "numeric" => self.numeric = text,
            "string" => self.string = text,
            "email" => self.email = text,
            "min" if numeric => self.min.0 = text,
            "min" => self.min.1 = text,
            "max" if numeric => self.max.0 = text,
            "max" => self.max.1 = text,
            "between" if numeric => self.between.0 = text,
            "between" => self.between.1 = text,
            "in" => self.in_list = text,
            "same" => self.same = text,
            _ => {}
        }
        self
    }

    /// Render a template, substituting `(placeholder, value)` pairs.
    pub fn render(
        &self,
        constraint: &str,
        numeric: bool,
        replacements: &[(&str, &str)],
    ) -> String {
        let Some(template) = self.template(constraint, numeric) else {
            return format!("The {constraint} check failed.");
        };
        substitute(template, replacements)
    }
}

/// Longest placeholder first, so `:attribute` never clobbers a shorter one.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut ordered = replacements.to_vec();
    ordered.sort_by_key(|(key, _)| std::cmp::Reverse(key.len()));
    let mut out = template.to_string();
    for (key, value) in ordered {
        out = out.replace(&format!(":{key}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numeric_and_string_wording() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.render("min", true, &[("attribute", "Yarn Length per 100g"), ("min", "50")]),
            "The Yarn Length per 100g must be at least 50."
        );
        assert_eq!(
            catalog.render(
                "between",
                false,
                &[("attribute", "Password"), ("min", "5"), ("max", "25")]
            ),
            "The Password must be between 5 and 25 characters."
        );
    }

    #[test]
    fn custom_template_replaces_default() {
        let catalog = MessageCatalog::default().with_template(
            "required",
            false,
            "Please fill in :attribute.",
        );
        assert_eq!(
            catalog.render("required", false, &[("attribute", "Email")]),
            "Please fill in Email."
        );
    }

    #[test]
    fn unknown_constraint_has_generic_message() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.template("regex", false), None);
        assert_eq!(catalog.render("regex", false, &[]), "The regex check failed.");
    }
}
