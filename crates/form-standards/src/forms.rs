#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use form_model::FormDefinition;
use tracing::{debug, info};

use crate::error::StandardsError;

const REGISTRATION: &str = include_str!("../data/registration.toml");
const YARN_CALCULATOR: &str = include_str!("../data/yarn_calculator.toml");
const CLOTHING: &str = include_str!("../data/clothing.toml");

/// Form variants shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormVariant {
    /// E-mail and password with confirmation.
    Registration,
    /// Yarn requirement estimation for scarfs, sweaters and dresses.
    YarnCalculator,
    /// Gender driven dress/pants colour choice.
    Clothing,
}

impl FormVariant {
    pub const ALL: [FormVariant; 3] = [
        FormVariant::Registration,
        FormVariant::YarnCalculator,
        FormVariant::Clothing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormVariant::Registration => "registration",
            FormVariant::YarnCalculator => "yarn-calculator",
            FormVariant::Clothing => "clothing",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            FormVariant::Registration => REGISTRATION,
            FormVariant::YarnCalculator => YARN_CALCULATOR,
            FormVariant::Clothing => CLOTHING,
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormVariant {
    type Err = StandardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        FormVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == normalized)
            .ok_or_else(|| StandardsError::UnknownForm {
                name: s.to_string(),
                expected: FormVariant::ALL
                    .iter()
                    .map(FormVariant::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Load one of the built-in form definitions.
pub fn load_form(variant: FormVariant) -> Result<FormDefinition, StandardsError> {
    parse_form(variant.source(), variant.as_str())
}

/// Load a form definition from a TOML file.
pub fn load_form_file(path: &Path) -> Result<FormDefinition, StandardsError> {
    let source = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    parse_form(&source, &path.display().to_string())
}

/// Parse and check a TOML form definition. `origin` names the source in
/// error messages.
pub fn parse_form(source: &str, origin: &str) -> Result<FormDefinition, StandardsError> {
    let form: FormDefinition = toml::from_str(source).map_err(|source| StandardsError::Toml {
        origin: origin.to_string(),
        source,
    })?;
    check_form(&form)?;
    info!(
        form = %form.id,
        field_count = form.fields.len(),
        dependency_count = form.dependencies.len(),
        "form definition loaded"
    );
    Ok(form)
}

/// Every name a definition mentions must resolve to one of its fields.
fn check_form(form: &FormDefinition) -> Result<(), StandardsError> {
    let mut names = BTreeSet::new();
    for field in &form.fields {
        if field.name.trim().is_empty() {
            return Err(StandardsError::EmptyFieldName {
                form: form.id.clone(),
            });
        }
        if !names.insert(field.name.as_str()) {
            return Err(StandardsError::DuplicateField {
                form: form.id.clone(),
                field: field.name.clone(),
            });
        }
    }

    // `a` and `a.b` cannot both hold a value in the nested snapshot.
    for field in &form.fields {
        let mut prefix = field.name.as_str();
        while let Some((parent, _)) = prefix.rsplit_once('.') {
            if names.contains(parent) {
                return Err(StandardsError::ConflictingPath {
                    form: form.id.clone(),
                    field: field.name.clone(),
                    parent: parent.to_string(),
                });
            }
            prefix = parent;
        }
    }

    for field in &form.fields {
        for constraint in field.rule.constraints() {
            if let Some(other) = constraint.referenced_field()
                && !names.contains(other)
            {
                return Err(StandardsError::unknown_field(
                    &form.id,
                    other,
                    format!("rule `{}` of `{}`", constraint, field.name),
                ));
            }
        }
    }

    for dependency in &form.dependencies {
        for (role, name) in [("driver", &dependency.driver), ("target", &dependency.target)] {
            if !names.contains(name.as_str()) {
                return Err(StandardsError::unknown_field(
                    &form.id,
                    name,
                    format!("dependency {role}"),
                ));
            }
        }
        debug!(
            form = %form.id,
            driver = %dependency.driver,
            target = %dependency.target,
            cases = dependency.cases.len(),
            "dependency registered"
        );
    }

    for binding in &form.measurements {
        for name in [&binding.field, &binding.size_field] {
            if !names.contains(name.as_str()) {
                return Err(StandardsError::unknown_field(
                    &form.id,
                    name,
                    format!("{} measurement", binding.measurement),
                ));
            }
        }
    }

    Ok(())
}
