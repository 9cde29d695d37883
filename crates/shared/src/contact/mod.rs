use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectType {
    Residential,
    Commercial,
    Industrial,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Service {
    WindowsDoors,
    Facades,
    Custom,
    Railings,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Whatsapp,
}

/// Names of the contact form inputs, as they appear on the wire.
///
/// Parsing also accepts the snake_case spelling so that error keys coming out of `validator`
/// resolve whichever naming it reports.
#[derive(EnumString, VariantArray, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    #[strum(to_string = "firstName", serialize = "first_name")]
    FirstName,
    #[strum(to_string = "lastName", serialize = "last_name")]
    LastName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "company")]
    Company,
    #[strum(to_string = "projectType", serialize = "project_type")]
    ProjectType,
    #[strum(serialize = "service")]
    Service,
    #[strum(serialize = "message")]
    Message,
    #[strum(serialize = "budget")]
    Budget,
    #[strum(to_string = "contactMethod", serialize = "contact_method")]
    ContactMethod,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::ProjectType => "projectType",
            Field::Service => "service",
            Field::Message => "message",
            Field::Budget => "budget",
            Field::ContactMethod => "contactMethod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Company => "Company",
            Field::ProjectType => "Project type",
            Field::Service => "Service",
            Field::Message => "Message",
            Field::Budget => "Budget",
            Field::ContactMethod => "Contact method",
        }
    }

    pub fn required_message(&self) -> String {
        format!("{} is required", self.label())
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Company | Field::Budget)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::required"))]
    pub first_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::required"))]
    pub last_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::email_address"))]
    pub email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::phone_number"))]
    pub phone: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::project_type"))]
    pub project_type: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::service"))]
    pub service: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::required"))]
    pub message: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub budget: String,

    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "crate::validation::contact_method"))]
    pub contact_method: String,
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            project_type: String::new(),
            service: String::new(),
            message: String::new(),
            budget: String::new(),
            contact_method: ContactMethod::default().to_string(),
        }
    }
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::Service => &self.service,
            Field::Message => &self.message,
            Field::Budget => &self.budget,
            Field::ContactMethod => &self.contact_method,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::ProjectType => &mut self.project_type,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
            Field::Budget => &mut self.budget,
            Field::ContactMethod => &mut self.contact_method,
        };

        *slot = value.into();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Runs every contact form rule and reports at most one message per field.
///
/// An empty result means the submission can be sent (client) or accepted (server).
pub fn validate_contact_form(values: &ContactSubmission) -> FieldErrors {
    let Err(errors) = values.validate() else {
        return FieldErrors::default();
    };

    errors
        .field_errors()
        .into_iter()
        .filter_map(|(name, errors)| {
            let field = Field::from_str(&name).ok()?;
            let error = errors.first()?;
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| field.required_message());

            Some((field, message))
        })
        .collect()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field name to message, holding only the fields currently in error.
///
/// Keys are plain strings on the wire so that a server may report fields the client has no
/// local rule for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.get_by_name(field.name())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(field.name())
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field.name().to_owned(), message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(field.name())
    }

    /// Later messages replace earlier ones for the same field.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field.name().to_owned(), message))
                .collect(),
        )
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");

        f.write_str(&joined)
    }
}

/// Missing, `null` and structured values become `""`; numbers keep their textual form.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => value,
        serde_json::Value::Number(value) => value.to_string(),
        _ => String::new(),
    })
}
