use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;

use crate::error::ValidationError;

/// Identifier of a client record.
///
/// Opaque to callers; the store renders its internal counter as a decimal
/// string so ids read the same way the sample rows do ("1", "2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "Активный",
            ClientStatus::Inactive => "Неактивный",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ClientStatus::Active => ClientStatus::Inactive,
            ClientStatus::Inactive => ClientStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == ClientStatus::Active
    }
}

/// Required text fields of a client, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    Name,
    Company,
    Email,
    Phone,
}

impl ClientField {
    pub const ALL: [ClientField; 4] = [
        ClientField::Name,
        ClientField::Company,
        ClientField::Email,
        ClientField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClientField::Name => "ФИО",
            ClientField::Company => "Компания",
            ClientField::Email => "Email",
            ClientField::Phone => "Телефон",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ClientField::Name => "Иванов Иван Иванович",
            ClientField::Company => "ООО 'Компания'",
            ClientField::Email => "email@example.com",
            ClientField::Phone => "+7 (___) ___-__-__",
        }
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientField::Name => "name",
            ClientField::Company => "company",
            ClientField::Email => "email",
            ClientField::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// The user-editable part of a client record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientFields {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: ClientStatus,
}

impl ClientFields {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            email: email.into(),
            phone: phone.into(),
            status: ClientStatus::default(),
        }
    }

    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }

    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::Name => &self.name,
            ClientField::Company => &self.company,
            ClientField::Email => &self.email,
            ClientField::Phone => &self.phone,
        }
    }

    pub fn get_mut(&mut self, field: ClientField) -> &mut String {
        match field {
            ClientField::Name => &mut self.name,
            ClientField::Company => &mut self.company,
            ClientField::Email => &mut self.email,
            ClientField::Phone => &mut self.phone,
        }
    }

    /// Checks that every required text field has content.
    ///
    /// Reports the first empty field in form order. No format checks are
    /// applied to email or phone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match ClientField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    #[serde(with = "iso_date")]
    pub registered_at: Date,
}

impl Client {
    pub(crate) fn from_fields(id: ClientId, fields: ClientFields, registered_at: Date) -> Self {
        Self {
            id,
            name: fields.name,
            company: fields.company,
            email: fields.email,
            phone: fields.phone,
            status: fields.status,
            registered_at,
        }
    }

    /// Snapshot of the editable fields.
    pub fn fields(&self) -> ClientFields {
        ClientFields {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            status: self.status,
        }
    }

    /// Overwrites everything except `id` and `registered_at`.
    pub(crate) fn apply(&mut self, fields: ClientFields) {
        self.name = fields.name;
        self.company = fields.company;
        self.email = fields.email;
        self.phone = fields.phone;
        self.status = fields.status;
    }
}

/// ISO 8601 date-only (de)serialization for `registeredAt`.
mod iso_date {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use time::format_description::BorrowedFormatItem;
    use time::macros::format_description;
    use time::Date;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date
            .format(FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, FORMAT).map_err(de::Error::custom)
    }
}
