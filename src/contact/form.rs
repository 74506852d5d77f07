use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s-]{8,20}$").expect("phone pattern should compile"));

/// Các trường của form liên hệ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

/// Every violated field with its message. Fields that passed are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("formulaire invalide: {} champ(s) à corriger", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Dữ liệu form liên hệ, luôn được trim khi tạo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Copy with surrounding whitespace removed; UI inputs are edited raw.
    pub fn trimmed(&self) -> Self {
        Self::new(&self.name, &self.phone, &self.message)
    }

    /// Checks all three fields and reports every violation at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name_len = self.name.chars().count();
        if name_len < NAME_MIN {
            errors.insert(Field::Name, "Le nom doit contenir au moins 2 caractères");
        } else if name_len > NAME_MAX {
            errors.insert(Field::Name, "Le nom ne peut pas dépasser 100 caractères");
        }

        if !PHONE_PATTERN.is_match(&self.phone) {
            errors.insert(Field::Phone, "Numéro de téléphone invalide");
        }

        let message_len = self.message.chars().count();
        if message_len < MESSAGE_MIN {
            errors.insert(
                Field::Message,
                "Le message doit contenir au moins 10 caractères",
            );
        } else if message_len > MESSAGE_MAX {
            errors.insert(
                Field::Message,
                "Le message ne peut pas dépasser 1000 caractères",
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Strips `<` and `>` from every field.
    pub fn sanitized(&self) -> Self {
        Self {
            name: strip_markup(&self.name),
            phone: strip_markup(&self.phone),
            message: strip_markup(&self.message),
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.message.clear();
    }
}

fn strip_markup(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}
