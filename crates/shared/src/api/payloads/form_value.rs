use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A request field that arrives as text from a form body but may be a number
/// in a JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(f64),
}

impl FormValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FormValue::Text(text) => Cow::Borrowed(text.as_str()),
            FormValue::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FormValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_owned())
    }
}

/// Non-empty and nothing but ascii digits
pub fn is_unsigned_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses values made of digits only, so signs, spaces and fractions are
/// rejected along with anything out of range for `T`
pub fn parse_unsigned<T: FromStr>(value: &str) -> Option<T> {
    if is_unsigned_integer(value) {
        value.parse().ok()
    } else {
        None
    }
}
