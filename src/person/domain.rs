//! Core person domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// People younger than this may only record expenses.
pub const ADULT_AGE: i64 = 18;

/// Database identifier for a person.
pub type PersonId = Uuid;

/// A validated, non-empty person name with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a person name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyPersonName] if `name` is an
    /// empty string or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyPersonName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a person name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PersonName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonName::new(s)
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person's age in whole years, always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct Age(i64);

impl Age {
    /// Create an age.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAge] if `years` is zero or
    /// negative.
    pub fn new(years: i64) -> Result<Self, Error> {
        if years <= 0 {
            Err(Error::InvalidAge(years))
        } else {
            Ok(Self(years))
        }
    }

    /// Create an age without validation.
    ///
    /// The caller should ensure that `years` is positive.
    pub fn new_unchecked(years: i64) -> Self {
        Self(years)
    }

    /// The age in years.
    pub fn years(&self) -> i64 {
        self.0
    }

    /// Whether the person is younger than [ADULT_AGE].
    pub fn is_minor(&self) -> bool {
        self.0 < ADULT_AGE
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An individual whose transactions are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Person {
    pub id: PersonId,
    #[serde(rename = "nome")]
    pub name: PersonName,
    #[serde(rename = "idade")]
    pub age: Age,
}

/// Request body for creating a person.
///
/// The fields are kept raw so that validation errors are reported by the
/// service rather than by JSON deserialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonFormData {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "idade", default)]
    pub age: i64,
}
