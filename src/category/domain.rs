//! Core category domain types.

use std::fmt::Display;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, transaction::TransactionKind};

/// Database identifier for a category.
pub type CategoryId = Uuid;

/// A validated, non-empty category description with surrounding whitespace
/// removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    /// Create a category description.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryDescription] if
    /// `description` is an empty string or only whitespace.
    pub fn new(description: &str) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            Err(Error::EmptyCategoryDescription)
        } else {
            Ok(Self(description.to_string()))
        }
    }

    /// Create a category description without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(description: &str) -> Self {
        Self(description.to_string())
    }
}

impl AsRef<str> for CategoryDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which kinds of transaction a category may label.
///
/// Stored and sent over the wire as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum CategoryPurpose {
    /// Only expenses, code 1.
    Expense,
    /// Only revenue, code 2.
    Revenue,
    /// Either kind, code 3.
    Both,
}

impl CategoryPurpose {
    /// Whether a transaction of `kind` may use a category with this purpose.
    pub fn accepts(&self, kind: TransactionKind) -> bool {
        match self {
            CategoryPurpose::Both => true,
            CategoryPurpose::Expense => kind == TransactionKind::Expense,
            CategoryPurpose::Revenue => kind == TransactionKind::Revenue,
        }
    }
}

impl TryFrom<i64> for CategoryPurpose {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CategoryPurpose::Expense),
            2 => Ok(CategoryPurpose::Revenue),
            3 => Ok(CategoryPurpose::Both),
            other => Err(Error::InvalidCategoryPurpose(other)),
        }
    }
}

impl From<CategoryPurpose> for i64 {
    fn from(purpose: CategoryPurpose) -> Self {
        match purpose {
            CategoryPurpose::Expense => 1,
            CategoryPurpose::Revenue => 2,
            CategoryPurpose::Both => 3,
        }
    }
}

impl Display for CategoryPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CategoryPurpose::Expense => "expense only",
            CategoryPurpose::Revenue => "revenue only",
            CategoryPurpose::Both => "expense and revenue",
        };

        write!(f, "{name}")
    }
}

impl ToSql for CategoryPurpose {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(*self)))
    }
}

impl FromSql for CategoryPurpose {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;

        CategoryPurpose::try_from(code).map_err(|_| FromSqlError::OutOfRange(code))
    }
}

/// A label for transactions, e.g. 'Alimentação' or 'Salário'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "descricao")]
    pub description: CategoryDescription,
    #[serde(rename = "finalidade")]
    pub purpose: CategoryPurpose,
}

/// Request body for creating a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "finalidade", default)]
    pub purpose: i64,
}


#[cfg(test)]
mod category_purpose_tests {
    use crate::{Error, category::CategoryPurpose, transaction::TransactionKind};

    #[test]
    fn parses_known_codes() {
        assert_eq!(CategoryPurpose::try_from(1), Ok(CategoryPurpose::Expense));
        assert_eq!(CategoryPurpose::try_from(2), Ok(CategoryPurpose::Revenue));
        assert_eq!(CategoryPurpose::try_from(3), Ok(CategoryPurpose::Both));
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in [0, 4, -1, 99] {
            assert_eq!(
                CategoryPurpose::try_from(code),
                Err(Error::InvalidCategoryPurpose(code))
            );
        }
    }

    #[test]
    fn compatibility_matrix() {
        let cases = [
            (CategoryPurpose::Expense, TransactionKind::Expense, true),
            (CategoryPurpose::Expense, TransactionKind::Revenue, false),
            (CategoryPurpose::Revenue, TransactionKind::Expense, false),
            (CategoryPurpose::Revenue, TransactionKind::Revenue, true),
            (CategoryPurpose::Both, TransactionKind::Expense, true),
            (CategoryPurpose::Both, TransactionKind::Revenue, true),
        ];

        for (purpose, kind, want) in cases {
            assert_eq!(
                purpose.accepts(kind),
                want,
                "{purpose:?} accepting {kind:?} should be {want}"
            );
        }
    }

    #[test]
    fn serializes_as_integer_code() {
        assert_eq!(
            serde_json::to_string(&CategoryPurpose::Both).unwrap(),
            "3"
        );
    }
}
