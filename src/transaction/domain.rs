//! Defines the core data models for transactions.

use std::fmt::Display;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, category::CategoryId, person::PersonId};

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for a transaction.
pub type TransactionId = Uuid;

/// Whether money was spent or earned.
///
/// Stored and sent over the wire as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum TransactionKind {
    /// Money spent, code 1.
    Expense,
    /// Money earned, code 2.
    Revenue,
}

impl TryFrom<i64> for TransactionKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransactionKind::Expense),
            2 => Ok(TransactionKind::Revenue),
            other => Err(Error::InvalidTransactionKind(other)),
        }
    }
}

impl From<TransactionKind> for i64 {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Expense => 1,
            TransactionKind::Revenue => 2,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Expense => write!(f, "expense"),
            TransactionKind::Revenue => write!(f, "revenue"),
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(*self)))
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;

        TransactionKind::try_from(code).map_err(|_| FromSqlError::OutOfRange(code))
    }
}

/// The largest amount a single transaction may have, the range of a
/// `decimal(18, 2)` column.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA763_FFFF, 0x0DE0_B6B3, 0, false, 2);

/// A strictly positive amount of money no greater than [MAX_AMOUNT].
///
/// Stored as decimal text so that sums are exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NonPositiveAmount] if `value` is
    /// zero or negative, or an [Error::AmountTooLarge] if it is greater than
    /// [MAX_AMOUNT].
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value <= Decimal::ZERO {
            Err(Error::NonPositiveAmount(value))
        } else if value > MAX_AMOUNT {
            Err(Error::AmountTooLarge(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create an amount without validation.
    ///
    /// The caller should ensure that `value` is positive.
    pub fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        text.parse::<Decimal>()
            .map(Amount)
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or revenue recorded against a person and a category.
///
/// The person's name and the category's description are copied in when the
/// transaction is read so that clients do not need to look them up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Amount,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,
    #[serde(rename = "categoriaDescricao")]
    pub category_description: String,
    #[serde(rename = "pessoaId")]
    pub person_id: PersonId,
    #[serde(rename = "pessoaNome")]
    pub person_name: String,
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Request body for creating a transaction.
///
/// The kind is kept as its raw code so that an undefined code is reported
/// by the service as a validation error.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionFormData {
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor", default)]
    pub amount: Decimal,
    #[serde(rename = "tipo", default)]
    pub kind: i64,
    #[serde(rename = "categoriaId")]
    pub category_id: CategoryId,
    #[serde(rename = "pessoaId")]
    pub person_id: PersonId,
}

/// Optional query parameters for narrowing the transaction list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(rename = "pessoaId")]
    pub person_id: Option<PersonId>,
    #[serde(rename = "categoriaId")]
    pub category_id: Option<CategoryId>,
}
