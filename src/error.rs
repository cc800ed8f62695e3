//! Defines the app level error type and its conversion into JSON responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    category::{CategoryId, CategoryPurpose},
    person::PersonId,
    transaction::{MAX_AMOUNT, TransactionKind},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as a person's name.
    #[error("the person's name is required and cannot be empty")]
    EmptyPersonName,

    /// A zero or negative number was used as a person's age.
    #[error("age must be a positive integer, got {0}")]
    InvalidAge(i64),

    /// An empty string was used as a category description.
    #[error("the category description is required and cannot be empty")]
    EmptyCategoryDescription,

    /// The purpose code does not map to a [CategoryPurpose].
    #[error("category purpose must be Expense (1), Revenue (2) or Both (3), got {0}")]
    InvalidCategoryPurpose(i64),

    /// An empty string was used as a transaction description.
    #[error("the transaction description is required and cannot be empty")]
    EmptyTransactionDescription,

    /// A zero or negative amount was used to create a transaction.
    #[error("the transaction amount must be a positive decimal number, got {0}")]
    NonPositiveAmount(Decimal),

    /// An amount above [MAX_AMOUNT] was used to create a transaction.
    #[error("the transaction amount must be at most {max}, got {0}", max = MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    /// The kind code does not map to a [TransactionKind].
    #[error("transaction kind must be Expense (1) or Revenue (2), got {0}")]
    InvalidTransactionKind(i64),

    /// The person ID used to create a transaction did not match a person.
    #[error("the person with ID {0} could not be found")]
    PersonNotFound(PersonId),

    /// The category ID used to create a transaction did not match a category.
    #[error("the category with ID {0} could not be found")]
    CategoryNotFound(CategoryId),

    /// The request body or path could not be parsed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The category cannot label transactions of the requested kind.
    #[error(
        "the category '{description}' cannot be used for {kind} transactions, \
        its purpose is {purpose}"
    )]
    IncompatibleCategory {
        /// The description of the category that was rejected.
        description: String,
        /// The purpose of the category that was rejected.
        purpose: CategoryPurpose,
        /// The kind of the transaction that was being created.
        kind: TransactionKind,
    },

    /// A person under the age of 18 tried to record revenue.
    #[error("minors cannot have revenue: '{name}' is {age} years old")]
    MinorWithRevenue {
        /// The name of the person.
        name: String,
        /// The age of the person.
        age: i64,
    },

    /// A revenue, expense or balance sum does not fit in a decimal.
    #[error("the totals are too large to compute")]
    TotalsOverflow,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

/// How an [Error] should be reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// A looked-up resource does not exist.
    NotFound,
    /// Well-formed input that violates a domain rule.
    BusinessRule,
    /// Anything else, e.g. the database failed.
    Unexpected,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyPersonName
            | Error::InvalidAge(_)
            | Error::EmptyCategoryDescription
            | Error::InvalidCategoryPurpose(_)
            | Error::EmptyTransactionDescription
            | Error::NonPositiveAmount(_)
            | Error::AmountTooLarge(_)
            | Error::InvalidTransactionKind(_)
            | Error::PersonNotFound(_)
            | Error::CategoryNotFound(_)
            | Error::InvalidRequest(_) => ErrorKind::Validation,
            Error::IncompatibleCategory { .. } | Error::MinorWithRevenue { .. } => {
                ErrorKind::BusinessRule
            }
            Error::NotFound => ErrorKind::NotFound,
            Error::SqlError(_) | Error::DatabaseLockError | Error::TotalsOverflow => {
                ErrorKind::Unexpected
            }
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A human readable description of what went wrong.
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match self.kind() {
            ErrorKind::Validation | ErrorKind::BusinessRule => {
                tracing::warn!("Rejected request: {self}");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Unexpected errors are not intended to be shown to the client.
            ErrorKind::Unexpected => {
                tracing::error!("An unexpected error occurred: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status_code, Json(ErrorMessage { message })).into_response()
    }
}
