//! Transactions: expenses and revenue recorded against a person and a
//! category.

mod create;
mod db;
mod domain;
mod list;
mod service;

pub use create::create_transaction_endpoint;
pub use db::{
    create_transaction_table, get_all_transactions, get_transaction,
    get_transactions_by_category, get_transactions_by_person,
};
pub use domain::{
    Amount, MAX_AMOUNT, Transaction, TransactionFilter, TransactionFormData, TransactionId,
    TransactionKind,
};
pub use list::{get_transaction_endpoint, get_transactions_endpoint};
pub use service::create_transaction;
