//! Categories that label transactions as expense, revenue or both.
//!
//! Categories are append-only: there is no delete operation, and the store
//! refuses to delete a category that still has transactions.

mod create;
mod db;
mod domain;
mod list;
mod service;

pub use create::create_category_endpoint;
pub use db::{create_category_table, get_all_categories, get_category};
pub use domain::{Category, CategoryDescription, CategoryFormData, CategoryId, CategoryPurpose};
pub use list::{get_categories_endpoint, get_category_endpoint};
pub use service::create_category;
