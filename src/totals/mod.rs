//! Revenue, expense and balance totals per person and per category.
//!
//! Totals are recomputed from every transaction on each request.

mod aggregation;
mod domain;
mod handlers;
mod service;

pub use domain::{CategoryTotals, PersonTotals, Totals, TotalsByCategory, TotalsByPerson};
pub use handlers::{get_totals_by_category_endpoint, get_totals_by_person_endpoint};
pub use service::{get_totals_by_category, get_totals_by_person};
