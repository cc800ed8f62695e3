//! People whose transactions are tracked.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod service;

pub use create::create_person_endpoint;
pub use db::{create_person_table, get_all_people, get_person};
pub use delete::delete_person_endpoint;
pub use domain::{Age, Person, PersonFormData, PersonId, PersonName};
pub use list::{get_people_endpoint, get_person_endpoint};
pub use service::{create_person, delete_person};
