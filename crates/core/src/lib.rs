//! Domain logic for the parts catalog.
//!
//! Nothing in this crate touches the database or HTTP. Repositories in
//! `catalog-db` and handlers in `catalog-api` call into these modules for
//! code generation, search predicates, and field validation.

pub mod error;
pub mod part_code;
pub mod search;
pub mod types;
pub mod validation;
