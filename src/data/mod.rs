//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table or junction each. They are generic
//! over [`sea_orm::ConnectionTrait`] so the same code runs against a pooled connection
//! or inside a transaction.

pub mod group;
pub mod permission;
pub mod user;
