//! Data models and type definitions.
//!
//! This module contains database model type aliases, the input type for creating
//! users, and the serializable user representation returned by services.

pub mod db;
pub mod user;
