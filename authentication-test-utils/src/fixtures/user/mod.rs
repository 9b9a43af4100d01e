//! User fixture utilities.
//!
//! This module provides methods for inserting user records and factory functions
//! for creating in-memory model instances.

pub mod data;
pub mod factory;
