//! Core domain logic
//!
//! The activity registry and its membership/role state machine.

pub mod registry;
