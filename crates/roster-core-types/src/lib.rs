//! Core types shared across roster facilities
//!
//! Holds the canonical field keys and event names used by both the error
//! facility and the structured logging macros.

pub mod schema;
