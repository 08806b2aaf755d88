//! Contact use-case services.
//!
//! # Responsibility
//! - Provide the command-level API consumed by interactive front ends.
//! - Keep front ends decoupled from directory/record internals.

pub mod contact_service;
