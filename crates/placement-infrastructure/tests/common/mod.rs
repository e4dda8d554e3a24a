// Shared fixtures and the PostgreSQL harness for the integration suites.
#![allow(dead_code)]

pub mod fixtures;
pub mod postgres;

pub use fixtures::*;
