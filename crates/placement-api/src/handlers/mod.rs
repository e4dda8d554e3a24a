//! HTTP handlers

pub mod company;
pub mod event;
pub mod health;
pub mod revision;
pub mod user;
