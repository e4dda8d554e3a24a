//! Request and response payloads

pub mod company;
pub mod event;
pub mod revision;
pub mod user;

pub use company::{CompanyRequest, CompanyResponse};
pub use event::{CreateEventRequest, EventResponse};
pub use revision::{RevisionRequest, RevisionResponse, StatusRequest};
pub use user::{CreateUserRequest, LoginRequest, UserResponse};
