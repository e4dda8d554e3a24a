//! Domain services (business logic)

pub mod approval_service;
pub mod company_service;
pub mod event_service;
pub mod revision_service;
pub mod user_service;

pub use approval_service::ApprovalService;
pub use company_service::CompanyService;
pub use event_service::EventService;
pub use revision_service::RevisionService;
pub use user_service::{CreateUserInput, UserService};
