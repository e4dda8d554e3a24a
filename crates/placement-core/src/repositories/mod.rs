//! Repository traits (ports)

pub mod approval_store;
pub mod company_repository;
pub mod event_repository;
pub mod revision_repository;
pub mod user_repository;

pub use approval_store::{ApprovalStore, ApprovalTransaction};
pub use company_repository::CompanyRepository;
pub use event_repository::EventRepository;
pub use revision_repository::RevisionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use revision_repository::MockRevisionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
