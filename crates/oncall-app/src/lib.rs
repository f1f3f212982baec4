pub mod error;
pub mod oncall_service;
pub mod publisher;
pub mod rotation_resolver;

pub use oncall_service::OnCallService;
