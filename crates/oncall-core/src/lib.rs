pub mod announcement;
pub mod contact;
pub mod error;
pub mod identity;
pub mod ids;
pub mod rotation;
