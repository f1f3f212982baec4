pub mod slack;
pub mod ssm_contacts;
