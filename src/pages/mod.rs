pub mod admin_reports;
pub mod dashboard;
pub mod login;
pub mod register;
