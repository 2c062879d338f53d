pub mod hooks;
pub mod log_service;
pub mod log_service_impl;
pub mod seed;

pub use hooks::NameRegistrationHook;
pub use log_service::{LogEntryError, LogEntryService, PostCreateHook};
pub use log_service_impl::SeaOrmLogEntryService;
