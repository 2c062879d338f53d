pub mod prelude;

pub mod log_entries;
pub mod users;
