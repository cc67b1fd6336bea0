//! CLI command implementations

mod issues;
mod star;

pub use issues::IssuesArgs;
pub use star::StarArgs;
