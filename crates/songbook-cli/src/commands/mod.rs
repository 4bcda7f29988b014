mod add;
mod build;
mod drop;
mod rename;
mod status;

pub use add::run_add;
pub use build::run_build;
pub use drop::run_drop;
pub use rename::run_rename;
pub use status::show_status;
