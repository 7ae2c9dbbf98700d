//! Command implementations for hooks-cli

pub mod install;
pub mod sync;
pub mod uninstall;

pub use install::run_install;
pub use sync::run_sync;
pub use uninstall::run_uninstall;
