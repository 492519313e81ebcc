//! Utility modules

#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "cli")]
pub use logging::init_logger;
