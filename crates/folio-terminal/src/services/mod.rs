//! Services the interpreter and front-end depend on, kept behind small
//! interfaces so tests can swap them out.

pub mod log_dirs;
pub mod navigator;
pub mod time_source;

#[cfg(feature = "runtime")]
pub mod terminal_modes;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
