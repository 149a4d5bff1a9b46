//! Folio: a portfolio presented as a terminal.
//!
//! The interpreter, session and theme registry work without a terminal
//! attached. The `runtime` feature adds the crossterm/ratatui front-end.

pub mod config;
pub mod config_io;
pub mod interpreter;
pub mod services;
pub mod session;
pub mod theme;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod input;
#[cfg(feature = "runtime")]
pub mod view;
