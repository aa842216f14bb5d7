//! Custom chrome support
//!
//! Host-facing traits, the border-compensation observer, and the title
//! bar system commands.

pub mod commands;
pub mod host;
pub mod observer;
