//! Pure domain logic for border compensation
//!
//! No Win32 types or calls here; everything operates on
//! device-independent units and plain enums.

pub mod core;
pub mod policy;
