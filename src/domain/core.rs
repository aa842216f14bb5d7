//! Core domain types and operations
//!
//! This module defines pure domain types that work exclusively with
//! device-independent units and have no knowledge of Win32 or DPI concepts.

/// Four-edge border inset in device-independent units
///
/// This is the fundamental building block for all border calculations.
/// Each edge is an independent non-negative value; the platform layer is
/// responsible for any pixel-to-unit conversion before values land here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    /// Creates a new thickness from four edge values
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a thickness with the same value on all four edges
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the element-wise sum of two thicknesses
    pub fn add(&self, other: &Thickness) -> Thickness {
        Thickness::new(
            self.left + other.left,
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
        )
    }

    /// Returns this thickness with the same scalar added to every edge
    pub fn add_uniform(&self, value: f64) -> Thickness {
        self.add(&Thickness::uniform(value))
    }

    /// Returns true if every edge is zero or greater
    pub fn is_non_negative(&self) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0
    }
}
