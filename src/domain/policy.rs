//! Border compensation policy
//!
//! Pure functions deciding what border a window should carry in each
//! window state. Windows clips the invisible resize border (and the
//! DPI-dependent padded border) off-screen when a window is maximized;
//! a frameless window has to grow its own border by exactly those
//! amounts to keep the client area fully visible.

use crate::domain::core::Thickness;

/// Show state of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// The two border regimes a window can be in
///
/// `Compensated` applies only while maximized; every other state uses the
/// base border the application designed for normal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRegime {
    /// The application's designed border, untouched
    Base,
    /// Base border grown by the resize border and padded border
    Compensated,
}

/// Maps a window state to the border regime it requires
pub fn regime_for(state: WindowState) -> BorderRegime {
    match state {
        WindowState::Maximized => BorderRegime::Compensated,
        WindowState::Normal | WindowState::Minimized => BorderRegime::Base,
    }
}

/// Computes the maximized-state border
///
/// The resize border contributes per edge; the padded border is a single
/// scalar applied uniformly to all four edges. For non-negative inputs the
/// result is edge-wise >= `base`.
pub fn compensated_border(base: &Thickness, resize: &Thickness, padded: f64) -> Thickness {
    base.add(resize).add_uniform(padded)
}

/// Converts the padded-border pixel constant into device-independent units
///
/// `dpi_scale_x` is the window's current X-axis DPI scale (1.0 = 96 DPI).
/// A scale of zero or less is a platform contract violation, not a
/// recoverable condition.
pub fn padded_border_dip(padded_px: f64, dpi_scale_x: f64) -> f64 {
    assert!(
        dpi_scale_x > 0.0,
        "DPI scale must be positive, got {dpi_scale_x}"
    );
    padded_px / dpi_scale_x
}
