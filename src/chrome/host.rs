//! Host capability traits
//!
//! The observer never talks to a windowing framework directly. The host
//! supplies a window abstraction and a metrics provider through these
//! traits, which keeps the compensation logic testable with deterministic
//! stubs and free of any global Win32 state.

use crate::domain::core::Thickness;
use crate::domain::policy::{WindowState, padded_border_dip};

/// Errors from system metric queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to query resize border thickness")]
    ResizeBorderUnavailable,

    #[error("Failed to query padded border metric")]
    PaddedBorderUnavailable,

    #[error("Failed to query DPI for window")]
    DpiUnavailable,
}

/// A top-level window as seen by the compensation logic
///
/// Implementations wrap whatever the host framework calls a window. All
/// getters must reflect live values; in particular `dpi_scale_x` must be
/// re-read from the platform on every call, since the window may have
/// moved to a monitor with a different scale factor.
pub trait ChromeWindow {
    /// Current show state
    fn window_state(&self) -> WindowState;

    /// Current border thickness in device-independent units
    fn border_thickness(&self) -> Thickness;

    /// Replaces the window's border thickness
    fn set_border_thickness(&mut self, thickness: Thickness);

    /// Current X-axis DPI scale factor (1.0 = 96 DPI)
    ///
    /// Must be positive; the platform cannot report a zero scale for a
    /// live window.
    fn dpi_scale_x(&self) -> f64;

    /// Requests a show-state change (minimize, maximize, restore)
    ///
    /// The host framework is expected to deliver the resulting
    /// state-change notification back to the observer.
    fn set_window_state(&mut self, state: WindowState);

    /// Closes the window
    fn close(&mut self);
}

/// Source of the two system border metrics
///
/// Both queries are cheap and must not be cached by implementations: the
/// resize border changes with theme settings and the padded border
/// conversion depends on the window's current monitor.
pub trait BorderMetrics {
    /// OS resize-grip thickness in device-independent units
    fn resize_border(&self) -> Result<Thickness, MetricsError>;

    /// The global padded-border constant in raw device pixels
    ///
    /// This value is DPI-independent; use [`BorderMetrics::padded_border`]
    /// for the per-window converted form.
    fn padded_border_px(&self) -> Result<f64, MetricsError>;

    /// The padded border in the window's device-independent units
    ///
    /// Re-queries both the pixel constant and the window's DPI scale on
    /// every call.
    fn padded_border(&self, window: &impl ChromeWindow) -> Result<f64, MetricsError> {
        let px = self.padded_border_px()?;
        Ok(padded_border_dip(px, window.dpi_scale_x()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMetrics {
        padded_px: f64,
    }

    impl BorderMetrics for FixedMetrics {
        fn resize_border(&self) -> Result<Thickness, MetricsError> {
            Ok(Thickness::uniform(7.0))
        }

        fn padded_border_px(&self) -> Result<f64, MetricsError> {
            Ok(self.padded_px)
        }
    }

    struct FixedDpiWindow {
        scale: f64,
    }

    impl ChromeWindow for FixedDpiWindow {
        fn window_state(&self) -> WindowState {
            WindowState::Normal
        }

        fn border_thickness(&self) -> Thickness {
            Thickness::default()
        }

        fn set_border_thickness(&mut self, _thickness: Thickness) {}

        fn dpi_scale_x(&self) -> f64 {
            self.scale
        }

        fn set_window_state(&mut self, _state: WindowState) {}

        fn close(&mut self) {}
    }

    #[test]
    fn padded_border_divides_by_window_scale() {
        let metrics = FixedMetrics { padded_px: 4.0 };

        let window = FixedDpiWindow { scale: 2.0 };
        assert_eq!(metrics.padded_border(&window), Ok(2.0));

        let window = FixedDpiWindow { scale: 1.0 };
        assert_eq!(metrics.padded_border(&window), Ok(4.0));
    }

    #[test]
    fn padded_border_propagates_query_failure() {
        struct FailingMetrics;

        impl BorderMetrics for FailingMetrics {
            fn resize_border(&self) -> Result<Thickness, MetricsError> {
                Err(MetricsError::ResizeBorderUnavailable)
            }

            fn padded_border_px(&self) -> Result<f64, MetricsError> {
                Err(MetricsError::PaddedBorderUnavailable)
            }
        }

        let window = FixedDpiWindow { scale: 1.0 };
        assert_eq!(
            FailingMetrics.padded_border(&window),
            Err(MetricsError::PaddedBorderUnavailable)
        );
    }
}
