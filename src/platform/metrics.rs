//! Win32 system border metrics
//!
//! This module is responsible for:
//! - Querying the resize-border thickness (SM_CXSIZEFRAME / SM_CYSIZEFRAME)
//! - Querying the padded-border constant (SM_CXPADDEDBORDER)
//! - Getting the per-monitor DPI scale for a window
//!
//! All values leave this module in device-independent units (96 DPI = 1.0)
//! except the padded-border constant, which is DPI-independent by contract
//! and converted per window by the caller.

use crate::chrome::host::{BorderMetrics, MetricsError};
use crate::domain::core::Thickness;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::HiDpi::{GetDpiForSystem, GetDpiForWindow, GetSystemMetricsForDpi};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXPADDEDBORDER, SM_CXSIZEFRAME, SM_CYSIZEFRAME,
};

const BASELINE_DPI: f64 = 96.0;

/// Live system metrics provider
///
/// Stateless by design: every query goes straight to Win32 so theme
/// changes and DPI changes are reflected immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBorderMetrics;

impl SystemBorderMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl BorderMetrics for SystemBorderMetrics {
    /// Resize-grip thickness in device-independent units
    ///
    /// Queries the frame metrics at the current system DPI and normalizes
    /// them back to the 96-DPI baseline, matching what the OS itself adds
    /// around a native-framed window.
    fn resize_border(&self) -> Result<Thickness, MetricsError> {
        unsafe {
            let dpi = GetDpiForSystem();
            if dpi == 0 {
                return Err(MetricsError::DpiUnavailable);
            }

            let frame_x = GetSystemMetricsForDpi(SM_CXSIZEFRAME, dpi);
            let frame_y = GetSystemMetricsForDpi(SM_CYSIZEFRAME, dpi);
            if frame_x <= 0 || frame_y <= 0 {
                return Err(MetricsError::ResizeBorderUnavailable);
            }

            let scale = dpi as f64 / BASELINE_DPI;
            let x = frame_x as f64 / scale;
            let y = frame_y as f64 / scale;

            Ok(Thickness::new(x, y, x, y))
        }
    }

    /// The SM_CXPADDEDBORDER constant in raw device pixels
    fn padded_border_px(&self) -> Result<f64, MetricsError> {
        let px = unsafe { GetSystemMetrics(SM_CXPADDEDBORDER) };
        if px < 0 {
            return Err(MetricsError::PaddedBorderUnavailable);
        }

        Ok(px as f64)
    }
}

/// Current X-axis DPI scale factor for a window (1.0 = 96 DPI)
///
/// For host `ChromeWindow` implementations backed by an HWND. Per-monitor:
/// the result changes when the window moves between monitors with
/// different scale factors, so callers must not cache it.
pub fn window_dpi_scale(hwnd: HWND) -> Result<f64, MetricsError> {
    let dpi = unsafe { GetDpiForWindow(hwnd) };
    if dpi == 0 {
        // GetDpiForWindow reports 0 for an invalid window handle
        return Err(MetricsError::DpiUnavailable);
    }

    Ok(dpi as f64 / BASELINE_DPI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_metrics_are_sane() {
        let metrics = SystemBorderMetrics::new();

        let resize = metrics.resize_border().unwrap();
        assert!(resize.is_non_negative());
        assert!(resize.left > 0.0, "resize frame should have width");
        assert_eq!(resize.left, resize.right);
        assert_eq!(resize.top, resize.bottom);

        let padded = metrics.padded_border_px().unwrap();
        assert!(padded >= 0.0);
    }

    #[test]
    fn invalid_window_has_no_dpi() {
        let result = window_dpi_scale(HWND(0));
        assert_eq!(result, Err(MetricsError::DpiUnavailable));
    }
}
