//! Border compensation for frameless windows
//!
//! When an application replaces the native title bar with its own, the OS
//! stops compensating for the invisible resize border and the padded
//! border around the window. On maximize, a few pixels of the client area
//! get clipped off-screen unless the window grows its border thickness by
//! exactly those amounts; on restore, the designed border must come back
//! untouched.
//!
//! This crate provides that state machine. The host framework supplies a
//! window through the [`ChromeWindow`] trait and metric queries through
//! the [`BorderMetrics`] trait (with a live Win32 implementation in
//! [`platform`]); a [`WindowStateObserver`] snapshots the window's
//! designed border at attach time and rewrites the border on every
//! state-change notification:
//!
//! ```
//! use frameless_win::{Thickness, WindowState, WindowStateObserver};
//! # use frameless_win::{BorderMetrics, ChromeWindow, MetricsError};
//! # struct StubMetrics;
//! # impl BorderMetrics for StubMetrics {
//! #     fn resize_border(&self) -> Result<Thickness, MetricsError> {
//! #         Ok(Thickness::uniform(7.0))
//! #     }
//! #     fn padded_border_px(&self) -> Result<f64, MetricsError> {
//! #         Ok(4.0)
//! #     }
//! # }
//! # struct StubWindow {
//! #     state: WindowState,
//! #     border: Thickness,
//! # }
//! # impl ChromeWindow for StubWindow {
//! #     fn window_state(&self) -> WindowState {
//! #         self.state
//! #     }
//! #     fn border_thickness(&self) -> Thickness {
//! #         self.border
//! #     }
//! #     fn set_border_thickness(&mut self, thickness: Thickness) {
//! #         self.border = thickness;
//! #     }
//! #     fn dpi_scale_x(&self) -> f64 {
//! #         1.0
//! #     }
//! #     fn set_window_state(&mut self, state: WindowState) {
//! #         self.state = state;
//! #     }
//! #     fn close(&mut self) {}
//! # }
//! # let mut window = StubWindow {
//! #     state: WindowState::Normal,
//! #     border: Thickness::uniform(1.0),
//! # };
//! let mut observer = WindowStateObserver::new(StubMetrics);
//! observer.attach(&window)?;
//!
//! // host event loop, on every state-change notification:
//! # window.state = WindowState::Maximized;
//! observer.on_window_state_changed(&mut window)?;
//! # assert_eq!(window.border, Thickness::uniform(12.0));
//! # Ok::<(), frameless_win::ObserverError>(())
//! ```

pub mod chrome;
pub mod domain;
#[cfg(target_os = "windows")]
pub mod platform;

pub use chrome::commands;
pub use chrome::host::{BorderMetrics, ChromeWindow, MetricsError};
pub use chrome::observer::{ObserverError, WindowStateObserver};
pub use domain::core::Thickness;
pub use domain::policy::{BorderRegime, WindowState};
#[cfg(target_os = "windows")]
pub use platform::metrics::{SystemBorderMetrics, window_dpi_scale};
