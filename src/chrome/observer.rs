//! Window state observation and border recomputation
//!
//! This module owns the border-compensation state machine. An observer is
//! attached to exactly one window; the host calls the state-change handler
//! from its event loop whenever the window's show state changes, and the
//! observer rewrites the window's border thickness for the new state.

use crate::chrome::host::{BorderMetrics, ChromeWindow};
use crate::domain::core::Thickness;
use crate::domain::policy::{BorderRegime, WindowState, compensated_border};

/// Observer lifecycle errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserverError {
    #[error("Observer is already attached to a window")]
    AlreadyAttached,

    #[error("Observer is not attached to a window")]
    NotAttached,
}

/// Keeps a window's border thickness correct across state changes
///
/// On attach the observer snapshots the window's designed border; that
/// snapshot is immutable for the observer's lifetime. Every state-change
/// notification then resolves to one of two regimes: the base border
/// (normal, minimized) or the compensated border (maximized), computed
/// fresh from live system metrics so theme changes and monitor moves are
/// picked up without caching.
pub struct WindowStateObserver<M: BorderMetrics> {
    metrics: M,
    base_border: Option<Thickness>,
}

impl<M: BorderMetrics> WindowStateObserver<M> {
    /// Creates an observer backed by the given metrics provider
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            base_border: None,
        }
    }

    /// Binds the observer to a window
    ///
    /// Captures the window's current border thickness as the base border.
    /// Must be called exactly once, before any state-change notifications
    /// are delivered; a second call is rejected rather than silently
    /// re-snapshotting a possibly already-compensated border.
    pub fn attach(&mut self, window: &impl ChromeWindow) -> Result<(), ObserverError> {
        if self.base_border.is_some() {
            return Err(ObserverError::AlreadyAttached);
        }

        self.base_border = Some(window.border_thickness());
        Ok(())
    }

    /// Returns true once a base border has been captured
    pub fn is_attached(&self) -> bool {
        self.base_border.is_some()
    }

    /// The base border captured at attach time, if attached
    pub fn base_border(&self) -> Option<Thickness> {
        self.base_border
    }

    /// Handles a window state-change notification
    ///
    /// Called by the host's event loop, synchronously on the thread that
    /// owns the window. Sets the border for the window's current state and
    /// returns the regime that was actually applied.
    ///
    /// A failed metric query is not an error here: the window keeps its
    /// base border for that cycle (a few pixels of visual imperfection
    /// beats failing a visible window) and the handler reports `Base`.
    pub fn on_window_state_changed(
        &self,
        window: &mut impl ChromeWindow,
    ) -> Result<BorderRegime, ObserverError> {
        let base = self.base_border.ok_or(ObserverError::NotAttached)?;

        let applied = match window.window_state() {
            WindowState::Maximized => match self.try_compensate(&base, window) {
                Some(compensated) => {
                    window.set_border_thickness(compensated);
                    BorderRegime::Compensated
                }
                None => {
                    window.set_border_thickness(base);
                    BorderRegime::Base
                }
            },
            WindowState::Normal | WindowState::Minimized => {
                window.set_border_thickness(base);
                BorderRegime::Base
            }
        };

        Ok(applied)
    }

    /// Computes the compensated border from live metrics, or None if any
    /// metric query fails
    fn try_compensate(&self, base: &Thickness, window: &impl ChromeWindow) -> Option<Thickness> {
        let resize = self.metrics.resize_border().ok()?;
        let padded = self.metrics.padded_border(window).ok()?;

        Some(compensated_border(base, &resize, padded))
    }
}
