//! Title bar system commands
//!
//! The three actions a custom title bar needs to offer. Each is a direct
//! delegation to the window; the resulting state change comes back to the
//! observer through the host's normal notification path.

use crate::chrome::host::ChromeWindow;
use crate::domain::policy::WindowState;

/// Minimizes the window
pub fn minimize(window: &mut impl ChromeWindow) {
    window.set_window_state(WindowState::Minimized);
}

/// Maximizes the window, or restores it if already maximized
pub fn toggle_maximize(window: &mut impl ChromeWindow) {
    let next = match window.window_state() {
        WindowState::Maximized => WindowState::Normal,
        WindowState::Normal | WindowState::Minimized => WindowState::Maximized,
    };
    window.set_window_state(next);
}

/// Closes the window
pub fn close(window: &mut impl ChromeWindow) {
    window.close();
}
