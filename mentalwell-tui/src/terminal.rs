//! Raw-mode terminal lifecycle.
//!
//! The UI owns the whole screen while it runs: raw mode plus the alternate
//! screen, entered once at startup and left on every exit path. A panic
//! mid-assessment must not strand the user's shell in raw mode, so the
//! same teardown is wired into the panic hook before the message prints.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type MwTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, yielding the terminal handle.
pub fn setup_terminal() -> io::Result<MwTerminal> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Best-effort teardown for exit paths that cannot report an error, the
/// panic hook above all. Safe to call when not in a TUI at all.
pub fn leave_tui() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Undo [`setup_terminal`] on the normal exit path, surfacing failures and
/// bringing the cursor back.
pub fn restore_terminal(terminal: &mut MwTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Chain a panic hook that drops out of the TUI first, so the panic
/// message lands on a readable screen. Call once before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_tui();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[test]
    fn leave_tui_tolerates_not_being_in_a_tui() {
        // Outside raw mode, possibly without a tty, both underlying calls
        // may fail; neither failure may escape, and repeat calls are fine.
        leave_tui();
        leave_tui();
    }

    #[test]
    fn panic_hook_chains_to_the_previous_hook() {
        let fired = Arc::new(AtomicBool::new(false));
        let fired_in_hook = Arc::clone(&fired);
        panic::set_hook(Box::new(move |_| {
            fired_in_hook.store(true, Ordering::SeqCst);
        }));
        install_panic_hook();

        let result = std::panic::catch_unwind(|| panic!("boom"));
        let _ = panic::take_hook();

        assert!(result.is_err());
        assert!(fired.load(Ordering::SeqCst));
    }
}
