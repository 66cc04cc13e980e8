//! Terminal session and crash reporting.
//!
//! [`TerminalSession`] holds raw mode and the alternate screen for as long
//! as it lives. ratatui's own panic hook restores the terminal and then
//! hands over to the color-eyre report installed by [`install_hooks`].

use color_eyre::eyre::Result;
use ratatui::{DefaultTerminal, Frame};

pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// Call after [`install_hooks`]: the restore hook wraps whatever panic
    /// hook is current at this point.
    pub fn open() -> Result<Self> {
        Ok(Self {
            terminal: ratatui::try_init()?,
        })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// color-eyre reports for errors returned from `main` and for panics.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic_hook.install();
    Ok(())
}
