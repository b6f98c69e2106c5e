use std::io;
use std::sync::mpsc;
use std::time::Duration;

use verseflow::app::settings::load_settings;
use verseflow::app::{Keymap, Page, UiTheme};
use verseflow::catalog::Catalog;
use verseflow::core::View;
use verseflow::tui::crossterm::into_input_event;
use verseflow::tui::terminal_guard::TerminalGuard;
use verseflow::ui::backend::terminal::RatatuiTerminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let logging = logging::init();

    let settings = load_settings();
    let mut theme = UiTheme::default();
    theme.apply_settings(&settings.theme);
    theme.adapt_to_terminal_capabilities();
    let keymap = Keymap::from_rules(&settings.keybindings);

    let mut page = Page::new(Catalog::builtin(), theme, keymap);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals =
        verseflow::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    tracing::info!("verseflow started");

    let result = run(&mut page, &mut terminal, &signal_rx);

    drop(terminal);
    drop(guard);
    match &result {
        Ok(()) => tracing::info!("verseflow exited"),
        Err(err) => tracing::error!(error = %err, "verseflow exited with error"),
    }
    // The terminal is back to normal here, so stderr is safe to use.
    if let (Err(err), Some(logging)) = (&result, &logging) {
        eprintln!("verseflow: {err} (logs in {})", logging.log_dir().display());
    }
    drop(logging);
    result
}

fn run(
    page: &mut Page,
    terminal: &mut RatatuiTerminal,
    signals: &mpsc::Receiver<verseflow::tui::terminal_guard::TerminationSignal>,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "shutting down on signal");
            return Ok(());
        }

        if dirty {
            terminal.draw(|backend, area| page.render(backend, area))?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = into_input_event(crossterm::event::read()?);
        let result = page.handle_input(&event);
        if result.is_quit() {
            return Ok(());
        }
        dirty |= result.is_consumed();
    }
}
