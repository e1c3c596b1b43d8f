//! Terminal event loop for the dashboard.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use peekfetch_models::LiveValueProvider;
use peekfetch_probe::HostProbe;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use super::app::App;
use super::ui;
use super::update::Event;
use crate::config::Config;
use crate::error::{Result, TuiError};

/// Raw-mode alternate screen, restored when dropped.
///
/// Teardown is best effort so it also runs while unwinding.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Sets the returned flag when the process is asked to terminate.
fn register_quit_signals() -> Result<Arc<AtomicBool>> {
    let quit = Arc::new(AtomicBool::new(false));

    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&quit))
        .map_err(TuiError::Signal)?;
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&quit))
        .map_err(TuiError::Signal)?;

    Ok(quit)
}

/// Run the dashboard until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let quit = register_quit_signals()?;

    // Collect before raw mode so a slow probe leaves the shell usable.
    let probe = HostProbe::with_cpu_sample_window(config.cpu_sample_window);
    let mut app = App::from_provider(probe);

    let result = {
        let mut session = TerminalSession::enter()?;
        let size = session.terminal.size()?;
        app.handle(Event::Resize {
            width: size.width,
            height: size.height,
        });
        run_loop(&mut session.terminal, &mut app, config.input_poll, &quit)
    };
    info!("Dashboard closed");

    result
}

/// Main event loop.
fn run_loop<L: LiveValueProvider>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<L>,
    input_poll: Duration,
    quit: &AtomicBool,
) -> Result<()> {
    loop {
        if quit.load(Ordering::Relaxed) {
            debug!("Termination signal received");
            app.handle(Event::Quit);
        }
        if app.should_quit() {
            return Ok(());
        }

        terminal.draw(|f| ui::draw(f, app.state(), app.sections()))?;

        step(app, input_poll, read_input)?;
    }
}

/// Applies at most one event: the due refresh tick, else the next input.
///
/// `input` waits up to the given timeout for a terminal event. A due tick
/// goes first so held keys cannot starve the refresh.
fn step<L, F>(app: &mut App<L>, input_poll: Duration, mut input: F) -> Result<()>
where
    L: LiveValueProvider,
    F: FnMut(Duration) -> io::Result<Option<TermEvent>>,
{
    if app.poll_tick(Instant::now()) {
        return Ok(());
    }

    // Wake up in time for the next refresh tick.
    let timeout = app
        .next_tick_in(Instant::now())
        .map_or(input_poll, |due| due.min(input_poll));

    if let Some(event) = input(timeout)?.and_then(translate) {
        app.handle(event);
    }
    Ok(())
}

fn read_input(timeout: Duration) -> io::Result<Option<TermEvent>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a dashboard event.
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => map_key(&key),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

/// Translate a key press into a dashboard event.
pub fn map_key(key: &KeyEvent) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Event::Quit),
        KeyCode::Char('u') if ctrl => Some(Event::PageUp),
        KeyCode::Char('d') if ctrl => Some(Event::PageDown),
        _ if ctrl => None,
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Event::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveDown),
        KeyCode::PageUp => Some(Event::PageUp),
        KeyCode::PageDown => Some(Event::PageDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::ToggleExpand),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Event::ToggleLive),
        _ => None,
    }
}
