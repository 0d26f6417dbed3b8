use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::command;
use crate::error::AppError;
use crate::session::Action;
use crate::state::{AppState, Screen};
use crate::timer::{spawn_ticker, Ticker, TimerEvent};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub fn run_tui(mut state: AppState) -> Result<(), AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), AppError> {
    let mut ticker: Option<Ticker> = None;

    loop {
        terminal.draw(|f| crate::ui::draw(f, state))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(cmd) = command::map_key(state, key) {
                        command::execute(state, cmd);
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, state, area);
                }
                _ => {}
            }
        }

        sync_ticker(state, &mut ticker);

        // Handle timer events
        if let Some(t) = ticker.as_ref() {
            while let Some(TimerEvent::Tick) = t.try_recv() {
                let _ = state.apply(Action::Tick);
            }
        }
    }

    if let Some(t) = ticker.take() {
        t.stop();
    }
    Ok(())
}

/// The ticker runs exactly while a question is on screen.
fn sync_ticker(state: &AppState, ticker: &mut Option<Ticker>) {
    let running = state.screen() == Screen::Quiz;
    match (running, ticker.is_some()) {
        (true, false) => {
            *ticker = Some(spawn_ticker(TICK_INTERVAL));
        }
        (false, true) => {
            if let Some(t) = ticker.take() {
                t.stop();
            }
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState, area: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(cmd) = crate::ui::hit_test(state, area, mouse.column, mouse.row) {
            command::execute(state, cmd);
        }
    }
}
