use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use catalog_core::{update, AppState, Msg};
use engine_logging::{engine_info, engine_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;

/// How long the loop waits for input before polling the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything that can wake the main loop.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    Help,
    Quit,
    Unrecognized(String),
    /// Stdin reached EOF.
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&config, event_tx.clone());
    let mut app = App::new(AppState::with_layout(config.layout()), runner);

    spawn_input_reader(event_tx);

    let favorites = app.runner.load_favorites();
    app.dispatch(Msg::RestoreFavorites(favorites));
    app.dispatch(Msg::ReloadRequested);
    app.print(ui::render::help());

    let mut input_closed = false;
    loop {
        match event_rx.recv_timeout(POLL_INTERVAL) {
            Ok(AppEvent::Msg(msg)) => app.dispatch(msg),
            Ok(AppEvent::Help) => app.print(ui::render::help()),
            Ok(AppEvent::Unrecognized(line)) => {
                app.print(vec![format!("Unknown command: {line} (type `help`)")]);
            }
            Ok(AppEvent::Quit) => break,
            Ok(AppEvent::InputClosed) => input_closed = true,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        for msg in app.runner.poll_engine() {
            app.dispatch(msg);
        }

        // With piped input, stay up until the pending load has been shown.
        if input_closed && !app.state.is_loading() {
            break;
        }
    }

    engine_info!("Shutting down");
    app.runner.shutdown();
    Ok(())
}

/// Owns the state; the only place `update` is called.
struct App {
    state: AppState,
    runner: EffectRunner,
    clear_screen: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            clear_screen: io::stdout().is_terminal(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            let view = self.state.view();
            self.draw(ui::render::render(&view));
        }
    }

    fn draw(&self, lines: Vec<String>) {
        if self.clear_screen {
            self.print(vec!["\x1b[2J\x1b[H".to_string()]);
        }
        self.print(lines);
    }

    fn print(&self, lines: Vec<String>) {
        let mut out = io::stdout().lock();
        for line in lines {
            if writeln!(out, "{line}").is_err() {
                return;
            }
        }
        let _ = out.flush();
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    engine_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let Some(event) = ui::commands::parse_command(&line) else {
                continue;
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
