pub mod action;
pub mod dialog;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::model::Event;
use crate::store::EventStore;
use crate::transfer;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, InputMode};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::{io, time::Duration};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    // Panic Hook: the alternate screen eats panic output, keep a trace.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("desde_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load().unwrap_or_default();

    // A store that cannot be read is fatal, before the terminal is touched.
    let events = EventStore::load()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Storage worker: owns every touch of the store. Each mutation is
/// followed by a fresh load so the UI re-renders from what is on disk.
fn spawn_worker(
    export_path: PathBuf,
    mut action_rx: mpsc::Receiver<Action>,
    event_tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        while let Some(action) = action_rx.recv().await {
            match action {
                Action::Quit => break,

                Action::Create(event) => match EventStore::create(event) {
                    Ok(()) => {
                        send_reload(&event_tx).await;
                        let _ = event_tx.send(AppEvent::Status("Added.".to_string())).await;
                    }
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    }
                },

                Action::Update(index, event) => match EventStore::update(index, event) {
                    Ok(()) => {
                        send_reload(&event_tx).await;
                        let _ = event_tx
                            .send(AppEvent::Status("Updated.".to_string()))
                            .await;
                    }
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    }
                },

                Action::Delete(index) => match EventStore::delete(index) {
                    Ok(()) => {
                        send_reload(&event_tx).await;
                        let _ = event_tx
                            .send(AppEvent::Status("Deleted.".to_string()))
                            .await;
                    }
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                    }
                },

                Action::Export => {
                    let result = EventStore::load().and_then(|events| {
                        transfer::export_to(&export_path, &events)?;
                        Ok(events.len())
                    });
                    match result {
                        Ok(count) => {
                            let _ = event_tx
                                .send(AppEvent::Status(format!(
                                    "Exported {} events to {}.",
                                    count,
                                    export_path.display()
                                )))
                                .await;
                        }
                        Err(e) => {
                            let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                        }
                    }
                }

                Action::Import(path) => match transfer::parse_import(&path) {
                    Ok(events) => {
                        let _ = event_tx.send(AppEvent::ImportReady(events)).await;
                    }
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::ImportFailed(e.to_string())).await;
                    }
                },

                Action::ReplaceAll(events) => {
                    let count = events.len();
                    match EventStore::replace_all(events) {
                        Ok(()) => {
                            send_reload(&event_tx).await;
                            let _ = event_tx
                                .send(AppEvent::Status(format!("Imported {} events.", count)))
                                .await;
                        }
                        Err(e) => {
                            let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
                        }
                    }
                }
            }
        }
    });
}

async fn send_reload(event_tx: &mpsc::Sender<AppEvent>) {
    match EventStore::load() {
        Ok(events) => {
            let _ = event_tx.send(AppEvent::EventsLoaded(events)).await;
        }
        Err(e) => {
            let _ = event_tx.send(AppEvent::Error(e.to_string())).await;
        }
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    events: Vec<Event>,
) -> Result<()> {
    let export_path = PathBuf::from(config.export_path());
    let mut app_state = AppState::new(events);
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    spawn_worker(export_path.clone(), action_rx, event_tx);

    loop {
        terminal.draw(|f| view::draw(f, &mut app_state))?;

        if let Ok(event) = event_rx.try_recv() {
            match event {
                AppEvent::EventsLoaded(events) => {
                    app_state.set_events(events);
                    app_state.message = format!("Events: {}", app_state.events.len());
                }
                AppEvent::ImportReady(events) => {
                    if let Ok(rx) = app_state.dialog.confirm(
                        "Import",
                        "Importing will replace the existing events. Continue?",
                        "Replace",
                        Some("Cancel"),
                    ) {
                        let tx = action_tx.clone();
                        tokio::spawn(async move {
                            if rx.await.unwrap_or(false) {
                                let _ = tx.send(Action::ReplaceAll(events)).await;
                            }
                        });
                    }
                }
                AppEvent::ImportFailed(msg) => {
                    // Acknowledge-only; the answer does not matter.
                    let _ = app_state.dialog.notice("Import", &msg);
                }
                AppEvent::Error(msg) => {
                    app_state.message = format!("Error: {}", msg);
                }
                AppEvent::Status(msg) => {
                    app_state.message = msg;
                }
            }
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            let term_event = event::read()?;

            match term_event {
                TermEvent::Mouse(mouse_event) => {
                    if !app_state.dialog.is_open() {
                        match mouse_event.kind {
                            MouseEventKind::ScrollDown => app_state.next(),
                            MouseEventKind::ScrollUp => app_state.previous(),
                            _ => {}
                        }
                    }
                }

                TermEvent::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    // An open dialog swallows every key.
                    if app_state.dialog.is_open() {
                        match key.code {
                            KeyCode::Char('y') => app_state.dialog.resolve(true),
                            KeyCode::Char('n') | KeyCode::Esc => app_state.dialog.resolve(false),
                            KeyCode::Enter => app_state.dialog.activate(),
                            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                                app_state.dialog.toggle_focus();
                            }
                            _ => {}
                        }
                        continue;
                    }

                    match app_state.mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => {
                                let _ = action_tx.send(Action::Quit).await;
                                break;
                            }
                            KeyCode::Char('a') => {
                                app_state.mode = InputMode::Creating;
                                app_state.reset_input();
                                app_state.message =
                                    "Example: Moved to Lisbon @2019-06-01".to_string();
                            }
                            KeyCode::Char('e') => {
                                if let Some(idx) = app_state.selected() {
                                    let line = app_state.events[idx].to_smart_string();
                                    app_state.mode = InputMode::Editing;
                                    app_state.editing_index = Some(idx);
                                    app_state.fill_input(line);
                                }
                            }
                            KeyCode::Char('d') => {
                                if let Some(idx) = app_state.selected()
                                    && let Ok(rx) = app_state.dialog.confirm(
                                        "Delete",
                                        "Delete this event?",
                                        "Delete",
                                        Some("Cancel"),
                                    )
                                {
                                    let tx = action_tx.clone();
                                    tokio::spawn(async move {
                                        if rx.await.unwrap_or(false) {
                                            let _ = tx.send(Action::Delete(idx)).await;
                                        }
                                    });
                                }
                            }
                            KeyCode::Char('x') => {
                                let _ = action_tx.send(Action::Export).await;
                            }
                            KeyCode::Char('i') => {
                                app_state.mode = InputMode::ImportPath;
                                app_state.fill_input(export_path.display().to_string());
                            }
                            KeyCode::Down | KeyCode::Char('j') => app_state.next(),
                            KeyCode::Up | KeyCode::Char('k') => app_state.previous(),
                            KeyCode::PageDown => app_state.jump_forward(10),
                            KeyCode::PageUp => app_state.jump_backward(10),
                            _ => {}
                        },

                        InputMode::Creating | InputMode::Editing | InputMode::ImportPath => {
                            match key.code {
                                KeyCode::Enter => {
                                    submit_input(&mut app_state, &action_tx).await;
                                }
                                KeyCode::Esc => {
                                    app_state.mode = InputMode::Normal;
                                    app_state.editing_index = None;
                                    app_state.reset_input();
                                }
                                KeyCode::Char(c) => app_state.enter_char(c),
                                KeyCode::Backspace => app_state.delete_char(),
                                KeyCode::Left => app_state.move_cursor_left(),
                                KeyCode::Right => app_state.move_cursor_right(),
                                _ => {}
                            }
                        }
                    }
                }
                _ => {} // Resize is handled by the next draw
            }
        }
    }

    Ok(())
}

/// Enter in an input mode. A line that does not validate is neither sent
/// nor cleared: the mode and the buffer stay as they are.
async fn submit_input(state: &mut AppState, action_tx: &mpsc::Sender<Action>) {
    match state.mode {
        InputMode::Creating => {
            if let Some(event) = Event::from_smart_input(&state.input_buffer) {
                let _ = action_tx.send(Action::Create(event)).await;
                state.mode = InputMode::Normal;
                state.reset_input();
            }
        }
        InputMode::Editing => {
            if let Some(event) = Event::from_smart_input(&state.input_buffer) {
                if let Some(index) = state.editing_index {
                    let _ = action_tx.send(Action::Update(index, event)).await;
                }
                state.mode = InputMode::Normal;
                state.editing_index = None;
                state.reset_input();
            }
        }
        InputMode::ImportPath => {
            let path = state.input_buffer.trim();
            if !path.is_empty() {
                let _ = action_tx.send(Action::Import(PathBuf::from(path))).await;
                state.mode = InputMode::Normal;
                state.reset_input();
            }
        }
        InputMode::Normal => {}
    }
}
