use crate::model::Event;
use std::path::PathBuf;

/// Requests from the UI loop to the storage worker.
#[derive(Debug)]
pub enum Action {
    Create(Event),
    Update(usize, Event),
    Delete(usize),
    Export,
    Import(PathBuf),
    ReplaceAll(Vec<Event>),
    Quit,
}

/// Responses from the worker back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    EventsLoaded(Vec<Event>),
    /// Import file read and validated; awaits the replace confirmation.
    ImportReady(Vec<Event>),
    /// Import read/parse/validation failed; shown as a notice dialog.
    ImportFailed(String),
    Error(String),
    Status(String),
}
