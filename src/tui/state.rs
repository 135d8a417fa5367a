use crate::model::Event;
use crate::tui::dialog::DialogController;
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Creating,
    Editing,
    ImportPath,
}

/// UI-side working copy of the collection plus the input line and the
/// dialog slot. The list is never filtered or reordered, so the selected
/// row index is also the storage index.
pub struct AppState {
    pub events: Vec<Event>,
    pub list_state: ListState,
    pub message: String,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Which record an Editing submission replaces.
    pub editing_index: Option<usize>,
    pub dialog: DialogController,
}

impl AppState {
    pub fn new(events: Vec<Event>) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            events,
            list_state: l_state,
            message: "Ready.".to_string(),
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            editing_index: None,
            dialog: DialogController::default(),
        }
    }

    /// Replace the working copy after a reload, clamping the selection.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        let sel = self.list_state.selected().unwrap_or(0);
        if self.events.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.events.len() {
            self.list_state.select(Some(self.events.len() - 1));
        }
    }

    /// Selected row, only when it points at a real record.
    pub fn selected(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&i| i < self.events.len())
    }

    pub fn next(&mut self) {
        if self.events.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.events.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.events.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.events.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.events.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (no wrap-around like next())
        let new_index = (current + step).min(self.events.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.events.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }

    /// Pre-fill the input line and put the cursor at its end.
    pub fn fill_input(&mut self, content: String) {
        self.cursor_position = content.chars().count();
        self.input_buffer = content;
    }

    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    /// Byte offset of the cursor; the cursor itself counts chars.
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }
}
