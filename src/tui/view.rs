use crate::elapsed::elapsed_since;
use crate::tui::dialog::{DialogFocus, DialogView};
use crate::tui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    // --- Event List ---
    let items: Vec<ListItem> = state
        .events
        .iter()
        .map(|ev| {
            // A date that does not parse still renders; only the elapsed
            // column is undefined for it.
            let elapsed_str = match ev.start_date() {
                Some(d) => elapsed_since(d).to_string(),
                None => "--".to_string(),
            };
            let line = Line::from(vec![
                Span::styled(
                    ev.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", ev.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("  {}", elapsed_str), Style::default().fg(Color::Cyan)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = format!(" Events ({}) ", state.events.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(list, chunks[0], &mut state.list_state);

    // --- Footer / Input ---
    let footer_area = chunks[1];
    match state.mode {
        InputMode::Creating | InputMode::Editing | InputMode::ImportPath => {
            let (title, prefix, color) = match state.mode {
                InputMode::Editing => (" Edit Event ", "> ", Color::Magenta),
                InputMode::ImportPath => (" Import From ", "@ ", Color::Green),
                _ => (" New Event ", "> ", Color::Yellow),
            };
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, footer_area);
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            let cursor_y = footer_area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(footer_area);
            let status_color = if state.message.contains("Error") {
                Color::Red
            } else {
                Color::Cyan
            };
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(status_color))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help_text = "a:Add | e:Edit | d:Del | x:Export | i:Import | q:Quit";
            let help = Paragraph::new(help_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }

    // --- Dialog ---
    // Drawn last so it sits on top of whatever else is on screen.
    if let Some(dialog) = state.dialog.view() {
        draw_dialog(f, dialog);
    }
}

fn draw_dialog(f: &mut Frame, dialog: &DialogView) {
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", dialog.title))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(dialog.message.clone()).wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let focused = Style::default()
        .add_modifier(Modifier::BOLD)
        .bg(Color::Yellow)
        .fg(Color::Black);
    let unfocused = Style::default().fg(Color::DarkGray);

    let mut buttons = vec![Span::styled(
        format!("[ {} ]", dialog.confirm_label),
        if dialog.focus == DialogFocus::Confirm {
            focused
        } else {
            unfocused
        },
    )];
    if let Some(cancel) = &dialog.cancel_label {
        buttons.push(Span::raw("  "));
        buttons.push(Span::styled(
            format!("[ {} ]", cancel),
            if dialog.focus == DialogFocus::Cancel {
                focused
            } else {
                unfocused
            },
        ));
    }
    let button_row = Paragraph::new(Line::from(buttons)).alignment(Alignment::Center);
    f.render_widget(button_row, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
