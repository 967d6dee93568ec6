use crate::todo_list::{Confirm, Field, TodoList};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, list: &mut TodoList) -> io::Result<()> {
    let mut selected: usize = 0;
    loop {
        selected = selected.min(list.tasks.len().saturating_sub(1));
        terminal.draw(|f| draw(f, list, selected))?;

        if let Event::Key(key) = event::read()? {
            // An open confirmation popup takes the whole keyboard.
            if list.confirm.is_some() {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => list.confirm_pending(),
                    KeyCode::Char('n') | KeyCode::Esc => list.cancel_pending(),
                    _ => {}
                }
                continue;
            }

            let selected_id = list.tasks.get(selected).map(|t| t.id);
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('d') => {
                        if let Some(id) = selected_id {
                            list.toggle_done(id);
                        }
                    }
                    KeyCode::Char('e') => {
                        if let Some(id) = selected_id {
                            list.begin_edit(id);
                        }
                    }
                    KeyCode::Char('x') => {
                        if let Some(id) = selected_id {
                            list.request_delete(id);
                        }
                    }
                    KeyCode::Char('a') => list.toggle_done_all(),
                    KeyCode::Char('l') => list.request_delete_all(),
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => list.submit(),
                KeyCode::Tab => list.switch_focus(),
                KeyCode::Backspace => list.pop_char(),
                KeyCode::Up => selected = selected.saturating_sub(1),
                KeyCode::Down => {
                    if selected + 1 < list.tasks.len() {
                        selected += 1;
                    }
                }
                KeyCode::Char(c) => list.push_char(c),
                _ => {}
            }
        }
    }
}

fn draw(f: &mut Frame, list: &TodoList, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_field(f, list, Field::Title, "Title", chunks[0]);
    draw_field(f, list, Field::Description, "Description", chunks[1]);
    draw_tasks(f, list, selected, chunks[2]);

    let footer = Paragraph::new(
        "Enter add/save | Tab field | ^D done | ^E edit | ^X delete | ^A done all | ^L delete all | Esc quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[3]);

    if let Some(confirm) = list.confirm {
        draw_confirm(f, confirm);
    }
}

fn draw_field(f: &mut Frame, list: &TodoList, field: Field, name: &str, area: Rect) {
    let title = if field == Field::Title && list.editing.is_some() {
        format!("{} (saving edit)", name)
    } else {
        name.to_string()
    };
    let text = match field {
        Field::Title => list.draft.title.as_str(),
        Field::Description => list.draft.description.as_str(),
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if list.focus == field {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            }),
    );
    f.render_widget(input, area);
    if list.focus == field {
        f.set_cursor_position((area.x + 1 + text.len() as u16, area.y + 1));
    }
}

fn draw_tasks(f: &mut Frame, list: &TodoList, selected: usize, area: Rect) {
    let items: Vec<ListItem> = list
        .tasks
        .iter()
        .map(|t| {
            let row_style = if t.done {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    if t.done { "[x] " } else { "[ ] " },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(&t.title, row_style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" - {}", t.description), row_style),
                Span::raw(format!(" ({})", t.created_at)),
            ]))
        })
        .collect();

    let tasks = List::new(items)
        .block(Block::default().title("Tasks").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Indexed(236)).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !list.tasks.is_empty() {
        state.select(Some(selected));
    }
    f.render_stateful_widget(tasks, area, &mut state);
}

fn draw_confirm(f: &mut Frame, confirm: Confirm) {
    let (title, question) = match confirm {
        Confirm::DeleteOne(_) => ("Delete task", "Delete this task?"),
        Confirm::DeleteAll => ("Delete all", "Delete every task?"),
    };
    let area = centered_rect(40, 7, f.area());
    f.render_widget(Clear, area);
    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from(question),
        Line::from(""),
        Line::from(Span::styled(
            "y confirm / n cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(prompt, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
