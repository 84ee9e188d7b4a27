use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// Single-line topic input with inline cursor rendering.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        // Keep the cursor where the user left it unless the text actually
        // changed under us.
        if self.query != query {
            self.cursor_position = query.chars().count();
            self.query = query;
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .chars()
            .take(char_pos)
            .map(char::len_utf8)
            .sum()
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chars: Vec<char> = self.query.chars().collect();
        let before: String = chars[..self.cursor_position.min(chars.len())]
            .iter()
            .collect();
        let (at_cursor, after): (String, String) = if self.cursor_position < chars.len() {
            (
                chars[self.cursor_position].to_string(),
                chars[self.cursor_position + 1..].iter().collect(),
            )
        } else {
            (" ".to_string(), String::new())
        };

        let mut title = String::from("Topic");
        if self.is_loading {
            title.push_str(" [searching...]");
        }
        if let Some(message) = &self.message {
            title.push_str(&format!(" - {message}"));
        }

        let line = Line::from(vec![
            Span::styled(before, Style::default().fg(Color::Yellow)),
            Span::styled(
                at_cursor,
                Style::default().bg(Color::White).fg(Color::Black),
            ),
            Span::styled(after, Style::default().fg(Color::Yellow)),
        ]);
        let input = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.cursor_position = 0,
                KeyCode::Char('e') => self.cursor_position = self.query.chars().count(),
                KeyCode::Char('u') => {
                    let byte_pos = self.byte_index(self.cursor_position);
                    self.query.drain(..byte_pos);
                    self.cursor_position = 0;
                    return Some(Message::QueryChanged(self.query.clone()));
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                Some(Message::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_index(self.cursor_position - 1);
                    self.query.remove(byte_pos);
                    self.cursor_position -= 1;
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.query.chars().count() {
                    let byte_pos = self.byte_index(self.cursor_position);
                    self.query.remove(byte_pos);
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
