use chrono::{Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::interactive::domain::models::TimeWindow;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// One-line selector showing the three time window choices.
#[derive(Default)]
pub struct WindowSelect {
    window: TimeWindow,
}

impl WindowSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
    }
}

impl Component for WindowSelect {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw("Window: ")];
        for window in TimeWindow::ALL {
            if window == self.window {
                spans.push(Span::styled(
                    format!("[{}]", window.label()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", window.label()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let since = Utc::now() - Duration::days(i64::from(self.window.days()));
        spans.push(Span::styled(
            format!("  since {} | Tab: change window", since.format("%Y-%m-%d")),
            Style::default().fg(Color::DarkGray),
        ));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab => Some(Message::CycleTimeWindow),
            KeyCode::BackTab => Some(Message::CycleTimeWindowBack),
            _ => None,
        }
    }
}
