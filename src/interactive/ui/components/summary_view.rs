use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// Wrapped text pane for the generated summary.
#[derive(Default)]
pub struct SummaryView {
    summary: String,
}

impl SummaryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl Component for SummaryView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.summary.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("AI Summary"));
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
