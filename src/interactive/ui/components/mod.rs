pub mod repo_list;
pub mod search_bar;
pub mod summary_view;
pub mod window_select;

#[cfg(test)]
mod summary_view_test;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::interactive::ui::events::Message;

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
