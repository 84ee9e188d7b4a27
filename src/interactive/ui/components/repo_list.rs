use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::api::RepoSummary;
use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

// Each entry renders as two lines: name plus description.
const ROWS_PER_ENTRY: usize = 2;

/// Scrollable list of matching repositories.
#[derive(Default)]
pub struct RepoList {
    repos: Vec<RepoSummary>,
    selected_index: usize,
    scroll_offset: usize,
}

impl RepoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_repos(&mut self, repos: Vec<RepoSummary>) {
        if self.repos != repos {
            self.scroll_offset = 0;
            if self.selected_index >= repos.len() {
                self.selected_index = 0;
            }
            self.repos = repos;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.repos.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_repo(&self) -> Option<&RepoSummary> {
        self.repos.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.repos.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    fn page_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
            true
        } else {
            false
        }
    }

    fn page_down(&mut self) -> bool {
        if self.repos.is_empty() || self.selected_index + 1 >= self.repos.len() {
            return false;
        }
        self.selected_index = (self.selected_index + PAGE_SIZE).min(self.repos.len() - 1);
        true
    }

    fn jump_to_first(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    fn jump_to_last(&mut self) -> bool {
        match self.repos.len().checked_sub(1) {
            Some(last) if self.selected_index != last => {
                self.selected_index = last;
                true
            }
            _ => false,
        }
    }

    fn adjust_scroll_offset(&mut self, available_height: usize) {
        let visible_count = (available_height / ROWS_PER_ENTRY).max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }
}

impl Component for RepoList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.repos.is_empty() {
            let empty = Paragraph::new("No repositories")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(Block::default().borders(Borders::ALL).title("Repositories"));
            f.render_widget(empty, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        self.adjust_scroll_offset(inner_height);
        let visible_count = (inner_height / ROWS_PER_ENTRY).max(1);

        let items: Vec<ListItem> = self
            .repos
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_count)
            .map(|(i, repo)| {
                let description = repo
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or("-");
                let mut item = ListItem::new(vec![
                    Line::styled(
                        repo.full_name.clone(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        format!("  {description}"),
                        Style::default().fg(Color::Gray),
                    ),
                ]);
                if i == self.selected_index {
                    item = item.style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                item
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Repositories ({})", self.repos.len())),
        );
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let moved = match (key.code, key.modifiers) {
            (KeyCode::Up, _) => self.move_up(),
            (KeyCode::Down, _) => self.move_down(),
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => self.move_up(),
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => self.move_down(),
            (KeyCode::PageUp, _) => self.page_up(),
            (KeyCode::PageDown, _) => self.page_down(),
            (KeyCode::Home, _) => self.jump_to_first(),
            (KeyCode::End, _) => self.jump_to_last(),
            _ => false,
        };
        if moved {
            Some(Message::SelectRepo(self.selected_index))
        } else {
            None
        }
    }
}
