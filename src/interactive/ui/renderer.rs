use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::interactive::constants::{SEARCH_BAR_HEIGHT, SUMMARY_PANE_PERCENT, WINDOW_SELECT_HEIGHT};
use crate::interactive::domain::models::FetchPhase;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::repo_list::RepoList;
use crate::interactive::ui::components::search_bar::SearchBar;
use crate::interactive::ui::components::summary_view::SummaryView;
use crate::interactive::ui::components::window_select::WindowSelect;

/// Owns the UI components and syncs them from the application state on every
/// frame before drawing.
#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    window_select: WindowSelect,
    repo_list: RepoList,
    summary_view: SummaryView,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(WINDOW_SELECT_HEIGHT),
                Constraint::Min(0),
            ])
            .split(f.area());

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_loading(state.is_loading());
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.render(f, chunks[0]);

        self.window_select.set_window(state.search.window);
        self.window_select.render(f, chunks[1]);

        self.render_results(f, chunks[2], state);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let has_repos = !state.search.repos.is_empty();
        let has_summary = !state.search.summary.is_empty();

        match (has_repos, has_summary) {
            (true, true) => {
                let panes = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Percentage(100 - SUMMARY_PANE_PERCENT),
                        Constraint::Percentage(SUMMARY_PANE_PERCENT),
                    ])
                    .split(area);

                self.sync_repo_list(state);
                self.repo_list.render(f, panes[0]);

                self.summary_view.set_summary(state.search.summary.clone());
                self.summary_view.render(f, panes[1]);
            }
            (true, false) => {
                self.sync_repo_list(state);
                self.repo_list.render(f, area);
            }
            (false, true) => {
                self.summary_view.set_summary(state.search.summary.clone());
                self.summary_view.render(f, area);
            }
            (false, false) => {
                self.render_placeholder(f, area, state);
            }
        }
    }

    fn sync_repo_list(&mut self, state: &AppState) {
        self.repo_list.set_repos(state.search.repos.clone());
        self.repo_list
            .set_selected_index(state.search.selected_index);
    }

    fn render_placeholder(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let text = match &state.search.phase {
            FetchPhase::Idle => "Type a topic and press Enter to search".to_string(),
            FetchPhase::Loading => "Searching...".to_string(),
            FetchPhase::Loaded => "No matching repositories".to_string(),
            FetchPhase::Error(reason) => format!("Search failed: {reason}"),
        };

        let placeholder = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_window_select_mut(&mut self) -> &mut WindowSelect {
        &mut self.window_select
    }

    pub fn get_repo_list_mut(&mut self) -> &mut RepoList {
        &mut self.repo_list
    }
}
