use crate::api::RepoSummary;
use crate::interactive::domain::models::{FetchPhase, TimeWindow};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

pub struct AppState {
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub window: TimeWindow,
    pub repos: Vec<RepoSummary>,
    pub summary: String,
    pub phase: FetchPhase,
    pub current_search_id: u64,
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SearchState {
                query: String::new(),
                window: TimeWindow::default(),
                repos: Vec::new(),
                summary: String::new(),
                phase: FetchPhase::Idle,
                current_search_id: 0,
                selected_index: 0,
            },
            ui: UiState { message: None },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.search.phase == FetchPhase::Loading
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SetTimeWindow(window) => {
                self.search.window = window;
                Command::None
            }
            Message::CycleTimeWindow => {
                self.search.window = self.search.window.next();
                Command::None
            }
            Message::CycleTimeWindowBack => {
                self.search.window = self.search.window.prev();
                Command::None
            }
            Message::SearchRequested => {
                self.search.current_search_id += 1;
                self.search.phase = FetchPhase::Loading;
                self.ui.message = None;
                Command::ExecuteSearch
            }
            Message::SearchCompleted(id, outcome) => {
                if id != self.search.current_search_id {
                    // Response from a superseded search; a newer request is
                    // either in flight or already applied. Drop it.
                    return Command::None;
                }
                self.search.repos = outcome.repos;
                self.search.summary = outcome.summary;
                self.search.selected_index = 0;
                self.search.phase = FetchPhase::Loaded;
                self.ui.message = None;
                Command::None
            }
            Message::SearchFailed(id, reason) => {
                if id != self.search.current_search_id {
                    return Command::None;
                }
                // The result slots stay untouched so prior results remain
                // visible; only the phase records the failure.
                self.search.phase = FetchPhase::Error(reason.clone());
                Command::ShowMessage(format!("search failed: {reason}"))
            }
            Message::SelectRepo(index) => {
                if index < self.search.repos.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
        }
    }
}
