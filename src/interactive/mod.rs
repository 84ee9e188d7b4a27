use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub mod constants;
pub mod domain;
pub mod ui;


use self::constants::*;
use self::domain::models::{FetchRequest, FetchResponse, TimeWindow};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};
use crate::api::SummaryClient;

pub struct InteractiveApp {
    state: AppState,
    renderer: Renderer,
    client: Arc<SummaryClient>,
    request_sender: Option<Sender<FetchRequest>>,
    response_receiver: Option<Receiver<FetchResponse>>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
}

impl InteractiveApp {
    pub fn new(client: SummaryClient, query: Option<String>, window: TimeWindow) -> Self {
        let mut state = AppState::new();
        if let Some(query) = query {
            state.search.query = query;
        }
        state.search.window = window;

        Self {
            state,
            renderer: Renderer::new(),
            client: Arc::new(client),
            request_sender: None,
            response_receiver: None,
            last_ctrl_c_press: None,
            message_timer: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        // Start the fetch worker thread
        let (tx, rx) = self.start_fetch_worker();
        self.request_sender = Some(tx);
        self.response_receiver = Some(rx);

        // A query given on the command line triggers an immediate search.
        if !self.state.search.query.is_empty() {
            self.handle_message(Message::SearchRequested);
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Check for fetch results. Responses from superseded searches are
            // dropped here and again inside AppState::update.
            if let Some(receiver) = &self.response_receiver {
                if let Ok(response) = receiver.try_recv() {
                    if response.id == self.state.search.current_search_id {
                        let msg = match response.result {
                            Ok(outcome) => Message::SearchCompleted(response.id, outcome),
                            Err(reason) => Message::SearchFailed(response.id, reason),
                        };
                        self.handle_message(msg);
                    }
                }
            }

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(MESSAGE_CLEAR_DELAY_MS) {
                    self.message_timer = None;
                    self.execute_command(Command::ClearMessage);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let should_quit = self.handle_input(key)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.execute_command(Command::ShowMessage(
                "Press Ctrl+C again to exit".to_string(),
            ));
            return Ok(false);
        }

        let message = match key.code {
            KeyCode::Esc => return Ok(true),
            // The trigger carries no parameters; the store's current query
            // and window are read when the request is dispatched.
            KeyCode::Enter => Some(Message::SearchRequested),
            KeyCode::Tab | KeyCode::BackTab => {
                self.renderer.get_window_select_mut().handle_key(key)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.get_repo_list_mut().handle_key(key)
            }
            // Home/End jump the list selection while results are shown and
            // fall through to query editing otherwise.
            KeyCode::Home | KeyCode::End if !self.renderer.get_repo_list_mut().is_empty() => {
                self.renderer.get_repo_list_mut().handle_key(key)
            }
            KeyCode::Char('p' | 'n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.renderer.get_repo_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                self.execute_search();
            }
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
                self.message_timer = Some(Instant::now());
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
        }
    }

    fn execute_search(&mut self) {
        if let Some(sender) = &self.request_sender {
            let request = FetchRequest {
                id: self.state.search.current_search_id,
                query: self.state.search.query.clone(),
                days: self.state.search.window.days(),
            };
            debug!(
                id = request.id,
                query = %request.query,
                days = request.days,
                "dispatching search"
            );
            let _ = sender.send(request);
        }
    }

    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let client = self.client.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = client
                    .fetch_summary(&request.query, request.days)
                    .map_err(|e| format!("{e:#}"));
                if let Err(reason) = &result {
                    warn!(id = request.id, %reason, "search request failed");
                }
                let _ = response_tx.send(FetchResponse {
                    id: request.id,
                    result,
                });
            }
        });

        (request_tx, response_rx)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn handle_message_for_test(&mut self, message: Message) {
        self.handle_message(message);
    }
}
