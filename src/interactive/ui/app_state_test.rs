#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::commands::Command;
    use super::super::events::Message;
    use crate::api::{RepoSummary, SearchOutcome};
    use crate::interactive::domain::models::{FetchPhase, TimeWindow};

    fn create_test_state() -> AppState {
        AppState::new()
    }

    fn create_test_repo(id: u64, full_name: &str) -> RepoSummary {
        RepoSummary {
            id,
            full_name: full_name.to_string(),
            description: Some(format!("Description of {full_name}")),
        }
    }

    fn create_test_outcome(repos: Vec<RepoSummary>, summary: &str) -> SearchOutcome {
        SearchOutcome {
            repos,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = create_test_state();

        assert_eq!(state.search.query, "");
        assert_eq!(state.search.window, TimeWindow::SixMonths);
        assert!(state.search.repos.is_empty());
        assert_eq!(state.search.summary, "");
        assert_eq!(state.search.phase, FetchPhase::Idle);
        assert_eq!(state.search.current_search_id, 0);
        assert_eq!(state.search.selected_index, 0);
        assert_eq!(state.ui.message, None);
    }

    #[test]
    fn test_query_changed_updates_query_only() {
        let mut state = create_test_state();
        state.search.window = TimeWindow::OneYear;
        state.search.repos = vec![create_test_repo(1, "acme/widget")];
        state.search.summary = "prior summary".to_string();

        let command = state.update(Message::QueryChanged("robot".to_string()));

        assert_eq!(state.search.query, "robot");
        // Editing the query must not touch the window or the result set.
        assert_eq!(state.search.window, TimeWindow::OneYear);
        assert_eq!(state.search.repos.len(), 1);
        assert_eq!(state.search.summary, "prior summary");
        assert_eq!(command, Command::None);
    }

    #[test]
    fn test_window_change_leaves_query_and_results_alone() {
        let mut state = create_test_state();
        state.search.query = "robot".to_string();
        state.search.repos = vec![create_test_repo(1, "acme/widget")];
        state.search.summary = "prior summary".to_string();

        let command = state.update(Message::CycleTimeWindow);

        assert_eq!(state.search.window, TimeWindow::OneYear);
        assert_eq!(state.search.query, "robot");
        assert_eq!(state.search.repos.len(), 1);
        assert_eq!(state.search.summary, "prior summary");
        assert_eq!(command, Command::None);
    }

    #[test]
    fn test_cycle_window_forward_and_back() {
        let mut state = create_test_state();

        state.update(Message::CycleTimeWindow);
        assert_eq!(state.search.window, TimeWindow::OneYear);
        state.update(Message::CycleTimeWindow);
        assert_eq!(state.search.window, TimeWindow::ThreeYears);
        state.update(Message::CycleTimeWindow);
        assert_eq!(state.search.window, TimeWindow::SixMonths);

        state.update(Message::CycleTimeWindowBack);
        assert_eq!(state.search.window, TimeWindow::ThreeYears);
    }

    #[test]
    fn test_set_time_window() {
        let mut state = create_test_state();

        let command = state.update(Message::SetTimeWindow(TimeWindow::ThreeYears));

        assert_eq!(state.search.window, TimeWindow::ThreeYears);
        assert_eq!(command, Command::None);
    }

    #[test]
    fn test_search_requested_increments_id_and_enters_loading() {
        let mut state = create_test_state();

        let command = state.update(Message::SearchRequested);

        assert_eq!(state.search.current_search_id, 1);
        assert_eq!(state.search.phase, FetchPhase::Loading);
        assert!(state.is_loading());
        assert_eq!(command, Command::ExecuteSearch);

        let command = state.update(Message::SearchRequested);
        assert_eq!(state.search.current_search_id, 2);
        assert_eq!(command, Command::ExecuteSearch);
    }

    #[test]
    fn test_search_completed_replaces_both_slots() {
        let mut state = create_test_state();
        state.search.repos = vec![create_test_repo(99, "old/repo")];
        state.search.summary = "old summary".to_string();
        state.update(Message::SearchRequested);

        let outcome = create_test_outcome(
            vec![
                create_test_repo(1, "acme/robot-arm"),
                create_test_repo(2, "acme/robot-leg"),
            ],
            "Robot arm control is trending.",
        );
        let command = state.update(Message::SearchCompleted(1, outcome));

        // Full replace, no merge with the previous result set.
        assert_eq!(state.search.repos.len(), 2);
        assert_eq!(state.search.repos[0].full_name, "acme/robot-arm");
        assert_eq!(state.search.summary, "Robot arm control is trending.");
        assert_eq!(state.search.selected_index, 0);
        assert_eq!(state.search.phase, FetchPhase::Loaded);
        assert_eq!(state.ui.message, None);
        assert_eq!(command, Command::None);
    }

    #[test]
    fn test_empty_result_set_replaces_prior_results() {
        let mut state = create_test_state();
        state.search.repos = vec![create_test_repo(1, "acme/widget")];
        state.search.summary = "prior".to_string();
        state.update(Message::SearchRequested);

        state.update(Message::SearchCompleted(1, create_test_outcome(vec![], "")));

        assert!(state.search.repos.is_empty());
        assert_eq!(state.search.summary, "");
        assert_eq!(state.search.phase, FetchPhase::Loaded);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = create_test_state();

        // Two rapid triggers: request 1 then request 2.
        state.update(Message::SearchRequested);
        state.update(Message::SearchRequested);
        assert_eq!(state.search.current_search_id, 2);

        // Request 2's response arrives first and wins.
        let b = create_test_outcome(vec![create_test_repo(2, "acme/b")], "B");
        state.update(Message::SearchCompleted(2, b));
        assert_eq!(state.search.repos[0].full_name, "acme/b");
        assert_eq!(state.search.summary, "B");

        // Request 1's response arrives late and must not overwrite.
        let a = create_test_outcome(vec![create_test_repo(1, "acme/a")], "A");
        let command = state.update(Message::SearchCompleted(1, a));

        assert_eq!(command, Command::None);
        assert_eq!(state.search.repos[0].full_name, "acme/b");
        assert_eq!(state.search.summary, "B");
        assert_eq!(state.search.phase, FetchPhase::Loaded);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = create_test_state();

        state.update(Message::SearchRequested);
        state.update(Message::SearchRequested);

        let b = create_test_outcome(vec![create_test_repo(2, "acme/b")], "B");
        state.update(Message::SearchCompleted(2, b));

        // A failure belonging to the superseded request changes nothing.
        let command = state.update(Message::SearchFailed(1, "timed out".to_string()));

        assert_eq!(command, Command::None);
        assert_eq!(state.search.phase, FetchPhase::Loaded);
        assert_eq!(state.search.repos.len(), 1);
    }

    #[test]
    fn test_failure_preserves_prior_results() {
        let mut state = create_test_state();
        state.search.repos = vec![create_test_repo(1, "acme/widget")];
        state.search.summary = "prior summary".to_string();
        state.update(Message::SearchRequested);

        let command = state.update(Message::SearchFailed(1, "connection refused".to_string()));

        assert_eq!(
            state.search.phase,
            FetchPhase::Error("connection refused".to_string())
        );
        assert_eq!(state.search.repos.len(), 1);
        assert_eq!(state.search.summary, "prior summary");
        assert_eq!(
            command,
            Command::ShowMessage("search failed: connection refused".to_string())
        );
    }

    #[test]
    fn test_select_repo_is_clamped_to_bounds() {
        let mut state = create_test_state();
        state.search.repos = vec![
            create_test_repo(1, "a/a"),
            create_test_repo(2, "b/b"),
            create_test_repo(3, "c/c"),
        ];

        state.update(Message::SelectRepo(2));
        assert_eq!(state.search.selected_index, 2);

        // Out-of-bounds selection is ignored.
        state.update(Message::SelectRepo(3));
        assert_eq!(state.search.selected_index, 2);

        state.update(Message::SelectRepo(0));
        assert_eq!(state.search.selected_index, 0);
    }
}
