use crate::api::SearchOutcome;
use crate::interactive::domain::models::TimeWindow;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events. Completed/Failed carry the id of the search that issued
    // the request so stale responses can be told apart from current ones.
    QueryChanged(String),
    SetTimeWindow(TimeWindow),
    CycleTimeWindow,
    CycleTimeWindowBack,
    SearchRequested,
    SearchCompleted(u64, SearchOutcome),
    SearchFailed(u64, String),

    // List navigation
    SelectRepo(usize),
}
