pub mod api;
pub mod interactive;
pub mod logging;
pub mod output;

pub use api::{RepoSummary, SearchOutcome, SummaryClient};
pub use interactive::InteractiveApp;
pub use interactive::domain::models::TimeWindow;
