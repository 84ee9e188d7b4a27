mod client;
mod models;

pub use client::SummaryClient;
pub use models::{RepoSummary, SearchOutcome, SummaryRequest, SummaryResponse};
