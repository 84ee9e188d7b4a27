use serde::{Deserialize, Serialize};

/// Request body for `POST /summary`.
///
/// `days` is always serialized as a number. The backend accepts a string too,
/// but the numeric form is the intended semantics of the field.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryRequest<'a> {
    pub query: &'a str,
    pub days: u32,
}

/// One repository entry in a result set.
///
/// The backend forwards entire search-API items, so deserialization ignores
/// every field beyond the three the client displays. `id` must be unique
/// within one result set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepoSummary {
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Success body of `POST /summary`. A missing `repos` or `summary` field is a
/// deserialization error, not a silently-empty result.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryResponse {
    pub repos: Vec<RepoSummary>,
    pub summary: String,
}

/// The paired (repository list, summary text) produced by one completed
/// search. Both fields are replaced together; there is never a partial mix of
/// two invocations' results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    pub repos: Vec<RepoSummary>,
    pub summary: String,
}

impl From<SummaryResponse> for SearchOutcome {
    fn from(body: SummaryResponse) -> Self {
        Self {
            repos: body.repos,
            summary: body.summary,
        }
    }
}
