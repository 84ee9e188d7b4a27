use crate::api::SearchOutcome;

/// Lookback window offered by the selector. Defaults to the smallest
/// offered window.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimeWindow {
    #[default]
    SixMonths,
    OneYear,
    ThreeYears,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [Self::SixMonths, Self::OneYear, Self::ThreeYears];

    pub fn days(self) -> u32 {
        match self {
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::ThreeYears => 1095,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
            Self::ThreeYears => "3 years",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::SixMonths => Self::OneYear,
            Self::OneYear => Self::ThreeYears,
            Self::ThreeYears => Self::SixMonths,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::SixMonths => Self::ThreeYears,
            Self::OneYear => Self::SixMonths,
            Self::ThreeYears => Self::OneYear,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.days() == days)
    }
}

/// Where the current search stands.
///
/// An error keeps the previous result set on screen; only a newer valid
/// response replaces it.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

// Fetch request and response for the worker channel. The id correlates a
// response with the search that issued it; responses carrying an old id are
// discarded instead of overwriting newer results.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub id: u64,
    pub query: String,
    pub days: u32,
}

pub struct FetchResponse {
    pub id: u64,
    pub result: Result<SearchOutcome, String>,
}
