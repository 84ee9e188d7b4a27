//! Constants for the interactive client.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the time-window selector row
pub const WINDOW_SELECT_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation in the repository list
pub const PAGE_SIZE: usize = 10;

/// Share of the content area given to the summary pane, in percent
pub const SUMMARY_PANE_PERCENT: u16 = 40;
