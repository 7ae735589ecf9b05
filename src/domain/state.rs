//! Application state classification.
//!
//! Maps the `state` string reported by an Atlassian `/status` endpoint to
//! a fixed numeric code and human description. The mapping is static and
//! total: every input string lands on exactly one variant.

use std::fmt;

/// Lifecycle state of the monitored Atlassian application.
///
/// `Empty` covers a blank or undecodable response body (the web
/// application failed to deploy). `Unknown` keeps the raw string so it can
/// still be surfaced as a metric label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppState {
    Running,
    Error,
    Starting,
    Stopping,
    FirstRun,
    Empty,
    Unknown(String),
}

impl AppState {
    /// Classify a raw `state` value. Matching is exact and case-sensitive.
    pub fn from_state(state: &str) -> Self {
        match state {
            "RUNNING" => Self::Running,
            "ERROR" => Self::Error,
            "STARTING" => Self::Starting,
            "STOPPING" => Self::Stopping,
            "FIRST_RUN" => Self::FirstRun,
            "" => Self::Empty,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Numeric code exported as the `_state` gauge value.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Running => 0,
            Self::Error => 1,
            Self::Starting => 2,
            Self::Stopping => 3,
            Self::FirstRun => 4,
            Self::Empty => 5,
            Self::Unknown(_) => 6,
        }
    }

    /// Human description exported as the `description` label.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Running => "Running normally",
            Self::Error => "An error state",
            Self::Starting => "Application is starting",
            Self::Stopping => "Application is stopping",
            Self::FirstRun => {
                "Application is running for the first time and has not yet been configured"
            }
            Self::Empty => {
                "Application failed to start up in an unexpected way (the web application failed to deploy)"
            }
            Self::Unknown(_) => "Unknown Response, go look at the Atlassian Application",
        }
    }

    /// Value of the `state` label: the string the application reported.
    pub fn label(&self) -> &str {
        match self {
            Self::Running => "RUNNING",
            Self::Error => "ERROR",
            Self::Starting => "STARTING",
            Self::Stopping => "STOPPING",
            Self::FirstRun => "FIRST_RUN",
            Self::Empty => "",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Code and description for a raw state string.
pub fn classify(state: &str) -> (u8, &'static str) {
    let state = AppState::from_state(state);
    (state.code(), state.description())
}
