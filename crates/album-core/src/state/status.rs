//! Fetch status shared by the view-models.

use crate::ports::RemoteError;

/// Outcome of the most recent fetch a view-model issued.
///
/// This lives next to the data container rather than inside it: a failed
/// fetch moves the status to `Failed` while the previously loaded data
/// stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded and its data is in place.
    Ready,
    /// The last request failed; data is whatever it was before.
    Failed(RemoteError),
}

impl FetchStatus {
    /// `true` once a request has finished, successfully or not.
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error of a failed fetch.
    pub const fn error(&self) -> Option<&RemoteError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for display and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(err) => write!(f, "failed: {err}"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
