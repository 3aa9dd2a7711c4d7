//! Correlation identifier for a single request.
//!
//! While a request is being served its identifier sits in a Tokio
//! task-local, so [`normalize`](super::normalize) and log statements read it
//! with [`TraceId::current`] rather than receiving it as an argument.
//! Spawned tasks start without one; run their futures through
//! [`TraceId::scope`] to carry it over.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

/// Response header echoing the identifier; error envelopes repeat it as
/// `traceId`.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Random v4 UUID naming one request.
///
/// # Examples
/// ```
/// use tripline::TraceId;
///
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request running on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `trace_id` as the current identifier.
    ///
    /// Scopes nest: the innermost one wins and the outer identifier is back
    /// in place once `fut` completes.
    pub async fn scope<Fut: Future>(trace_id: TraceId, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl From<Uuid> for TraceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
