use serde::Serialize;

/// Which retrieval strategy is currently in force.
///
/// `Client` is the rest state: the search box filters the already-loaded
/// page in memory, and no request leaves the machine while typing. The
/// machine enters `Server` only through an explicit submit with a
/// non-empty term, and falls back to `Client` as soon as the term is
/// cleared (or on a caller-initiated reset). There are no other
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Filter the loaded page in memory; typing never fetches.
    Client,
    /// A committed term constrains the whole dataset server-side.
    Server,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
        }
    }
}
