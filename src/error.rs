use thiserror::Error;

use crate::config::Scope;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal conditions that abort a run before anything is rendered.
///
/// A pod bound to an unknown node is deliberately absent: it is shown in the
/// report with a highlighted name instead.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("no workload units found in scope {scope}")]
    ScopeEmpty { scope: Scope },

    #[error("no hosts found in cluster")]
    NoHosts,

    #[error("failed to list {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: BoxError,
    },
}

impl MatrixError {
    pub fn transport(resource: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport { resource, source: source.into() }
    }
}
