use thiserror::Error;

/// Everything that can stop an invocation. The command terminates on the
/// first error, message on stderr, non-zero exit.
#[derive(Debug, Error)]
pub enum IlogsError {
    #[error("pod filter is required")]
    Usage,

    #[error("failed to resolve cluster config: {0}")]
    Config(#[source] kube::config::InferConfigError),

    /// Listing call failure, message propagated verbatim from the client.
    #[error(transparent)]
    Transport(#[from] kube::Error),

    #[error("no pods were found in current namespace")]
    EmptyScope,

    #[error("no pods were found with filter: {0}")]
    NoMatch(String),

    #[error("pod selection failed: {0}")]
    Prompt(#[source] dialoguer::Error),
}
