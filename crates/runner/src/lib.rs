use fibo_common::{index_from_i64, OverflowPolicy, SequenceError};
use tracing::{info, span, Level};

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Index evaluated by the demonstration run when the caller provides none.
pub const DEFAULT_INDEX: i64 = 7;

/// Errors that can occur while evaluating a requested position
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Sequence evaluation failed: {0}")]
    Sequence(#[from] SequenceError),
}

/// Options for evaluating a position
#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
    /// How the walk treats values that outgrow the 64-bit representation.
    pub overflow: OverflowPolicy,
}

/// Result of evaluating a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOutput {
    /// The value at the requested position
    pub value: u64,
    /// Number of additions the iterative walk performed
    pub additions: u64,
}

/// Evaluates the Fibonacci sequence at a 1-based position.
///
/// The index arrives in the signed command-line domain and is validated
/// here; the overflow policy in `options` selects between the checked,
/// saturating and wrapping walks.
///
/// ## Arguments
///
/// * `index` - Requested 1-based position; anything below 1 is rejected
/// * `options` - Evaluation options (overflow policy)
///
/// ## Errors
///
/// Returns a [`RunnerError::Sequence`] if the index is not positive or if
/// the checked walk overflows the 64-bit representation.
pub fn run_fibonacci(index: i64, options: RunnerOptions) -> Result<RunnerOutput> {
    let _span = span!(Level::INFO, "run_fibonacci").entered();

    let index = index_from_i64(index)?;
    let value = options.overflow.nth(index)?;
    let additions = index.saturating_sub(2);

    info!(
        "evaluated index {} to {} with {} additions",
        index, value, additions
    );

    Ok(RunnerOutput { value, additions })
}
