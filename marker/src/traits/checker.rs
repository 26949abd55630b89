use crate::error::MarkerError;
use util::http::FetchedResponse;

/// ResponseChecker is a strategy trait for evaluating a fetched response.
/// Each implementation decides one predicate (status code, body text, document
/// structure) over a response that was fetched successfully.
///
/// - `Ok(true)` / `Ok(false)`: the predicate held / did not hold.
/// - `Err(_)`: the predicate could not be evaluated (e.g. unparseable document).
pub trait ResponseChecker: Send + Sync {
    fn check(&self, response: &FetchedResponse) -> Result<bool, MarkerError>;
}
