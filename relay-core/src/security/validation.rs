use crate::error::{RelayError, Result};

/// Reject a missing or empty query before anything leaves the process.
///
/// Nothing stricter belongs here: the public contract only promises a 400
/// for absent input, and whitespace-only queries are accepted.
pub fn validate_query(query: Option<&str>) -> Result<&str> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(RelayError::EmptyQuery),
    }
}
