pub mod comparison;
pub mod evaluation;
pub mod schema;
pub mod text;

pub use comparison::{normalize_comparison, ComparisonReport};
pub use evaluation::{normalize_evaluation, QueryEvaluation};

use serde_json::Value;

/// A decoded webhook payload is either already in its public shape, or
/// wrapped in a one-element array whose element carries the schema object
/// under an `output` key.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// The `output` schema object, still untyped. Which normalizer consumes
    /// it is decided by the calling endpoint, never by content.
    Wrapped(Value),
    /// Already final; passed through to the client unchanged.
    Final(Value),
}

/// Classify a raw upstream payload. Unrecognized shapes are never an error:
/// the upstream contract is loose, so anything that is not the known wrapper
/// is treated as final.
pub fn classify(raw: Value) -> ResponseShape {
    match raw {
        Value::Array(mut items) => {
            let output = items
                .first_mut()
                .and_then(|first| first.as_object_mut())
                .and_then(|obj| obj.remove("output"));
            match output {
                Some(schema) => ResponseShape::Wrapped(schema),
                None => ResponseShape::Final(Value::Array(items)),
            }
        }
        other => ResponseShape::Final(other),
    }
}
