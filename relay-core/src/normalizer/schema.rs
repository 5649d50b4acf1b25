//! Lookups over a loosely-structured schema object: a mapping from field
//! name to a descriptor that may carry `description` text, an `enum` list
//! of candidates, or nothing usable at all.
//!
//! Every helper returns None for missing fields, missing sub-keys, and
//! wrong-typed values, so callers degrade to their documented fallbacks
//! instead of erroring. A non-object schema behaves as an all-absent one.

use serde_json::Value;

/// The field's `description` text, if present and a string.
pub fn description<'a>(schema: &'a Value, field: &str) -> Option<&'a str> {
    schema.get(field)?.get("description")?.as_str()
}

/// The first candidate in the field's `enum` list, if any.
pub fn enum_first<'a>(schema: &'a Value, field: &str) -> Option<&'a str> {
    schema.get(field)?.get("enum")?.as_array()?.first()?.as_str()
}
