use super::{schema, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback when a score field carries no parseable number.
pub const DEFAULT_SCORE: i64 = 5;

/// The public query-evaluation contract. Every key is always present, with
/// its documented fallback when the source schema is missing the field, so
/// downstream consumers never have to null-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryEvaluation {
    pub specificity_score: i64,
    pub quality_score: i64,
    pub category: String,
    pub subcategory: String,
    pub improvement_advice: String,
    pub improved_query_suggestion: String,
    pub missing_information: Vec<String>,
    pub strengths: Vec<String>,
    pub search_intent: String,
}

/// Map a schema object describing one query's evaluation into the stable
/// contract. Pure; never errors — malformed input degrades field by field.
pub fn normalize_evaluation(obj: &Value) -> QueryEvaluation {
    QueryEvaluation {
        specificity_score: score_field(obj, "specificity_score"),
        quality_score: score_field(obj, "quality_score"),
        category: text_field(obj, "category", "General"),
        subcategory: text_field(obj, "subcategory", ""),
        improvement_advice: text_field(obj, "improvement_advice", ""),
        improved_query_suggestion: text_field(obj, "improved_query_suggestion", ""),
        missing_information: list_field(obj, "missing_information"),
        strengths: list_field(obj, "strengths"),
        search_intent: intent_field(obj),
    }
}

fn score_field(obj: &Value, field: &str) -> i64 {
    schema::description(obj, field)
        .and_then(text::first_number)
        .unwrap_or(DEFAULT_SCORE)
}

fn text_field(obj: &Value, field: &str, fallback: &str) -> String {
    schema::description(obj, field).unwrap_or(fallback).to_string()
}

fn list_field(obj: &Value, field: &str) -> Vec<String> {
    schema::description(obj, field)
        .map(text::split_list)
        .unwrap_or_default()
}

// Description wins over enum; an enum's first candidate is the fallback
// before "unclear". Index 0 is deliberate, not a ranking.
fn intent_field(obj: &Value) -> String {
    schema::description(obj, "search_intent")
        .or_else(|| schema::enum_first(obj, "search_intent"))
        .unwrap_or("unclear")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_take_first_digit_run() {
        let obj = json!({
            "specificity_score": {"description": "Score: 7/10, confidence 90%"},
            "quality_score": {"description": "Score is 3 here"},
        });
        let result = normalize_evaluation(&obj);
        assert_eq!(result.specificity_score, 7);
        assert_eq!(result.quality_score, 3);
    }

    #[test]
    fn empty_schema_yields_all_fallbacks() {
        let result = normalize_evaluation(&json!({}));
        assert_eq!(result.specificity_score, DEFAULT_SCORE);
        assert_eq!(result.quality_score, DEFAULT_SCORE);
        assert_eq!(result.category, "General");
        assert_eq!(result.subcategory, "");
        assert_eq!(result.improvement_advice, "");
        assert_eq!(result.improved_query_suggestion, "");
        assert!(result.missing_information.is_empty());
        assert!(result.strengths.is_empty());
        assert_eq!(result.search_intent, "unclear");
    }

    #[test]
    fn score_without_digits_falls_back() {
        let obj = json!({"specificity_score": {"description": "quite specific"}});
        assert_eq!(normalize_evaluation(&obj).specificity_score, DEFAULT_SCORE);
    }

    #[test]
    fn list_fields_split_on_commas() {
        let obj = json!({
            "missing_information": {"description": "budget, brand ,size,, color"},
            "strengths": {"description": "clear"},
        });
        let result = normalize_evaluation(&obj);
        assert_eq!(result.missing_information, vec!["budget", "brand", "size", "color"]);
        assert_eq!(result.strengths, vec!["clear"]);
    }

    #[test]
    fn intent_prefers_description_over_enum() {
        let obj = json!({
            "search_intent": {
                "description": "transactional",
                "enum": ["informational", "navigational"],
            }
        });
        assert_eq!(normalize_evaluation(&obj).search_intent, "transactional");
    }

    #[test]
    fn intent_enum_fallback_is_first_candidate() {
        let obj = json!({"search_intent": {"enum": ["informational", "transactional"]}});
        assert_eq!(normalize_evaluation(&obj).search_intent, "informational");
    }

    #[test]
    fn intent_empty_descriptor_is_unclear() {
        let obj = json!({"search_intent": {}});
        assert_eq!(normalize_evaluation(&obj).search_intent, "unclear");
    }

    #[test]
    fn non_object_schema_yields_fallbacks() {
        let result = normalize_evaluation(&json!(42));
        assert_eq!(result.category, "General");
        assert_eq!(result.search_intent, "unclear");
    }

    #[test]
    fn serialized_output_keeps_every_key() {
        let value = serde_json::to_value(normalize_evaluation(&json!({}))).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "specificity_score",
            "quality_score",
            "category",
            "subcategory",
            "improvement_advice",
            "improved_query_suggestion",
            "missing_information",
            "strengths",
            "search_intent",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
            assert!(!obj[key].is_null(), "null key {key}");
        }
    }
}
