use super::schema;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub relevance: i64,
    pub completeness: i64,
    pub actionability: i64,
    pub accuracy: i64,
    pub structure: i64,
    pub added_value: i64,
    pub overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUsage {
    pub source_count: i64,
    pub source_quality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmEvaluation {
    pub scores: ScoreCard,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub unique_features: Vec<String>,
    /// Only the source-grounded system reports this; absent (not null) on
    /// the other evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_usage: Option<SourceUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWinners {
    pub best_relevance: String,
    pub best_completeness: String,
    pub best_actionability: String,
    pub best_structure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectComparison {
    pub winner: String,
    pub winning_margin: f64,
    pub winning_rationale: String,
    pub category_winners: CategoryWinners,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecommendation {
    pub for_this_query: String,
    pub general_recommendation: String,
    pub optimal_combination: String,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub consensus_points: Vec<String>,
    pub differences: Vec<String>,
    pub missing_information: Vec<String>,
}

/// The public comparison contract; all nine top-level keys are always
/// present regardless of how sparse the upstream schema is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub shopping_query: String,
    /// ISO-8601, stamped when the response is built.
    pub evaluation_timestamp: String,
    pub chatgpt_evaluation: LlmEvaluation,
    pub perplexity_evaluation: LlmEvaluation,
    pub direct_comparison: DirectComparison,
    pub usage_recommendation: UsageRecommendation,
    pub summary: ComparisonSummary,
}

/// Produce the comparison contract from a schema object.
///
/// The upstream workflow does not yet emit structured comparison data, so
/// only `shopping_query` is read from the schema; everything else is the
/// fixed demo template. Real extraction, when the workflow grows up, should
/// arrive behind a capability flag rather than silently reshaping this
/// contract.
pub fn normalize_comparison(obj: &Value) -> ComparisonReport {
    let shopping_query = schema::description(obj, "shopping_query").unwrap_or("Unknown query");
    demo_report(shopping_query)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The demo fallback: a fixed template, not parsing. Placeholder scores and
/// text are part of the current public contract.
fn demo_report(shopping_query: &str) -> ComparisonReport {
    ComparisonReport {
        shopping_query: shopping_query.to_string(),
        evaluation_timestamp: Utc::now().to_rfc3339(),
        chatgpt_evaluation: LlmEvaluation {
            scores: ScoreCard {
                relevance: 8,
                completeness: 9,
                actionability: 8,
                accuracy: 9,
                structure: 8,
                added_value: 7,
                overall_score: 8.2,
            },
            strengths: strings(&[
                "Comprehensive coverage",
                "Clear structure",
                "Practical recommendations",
            ]),
            weaknesses: strings(&[
                "Could include more specific models",
                "Limited price comparisons",
            ]),
            unique_features: strings(&["Detailed spec explanations", "Future-proofing advice"]),
            source_usage: None,
        },
        perplexity_evaluation: LlmEvaluation {
            scores: ScoreCard {
                relevance: 9,
                completeness: 8,
                actionability: 9,
                accuracy: 9,
                structure: 7,
                added_value: 8,
                overall_score: 8.3,
            },
            strengths: strings(&[
                "Current market data",
                "Specific model recommendations",
                "Price tracking",
            ]),
            weaknesses: strings(&["Less detailed explanations", "Fewer alternatives"]),
            unique_features: strings(&["Real-time pricing", "Source citations"]),
            source_usage: Some(SourceUsage {
                source_count: 8,
                source_quality: "high".to_string(),
            }),
        },
        direct_comparison: DirectComparison {
            winner: "Perplexity".to_string(),
            winning_margin: 0.1,
            winning_rationale: "More current information and specific recommendations".to_string(),
            category_winners: CategoryWinners {
                best_relevance: "Perplexity".to_string(),
                best_completeness: "ChatGPT".to_string(),
                best_actionability: "Perplexity".to_string(),
                best_structure: "ChatGPT".to_string(),
            },
        },
        usage_recommendation: UsageRecommendation {
            for_this_query: "Perplexity for current pricing and availability".to_string(),
            general_recommendation: "Use ChatGPT for understanding concepts, Perplexity for current data"
                .to_string(),
            optimal_combination: "Start with ChatGPT for background, then Perplexity for specifics"
                .to_string(),
            next_steps: strings(&[
                "Check current prices on manufacturer sites",
                "Compare warranty options",
                "Read user reviews",
            ]),
        },
        summary: ComparisonSummary {
            consensus_points: strings(&[
                "Focus on dedicated GPU",
                "Minimum 16GB RAM",
                "Consider cooling",
            ]),
            differences: strings(&["Price recommendations vary", "Different brand preferences"]),
            missing_information: strings(&["Specific store availability", "Upcoming model releases"]),
        },
    }
}
