use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Spend ceiling, in whole dollars, attached to every answer request.
pub const ANSWER_MAX_PRICE: u32 = 40;

/// Breadth hint the answer endpoint searches with.
pub const ANSWER_SEARCH_TYPE: &str = "all";

pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Body of `POST /search`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub max_num_results: u32,
    pub search_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_sources: Vec<String>,
}

/// Body of `POST /answer`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnswerRequest {
    pub query: String,
    pub search_type: String,
    pub data_max_price: u32,
}

impl AnswerRequest {
    pub fn new(query: String) -> AnswerRequest {
        AnswerRequest {
            query,
            search_type: ANSWER_SEARCH_TYPE.to_string(),
            data_max_price: ANSWER_MAX_PRICE,
        }
    }
}

/// A single hit, reduced to the fields we print. Values pass through as the
/// API sent them; anything else on the hit is dropped on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub url: Value,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub source: Value,
    #[serde(default)]
    pub relevance_score: Value,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_deduction_dollars: Value,
}

impl SearchResponse {
    pub fn cost(&self) -> Value {
        or_zero(Some(&self.total_deduction_dollars))
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AnswerResponse {
    #[serde(default)]
    pub contents: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_results: Vec<Value>,
    /// Usually `{"total_deduction_dollars": ..}`; any other shape counts as no cost.
    #[serde(default)]
    pub cost: Value,
}

impl AnswerResponse {
    pub fn cost(&self) -> Value {
        or_zero(self.cost.get("total_deduction_dollars"))
    }
}

/// Absent, `null`, `false`, `0` and `""` all report as a cost of `0`.
fn or_zero(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Value::from(0),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Value::from(0),
        Some(Value::String(s)) if s.is_empty() => Value::from(0),
        Some(v) => v.clone(),
    }
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
