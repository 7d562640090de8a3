//! Shapes printed to the console.

use serde::Serialize;
use serde_json::Value;

use crate::data_models::{AnswerResponse, SearchResponse, SearchResult};
use crate::search_type::SearchType;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Envelope {
    Search(SearchEnvelope),
    Answer(AnswerEnvelope),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub search_type: String,
    pub query: String,
    pub result_count: usize,
    pub results: Vec<SearchResult>,
    pub cost: Value,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnswerEnvelope {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub query: String,
    pub answer: Value,
    pub sources: Vec<Value>,
    pub cost: Value,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}

impl FailureEnvelope {
    pub fn new(error: impl ToString) -> FailureEnvelope {
        FailureEnvelope {
            success: false,
            error: error.to_string(),
        }
    }
}

pub fn normalize_search(search_type: SearchType, query: String, resp: SearchResponse) -> Envelope {
    let cost = resp.cost();
    Envelope::Search(SearchEnvelope {
        success: true,
        kind: "search",
        search_type: search_type.to_string(),
        query,
        result_count: resp.results.len(),
        results: resp.results,
        cost,
    })
}

pub fn normalize_answer(query: String, resp: AnswerResponse) -> Envelope {
    let cost = resp.cost();
    Envelope::Answer(AnswerEnvelope {
        success: true,
        kind: "answer",
        query,
        answer: resp.contents,
        sources: resp.search_results,
        cost,
    })
}
