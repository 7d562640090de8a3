use crate::cli::Cli;
use crate::client::ValyuClient;
use crate::config::Config;
use crate::data_models::{AnswerRequest, DEFAULT_MAX_RESULTS, SearchRequest};
use crate::envelope::{Envelope, normalize_answer, normalize_search};
use crate::error::ValyuError;
use crate::search_type::{SearchProfile, SearchType};

/// Body and target for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedRequest {
    Search(SearchRequest),
    Answer(AnswerRequest),
}

/// `maxResults` as given on the command line; absent means the default.
pub fn parse_max_results(raw: Option<&str>) -> Result<u32, ValyuError> {
    match raw {
        None => Ok(DEFAULT_MAX_RESULTS),
        Some(text) => text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| ValyuError::InvalidMaxResults(text.to_string())),
    }
}

/// Merge the search type's profile into the base payload. `max_results` is
/// only read, and only validated, for search profiles.
pub fn build_request(
    search_type: SearchType,
    query: &str,
    max_results: Option<&str>,
) -> Result<PreparedRequest, ValyuError> {
    let request = match search_type.profile() {
        SearchProfile::Answer => PreparedRequest::Answer(AnswerRequest::new(query.to_string())),
        SearchProfile::Search {
            search_type,
            included_sources,
        } => PreparedRequest::Search(SearchRequest {
            query: query.to_string(),
            max_num_results: parse_max_results(max_results)?,
            search_type: search_type.to_string(),
            included_sources: included_sources.iter().map(|s| s.to_string()).collect(),
        }),
    };
    Ok(request)
}

/// Run one query end to end. `lookup` resolves configuration variables; the
/// binary passes the process environment.
pub async fn execute<F>(cli: &Cli, lookup: F) -> Result<Envelope, ValyuError>
where
    F: Fn(&str) -> Option<String>,
{
    let search_type: SearchType = cli.search_type.parse()?;
    let request = build_request(search_type, &cli.query, cli.max_results.as_deref())?;
    let config = Config::from_lookup(lookup)?;
    run(&config, search_type, &cli.query, request).await
}

pub async fn run(
    config: &Config,
    search_type: SearchType,
    query: &str,
    request: PreparedRequest,
) -> Result<Envelope, ValyuError> {
    let client = ValyuClient::new(config);

    match request {
        PreparedRequest::Answer(request) => {
            let resp = client.answer(&request).await?;
            tracing::info!(
                "answer returned {} sources, cost {}",
                resp.search_results.len(),
                resp.cost()
            );
            Ok(normalize_answer(query.to_string(), resp))
        }
        PreparedRequest::Search(request) => {
            let resp = client.search(&request).await?;
            tracing::info!(
                "{search_type} search returned {} results, cost {}",
                resp.results.len(),
                resp.cost()
            );
            Ok(normalize_search(search_type, query.to_string(), resp))
        }
    }
}
