use std::fmt;
use std::str::FromStr;

use crate::error::ValyuError;

const FINANCE_SOURCES: &[&str] = &[
    "valyu/valyu-stocks",
    "valyu/valyu-sec-filings",
    "valyu/valyu-earnings-US",
    "valyu/valyu-balance-sheet-US",
    "valyu/valyu-income-statement-US",
    "valyu/valyu-cash-flow-US",
    "valyu/valyu-dividends-US",
    "valyu/valyu-insider-transactions-US",
    "valyu/valyu-crypto",
    "valyu/valyu-forex",
];

const PAPER_SOURCES: &[&str] = &[
    "valyu/valyu-arxiv",
    "valyu/valyu-biorxiv",
    "valyu/valyu-medrxiv",
    "valyu/valyu-pubmed",
];

const BIO_SOURCES: &[&str] = &[
    "valyu/valyu-pubmed",
    "valyu/valyu-biorxiv",
    "valyu/valyu-medrxiv",
    "valyu/valyu-clinical-trials",
    "valyu/valyu-drug-labels",
];

const PATENT_SOURCES: &[&str] = &["valyu/valyu-patents"];

const SEC_SOURCES: &[&str] = &["valyu/valyu-sec-filings"];

const ECONOMICS_SOURCES: &[&str] = &[
    "valyu/valyu-bls",
    "valyu/valyu-fred",
    "valyu/valyu-world-bank",
    "valyu/valyu-worldbank-indicators",
    "valyu/valyu-usaspending",
];

/// One of the preset search configurations the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    Web,
    Finance,
    Paper,
    Bio,
    Patent,
    Sec,
    Economics,
    News,
    Answer,
}

/// Request parameters a search type maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProfile {
    /// Plain or proprietary search against `/search`.
    Search {
        search_type: &'static str,
        included_sources: &'static [&'static str],
    },
    /// Synthesized answer from `/answer`.
    Answer,
}

impl SearchType {
    /// Every supported key, in the order shown to users.
    pub const ALL: [SearchType; 9] = [
        SearchType::Web,
        SearchType::Finance,
        SearchType::Paper,
        SearchType::Bio,
        SearchType::Patent,
        SearchType::Sec,
        SearchType::Economics,
        SearchType::News,
        SearchType::Answer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Web => "web",
            SearchType::Finance => "finance",
            SearchType::Paper => "paper",
            SearchType::Bio => "bio",
            SearchType::Patent => "patent",
            SearchType::Sec => "sec",
            SearchType::Economics => "economics",
            SearchType::News => "news",
            SearchType::Answer => "answer",
        }
    }

    pub fn profile(&self) -> SearchProfile {
        match self {
            SearchType::Web => SearchProfile::Search {
                search_type: "web",
                included_sources: &[],
            },
            SearchType::News => SearchProfile::Search {
                search_type: "news",
                included_sources: &[],
            },
            SearchType::Finance => proprietary(FINANCE_SOURCES),
            SearchType::Paper => proprietary(PAPER_SOURCES),
            SearchType::Bio => proprietary(BIO_SOURCES),
            SearchType::Patent => proprietary(PATENT_SOURCES),
            SearchType::Sec => proprietary(SEC_SOURCES),
            SearchType::Economics => proprietary(ECONOMICS_SOURCES),
            SearchType::Answer => SearchProfile::Answer,
        }
    }

    /// Comma separated list of the accepted keys, e.g. for error messages.
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn proprietary(sources: &'static [&'static str]) -> SearchProfile {
    SearchProfile::Search {
        search_type: "proprietary",
        included_sources: sources,
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = ValyuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ValyuError::InvalidSearchType {
                given: key,
                valid: Self::valid_list(),
            })
    }
}
