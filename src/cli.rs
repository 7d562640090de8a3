use clap::Parser;

const AFTER_HELP: &str = "\
Search types: web, finance, paper, bio, patent, sec, economics, news, answer

Examples:
  valyu web \"AI news 2025\" 10
  valyu bio \"cancer treatments\"
  valyu answer \"What is quantum computing?\"

Environment:
  VALYU_API_KEY   API key sent as x-api-key (required)
  VALYU_API_BASE  Override the API base URL
  VALYU_LOG       Log level written to stderr (default: off)";

/// Command-line surface: `valyu <searchType> <query> [maxResults]`.
#[derive(Parser, Debug, Clone)]
#[command(name = "valyu", version)]
#[command(about = "Query the Valyu search and answer API and print normalized JSON", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Search preset; case-insensitive.
    pub search_type: String,

    /// Free text query.
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Number of results to request (default 10); ignored by `answer`.
    /// Checked once the search type is known.
    #[arg(allow_hyphen_values = true)]
    pub max_results: Option<String>,

    /// Extra positionals are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_max_results_is_optional() {
        let cli = Cli::try_parse_from(["valyu", "web", "AI news"]).unwrap();
        assert_eq!(cli.search_type, "web");
        assert_eq!(cli.query, "AI news");
        assert_eq!(cli.max_results, None);
    }

    #[test]
    fn test_explicit_max_results() {
        let cli = Cli::try_parse_from(["valyu", "bio", "cancer", "25"]).unwrap();
        assert_eq!(cli.max_results.as_deref(), Some("25"));
    }

    #[test]
    fn test_max_results_is_kept_raw() {
        let cli = Cli::try_parse_from(["valyu", "answer", "q", "abc"]).unwrap();
        assert_eq!(cli.max_results.as_deref(), Some("abc"));
    }

    #[test]
    fn test_query_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["valyu", "web", "-1 year returns"]).unwrap();
        assert_eq!(cli.query, "-1 year returns");
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        let cli = Cli::try_parse_from(["valyu", "web", "q", "5", "extra", "--more"]).unwrap();
        assert_eq!(cli.query, "q");
        assert_eq!(cli.max_results.as_deref(), Some("5"));
        assert_eq!(cli.extra, vec!["extra", "--more"]);
    }

    #[test]
    fn test_missing_query_is_a_usage_error() {
        let err = Cli::try_parse_from(["valyu", "web"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
