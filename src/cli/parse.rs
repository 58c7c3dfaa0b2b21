use flightpath_core::format::OutputFormat;
use flightpath_core::graph::RankBy;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse ranking key from string
pub fn parse_rank_by(s: &str) -> std::result::Result<RankBy, String> {
    s.parse::<RankBy>().map_err(|e| e.to_string())
}
