use serde::Serialize;

use crate::ops::query::SearchQuery;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct QueryJson<'a> {
    /// `None` when no picker was available
    pub year: Option<i64>,
    pub query: String,
    pub filters: &'a SearchQuery,
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Print the assembled query, as text or JSON.
pub fn print_query(
    year: Option<i64>,
    query_string: &str,
    filters: &SearchQuery,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        let out = QueryJson {
            year,
            query: query_string.to_string(),
            filters,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", query_string);
    }
    Ok(())
}
