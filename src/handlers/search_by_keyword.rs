use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::movies::{parse_sequence, search};
use crate::protocol::KeywordParams;

/// 100 minutes.
const CACHE_TTL: Duration = Duration::from_secs(100 * 60);

/// Handle a `search_by_keyword` tool call.
///
/// The cache key uses the lower-cased keyword, so searches differing only
/// in case share one entry.
pub async fn handle(executor: &ToolExecutor, params: KeywordParams) -> Result<Value, ToolError> {
    let keyword = params.keyword.to_lowercase();
    let key = format!("search_{keyword}");

    executor
        .cached(&key, CACHE_TTL, || async {
            let body = executor.backend().fetch_text(&["movies"]).await?;
            let movies = parse_sequence(&body, "movies")?;
            let total = movies.len();
            let matches = search(movies, &keyword);
            debug!(keyword = %keyword, total, matched = matches.len(), "keyword search");
            Ok(Value::Array(matches))
        })
        .await
}
