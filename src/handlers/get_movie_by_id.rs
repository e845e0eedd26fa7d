use std::time::Duration;

use serde_json::Value;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::protocol::MovieByIdParams;

/// One day.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Handle a `get_movie_by_id` tool call.
///
/// Any non-2xx status, and any body that is `null` or carries an `error`
/// field, means the movie does not exist.
pub async fn handle(executor: &ToolExecutor, params: MovieByIdParams) -> Result<Value, ToolError> {
    let imdb_id = params.imdb_id;
    let key = format!("movie_{imdb_id}");

    executor
        .cached(&key, CACHE_TTL, || async {
            let movie = match executor.backend().fetch_json(&["movies", imdb_id.as_str()]).await {
                Ok(movie) => movie,
                Err(ToolError::BackendHttp { .. }) => return Err(ToolError::NotFound(imdb_id.clone())),
                Err(other) => return Err(other),
            };

            if movie.is_null() || movie.get("error").is_some() {
                return Err(ToolError::NotFound(imdb_id.clone()));
            }
            Ok(movie)
        })
        .await
}
