use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::backend::BackendClient;
use crate::cache::CacheStore;
use crate::catalog::ToolName;
use crate::error::ToolError;
use crate::handlers;
use crate::schema::validate_json;

/// Resolves tool calls against the cache and the content backend.
///
/// The cache is injected so its lifecycle stays with the transport that
/// owns the executor.
#[derive(Clone)]
pub struct ToolExecutor {
    backend: BackendClient,
    cache: Arc<dyn CacheStore>,
}

impl ToolExecutor {
    pub fn new(backend: BackendClient, cache: Arc<dyn CacheStore>) -> Self {
        Self { backend, cache }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Run the tool called `name`.
    ///
    /// Absent arguments count as `{}`. Arguments are checked against the
    /// tool's advertised input schema before anything is fetched.
    pub async fn execute(&self, name: &str, arguments: Option<Value>) -> Result<Value, ToolError> {
        let result = self.run(name, arguments).await;
        if let Err(err) = &result {
            warn!(tool = name, code = ?err.code(), error = %err, "tool call failed");
        }
        result
    }

    async fn run(&self, name: &str, arguments: Option<Value>) -> Result<Value, ToolError> {
        let tool = ToolName::parse(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let arguments = arguments.unwrap_or_else(|| Value::Object(Default::default()));
        validate_json(&tool.input_schema(), &arguments)
            .map_err(|e| ToolError::InvalidArguments(format!("{tool}: {e}")))?;

        match tool {
            ToolName::SearchAllMovies => handlers::search_all_movies::handle(self).await,
            ToolName::GetMovieById => {
                handlers::get_movie_by_id::handle(self, parse_arguments(tool, arguments)?).await
            }
            ToolName::GetRecommendedMovies => handlers::recommended_movies::handle(self).await,
            ToolName::GetGenres => handlers::get_genres::handle(self).await,
            ToolName::SearchByKeyword => {
                handlers::search_by_keyword::handle(self, parse_arguments(tool, arguments)?).await
            }
        }
    }

    /// Return the cached value under `key`, or run `fetch` and cache its
    /// result for `ttl`.
    ///
    /// Failed fetches are not cached. Concurrent misses on one key may both
    /// fetch; the last write wins.
    pub(crate) async fn cached<F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<Value, ToolError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ToolError>>,
    {
        if let Some(text) = self.cache.get(key).await {
            match serde_json::from_str(&text) {
                Ok(value) => {
                    debug!(key, "cache hit");
                    return Ok(value);
                }
                Err(e) => warn!(key, error = %e, "discarding unreadable cache entry"),
            }
        } else {
            debug!(key, "cache miss");
        }

        let value = fetch().await?;
        let text = serde_json::to_string(&value)
            .map_err(|e| ToolError::Internal(format!("cannot encode cache entry: {e}")))?;
        self.cache.put(key, text, ttl).await;
        debug!(key, ttl_secs = ttl.as_secs(), "cache write");
        Ok(value)
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(format!("{tool}: {e}")))
}
