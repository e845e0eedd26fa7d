//! Shape checks and list shaping for backend movie payloads.
//!
//! Backend records are kept as raw [`Value`]s so every field reaches the
//! caller untouched; [`MovieView`] gives checked access to the handful of
//! fields the tools inspect.

use serde_json::Value;

use crate::error::ToolError;

/// Highest `ranking_value` that counts as recommended.
pub const RECOMMENDED_MAX_RANK: f64 = 3.0;

/// Maximum number of movies returned by the recommendation tool.
pub const RECOMMENDED_LIMIT: usize = 10;

/// Require `value` to be an ordered sequence.
pub fn into_sequence(value: Value, what: &'static str) -> Result<Vec<Value>, ToolError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ToolError::shape(what, &other)),
    }
}

/// Parse a raw backend body into a sequence, rejecting blank bodies.
pub fn parse_sequence(body: &str, what: &'static str) -> Result<Vec<Value>, ToolError> {
    if body.trim().is_empty() {
        return Err(ToolError::EmptyBackendResponse);
    }
    let value: Value = serde_json::from_str(body).map_err(|_| ToolError::malformed(body))?;
    into_sequence(value, what)
}

/// Read-only view over one backend movie record.
#[derive(Debug, Clone, Copy)]
pub struct MovieView<'a>(&'a Value);

impl<'a> MovieView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn admin_review(&self) -> Option<&'a str> {
        self.0.get("admin_review").and_then(Value::as_str)
    }

    /// Names of all genres attached to the movie; missing or non-array
    /// `genre` yields nothing.
    pub fn genre_names(&self) -> impl Iterator<Item = &'a str> {
        self.0
            .get("genre")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|g| g.get("genre_name").and_then(Value::as_str))
    }

    /// `ranking.ranking_value`, only when it is a JSON number.
    pub fn ranking_value(&self) -> Option<f64> {
        self.0
            .get("ranking")
            .and_then(|r| r.get("ranking_value"))
            .and_then(Value::as_f64)
    }

    /// Case-insensitive substring match on title, genre names and review.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |text: &str| text.to_lowercase().contains(needle);
        self.title().is_some_and(hit)
            || self.genre_names().any(hit)
            || self.admin_review().is_some_and(hit)
    }
}

/// Top-ranked movies: rank <= 3, ascending, at most ten.
///
/// When nothing qualifies the first ten movies are returned as-is.
pub fn recommend(movies: Vec<Value>) -> Vec<Value> {
    let mut ranked: Vec<(f64, &Value)> = movies
        .iter()
        .filter_map(|m| MovieView::new(m).ranking_value().map(|rank| (rank, m)))
        .filter(|(rank, _)| *rank <= RECOMMENDED_MAX_RANK)
        .collect();

    if ranked.is_empty() {
        return movies.into_iter().take(RECOMMENDED_LIMIT).collect();
    }

    // sort_by is stable: equal ranks keep backend order.
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    ranked
        .into_iter()
        .take(RECOMMENDED_LIMIT)
        .map(|(_, m)| m.clone())
        .collect()
}

/// Movies matching `keyword` in backend order.
pub fn search(movies: Vec<Value>, keyword: &str) -> Vec<Value> {
    let needle = keyword.to_lowercase();
    movies
        .into_iter()
        .filter(|m| MovieView::new(m).matches(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ranked(id: &str, rank: i64) -> Value {
        json!({"imdb_id": id, "title": id, "ranking": {"ranking_value": rank, "ranking_name": "x"}})
    }

    fn ids(movies: &[Value]) -> Vec<&str> {
        movies.iter().map(|m| m["imdb_id"].as_str().unwrap()).collect()
    }

    #[test]
    fn recommend_filters_and_sorts_by_rank() {
        let movies = vec![ranked("a", 5), ranked("b", 1), ranked("c", 3), ranked("d", 2)];
        assert_eq!(ids(&recommend(movies)), vec!["b", "d", "c"]);
    }

    #[test]
    fn recommend_keeps_backend_order_for_equal_ranks() {
        let movies = vec![ranked("x", 2), ranked("y", 1), ranked("z", 2)];
        assert_eq!(ids(&recommend(movies)), vec!["y", "x", "z"]);
    }

    #[test]
    fn recommend_ignores_non_numeric_ranks() {
        let movies = vec![
            json!({"imdb_id": "s", "ranking": {"ranking_value": "1"}}),
            json!({"imdb_id": "n", "ranking": null}),
            ranked("ok", 3),
        ];
        assert_eq!(ids(&recommend(movies)), vec!["ok"]);
    }

    #[test]
    fn recommend_treats_zero_as_the_best_rank() {
        let movies = vec![ranked("one", 1), ranked("zero", 0), ranked("three", 3)];
        assert_eq!(ids(&recommend(movies)), vec!["zero", "one", "three"]);
    }

    #[test]
    fn recommend_caps_at_ten() {
        let movies: Vec<Value> = (0..15).map(|i| ranked(&format!("m{i}"), 1)).collect();
        let picked = recommend(movies);
        assert_eq!(picked.len(), RECOMMENDED_LIMIT);
        assert_eq!(picked[0]["imdb_id"], "m0");
    }

    #[test]
    fn recommend_falls_back_to_first_ten_unranked() {
        let movies: Vec<Value> = (0..12).map(|i| ranked(&format!("m{i}"), 7)).collect();
        let picked = recommend(movies.clone());
        assert_eq!(picked, movies[..10].to_vec());
    }

    #[test]
    fn search_matches_title_genre_and_review() {
        let movies = vec![
            json!({"imdb_id": "t", "title": "The Dark Knight"}),
            json!({"imdb_id": "g", "title": "Up", "genre": [{"genre_id": 1, "genre_name": "Animation"}]}),
            json!({"imdb_id": "r", "title": "Heat", "admin_review": "A knight-level crime epic"}),
            json!({"imdb_id": "none", "title": "Alien", "genre": "not-an-array"}),
        ];
        assert_eq!(ids(&search(movies.clone(), "KNIGHT")), vec!["t", "r"]);
        assert_eq!(ids(&search(movies.clone(), "anim")), vec!["g"]);
        assert!(search(movies, "zzz").is_empty());
    }

    #[test]
    fn parse_sequence_distinguishes_failures() {
        assert!(matches!(parse_sequence("  \n", "movies"), Err(ToolError::EmptyBackendResponse)));
        assert!(matches!(parse_sequence("{not json", "movies"), Err(ToolError::MalformedResponse { .. })));
        assert!(matches!(
            parse_sequence(r#"{"error":"db down"}"#, "movies"),
            Err(ToolError::InvalidBackendShape { .. })
        ));
        assert_eq!(parse_sequence("[]", "movies").unwrap(), Vec::<Value>::new());
    }
}
