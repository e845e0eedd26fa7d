//! Static tool catalog advertised by `tools/list`.

use serde_json::{json, Value};

/// The five tools exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchAllMovies,
    GetMovieById,
    GetRecommendedMovies,
    GetGenres,
    SearchByKeyword,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        Self::SearchAllMovies,
        Self::GetMovieById,
        Self::GetRecommendedMovies,
        Self::GetGenres,
        Self::SearchByKeyword,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SearchAllMovies => "search_all_movies",
            Self::GetMovieById => "get_movie_by_id",
            Self::GetRecommendedMovies => "get_recommended_movies",
            Self::GetGenres => "get_genres",
            Self::SearchByKeyword => "search_by_keyword",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SearchAllMovies => "Get all movies in the database",
            Self::GetMovieById => "Get movie details by IMDb ID",
            Self::GetRecommendedMovies => "Get top-rated movies (ranking 1-3, best first, at most 10)",
            Self::GetGenres => "Get all genres",
            Self::SearchByKeyword => {
                "Search movies by keyword in title, genre names and admin review (case-insensitive)"
            }
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Self::GetMovieById => json!({
                "type": "object",
                "required": ["imdb_id"],
                "properties": {
                    "imdb_id": {
                        "type": "string",
                        "minLength": 1,
                        "description": "IMDb identifier, e.g. tt0111161"
                    }
                }
            }),
            Self::SearchByKeyword => json!({
                "type": "object",
                "required": ["keyword"],
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "Text matched against title, genre names and review"
                    }
                }
            }),
            Self::SearchAllMovies | Self::GetRecommendedMovies | Self::GetGenres => json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// Catalog entry as sent in `tools/list`.
    pub fn definition(self) -> Value {
        json!({
            "name": self.as_str(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `tools/list` result payload.
pub fn tool_list() -> Value {
    let tools: Vec<Value> = ToolName::ALL.into_iter().map(ToolName::definition).collect();
    json!({ "tools": tools })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::parse("delete_all_movies"), None);
        assert_eq!(ToolName::parse("Search_All_Movies"), None);
    }

    #[test]
    fn every_schema_is_an_object_schema() {
        for tool in ToolName::ALL {
            assert_eq!(tool.input_schema()["type"], "object", "{tool}");
        }
    }
}
