//! MCP gateway for a movie catalog.
//!
//! Exposes `search_all_movies`, `get_movie_by_id`, `get_recommended_movies`,
//! `get_genres` and `search_by_keyword` as tools over JSON-RPC 2.0 on a
//! single HTTP endpoint. Each call is forwarded to the upstream content
//! backend; results are cached in memory with a per-tool time-to-live.

pub mod backend;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod movies;
pub mod protocol;
pub mod server;

pub mod schema;
