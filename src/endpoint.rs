//! Endpoint URL resolution
//!
//! Maps a logical entity name to its collection endpoint, relative to
//! the client's API root. A fetcher instance can bypass this with a
//! custom query URL.

/// List endpoint path for an entity name
pub fn entity_list_path(entity_name: &str) -> String {
    format!("entity/{entity_name}")
}
