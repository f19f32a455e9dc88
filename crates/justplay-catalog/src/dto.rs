// Catalog search response shape, decoded once at the boundary.
// Optional branches default to empty so a search with no hits is not an error.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSearchResponse {
    #[serde(default)]
    pub results: SearchResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub songs: SongResults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongResults {
    #[serde(default)]
    pub data: Vec<Song>,
}

/// One search hit
#[derive(Debug, Clone, Deserialize)]
pub struct Song {
    pub id: String,
    #[serde(default)]
    pub attributes: SongAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAttributes {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub duration_in_millis: u64,
    #[serde(default)]
    pub artwork: Artwork,
    #[serde(default)]
    pub previews: Vec<Preview>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preview {
    pub url: String,
}
