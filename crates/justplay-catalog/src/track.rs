use crate::dto::{CatalogSearchResponse, Song};
use serde::{Deserialize, Serialize};

/// Normalized search result returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub artwork_url: String,
    /// Milliseconds
    pub duration: u64,
    /// Empty when the catalog has no preview for the song
    pub preview_url: String,
}

impl From<Song> for Track {
    fn from(song: Song) -> Self {
        let attributes = song.attributes;
        let preview_url = attributes
            .previews
            .into_iter()
            .next()
            .map(|p| p.url)
            .unwrap_or_default();

        Self {
            id: song.id,
            title: attributes.name,
            artist: attributes.artist_name,
            album: attributes.album_name,
            artwork_url: attributes.artwork.url,
            duration: attributes.duration_in_millis,
            preview_url,
        }
    }
}

/// Map catalog hits to tracks, keeping the catalog's relevance order
pub fn map_search_response(response: CatalogSearchResponse) -> Vec<Track> {
    response
        .results
        .songs
        .data
        .into_iter()
        .map(Track::from)
        .collect()
}
