//! Song detail service - a song and the songs it samples.

use crate::genius::{GeniusApi, GeniusError, adapter};
use crate::model::SongDetails;

/// Fetch a song and extract the main record plus its sampled songs.
///
/// Songs without a "samples" relationship give an empty sample list.
pub async fn fetch_song_details<A: GeniusApi + ?Sized>(
    api: &A,
    song_id: u64,
) -> Result<SongDetails, GeniusError> {
    let song = api.song(song_id).await?;
    let details = adapter::to_details(song_id, song);

    if details.has_samples() {
        tracing::info!(
            "{} by {} samples {} songs",
            details.main_song.title,
            details.main_song.artist,
            details.sampled_songs.len()
        );
        for s in &details.sampled_songs {
            tracing::debug!("- {} by {} (ID: {})", s.title, s.artist, s.id);
        }
    } else {
        tracing::info!("No samples found for song {}", song_id);
    }

    Ok(details)
}

/// The song's artist credit line (e.g. "Nas (Ft. Pete Rock)").
pub async fn fetch_artist_names<A: GeniusApi + ?Sized>(
    api: &A,
    song_id: u64,
) -> Result<String, GeniusError> {
    let song = api.song(song_id).await?;
    Ok(adapter::artist_names(&song))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genius::traits::mocks::MockGenius;
    use crate::test_utils::{hip_hop_hooray_mock, record, song_body};
    use serde_json::json;

    #[tokio::test]
    async fn test_details_with_two_samples() {
        let mock = hip_hop_hooray_mock();
        let details = fetch_song_details(&mock, 777).await.unwrap();

        assert_eq!(details.main_song.id, 777);
        assert_eq!(details.main_song.title, "Hip Hop Hooray");
        assert_eq!(details.main_song.year, Some(1993));
        assert_eq!(details.sampled_songs.len(), 2);
        assert_eq!(details.sampled_songs[0], record(101, "Impeach the President", Some(1973)));
        assert_eq!(details.sampled_songs[1], record(102, "Funky Drummer", Some(1970)));
    }

    #[tokio::test]
    async fn test_zero_samples_gives_empty_list() {
        let mock = MockGenius::empty().with_response(
            "/songs/5",
            song_body(5, "Original", "Someone", None, &[]),
        );
        let details = fetch_song_details(&mock, 5).await.unwrap();
        assert!(details.sampled_songs.is_empty());
        assert_eq!(details.main_song.title, "Original");
        assert_eq!(details.main_song.artist, "Someone");
        assert_eq!(details.main_song.year, None);
    }

    #[tokio::test]
    async fn test_missing_relationships_key() {
        let mock = MockGenius::empty().with_response(
            "/songs/6",
            json!({
                "response": {
                    "song": {
                        "id": 6,
                        "title": "Bare",
                        "primary_artist": {"name": "Minimal"},
                        "release_date": "2010-02-03"
                    }
                }
            }),
        );
        let details = fetch_song_details(&mock, 6).await.unwrap();
        assert!(details.sampled_songs.is_empty());
        assert_eq!(details.main_song.year, Some(2010));
    }

    #[tokio::test]
    async fn test_unexpected_format() {
        let mock = MockGenius::empty()
            .with_response("/songs/7", json!({"response": {"song": {"id": 7}}}));
        let err = fetch_song_details(&mock, 7).await.unwrap_err();
        assert!(err.is_format_error());
    }

    #[tokio::test]
    async fn test_artist_names() {
        let mock = hip_hop_hooray_mock();
        let names = fetch_artist_names(&mock, 777).await.unwrap();
        assert_eq!(names, "Naughty by Nature");
    }
}
