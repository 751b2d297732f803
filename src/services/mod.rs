//! Services built on the Genius API: song search and song details.
//!
//! Each function makes at most one API round trip and is generic over
//! [`GeniusApi`](crate::genius::GeniusApi) so tests can drive it with mocks.

mod search;
mod song_detail;

pub use search::{find_song, search_songs};
pub use song_detail::{fetch_artist_names, fetch_song_details};
