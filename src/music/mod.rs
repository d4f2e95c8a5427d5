mod catalog;

use serde::{Deserialize, Serialize};

pub use catalog::CATALOG;

/// Birth year to assume when a profile has no birth date; keeps the screen
/// from coming up empty.
pub const DEFAULT_BIRTH_YEAR: i32 = 1950;

#[derive(Clone, Debug, Serialize)]
pub struct Song {
    pub decade: i32,
    pub title: &'static str,
    pub artist: &'static str,
    pub youtube_url: &'static str,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub decade: i32,
    pub title: String,
    pub artist: String,
    pub youtube_url: String,
}

/// The two decades a listener formed their musical memory in: the decade they
/// turned ten, and the one after. Born 1950 -> 1960s and 1970s; born 1948 ->
/// 1950s and 1960s.
pub fn decades_for(birth_year: i32) -> [i32; 2] {
    let start = (birth_year + 10) / 10 * 10;
    [start, start + 10]
}

pub fn recommendations_for(birth_year: i32) -> Vec<Recommendation> {
    let decades = decades_for(birth_year);
    let mut out = Vec::new();
    for decade in decades {
        let mut idx = 0;
        for song in CATALOG.iter().filter(|s| s.decade == decade) {
            if song.youtube_url.trim().is_empty() {
                continue;
            }
            out.push(Recommendation {
                id: format!("arg-{}-{}", decade, idx),
                decade: song.decade,
                title: song.title.to_string(),
                artist: song.artist.to_string(),
                youtube_url: song.youtube_url.to_string(),
            });
            idx += 1;
        }
    }
    out
}
