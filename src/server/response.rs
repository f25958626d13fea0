use serde::Serialize;

use crate::library::Track;

/// JSON envelope returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            msg: "query successful".to_string(),
            data,
        }
    }
}

/// Wire form of a [`Track`], with URIs derived for one request host.
/// Built fresh per response; stored tracks are never touched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub music_id: String,
    pub name: String,
    pub singer: String,
    pub lyric_id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub music_uri: String,
    pub music_download_uri: String,
    pub lyric_uri: String,
    pub cover_uri: String,
}

impl TrackDto {
    pub fn new(track: &Track, host: &str) -> Self {
        let id = &track.id;
        Self {
            music_id: id.clone(),
            name: track.title.clone(),
            singer: track.artist.clone(),
            lyric_id: track.lyric_id.clone(),
            kind: track.media_type.code(),
            music_uri: format!("http://{host}/music/file/{id}"),
            music_download_uri: format!("http://{host}/music/file/download/{id}"),
            lyric_uri: format!("http://{host}/music/lyric/{}", track.lyric_id),
            cover_uri: format!("http://{host}/music/cover/{id}"),
        }
    }
}
