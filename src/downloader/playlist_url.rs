// Playlist identifier helpers

use regex::Regex;

lazy_static::lazy_static! {
    static ref LIST_PARAM_RE: Regex = Regex::new(r"[?&]list=([a-zA-Z0-9_-]+)").unwrap();
}

/// Value of the `list=` query parameter, if any
pub fn extract_playlist_id(url: &str) -> Option<&str> {
    LIST_PARAM_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Directory name used for a playlist's MP3 files
pub fn output_folder_name(playlist_id: &str) -> String {
    format!("playlist_{playlist_id}_mp3")
}
