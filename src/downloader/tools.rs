// Locating the yt-dlp executable

use std::path::Path;
use std::process::Command;

pub const YTDLP_BINARY: &str = "yt-dlp";

const COMMON_PATHS: &[&str] = &[
    "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
    "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac, pip --user on some distros
    "/usr/bin/yt-dlp",          // System installation
];

/// Resolve yt-dlp: well-known install paths first, then `which`, then the
/// bare name so the OS performs the PATH lookup at spawn time.
pub fn find_ytdlp() -> String {
    if let Some(path) = COMMON_PATHS.iter().find(|p| Path::new(p).exists()) {
        return path.to_string();
    }

    if let Some(path) = which(YTDLP_BINARY) {
        return path;
    }

    YTDLP_BINARY.to_string()
}

fn which(binary: &str) -> Option<String> {
    let output = Command::new("which").arg(binary).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ytdlp_never_returns_empty() {
        let path = find_ytdlp();
        assert!(!path.is_empty());
        assert!(path.ends_with(YTDLP_BINARY));
    }

    #[test]
    fn test_which_unknown_binary() {
        assert_eq!(which("definitely-not-an-installed-tool-4821"), None);
    }
}
