// Interactive front end shared by the two binaries

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::downloader::{Downloader, PlaylistError};

pub const DURATION_PROMPT: &str = "Enter YouTube playlist/video URL: ";
pub const DOWNLOAD_PROMPT: &str = "Enter YouTube playlist URL: ";

/// Print `prompt` and read one trimmed line
pub fn prompt_line(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// User-facing text for a pipeline error
pub fn error_message(err: &PlaylistError) -> String {
    match err.hint() {
        Some(hint) => format!("ERROR: {err}\n{hint}"),
        None => format!("ERROR: {err}"),
    }
}

/// Duration report flow. Every failure ends in a printed message.
pub async fn duration_command(
    downloader: &Downloader,
    url: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let checked = match downloader.validate_url(url) {
        Ok(url) => downloader.check_provider().await.map(|()| url),
        Err(e) => Err(e),
    };
    let url = match checked {
        Ok(url) => url,
        Err(e) => return writeln!(out, "{}", error_message(&e)),
    };

    writeln!(out, "Analyzing...")?;
    out.flush()?;

    match downloader.extract_report(url).await {
        Ok(report) => write!(out, "\n{}\n", report.render()),
        Err(e) => writeln!(out, "{}", error_message(&e)),
    }
}

/// MP3 download flow. Every failure ends in a printed message.
pub async fn download_command(
    downloader: &Downloader,
    url: &str,
    base_dir: &Path,
    out: &mut impl Write,
) -> io::Result<()> {
    let job = match downloader.prepare_download(url, base_dir) {
        Ok(job) => job,
        Err(e) => return writeln!(out, "{}", error_message(&e)),
    };
    writeln!(out, "Playlist ID: {}", job.playlist_id)?;
    out.flush()?;

    match downloader.run_download(&job).await {
        Ok(outcome) if outcome.partial && outcome.file_count == 0 => writeln!(
            out,
            "\nDownload failed: yt-dlp reported errors and no files were saved in {}",
            outcome.output_dir.display()
        ),
        Ok(outcome) if outcome.partial => writeln!(
            out,
            "\nDownload finished with errors; some items may be missing. {} files in {}",
            outcome.file_count,
            outcome.output_dir.display()
        ),
        Ok(outcome) => writeln!(
            out,
            "\nDownload completed. Files are in {}",
            outcome.output_dir.display()
        ),
        Err(e) => writeln!(out, "{}", error_message(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::models::{DownloadOutcome, ProviderOutput};
    use crate::downloader::traits::MockMediaProvider;

    fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_prompt_line_trims() {
        let mut input = io::Cursor::new("  https://youtu.be/abc  \n");
        let mut out = Vec::new();
        let line = prompt_line(DURATION_PROMPT, &mut input, &mut out).unwrap();
        assert_eq!(line, "https://youtu.be/abc");
        assert_eq!(output(out), DURATION_PROMPT);
    }

    #[test]
    fn test_prompt_line_at_eof() {
        let mut input = io::Cursor::new("");
        let line = prompt_line(DOWNLOAD_PROMPT, &mut input, &mut Vec::new()).unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_error_message_with_hint() {
        let msg = error_message(&PlaylistError::ProviderUnavailable("missing".into()));
        assert!(msg.starts_with("ERROR: yt-dlp is not available"));
        assert!(msg.ends_with("pip install yt-dlp"));
    }

    #[tokio::test]
    async fn test_duration_command_empty_url() {
        let downloader = Downloader::new(Box::new(MockMediaProvider::new()));
        let mut out = Vec::new();
        duration_command(&downloader, "", &mut out).await.unwrap();
        assert_eq!(output(out), "ERROR: Invalid input: empty URL\n");
    }

    #[tokio::test]
    async fn test_duration_command_unavailable_prints_only_error() {
        let mut mock = MockMediaProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_is_available().times(1).return_const(false);
        mock.expect_run_extraction().never();

        let mut out = Vec::new();
        duration_command(&Downloader::new(Box::new(mock)), "https://youtu.be/x", &mut out)
            .await
            .unwrap();

        assert_eq!(
            output(out),
            "ERROR: yt-dlp is not available: mock did not answer a version check\n\
             Install with: pip install yt-dlp\n"
        );
    }

    #[tokio::test]
    async fn test_duration_command_prints_report() {
        let mut mock = MockMediaProvider::new();
        mock.expect_name().return_const("mock");
        mock.expect_is_available().return_const(true);
        mock.expect_run_extraction()
            .return_once(|_, _| ProviderOutput::ok("{\"duration\": 90061}"));

        let mut out = Vec::new();
        duration_command(&Downloader::new(Box::new(mock)), "https://youtu.be/x", &mut out)
            .await
            .unwrap();

        let text = output(out);
        assert!(text.starts_with("Analyzing...\n"));
        assert!(text.contains("Videos: 1"));
        assert!(text.contains("Total duration: 1 day, 1 hour, 1 minute, 1 second"));
    }

    #[tokio::test]
    async fn test_download_command_invalid_url() {
        let dir = tempfile::tempdir().unwrap();
        let mut mock = MockMediaProvider::new();
        mock.expect_download_audio().never();

        let mut out = Vec::new();
        download_command(
            &Downloader::new(Box::new(mock)),
            "https://youtu.be/x",
            dir.path(),
            &mut out,
        )
        .await
        .unwrap();
        assert!(output(out).starts_with("ERROR: Invalid input"));
    }

    async fn download_with_outcome(partial: bool, file_count: usize) -> String {
        let dir = tempfile::tempdir().unwrap();
        let mut mock = MockMediaProvider::new();
        mock.expect_download_audio().returning(move |_, options| {
            Ok(DownloadOutcome {
                output_dir: options.output_dir.clone(),
                partial,
                file_count,
            })
        });

        let mut out = Vec::new();
        download_command(
            &Downloader::new(Box::new(mock)),
            "https://www.youtube.com/playlist?list=PL9",
            dir.path(),
            &mut out,
        )
        .await
        .unwrap();
        output(out)
    }

    #[tokio::test]
    async fn test_download_command_partial() {
        let text = download_with_outcome(true, 3).await;
        assert!(text.starts_with("Playlist ID: PL9\n"));
        assert!(text.contains("finished with errors; some items may be missing. 3 files in"));
    }

    #[tokio::test]
    async fn test_download_command_failed_without_files() {
        let text = download_with_outcome(true, 0).await;
        assert!(text.contains("Download failed: yt-dlp reported errors and no files were saved"));
        assert!(!text.contains("completed"));
    }

    #[tokio::test]
    async fn test_download_command_completed() {
        let text = download_with_outcome(false, 2).await;
        assert!(text.contains("\nDownload completed. Files are in"));
    }
}
