// Extraction strategy - playlist listing with single-item fallback
//
// Strategy:
// 1. Flat playlist listing, tolerating malformed lines
// 2. If that call fails or yields no durations: single-item dump
// 3. If that fails too: extraction failed
//
// An empty playlist listing is treated like a failed call and triggers the
// fallback.

use tracing::{debug, info};

use super::parse::{parse_playlist_lines, parse_single_item};
use crate::downloader::errors::{PlaylistError, Result};
use crate::downloader::models::{ExtractionMode, ExtractionResult};
use crate::downloader::traits::MediaProvider;

#[derive(Debug)]
enum Attempt {
    Playlist,
    Single { playlist_failure: String },
    Done(ExtractionResult),
    Failed(String),
}

/// Runs the two extraction attempts against a provider
pub struct ExtractionStrategy<'a> {
    provider: &'a dyn MediaProvider,
}

impl<'a> ExtractionStrategy<'a> {
    pub fn new(provider: &'a dyn MediaProvider) -> Self {
        Self { provider }
    }

    /// Extract durationed items for `url`. Never returns an empty result.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        let mut state = Attempt::Playlist;

        loop {
            state = match state {
                Attempt::Playlist => self.playlist_attempt(url).await,
                Attempt::Single { playlist_failure } => {
                    info!(
                        provider = self.provider.name(),
                        reason = %playlist_failure,
                        "playlist listing unusable, trying single-item mode"
                    );
                    self.single_attempt(url).await
                }
                Attempt::Done(result) => {
                    info!(mode = %result.mode(), items = result.len(), "extraction succeeded");
                    return Ok(result);
                }
                Attempt::Failed(reason) => {
                    return Err(PlaylistError::ExtractionFailed(reason));
                }
            };
        }
    }

    async fn playlist_attempt(&self, url: &str) -> Attempt {
        let output = self
            .provider
            .run_extraction(url, ExtractionMode::PlaylistFlat)
            .await;

        if !output.success {
            return Attempt::Single {
                playlist_failure: output
                    .failure
                    .unwrap_or_else(|| "provider call failed".to_string()),
            };
        }

        let items = parse_playlist_lines(&output.stdout);
        debug!(items = items.len(), "parsed playlist listing");

        match ExtractionResult::new(ExtractionMode::PlaylistFlat, items) {
            Some(result) => Attempt::Done(result),
            None => Attempt::Single {
                playlist_failure: "no entries with a duration".to_string(),
            },
        }
    }

    async fn single_attempt(&self, url: &str) -> Attempt {
        let output = self
            .provider
            .run_extraction(url, ExtractionMode::SingleItem)
            .await;

        if !output.success {
            let reason = output
                .failure
                .unwrap_or_else(|| "provider call failed".to_string());
            return Attempt::Failed(format!("single-item request failed ({reason})"));
        }

        match parse_single_item(&output.stdout) {
            Ok(item) => ExtractionResult::new(ExtractionMode::SingleItem, vec![item])
                .map_or_else(
                    || Attempt::Failed("single-item output was empty".to_string()),
                    Attempt::Done,
                ),
            Err(e) => Attempt::Failed(format!("single-item output rejected: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::models::ProviderOutput;
    use crate::downloader::traits::MockMediaProvider;
    use mockall::predicate::eq;

    const URL: &str = "https://www.youtube.com/playlist?list=PLtest";

    fn provider() -> MockMediaProvider {
        let mut mock = MockMediaProvider::new();
        mock.expect_name().return_const("mock");
        mock
    }

    fn expect_mode(mock: &mut MockMediaProvider, mode: ExtractionMode, output: ProviderOutput) {
        mock.expect_run_extraction()
            .with(eq(URL), eq(mode))
            .times(1)
            .return_once(move |_, _| output);
    }

    fn durations(result: &ExtractionResult) -> Vec<u64> {
        result.items().iter().map(|i| i.duration_seconds).collect()
    }

    #[tokio::test]
    async fn test_playlist_success_skips_single_mode() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::ok("{\"duration\": 100}\n{\"duration\": 200}\n"),
        );

        let result = ExtractionStrategy::new(&mock).extract(URL).await.unwrap();
        assert_eq!(result.mode(), ExtractionMode::PlaylistFlat);
        assert_eq!(durations(&result), vec![100, 200]);
    }

    #[tokio::test]
    async fn test_malformed_line_among_valid_lines() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::ok("{\"duration\": 1}\nnot json\n{\"duration\": 2}\n{\"duration\": 3}"),
        );

        let result = ExtractionStrategy::new(&mock).extract(URL).await.unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_playlist_call_falls_back_to_single() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::failed("exit code 1"),
        );
        expect_mode(
            &mut mock,
            ExtractionMode::SingleItem,
            ProviderOutput::ok("{\"duration\": 754}"),
        );

        let result = ExtractionStrategy::new(&mock).extract(URL).await.unwrap();
        assert_eq!(result.mode(), ExtractionMode::SingleItem);
        assert_eq!(durations(&result), vec![754]);
    }

    #[tokio::test]
    async fn test_empty_playlist_falls_back_to_single() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::ok("{\"id\": \"a\"}\n{\"id\": \"b\"}\n"),
        );
        expect_mode(
            &mut mock,
            ExtractionMode::SingleItem,
            ProviderOutput::ok("{\"duration\": 42}"),
        );

        let result = ExtractionStrategy::new(&mock).extract(URL).await.unwrap();
        assert_eq!(durations(&result), vec![42]);
    }

    #[tokio::test]
    async fn test_both_attempts_fail() {
        let mut mock = provider();
        expect_mode(&mut mock, ExtractionMode::PlaylistFlat, ProviderOutput::ok(""));
        expect_mode(
            &mut mock,
            ExtractionMode::SingleItem,
            ProviderOutput::failed("Timed out after 60s"),
        );

        let err = ExtractionStrategy::new(&mock).extract(URL).await.unwrap_err();
        assert!(matches!(err, PlaylistError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_malformed_single_output_is_failure() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::failed("exit code 1"),
        );
        expect_mode(
            &mut mock,
            ExtractionMode::SingleItem,
            ProviderOutput::ok("{\"duration\": 1}\ngarbage"),
        );

        let err = ExtractionStrategy::new(&mock).extract(URL).await.unwrap_err();
        assert!(matches!(err, PlaylistError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn test_single_output_without_duration_is_failure() {
        let mut mock = provider();
        expect_mode(
            &mut mock,
            ExtractionMode::PlaylistFlat,
            ProviderOutput::failed("exit code 1"),
        );
        expect_mode(
            &mut mock,
            ExtractionMode::SingleItem,
            ProviderOutput::ok("{\"title\": \"livestream\", \"duration\": null}"),
        );

        let err = ExtractionStrategy::new(&mock).extract(URL).await.unwrap_err();
        assert!(err.to_string().contains("no usable duration"));
    }
}
