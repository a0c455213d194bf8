use std::io;
use std::path::Path;

use playlist_tools::cli::{download_command, prompt_line, DOWNLOAD_PROMPT};
use playlist_tools::downloader::{CliProvider, Downloader};
use playlist_tools::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let mut stdout = io::stdout();
    let url = match prompt_line(DOWNLOAD_PROMPT, &mut io::stdin().lock(), &mut stdout) {
        Ok(url) => url,
        Err(e) => {
            println!("ERROR: cannot read input: {e}");
            return;
        }
    };

    let downloader = Downloader::new(Box::new(CliProvider::new()));
    if let Err(e) = download_command(&downloader, &url, Path::new("."), &mut stdout).await {
        tracing::error!(error = %e, "failed to write output");
    }
}
