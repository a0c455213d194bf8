use std::io;

use playlist_tools::cli::{duration_command, prompt_line, DURATION_PROMPT};
use playlist_tools::downloader::{CliProvider, Downloader};
use playlist_tools::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let mut stdout = io::stdout();
    let url = match prompt_line(DURATION_PROMPT, &mut io::stdin().lock(), &mut stdout) {
        Ok(url) => url,
        Err(e) => {
            println!("ERROR: cannot read input: {e}");
            return;
        }
    };

    let downloader = Downloader::new(Box::new(CliProvider::new()));
    if let Err(e) = duration_command(&downloader, &url, &mut stdout).await {
        tracing::error!(error = %e, "failed to write output");
    }
}
