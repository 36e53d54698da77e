//! # SongFeed
//!
//! A swipeable song feed in the terminal: one page per song, with share,
//! download, favorite, and skip actions.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use songfeed_app::{AppConfig, FeedAction, FeedScreen, FeedViewModel, SongRepository};
use songfeed_service::{SongService, SongServiceClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "n next | p previous | s share | d download | f favorite | v volume | r reload | q quit";

fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the feed.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "songfeed=debug,songfeed_app=debug,songfeed_service=info".into()
            }),
        )
        .init();

    info!("Starting SongFeed v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = url_from_args(std::env::args().skip(1))? {
        config.service_url = url;
    }
    let service_config = config.to_service_config()?;
    info!("Song service at {}", service_config.base_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("songfeed-io")
        .enable_all()
        .build()
        .context("Failed to start background runtime")?;

    let client = SongServiceClient::new(&service_config)?;
    let view_model = FeedViewModel::new(SongRepository::new(client), runtime.handle().clone());
    let mut screen = FeedScreen::new(view_model, config.app_name.clone());

    let load_wait = service_config.timeout() + Duration::from_secs(1);
    screen.start();
    screen.sync_timeout(load_wait);

    let result = run_feed(&mut screen, load_wait);

    screen.stop();
    info!("SongFeed shutting down");
    result
}

/// Parse `--url URL` (or `--url=URL`).
fn url_from_args(mut args: impl Iterator<Item = String>) -> Result<Option<String>> {
    let mut url = None;
    while let Some(arg) = args.next() {
        if arg == "--url" {
            match args.next() {
                Some(value) => url = Some(value),
                None => bail!("--url needs a value"),
            }
        } else if let Some(value) = arg.strip_prefix("--url=") {
            url = Some(value.to_string());
        } else {
            bail!("Unknown argument: {arg}\nusage: songfeed [--url URL]");
        }
    }
    Ok(url)
}

fn run_feed<S: SongService>(screen: &mut FeedScreen<S>, load_wait: Duration) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}{HELP}\n> ", screen.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        // Pick up a load that finished while we waited for input.
        screen.sync();

        match line.trim().chars().next() {
            Some('q') => break,
            Some('r') => {
                screen.reload();
                screen.sync_timeout(load_wait);
            }
            Some(key) => match FeedAction::from_key(key) {
                Some(action) => {
                    if let Some(message) = screen.handle(action) {
                        writeln!(stdout, "{message}")?;
                    }
                }
                None => writeln!(stdout, "{HELP}")?,
            },
            None => {}
        }

        write!(stdout, "{}> ", screen.render())?;
        stdout.flush()?;
    }

    Ok(())
}
