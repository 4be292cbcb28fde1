use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_channel_videos::channel_list::{ChannelSource, JsonChannelList};
use youtube_channel_videos::config::{Args, Config};
use youtube_channel_videos::enumerator::Enumerator;
use youtube_channel_videos::export_channels;
use youtube_channel_videos::report::{JsonWorkbook, ReportSink};
use youtube_channel_videos::resolver::Resolver;
use youtube_channel_videos::youtube_api::YouTubeClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    // no key, no requests
    let config = Config::from_args(Args::parse())?;

    let channels = JsonChannelList::new(&config.channels_path)
        .list_channels()
        .await
        .context("load channel list")?;
    tracing::info!(channels = channels.len(), "loaded channel list");

    let client = YouTubeClient::from_config(&config)?;
    let resolver = Resolver::new(client.clone());
    let enumerator = Enumerator::new(client);

    let mut report = JsonWorkbook::new(&config.output_path);
    let summary = export_channels(&resolver, &enumerator, &channels, &mut report).await;
    report.finish().await.context("save report")?;

    tracing::info!(
        path = %report.path().display(),
        exported = summary.exported,
        skipped = summary.skipped,
        videos = summary.videos,
        "done"
    );

    Ok(())
}
