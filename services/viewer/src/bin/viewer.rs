//! services/viewer/src/bin/viewer.rs

use clap::Parser;
use interrogation_core::{Transcript, ViewerSession};
use std::sync::Arc;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use viewer_lib::{
    adapters::{FsTranscriptSource, TracingSink},
    cli::Cli,
    config::Config,
    error::ViewerError,
    interactive,
    render::{self, GroupLabels},
};

#[tokio::main]
async fn main() -> Result<(), ViewerError> {
    // --- 1. Parse Arguments, Load Configuration & Set Up Logging ---
    // Arguments come first so `--help` works even with a broken environment.
    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Opening {}...", cli.transcript.display());

    // --- 2. Load the Transcript ---
    let sink = Arc::new(TracingSink);
    let source = FsTranscriptSource::new(&cli.transcript);
    let transcript = Transcript::load(&source, sink.as_ref()).await?;

    let mut stdout = tokio::io::stdout();
    if cli.speakers {
        let mut listing = String::new();
        for speaker in transcript.speakers() {
            listing.push_str(&speaker.display());
            listing.push('\n');
        }
        stdout.write_all(listing.as_bytes()).await?;
        stdout.flush().await?;
        return Ok(());
    }

    // --- 3. Build the Session from the Requested View ---
    let state = cli.view_state()?;
    let mut session = ViewerSession::with_state(transcript, state, sink);
    let labels = GroupLabels::new(config.group_a_label.clone(), config.group_b_label.clone());

    // --- 4. Render Once, or Serve Commands ---
    if cli.interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        interactive::run(&mut session, &labels, stdin, stdout).await?;
        return Ok(());
    }

    let format = cli.format.unwrap_or(config.format);
    info!(
        "Rendering {} of {} lines as {}",
        session.render_records().len(),
        session.transcript().len(),
        format
    );
    let output = render::render(format, session.render_records(), &labels)?;
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
