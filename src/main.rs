use anyhow::Context;
use chess_logic::Position;
use clap::Parser;
use satranc::cli::Cli;
use satranc::session::{analyze, GameSession};
use satranc::settings::{settings_path, Settings};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = Settings::load_or_default(&path);
    cli.apply(&mut settings);

    if cli.save {
        settings
            .save_to(&path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    let mut start = match &cli.fen {
        Some(fen) => Position::from_fen(fen).context("invalid --fen position")?,
        None => Position::new(),
    };

    if cli.analyze {
        let outcome = analyze(&mut start, settings.depth).context("analysis failed")?;
        match outcome.best_move {
            Some(mv) => println!("bestmove {} score {}", mv, outcome.score),
            None => println!("no move, game over score {}", outcome.score),
        }
        info!(nodes = outcome.stats.nodes, "analysis finished");
        return Ok(());
    }

    let mut session = GameSession::new(
        settings.player_color,
        settings.depth,
        start,
        settings.show_hints,
    )
    .context("failed to start game")?;
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session.run(&mut input, &mut output)?;
    Ok(())
}
