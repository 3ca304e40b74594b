//! Command-line arguments
//!
//! Flags override the stored [`Settings`]; `--save` writes the merged result
//! back.

use crate::settings::Settings;
use chess_logic::Color;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "satranc",
    version,
    about = "Play chess in the terminal against a depth-limited alpha-beta engine"
)]
pub struct Cli {
    /// Engine search depth in plies
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Colour you play (white or black)
    #[arg(short, long)]
    pub color: Option<Color>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    pub fen: Option<String>,

    /// Print the engine's best move and score for the side to move, then exit
    #[arg(long)]
    pub analyze: bool,

    /// Store the effective settings for later sessions
    #[arg(long)]
    pub save: bool,

    /// Print the engine's score and node count after each of its moves
    #[arg(long)]
    pub hints: bool,

    /// Settings file to use instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

impl Cli {
    /// Overlay the flags that were given onto stored settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(depth) = self.depth {
            settings.depth = depth;
        }
        if let Some(color) = self.color {
            settings.player_color = color;
        }
        if self.hints {
            settings.show_hints = true;
        }
    }
}
