//! Human-versus-engine game session
//!
//! [`GameSession`] owns the position and the engine. Its operations are usable
//! on their own, and [`GameSession::run`] drives them from a line-based
//! reader/writer pair (stdin/stdout in the binary, in-memory buffers in tests).

use crate::error::{GameError, GameResult};
use crate::render::{render_board, render_targets};
use chess_engine::{Engine, EngineConfig, SearchOutcome};
use chess_logic::{ChessLogicError, Color, Move, Outcome, Position, Square};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const HELP: &str = "\
Commands:
  e2e4, e7e8q     play a move in UCI notation (promotion defaults to queen)
  moves <square>  list legal destinations of the piece on <square> (x = capture)
  undo            take back your last move and the engine's reply
  fen             print the current position as FEN
  restart         start a new game and choose a colour
  help            show this message
  quit            leave the game";

const COLOUR_PROMPT: &str = "Choose your colour (white/black): ";

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Moves(Square),
    Undo,
    Fen,
    Restart,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> GameResult<Command> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(GameError::UnknownCommand {
                input: String::new(),
            });
        };
        let command = match (first.to_ascii_lowercase().as_str(), words.next()) {
            ("moves", Some(square)) => Command::Moves(square.parse()?),
            ("undo", None) => Command::Undo,
            ("fen", None) => Command::Fen,
            ("restart", None) => Command::Restart,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            (word, None) if looks_like_uci(word) => Command::Move(word.to_string()),
            _ => {
                return Err(GameError::UnknownCommand {
                    input: line.trim().to_string(),
                })
            }
        };
        Ok(command)
    }
}

fn looks_like_uci(word: &str) -> bool {
    let bytes = word.as_bytes();
    (bytes.len() == 4 || bytes.len() == 5)
        && bytes[0].is_ascii_alphabetic()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_alphabetic()
        && bytes[3].is_ascii_digit()
}

/// Colour answer to the restart prompt; anything unrecognised means White
pub fn parse_colour_choice(answer: &str) -> Color {
    match answer.trim().to_ascii_lowercase().as_str() {
        "black" | "b" => Color::Black,
        _ => Color::White,
    }
}

/// Message announcing how the game ended, from the player's point of view
pub fn outcome_message(outcome: Outcome, player: Color) -> &'static str {
    match outcome {
        Outcome::Checkmate { winner } if winner == player => "You won!",
        Outcome::Checkmate { .. } => "You lost!",
        Outcome::Stalemate => "Draw!",
        Outcome::InsufficientMaterial => "Draw! Insufficient material.",
    }
}

/// Best move and score for the side to move
pub fn analyze(position: &mut Position, depth: u32) -> GameResult<SearchOutcome<Move>> {
    let engine = Engine::new(EngineConfig::new(depth, position.turn())?)?;
    Ok(engine.search(position)?)
}

pub struct GameSession {
    position: Position,
    player: Color,
    depth: u32,
    engine: Engine,
    show_hints: bool,
}

impl GameSession {
    /// Session where the engine plays the colour opposite `player`
    pub fn new(player: Color, depth: u32, start: Position, show_hints: bool) -> GameResult<Self> {
        let engine = Engine::new(EngineConfig::new(depth, player.other())?)?;
        info!(player = %player, depth, "new game");
        Ok(GameSession {
            position: start,
            player,
            depth,
            engine,
            show_hints,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn player(&self) -> Color {
        self.player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome()
    }

    /// Play the human's move given in UCI notation
    pub fn play_human(&mut self, notation: &str) -> GameResult<Move> {
        if self.position.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.position.turn() != self.player {
            return Err(GameError::NotYourTurn);
        }
        let mv = self
            .position
            .parse_uci(notation)
            .map_err(|err| match err {
                ChessLogicError::IllegalMove { .. } | ChessLogicError::InvalidUci { .. } => {
                    GameError::InvalidMove {
                        message: err.to_string(),
                    }
                }
                other => GameError::Rules(other),
            })?;
        self.position.play(mv)?;
        debug!(%mv, "player moved");
        Ok(mv)
    }

    /// Let the engine move if it is its turn and the game is still running
    pub fn play_engine(&mut self) -> GameResult<Option<SearchOutcome<Move>>> {
        if self.position.is_game_over() || self.position.turn() != self.engine.side() {
            return Ok(None);
        }
        let outcome = self.engine.search(&mut self.position)?;
        let Some(mv) = outcome.best_move else {
            return Ok(None);
        };
        self.position.play(mv)?;
        debug!(%mv, score = outcome.score, "engine moved");
        Ok(Some(outcome))
    }

    /// Take back the last full move pair, returning how many plies were undone
    ///
    /// Stops early when it reaches the player's turn, so a game that ended on
    /// the player's move only loses that move.
    pub fn undo(&mut self) -> GameResult<usize> {
        if self.position.history_len() == 0 {
            return Err(GameError::NothingToUndo);
        }
        let mut undone = 0;
        loop {
            self.position.undo()?;
            undone += 1;
            if self.position.turn() == self.player || self.position.history_len() == 0 {
                break;
            }
        }
        Ok(undone)
    }

    /// Legal moves of the piece on `from`
    pub fn moves_from(&self, from: Square) -> Vec<Move> {
        self.position.legal_moves_from(from)
    }

    /// Fresh game from the initial position with the player on `player`
    pub fn restart(&mut self, player: Color) -> GameResult<()> {
        *self = GameSession::new(player, self.depth, Position::new(), self.show_hints)?;
        Ok(())
    }

    /// Interactive loop; returns when the input ends or the player quits
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> GameResult<()> {
        writeln!(out, "You play {}. Type 'help' for commands.", self.player)?;
        self.show_board(out)?;
        self.engine_turn(out)?;

        loop {
            if let Some(outcome) = self.outcome() {
                writeln!(out, "{}", outcome_message(outcome, self.player))?;
                writeln!(out, "Play again? Type 'quit' to leave.")?;
                match read_line(input, out, COLOUR_PROMPT)? {
                    Some(answer) if !is_quit(&answer) => {
                        self.start_over(parse_colour_choice(&answer), out)?;
                        continue;
                    }
                    _ => break,
                }
            }

            let prompt = format!("{} to move> ", self.position.turn());
            let Some(line) = read_line(input, out, &prompt)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{}", HELP)?,
                Command::Fen => writeln!(out, "{}", self.position.to_fen())?,
                Command::Moves(from) => {
                    writeln!(out, "{}", render_targets(from, &self.moves_from(from)))?
                }
                Command::Undo => match self.undo() {
                    Ok(plies) => {
                        writeln!(out, "Took back {} ply(s)", plies)?;
                        self.show_board(out)?;
                        self.engine_turn(out)?;
                    }
                    Err(err) => writeln!(out, "{}", err)?,
                },
                Command::Restart => {
                    let Some(answer) = read_line(input, out, COLOUR_PROMPT)? else {
                        break;
                    };
                    self.start_over(parse_colour_choice(&answer), out)?;
                }
                Command::Move(notation) => match self.play_human(&notation) {
                    Ok(mv) => {
                        writeln!(out, "You played {}", mv)?;
                        self.show_board(out)?;
                        self.engine_turn(out)?;
                    }
                    Err(err) => writeln!(out, "{}", err)?,
                },
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    fn start_over<W: Write>(&mut self, player: Color, out: &mut W) -> GameResult<()> {
        self.restart(player)?;
        writeln!(out, "New game. You play {}.", self.player)?;
        self.show_board(out)?;
        self.engine_turn(out)
    }

    fn engine_turn<W: Write>(&mut self, out: &mut W) -> GameResult<()> {
        if let Some(outcome) = self.play_engine()? {
            if let Some(mv) = outcome.best_move {
                writeln!(out, "Engine plays {}", mv)?;
            }
            if self.show_hints {
                writeln!(
                    out,
                    "Engine score {} after {} nodes",
                    outcome.score, outcome.stats.nodes
                )?;
            }
            self.show_board(out)?;
        }
        Ok(())
    }

    fn show_board<W: Write>(&self, out: &mut W) -> GameResult<()> {
        write!(out, "{}", render_board(&self.position, self.player))?;
        Ok(())
    }
}

fn is_quit(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "quit" | "exit" | "q" | "no" | "n"
    )
}

/// Prompt and read one line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> GameResult<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("e2e4").unwrap(),
            Command::Move("e2e4".to_string())
        );
        assert_eq!(
            Command::parse("e7e8q").unwrap(),
            Command::Move("e7e8q".to_string())
        );
        assert_eq!(
            Command::parse("moves e2").unwrap(),
            Command::Moves("e2".parse().unwrap())
        );
        assert_eq!(Command::parse("  UNDO ").unwrap(), Command::Undo);
        assert_eq!(Command::parse("fen").unwrap(), Command::Fen);
        assert_eq!(Command::parse("restart").unwrap(), Command::Restart);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Command::parse("castle please"),
            Err(GameError::UnknownCommand { .. })
        ));
        assert!(matches!(
            Command::parse("moves z9"),
            Err(GameError::Rules(ChessLogicError::InvalidSquare { .. }))
        ));
        assert!(Command::parse("undo twice").is_err());
    }

    #[test]
    fn test_colour_choice_defaults_to_white() {
        assert_eq!(parse_colour_choice("black"), Color::Black);
        assert_eq!(parse_colour_choice(" B "), Color::Black);
        assert_eq!(parse_colour_choice("white"), Color::White);
        assert_eq!(parse_colour_choice("purple"), Color::White);
        assert_eq!(parse_colour_choice(""), Color::White);
    }

    #[test]
    fn test_outcome_messages() {
        let mate_by_white = Outcome::Checkmate {
            winner: Color::White,
        };
        assert_eq!(outcome_message(mate_by_white, Color::White), "You won!");
        assert_eq!(outcome_message(mate_by_white, Color::Black), "You lost!");
        assert_eq!(outcome_message(Outcome::Stalemate, Color::White), "Draw!");
        assert_eq!(
            outcome_message(Outcome::InsufficientMaterial, Color::Black),
            "Draw! Insufficient material."
        );
    }

    #[test]
    fn test_engine_waits_for_its_turn() {
        let mut session = GameSession::new(Color::White, 2, Position::new(), false).unwrap();
        assert!(session.play_engine().unwrap().is_none());
        assert_eq!(session.position().history_len(), 0);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        assert!(matches!(
            GameSession::new(Color::White, 0, Position::new(), false),
            Err(GameError::Engine(_))
        ));
    }
}
