//! Go Text Protocol (GTP) front end for the rules engine.
//!
//! Lets a GUI such as Sabaki or GoGui use the engine as a referee: moves
//! are validated and captures resolved here, but the engine never
//! generates moves of its own.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Set board size (1..=25) and clear the board
//! - `clear_board` - Reset the board to empty
//! - `play <color> <vertex>` - Play a move for the player to move
//! - `undo` - Take back the last move
//! - `showboard` - Text diagram of the board
//! - `captures <color>` - Stones captured by a color
//! - `showstate` - JSON view of the board (extension)

use std::io::{BufRead, Write};

use anyhow::{ensure, Result};
use log::debug;

use crate::board::{Board, Color};
use crate::constants::MAX_GTP_SIZE;
use crate::coord::{parse_vertex, vertex_string};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "showstate",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

impl GtpEngine {
    /// Create an engine with an empty board of `size`.
    pub fn new(size: usize) -> Result<Self> {
        ensure!(
            (1..=MAX_GTP_SIZE).contains(&size),
            "board size {size} cannot be addressed in GTP (1..={MAX_GTP_SIZE})"
        );
        Ok(Self {
            board: Board::new(size)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Strip comments and skip empty lines
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("gtp <- {command_line}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(size) if (1..=MAX_GTP_SIZE).contains(&size) => match Board::new(size) {
                        Ok(board) => {
                            self.board = board;
                            (true, String::new())
                        }
                        Err(err) => (false, err.to_string()),
                    },
                    Ok(_) => (false, "unacceptable size".to_string()),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.reset();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.board.to_move() {
                    return (false, format!("illegal move: {} to play", self.board.to_move()));
                }
                match parse_vertex(args[1], self.board.size()) {
                    Ok(None) => {
                        self.board.pass();
                        (true, String::new())
                    }
                    Ok(Some(pt)) => match self.board.play(pt) {
                        Ok(_) => (true, String::new()),
                        Err(err) => (false, err.to_string()),
                    },
                    Err(err) => (false, err.to_string()),
                }
            }

            "undo" => {
                if self.board.undo() {
                    (true, String::new())
                } else {
                    (false, "cannot undo".to_string())
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "captures" => {
                let Some(color) = args.first().copied().and_then(parse_color) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.board.captures().get(color).to_string())
            }

            "showstate" => match self.board.to_json() {
                Ok(json) => (true, json),
                Err(err) => (false, err.to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn reset(&mut self) {
        if let Ok(board) = Board::new(self.board.size()) {
            self.board = board;
        }
    }

    /// Last move in vertex notation, if any.
    pub fn last_vertex(&self) -> Option<String> {
        self.board
            .last_move()
            .map(|mv| vertex_string(mv.point, self.board.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_unaddressable_size() {
        assert!(GtpEngine::new(26).is_err());
        assert!(GtpEngine::new(0).is_err());
    }

    #[test]
    fn test_protocol_version() {
        let mut engine = GtpEngine::new(9).unwrap();
        let (success, response) = engine.execute("protocol_version", &[]);
        assert!(success);
        assert_eq!(response, "2");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::new(9).unwrap();
        assert_eq!(engine.execute("known_command", &["play"]), (true, "true".to_string()));
        assert_eq!(engine.execute("known_command", &["genmove"]), (true, "false".to_string()));
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::new(9).unwrap();
        let (success, _) = engine.execute("boardsize", &["13"]);
        assert!(success);
        assert_eq!(engine.board().size(), 13);

        let (success, _) = engine.execute("boardsize", &["26"]);
        assert!(!success);
        let (success, _) = engine.execute("boardsize", &["0"]);
        assert!(!success);
    }

    #[test]
    fn test_play_capture_and_undo() {
        let mut engine = GtpEngine::new(9).unwrap();
        assert!(engine.execute("play", &["black", "A9"]).0);
        assert!(engine.execute("play", &["white", "B9"]).0);
        assert!(engine.execute("play", &["black", "pass"]).0);
        assert!(engine.execute("play", &["white", "A8"]).0);
        assert_eq!(engine.board().stone_at(0), None);
        assert_eq!(engine.execute("captures", &["w"]), (true, "1".to_string()));
        assert_eq!(engine.last_vertex().as_deref(), Some("A8"));

        assert!(engine.execute("undo", &[]).0);
        assert_eq!(engine.board().stone_at(0), Some(Color::Black));
    }

    #[test]
    fn test_play_rejects_wrong_color_and_occupied() {
        let mut engine = GtpEngine::new(9).unwrap();
        assert!(!engine.execute("play", &["white", "D4"]).0);
        assert!(engine.execute("play", &["black", "D4"]).0);
        let (success, msg) = engine.execute("play", &["white", "D4"]);
        assert!(!success);
        assert!(msg.contains("not empty"), "got '{msg}'");
    }

    #[test]
    fn test_run_loop() {
        let mut engine = GtpEngine::new(9).unwrap();
        let input = b"1 name\n# comment\nplay black E5\n2 showstate\nquit\nname\n";
        let mut output = Vec::new();
        engine.run(&input[..], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("=1 goban-rules\n\n"));
        assert!(text.contains("=2 {\"size\":9"));
        // Nothing after quit is answered.
        assert_eq!(text.matches("goban-rules").count(), 1);
    }
}
