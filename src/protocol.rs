//! Line-oriented text front end for driving a game from a terminal or a GUI.
//!
//! The framing follows the Go Text Protocol: each line is an optional numeric
//! id, a command and its arguments. Successful responses start with `=`,
//! failures with `?`, and every response is followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `new` / `clear_board` - Start a new game
//! - `play <coord>` - Place a piece for the side to move (e.g. `play a2`)
//! - `legal` - List legal cells for the side to move
//! - `turn` - Side to move
//! - `score` - Black and White piece counts
//! - `status` - `in_progress` or the final result
//! - `showboard` - Print the board
//!
//! This module only translates text to engine calls and engine results back
//! to text; all rules live in [`crate::engine`].

use std::io::{self, BufRead, Write};

use crate::board::Point;
use crate::engine::{GameEngine, GameStatus, MoveResult};
use crate::playout::move_report;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "new",
    "play",
    "quit",
    "score",
    "showboard",
    "status",
    "turn",
    "version",
];

/// A single game session behind the text protocol.
pub struct Session {
    engine: GameEngine,
    /// Report moves and game events on stderr
    verbose: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session on a new game with diagnostics off.
    pub fn new() -> Self {
        Self::with_verbose(false)
    }

    /// Create a session on a new game, optionally reporting events on stderr.
    pub fn with_verbose(verbose: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            verbose,
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
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

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" | "clear_board" => {
                self.engine.initialize();
                if self.verbose {
                    eprintln!("new game, {} to move", self.engine.current_player());
                }
                (true, String::new())
            }

            "play" => {
                let Some(vertex) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let pt = match vertex.parse::<Point>() {
                    Ok(pt) => pt,
                    Err(e) => return (false, e.to_string()),
                };
                match self.engine.apply_move(pt) {
                    Ok(result) => {
                        if self.verbose {
                            for line in move_report(&result) {
                                eprintln!("{line}");
                            }
                        }
                        (true, describe_move(&result))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "legal" => {
                let moves = self.engine.legal_moves(self.engine.current_player());
                let list: Vec<String> = moves.iter().map(Point::to_string).collect();
                (true, list.join(" "))
            }

            "turn" => (true, self.engine.current_player().to_string()),

            "score" => {
                let score = self.engine.compute_score();
                (true, format!("{} {}", score.black, score.white))
            }

            "status" => match self.engine.status() {
                GameStatus::InProgress => (true, "in_progress".to_string()),
                GameStatus::Terminal(winner) => (true, format!("game over: {winner}")),
            },

            "showboard" => (true, format!("\n{}", self.engine.board())),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Render a move outcome: flips, then the pass or end-of-game notice.
fn describe_move(result: &MoveResult) -> String {
    let flipped: Vec<String> = result.flipped.iter().map(Point::to_string).collect();
    let notice = match (result.winner, result.skipped()) {
        (Some(winner), _) => format!("game over: {winner}"),
        (None, Some(skipped)) => format!(
            "{skipped} passes, {} to move",
            result.current_player
        ),
        (None, None) => format!("{} to move", result.current_player),
    };
    format!("flipped {}; {notice}", flipped.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    /// Session on a position given as text rows.
    fn setpos(rows: &str, to_move: Color) -> Session {
        Session {
            engine: GameEngine::from_position(rows.parse().unwrap(), to_move),
            verbose: false,
        }
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = Session::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = Session::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut session = Session::new();
        let (success, response) = session.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "othello4");
    }

    #[test]
    fn test_known_command() {
        let mut session = Session::new();

        let (success, response) = session.execute("known_command", &["play"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = session.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_play_and_new() {
        let mut session = Session::new();

        let (success, response) = session.execute("play", &["a2"]);
        assert!(success);
        assert_eq!(response, "flipped b2; White to move");
        assert_eq!(session.execute("score", &[]), (true, "4 1".to_string()));

        let (success, _) = session.execute("new", &[]);
        assert!(success);
        assert_eq!(session.execute("score", &[]), (true, "2 2".to_string()));
        assert_eq!(session.execute("turn", &[]), (true, "Black".to_string()));
    }

    #[test]
    fn test_play_rejects_bad_input() {
        let mut session = Session::new();

        let (success, response) = session.execute("play", &["a1"]);
        assert!(!success);
        assert_eq!(response, "illegal move a1: nothing to capture");

        let (success, response) = session.execute("play", &["b2"]);
        assert!(!success);
        assert_eq!(response, "illegal move b2: cell is not empty");

        let (success, _) = session.execute("play", &["z9"]);
        assert!(!success);

        let (success, _) = session.execute("play", &[]);
        assert!(!success);
    }

    #[test]
    fn test_play_reports_pass() {
        let mut session = setpos("XO..\nOO..\n....\n....", Color::Black);
        let (success, response) = session.execute("play", &["a3"]);
        assert!(success);
        assert_eq!(response, "flipped a2; White passes, Black to move");
        assert_eq!(session.execute("turn", &[]), (true, "Black".to_string()));
        assert_eq!(session.execute("status", &[]), (true, "in_progress".to_string()));
    }

    #[test]
    fn test_play_reports_game_over() {
        let mut session = setpos("XO..\n....\n....\n....", Color::Black);
        let (success, response) = session.execute("play", &["c1"]);
        assert!(success);
        assert_eq!(response, "flipped b1; game over: Black wins");
        assert!(!response.contains("to move"));
        assert_eq!(
            session.execute("status", &[]),
            (true, "game over: Black wins".to_string())
        );

        let (success, response) = session.execute("play", &["d1"]);
        assert!(!success);
        assert_eq!(response, "game is over");
    }

    #[test]
    fn test_play_reports_draw() {
        let mut session = setpos(".OXX\nXXXX\nOOOO\nOOOO", Color::Black);
        let (success, response) = session.execute("play", &["a1"]);
        assert!(success);
        assert_eq!(response, "flipped b1; game over: Draw");
    }

    #[test]
    fn test_legal_command() {
        let mut session = Session::new();
        let (success, response) = session.execute("legal", &[]);
        assert!(success);
        assert_eq!(response, "b1 a2 d3 c4");
    }

    #[test]
    fn test_run_loop() {
        let input = b"# comment\n1 play a2\n\n2 status\nscore\nquit\nturn\n";
        let mut output = Vec::new();
        let mut session = Session::new();
        session.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "=1 flipped b2; White to move\n\n=2 in_progress\n\n= 4 1\n\n= \n\n"
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new();
        let (success, response) = session.execute("genmove", &["black"]);
        assert!(!success);
        assert_eq!(response, "unknown command: genmove");
    }
}
