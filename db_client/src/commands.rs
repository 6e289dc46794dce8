use domino_bash::round::PlayFlags;
use std::fmt;

/// Commands the player can type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    IncreaseBet,
    DecreaseBet,
    Play(PlayFlags),
    Balance,
    Help,
    Quit,
}

pub const COMMANDS: &str = "\
COMMANDS:
  up | +                     Increase the bet one level
  down | -                   Decrease the bet one level
  bet [turbo] [instant]      Place a bet and play a round (alias: play)
  balance                    Show balance and current bet
  help                       Show this help
  quit                       Leave the game
";

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown option after `bet`.
    UnknownPlayFlag(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayFlag(flag) => write!(
                f,
                "Unknown bet option '{}'. Use 'bet', 'bet turbo' or 'bet instant'",
                flag
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a ClientCommand.
///
/// # Examples
///
/// ```
/// use db_client::commands::{parse_command, ClientCommand};
/// use domino_bash::round::PlayFlags;
///
/// assert_eq!(parse_command("up"), Ok(ClientCommand::IncreaseBet));
/// assert_eq!(parse_command("bet"), Ok(ClientCommand::Play(PlayFlags::default())));
/// assert!(matches!(parse_command("bet turbo"), Ok(ClientCommand::Play(PlayFlags { turbo: true, .. }))));
/// ```
pub fn parse_command(input: &str) -> Result<ClientCommand, ParseError> {
    let trimmed = input.trim();

    match trimmed {
        "up" | "+" => return Ok(ClientCommand::IncreaseBet),
        "down" | "-" => return Ok(ClientCommand::DecreaseBet),
        "balance" => return Ok(ClientCommand::Balance),
        "help" => return Ok(ClientCommand::Help),
        "quit" | "exit" => return Ok(ClientCommand::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"bet") | Some(&"play") => parse_play_command(&parts[1..]),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse the options of "bet [turbo] [instant]"
fn parse_play_command(options: &[&str]) -> Result<ClientCommand, ParseError> {
    let mut flags = PlayFlags::default();
    for option in options {
        match *option {
            "turbo" => flags.turbo = true,
            "instant" => flags.instant = true,
            other => return Err(ParseError::UnknownPlayFlag(other.to_string())),
        }
    }
    Ok(ClientCommand::Play(flags))
}
