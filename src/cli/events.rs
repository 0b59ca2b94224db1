//! UI events read by the window session
//!
//! One event per input line. Positions are 1-based, as displayed.

use std::str::FromStr;

use thiserror::Error;

/// A user action on the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on `#copy-from-clipboard`
    AddClicked,
    /// Click on `.remove-clipping` of the item at a position
    RemoveClicked(usize),
    /// Click on `.copy-clipping` of the item at a position
    CopyClicked(usize),
    /// Redraw the window
    Render,
    /// Dump the view model as JSON
    Json,
    /// Open or close the developer tools pane
    ToggleDevTools,
    Help,
    /// Close the window
    Quit,
}

/// Error when an input line is not a valid event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiEventParseError {
    #[error("Unknown command: \"{0}\". Type 'help' for a list of commands")]
    Unknown(String),

    #[error("'{0}' needs a clipping number, e.g. '{0} 1'")]
    MissingPosition(&'static str),

    #[error("Invalid clipping number: \"{0}\". Use the number shown next to the clipping")]
    InvalidPosition(String),
}

/// Help lines: (input, description)
pub const EVENT_HELP: &[(&str, &str)] = &[
    ("add | a", "Copy from Clipboard"),
    ("remove <n> | r <n>", "Remove clipping n"),
    ("copy <n> | c <n>", "Copy clipping n back to the clipboard"),
    ("list | l", "Show the window again"),
    ("json", "Print the window as JSON"),
    ("devtools", "Toggle the developer tools pane"),
    ("help | h | ?", "Show this help"),
    ("quit | q | exit", "Close the window"),
];

impl UiEvent {
    fn parse_position(command: &'static str, arg: Option<&str>) -> Result<usize, UiEventParseError> {
        let arg = arg.ok_or(UiEventParseError::MissingPosition(command))?;
        match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(UiEventParseError::InvalidPosition(arg.to_string())),
        }
    }
}

impl FromStr for UiEvent {
    type Err = UiEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        match command.as_str() {
            "" | "list" | "l" => Ok(Self::Render),
            "add" | "a" | "copy-from-clipboard" => Ok(Self::AddClicked),
            "remove" | "r" => Self::parse_position("remove", arg).map(Self::RemoveClicked),
            "copy" | "c" => Self::parse_position("copy", arg).map(Self::CopyClicked),
            "json" => Ok(Self::Json),
            "devtools" => Ok(Self::ToggleDevTools),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(UiEventParseError::Unknown(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_aliases() {
        for input in ["add", "a", "copy-from-clipboard", "  ADD  "] {
            assert_eq!(input.parse::<UiEvent>(), Ok(UiEvent::AddClicked), "{input}");
        }
    }

    #[test]
    fn parses_positions() {
        assert_eq!("remove 2".parse::<UiEvent>(), Ok(UiEvent::RemoveClicked(2)));
        assert_eq!("r 1".parse::<UiEvent>(), Ok(UiEvent::RemoveClicked(1)));
        assert_eq!("copy 3".parse::<UiEvent>(), Ok(UiEvent::CopyClicked(3)));
        assert_eq!("c 1".parse::<UiEvent>(), Ok(UiEvent::CopyClicked(1)));
    }

    #[test]
    fn blank_line_redraws() {
        assert_eq!("".parse::<UiEvent>(), Ok(UiEvent::Render));
        assert_eq!("   ".parse::<UiEvent>(), Ok(UiEvent::Render));
    }

    #[test]
    fn missing_position_is_an_error() {
        assert_eq!(
            "remove".parse::<UiEvent>(),
            Err(UiEventParseError::MissingPosition("remove"))
        );
    }

    #[test]
    fn zero_and_garbage_positions_are_errors() {
        assert_eq!(
            "copy 0".parse::<UiEvent>(),
            Err(UiEventParseError::InvalidPosition("0".to_string()))
        );
        assert_eq!(
            "copy two".parse::<UiEvent>(),
            Err(UiEventParseError::InvalidPosition("two".to_string()))
        );
    }

    #[test]
    fn unknown_command() {
        let err = "paste".parse::<UiEvent>().unwrap_err();
        assert_eq!(err, UiEventParseError::Unknown("paste".to_string()));
        assert!(err.to_string().contains("help"));
    }

    #[test]
    fn parses_window_commands() {
        assert_eq!("json".parse::<UiEvent>(), Ok(UiEvent::Json));
        assert_eq!("devtools".parse::<UiEvent>(), Ok(UiEvent::ToggleDevTools));
        assert_eq!("?".parse::<UiEvent>(), Ok(UiEvent::Help));
        assert_eq!("exit".parse::<UiEvent>(), Ok(UiEvent::Quit));
    }
}
