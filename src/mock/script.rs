use thiserror::Error;

/// Error when parsing a terminal command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
    #[error("usage: s <pattern>")]
    MissingPattern,
}

/// A command typed into the interactive terminal player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stop the current pattern and move to the next one.
    Next,
    /// Stop the current pattern and switch to the named one.
    Select(String),
    /// Stop and quit.
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Format:
    /// - `n` or an empty line: next pattern
    /// - `s <name>`: select a pattern by name
    /// - `q`: quit
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None | Some("n") => Ok(Self::Next),
            Some("q") => Ok(Self::Quit),
            Some("s") => parts
                .next()
                .map(|name| Self::Select(name.to_string()))
                .ok_or(ParseError::MissingPattern),
            Some(other) => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("n", Command::Next ; "next")]
    #[test_case("", Command::Next ; "empty line")]
    #[test_case("   \n", Command::Next ; "whitespace only")]
    #[test_case("q", Command::Quit ; "quit")]
    #[test_case("s ice", Command::Select("ice".to_string()) ; "select")]
    #[test_case("  s   Dragon \n", Command::Select("Dragon".to_string()) ; "select with padding")]
    fn test_parse_command(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), Ok(expected));
    }

    #[test]
    fn test_parse_select_without_name() {
        assert_eq!(Command::parse("s"), Err(ParseError::MissingPattern));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("x"),
            Err(ParseError::UnknownCommand("x".to_string()))
        );
    }
}
