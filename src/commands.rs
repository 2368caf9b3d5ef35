use crate::types::ProjectId;

use combine::error::ParseError;
use combine::parser::char::{alpha_num, letter, spaces};
use combine::{
    eof, many1, optional,
    stream::position,
    EasyParser, Parser, Stream,
};

/// A command typed into the command bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Projects,
    Back,
    Theme,
    Select(ProjectId),
    Mail,
    Web,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandParseError {
    UnknownCommand(String),
    InvalidArgument(Vec<String>),
    Unknown,
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::UnknownCommand(c) => write!(f, "Unknown command: {c}"),
            CommandParseError::InvalidArgument(args) => {
                write!(f, "Invalid argument: {}", args.join(" "))
            }
            CommandParseError::Unknown => write!(f, "Error parsing command"),
        }
    }
}

/// `<word> [<arg>]`, whitespace around either part is ignored.
fn command<Input>() -> impl Parser<Input, Output = (String, Option<String>)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        spaces().silent(),
        many1::<String, _, _>(letter()),
        spaces().silent(),
        optional(many1::<String, _, _>(alpha_num())),
        spaces().silent(),
        eof(),
    )
        .map(|(_, word, _, arg, _, _)| (word, arg))
}

pub(crate) fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let lower = input.to_ascii_lowercase();
    let ((word, arg), _) = command()
        .easy_parse(position::Stream::new(lower.as_str()))
        .map_err(|_| CommandParseError::Unknown)?;

    let no_arg = |c: Command| match &arg {
        Some(a) => Err(CommandParseError::InvalidArgument(vec![a.clone()])),
        None => Ok(c),
    };

    match word.as_str() {
        "projects" | "p" => no_arg(Command::Projects),
        "back" | "b" => no_arg(Command::Back),
        "theme" | "t" => no_arg(Command::Theme),
        "mail" | "m" => no_arg(Command::Mail),
        "web" | "w" => no_arg(Command::Web),
        "quit" | "q" => no_arg(Command::Quit),
        "select" | "s" => match &arg {
            Some(a) => a
                .parse::<ProjectId>()
                .map(Command::Select)
                .map_err(|_| CommandParseError::InvalidArgument(vec![a.clone()])),
            None => Err(CommandParseError::InvalidArgument(Vec::new())),
        },
        _ => Err(CommandParseError::UnknownCommand(word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_words_and_aliases() {
        assert_eq!(parse_command("projects"), Ok(Command::Projects));
        assert_eq!(parse_command("p"), Ok(Command::Projects));
        assert_eq!(parse_command("  BACK "), Ok(Command::Back));
        assert_eq!(parse_command("theme"), Ok(Command::Theme));
        assert_eq!(parse_command("m"), Ok(Command::Mail));
        assert_eq!(parse_command("web"), Ok(Command::Web));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn parses_select() {
        assert_eq!(parse_command("select 2"), Ok(Command::Select(2)));
        assert_eq!(parse_command("s 3"), Ok(Command::Select(3)));
    }

    #[test]
    fn select_needs_numeric_argument() {
        assert_eq!(
            parse_command("select"),
            Err(CommandParseError::InvalidArgument(vec![]))
        );
        assert_eq!(
            parse_command("select two"),
            Err(CommandParseError::InvalidArgument(vec!["two".to_string()]))
        );
    }

    #[test]
    fn rejects_unexpected_argument() {
        assert_eq!(
            parse_command("back 1"),
            Err(CommandParseError::InvalidArgument(vec!["1".to_string()]))
        );
    }

    #[test]
    fn rejects_unknown_and_garbage() {
        assert_eq!(
            parse_command("launch"),
            Err(CommandParseError::UnknownCommand("launch".to_string()))
        );
        assert_eq!(parse_command(""), Err(CommandParseError::Unknown));
        assert_eq!(parse_command("select 1 2"), Err(CommandParseError::Unknown));
    }
}
