//! Chat command token recognised on the first line of a message.

use std::fmt;

use super::schema::RecordKind;

/// Command carried by the first line of an inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/start`: greeting and command overview.
    Start,
    /// `/help`: record templates and examples.
    Help,
    /// `/income` or `/expense`: append a record.
    Record(RecordKind),
    /// `/excel`: link to the tables.
    Excel,
    /// A slash command this bot does not know.
    Unknown(String),
    /// The first line does not start with `/`.
    NotACommand,
}

impl ChatCommand {
    /// Parses the command token from the first line of `text`.
    ///
    /// The token is matched case-insensitively and a `@botname` suffix is
    /// ignored, so `/Income@ledger_bot` is `/income`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybook::record::domain::{ChatCommand, RecordKind};
    ///
    /// assert_eq!(
    ///     ChatCommand::parse("/expense@ledger_bot\n24.12.2024"),
    ///     ChatCommand::Record(RecordKind::Expense)
    /// );
    /// assert_eq!(ChatCommand::parse("hello"), ChatCommand::NotACommand);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let first_line = text.lines().next().unwrap_or_default();
        let Some(token) = first_line.split_whitespace().next() else {
            return Self::NotACommand;
        };
        let Some(command) = token.strip_prefix('/') else {
            return Self::NotACommand;
        };

        let name = command
            .split_once('@')
            .map_or(command, |(name, _bot)| name)
            .to_ascii_lowercase();
        match name.as_str() {
            "start" => Self::Start,
            "help" => Self::Help,
            "income" => Self::Record(RecordKind::Income),
            "expense" => Self::Record(RecordKind::Expense),
            "excel" => Self::Excel,
            _ => Self::Unknown(name),
        }
    }
}

impl fmt::Display for ChatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("/start"),
            Self::Help => f.write_str("/help"),
            Self::Record(kind) => write!(f, "/{kind}"),
            Self::Excel => f.write_str("/excel"),
            Self::Unknown(name) => write!(f, "/{name}"),
            Self::NotACommand => f.write_str("(no command)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/start", ChatCommand::Start)]
    #[case("/help", ChatCommand::Help)]
    #[case("/income\n24.12.2024", ChatCommand::Record(RecordKind::Income))]
    #[case("/INCOME", ChatCommand::Record(RecordKind::Income))]
    #[case("  /expense  trailing words", ChatCommand::Record(RecordKind::Expense))]
    #[case("/excel@ledger_bot", ChatCommand::Excel)]
    #[case("/balance", ChatCommand::Unknown("balance".to_owned()))]
    #[case("income\n24.12.2024", ChatCommand::NotACommand)]
    #[case("", ChatCommand::NotACommand)]
    #[case("\n/income", ChatCommand::NotACommand)]
    fn parse_reads_only_the_first_token(#[case] text: &str, #[case] expected: ChatCommand) {
        assert_eq!(ChatCommand::parse(text), expected);
    }

    #[rstest]
    fn display_restores_the_slash() {
        assert_eq!(
            ChatCommand::Record(RecordKind::Expense).to_string(),
            "/expense"
        );
    }
}
