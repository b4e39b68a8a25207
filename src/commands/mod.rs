const COMMAND_PREFIX: char = ':';

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Categories,
    Continue,
    Filter(String),
    Guess(String),
    Hint,
    Mode(String),
    Next,
    Quit,
    Reveal,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Continue;
        }

        let command = match line.strip_prefix(COMMAND_PREFIX) {
            Some(command) => command,
            None => return Command::Guess(line.to_owned()),
        };

        let mut parts = command.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next().unwrap_or_default().trim().to_owned();
        match name.as_ref() {
            "categories" => Command::Categories,
            "filter" => Command::Filter(argument),
            "hint" => Command::Hint,
            "mode" => Command::Mode(argument),
            "next" => Command::Next,
            "quit" | "q" => Command::Quit,
            "reveal" => Command::Reveal,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_guess() {
        assert_eq!(Command::parse("  Rose Quartz \n"), Command::Guess("Rose Quartz".to_owned()));
    }

    #[test]
    fn blank_line_continues() {
        assert_eq!(Command::parse("   \n"), Command::Continue);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse(":hint"), Command::Hint);
        assert_eq!(Command::parse(":REVEAL"), Command::Reveal);
        assert_eq!(Command::parse(":mode easy"), Command::Mode("easy".to_owned()));
        assert_eq!(
            Command::parse(":filter  Metamorphic Rocks "),
            Command::Filter("Metamorphic Rocks".to_owned())
        );
        assert_eq!(Command::parse(":filter"), Command::Filter(String::new()));
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(Command::parse(":dance"), Command::Unknown(":dance".to_owned()));
    }
}
