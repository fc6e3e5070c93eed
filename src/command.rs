use crate::model::DevId;

#[derive(Clone, Debug)]
pub enum UiState {
    Normal,
    Insert(String),
    Rename(String),
    Command(String),
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Open(DevId),
}

impl Command {
    pub fn parse(cmd: &str) -> Result<Command, &'static str> {
        use self::Command::*;

        let cmd = cmd.trim();
        match cmd {
            "q" | "quit" => Ok(Quit),
            other => {
                // Anything else is a route to a developer: "open <id>" or a
                // bare id, like the /developers/:id URL it replaces.
                let id = if other.starts_with("open ") {
                    &other["open ".len()..]
                } else {
                    other
                };

                if let Ok(id) = id.trim().parse::<DevId>() {
                    Ok(Open(id))
                } else {
                    Err("no such command")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quit() {
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parses_routes() {
        assert_eq!(Command::parse("2").unwrap(), Command::Open(2));
        assert_eq!(Command::parse("open 3").unwrap(), Command::Open(3));
        assert_eq!(Command::parse("  open  12  ").unwrap(), Command::Open(12));
    }

    #[test]
    fn rejects_noise() {
        assert!(Command::parse("wobble").is_err());
        assert!(Command::parse("open bob").is_err());
        assert!(Command::parse("").is_err());
    }
}
