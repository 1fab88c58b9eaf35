//! Command line parsing
//!
//! Parses `shopsearch search --pages 2 cordless drill` and friends.

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the search window (no arguments)
    Gui,
    /// One-shot headless search: search [--pages N] [text...]
    Search { text: String, pages: usize },
    /// Print the effective configuration: config
    Config,
    /// Show help: help
    Help,
    /// Anything we could not make sense of
    Invalid { message: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let Some(first) = args.first() else {
            return Command::Gui;
        };

        match first.as_ref() {
            "search" | "s" => Self::parse_search(&args[1..]),
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {}", other),
            },
        }
    }

    fn parse_search<S: AsRef<str>>(args: &[S]) -> Self {
        let mut pages = 1;
        let mut words = Vec::new();
        let mut iter = args.iter().map(|s| s.as_ref());

        while let Some(arg) = iter.next() {
            match arg {
                "--pages" | "-p" => {
                    let value = iter.next().unwrap_or("");
                    match value.parse::<usize>() {
                        Ok(n) if n >= 1 => pages = n,
                        _ => {
                            return Command::Invalid {
                                message: format!("--pages expects a number of at least 1, got '{}'", value),
                            }
                        }
                    }
                }
                word => words.push(word),
            }
        }

        Command::Search {
            text: words.join(" "),
            pages,
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"Shopsearch - product catalog search

Usage: shopsearch [command]

Commands:
  (none)                        Open the search window
  search [--pages N] [TEXT...]  Search from the terminal, revealing N pages
  config                        Print the effective configuration
  help                          Show this help message

Environment:
  SHOPSEARCH_API_BASE, SHOPSEARCH_TEAM, SHOPSEARCH_SORT,
  SHOPSEARCH_PAGE_SIZE, SHOPSEARCH_DELAY_MS override the config file.
  RUST_LOG controls logging (e.g. RUST_LOG=shopsearch=debug)."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args: [&str; 0] = [];
        assert_eq!(Command::parse(&args), Command::Gui);
    }

    #[test]
    fn test_parse_search() {
        match Command::parse(&["search", "cordless", "drill"]) {
            Command::Search { text, pages } => {
                assert_eq!(text, "cordless drill");
                assert_eq!(pages, 1);
            }
            other => panic!("Expected Search command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_with_pages() {
        assert_eq!(
            Command::parse(&["search", "--pages", "3", "saw"]),
            Command::Search { text: "saw".to_string(), pages: 3 }
        );
        assert_eq!(
            Command::parse(&["s"]),
            Command::Search { text: String::new(), pages: 1 }
        );
    }

    #[test]
    fn test_parse_bad_pages() {
        assert!(matches!(Command::parse(&["search", "--pages", "0"]), Command::Invalid { .. }));
        assert!(matches!(Command::parse(&["search", "--pages"]), Command::Invalid { .. }));
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse(&["frobnicate"]) {
            Command::Invalid { message } => assert!(message.contains("frobnicate")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }
}
