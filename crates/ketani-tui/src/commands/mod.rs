// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use ketani_core::{pages::Page, policy::PolicyKind};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Jump to a page by name or route
    Page(Page),
    // Open the policy modal on the given policy
    Policy(PolicyKind),
    // Open search with the query prefilled
    Search(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "page" | "go" => {
                if rest.is_empty() {
                    return Err("usage: page <name|/route>".to_string());
                }
                Page::from_name(rest)
                    .map(Command::Page)
                    .ok_or_else(|| format!("unknown page: {rest}"))
            }
            "policy" => Ok(Command::Policy(PolicyKind::from_name(rest))),
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Page(page) => {
            s.navigate(page);
        }
        Command::Policy(kind) => {
            s.policy = Some(kind);
        }
        Command::Search(query) => {
            s.open_search();
            if let Some(search) = s.search.as_mut() {
                search.set_input(&query);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
        assert_eq!(Command::parse("q!"), Ok(Command::Quit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").is_err());
    }

    #[test]
    fn parse_page_by_name_or_route() {
        assert_eq!(Command::parse("page careers"), Ok(Command::Page(Page::Careers)));
        assert_eq!(Command::parse("page /hypermedia"), Ok(Command::Page(Page::Media)));
        assert_eq!(Command::parse("go About Us"), Ok(Command::Page(Page::About)));
        assert_eq!(
            Command::parse("page blog"),
            Err("unknown page: blog".to_string())
        );
        assert!(Command::parse("page").is_err());
    }

    #[test]
    fn parse_policy_defaults_to_privacy() {
        assert_eq!(
            Command::parse("policy"),
            Ok(Command::Policy(PolicyKind::Privacy))
        );
        assert_eq!(
            Command::parse("policy cookies"),
            Ok(Command::Policy(PolicyKind::Cookies))
        );
    }

    #[test]
    fn parse_search_keeps_the_query() {
        assert_eq!(
            Command::parse("search supply chain"),
            Ok(Command::Search("supply chain".to_string()))
        );
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
