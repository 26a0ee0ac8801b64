//! Main menu entries and choice parsing.

use std::fmt;

/// Text shown before every prompt.
pub const MENU_TEXT: &str = "Menu:
0. Exit
1. List movies
2. Add movie
3. Delete movie
4. Update movie
5. Stats
6. Random movie
7. Search movie
8. Movies sorted by rating
9. Generate website";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    SortByRating,
    Export,
}

/// Why a menu entry could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuParseError {
    #[error("Please enter a number between 0 and 9.")]
    NotANumber,
    #[error("Invalid choice, please try again.")]
    OutOfRange(i64),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MenuParseError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| MenuParseError::NotANumber)?;
        Self::try_from(number)
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = MenuParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => MenuChoice::Exit,
            1 => MenuChoice::List,
            2 => MenuChoice::Add,
            3 => MenuChoice::Delete,
            4 => MenuChoice::Update,
            5 => MenuChoice::Stats,
            6 => MenuChoice::Random,
            7 => MenuChoice::Search,
            8 => MenuChoice::SortByRating,
            9 => MenuChoice::Export,
            other => return Err(MenuParseError::OutOfRange(other)),
        })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuChoice::Exit => "exit",
            MenuChoice::List => "list",
            MenuChoice::Add => "add",
            MenuChoice::Delete => "delete",
            MenuChoice::Update => "update",
            MenuChoice::Stats => "stats",
            MenuChoice::Random => "random",
            MenuChoice::Search => "search",
            MenuChoice::SortByRating => "sort",
            MenuChoice::Export => "export",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_entry() {
        let expected = [
            MenuChoice::Exit,
            MenuChoice::List,
            MenuChoice::Add,
            MenuChoice::Delete,
            MenuChoice::Update,
            MenuChoice::Stats,
            MenuChoice::Random,
            MenuChoice::Search,
            MenuChoice::SortByRating,
            MenuChoice::Export,
        ];
        for (i, choice) in expected.iter().enumerate() {
            assert_eq!(MenuChoice::parse(&i.to_string()).unwrap(), *choice);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse(" 5\n").unwrap(), MenuChoice::Stats);
    }

    #[test]
    fn test_parse_rejects_text() {
        let err = MenuChoice::parse("list").unwrap_err();
        assert_eq!(err, MenuParseError::NotANumber);
        assert_eq!(err.to_string(), "Please enter a number between 0 and 9.");
        assert_eq!(MenuChoice::parse("").unwrap_err(), MenuParseError::NotANumber);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            MenuChoice::parse("10").unwrap_err(),
            MenuParseError::OutOfRange(10)
        );
        assert_eq!(
            MenuChoice::parse("-1").unwrap_err().to_string(),
            "Invalid choice, please try again."
        );
    }

    #[test]
    fn test_menu_text_lists_all_entries() {
        for i in 0..=9 {
            assert!(MENU_TEXT.contains(&format!("{i}. ")));
        }
    }
}
