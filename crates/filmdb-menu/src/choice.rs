// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

use filmdb_core::SearchField;

/// Highest valid menu number.
pub const EXIT_CHOICE: i64 = 4;

/// A parsed, validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search(SearchField),
    Exit,
}

/// Why a line typed at the choice prompt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    #[error("Invalid choice")]
    OutOfRange(i64),
}

impl MenuChoice {
    /// Parse one line from the choice prompt. Surrounding whitespace is
    /// ignored.
    pub fn parse(input: &str) -> Result<MenuChoice, ChoiceError> {
        let number: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        match number {
            1 => Ok(MenuChoice::Search(SearchField::Title)),
            2 => Ok(MenuChoice::Search(SearchField::Genre)),
            3 => Ok(MenuChoice::Search(SearchField::Actor)),
            EXIT_CHOICE => Ok(MenuChoice::Exit),
            other => Err(ChoiceError::OutOfRange(other)),
        }
    }
}
