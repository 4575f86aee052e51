//! Input checks applied by the UI before a note is created.
//!
//! The persistence layer stores whatever it is given; these helpers exist so
//! front-ends share one definition of an acceptable title.

use crate::{JotnotesError, Result};

/// Longest title, in characters, accepted by the note creation dialog.
pub const MAX_TITLE_CHARS: usize = 50;

/// Checks that `title` has at least one non-whitespace character and is no
/// longer than [`MAX_TITLE_CHARS`].
///
/// # Errors
///
/// Returns [`JotnotesError::ValidationFailed`] describing the first problem found.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(JotnotesError::ValidationFailed(
            "Enter at least 1 character in the note title".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(JotnotesError::ValidationFailed(format!(
            "Note title cannot be longer than {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_title() {
        assert!(validate_title("Shopping").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_blank_titles() {
        assert!(matches!(validate_title(""), Err(JotnotesError::ValidationFailed(_))));
        assert!(matches!(validate_title("   "), Err(JotnotesError::ValidationFailed(_))));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 50 Cyrillic letters are 100 bytes but still within the limit.
        let title = "я".repeat(MAX_TITLE_CHARS);
        assert!(validate_title(&title).is_ok());

        let too_long = "a".repeat(MAX_TITLE_CHARS + 1);
        assert!(validate_title(&too_long).is_err());
    }
}
