use super::error::TitleError;

/// Longest title accepted for todos and lists, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Validates a todo or list title and returns it trimmed.
pub fn validate_title(title: &str) -> Result<String, TitleError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(TitleError::TooLong);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Groceries \n"), Ok("Groceries".to_string()));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        assert_eq!(validate_title("   "), Err(TitleError::Empty));
        assert_eq!(validate_title(""), Err(TitleError::Empty));
    }

    #[test]
    fn test_title_length_counts_characters() {
        let at_limit = "é".repeat(MAX_TITLE_LENGTH);
        assert!(validate_title(&at_limit).is_ok());

        let over_limit = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(validate_title(&over_limit), Err(TitleError::TooLong));
    }
}
