//! Content rules shared by create and update

use thiserror::Error;

use crate::constants::MAX_TWEET_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content must not be empty")]
    Empty,
    #[error("content must be at most {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

/// Check tweet content. Surrounding whitespace is ignored for the checks
/// but the content itself is stored exactly as sent.
pub fn validate_content(raw: &str) -> Result<(), ContentError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(ContentError::Empty);
    }

    // Length is counted in chars, not bytes
    let len = content.chars().count();
    if len > MAX_TWEET_LENGTH {
        return Err(ContentError::TooLong {
            len,
            max: MAX_TWEET_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_whitespace_is_not_counted() {
        assert_eq!(validate_content("  hello \n"), Ok(()));

        let padded = format!("  {}  ", "a".repeat(MAX_TWEET_LENGTH));
        assert_eq!(validate_content(&padded), Ok(()));
    }

    #[test]
    fn test_rejects_blank() {
        assert_eq!(validate_content(""), Err(ContentError::Empty));
        assert_eq!(validate_content(" \t\n"), Err(ContentError::Empty));
    }

    #[test]
    fn test_length_counts_chars() {
        let at_limit = "é".repeat(MAX_TWEET_LENGTH);
        assert!(validate_content(&at_limit).is_ok());

        let over = "a".repeat(MAX_TWEET_LENGTH + 1);
        assert_eq!(
            validate_content(&over),
            Err(ContentError::TooLong {
                len: MAX_TWEET_LENGTH + 1,
                max: MAX_TWEET_LENGTH
            })
        );
    }
}
