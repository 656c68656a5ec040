use crate::error::ValidationError;

pub const MAX_WORD_LEN: usize = 50;

/// Check raw user input, returning the trimmed search term with its casing kept
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    // Character rules are case-insensitive
    let folded = trimmed.to_ascii_lowercase();
    if !folded.chars().all(is_allowed) {
        return Err(ValidationError::InvalidCharacters);
    }

    if trimmed.chars().count() > MAX_WORD_LEN {
        return Err(ValidationError::TooLong { max: MAX_WORD_LEN });
    }

    Ok(trimmed.to_string())
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, ' ' | '-' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_casing_and_trims() {
        assert_eq!(validate("  Sunset ").unwrap(), "Sunset");
        assert_eq!(validate("o'clock").unwrap(), "o'clock");
        assert_eq!(validate("ice-cream cone").unwrap(), "ice-cream cone");
    }

    #[test]
    fn empty_after_trim() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   \t\n"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn length_boundary() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);

        assert_eq!(validate(&fifty).unwrap(), fifty);
        assert_eq!(
            validate(&format!("  {fifty}  ")).unwrap(),
            fifty,
            "surrounding whitespace does not count"
        );
        assert_eq!(
            validate(&fifty_one),
            Err(ValidationError::TooLong { max: MAX_WORD_LEN })
        );
    }

    #[test]
    fn rejects_anything_outside_the_alphabet() {
        for input in ["cat1", "dog!", "naïve", "a_b", "x/y", "tab\tinside", "über", "猫", "\u{212A}elvin"] {
            assert_eq!(
                validate(input),
                Err(ValidationError::InvalidCharacters),
                "{input:?}"
            );
        }
    }

    #[test]
    fn invalid_characters_win_over_length() {
        let long = format!("{}7", "a".repeat(60));
        assert_eq!(validate(&long), Err(ValidationError::InvalidCharacters));
    }
}
