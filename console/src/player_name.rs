pub const MAX_NAME_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NameError {
    #[display("You must enter a name.")]
    Empty,
    #[display("Your name must contain only letters.")]
    NotAlphabetic,
    #[display("Your name must be less than {} characters.", MAX_NAME_LENGTH)]
    TooLong,
}

impl std::error::Error for NameError {}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims surrounding whitespace, then requires 1 to 20 letters.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if !name.chars().all(char::is_alphabetic) {
            return Err(NameError::NotAlphabetic);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(NameError::TooLong);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_accepted_and_trimmed() {
        let name = PlayerName::parse("  Ada \n").unwrap();

        assert_eq!(name.as_str(), "Ada");
        assert_eq!(name.to_string(), "Ada");
    }

    #[test]
    fn test_non_ascii_letters_are_accepted() {
        assert!(PlayerName::parse("Zoë").is_ok());
        assert!(PlayerName::parse("Дмитрий").is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(PlayerName::parse("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_digits_and_spaces_are_rejected() {
        assert_eq!(PlayerName::parse("R2D2"), Err(NameError::NotAlphabetic));
        assert_eq!(PlayerName::parse("Ada Lovelace"), Err(NameError::NotAlphabetic));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(PlayerName::parse(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
        assert_eq!(
            PlayerName::parse(&"a".repeat(MAX_NAME_LENGTH + 1)),
            Err(NameError::TooLong)
        );
        assert_eq!(
            NameError::TooLong.to_string(),
            "Your name must be less than 20 characters."
        );
        assert!(PlayerName::parse(&"é".repeat(MAX_NAME_LENGTH)).is_ok());
    }
}
