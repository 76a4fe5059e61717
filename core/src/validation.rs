//! Name validation shared by create and update.

use crate::error::ValidationError;

/// Minimum number of characters in a todo name.
pub const NAME_MIN_CHARS: usize = 2;

/// Maximum number of characters in a todo name.
pub const NAME_MAX_CHARS: usize = 200;

/// Check that `name` is present and between `NAME_MIN_CHARS` and
/// `NAME_MAX_CHARS` characters long, inclusive.
///
/// Length is measured in `char`s, so multi-byte names are not penalised for
/// their UTF-8 encoding. The name is not trimmed.
pub fn validate_name(name: Option<&str>) -> Result<&str, ValidationError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };

    let actual = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&actual) {
        return Err(ValidationError::NameLength {
            min: NAME_MIN_CHARS,
            max: NAME_MAX_CHARS,
            actual,
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn missing_and_empty_names_are_required() {
        assert_eq!(validate_name(None), Err(ValidationError::MissingName));
        assert_eq!(validate_name(Some("")), Err(ValidationError::MissingName));
    }

    #[test]
    fn boundaries() {
        assert!(validate_name(Some("a")).is_err());
        assert!(validate_name(Some("ab")).is_ok());
        assert!(validate_name(Some(&"x".repeat(200))).is_ok());
        assert_eq!(
            validate_name(Some(&"x".repeat(201))),
            Err(ValidationError::NameLength {
                min: 2,
                max: 200,
                actual: 201
            })
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 200 two-byte characters, 400 bytes.
        let name = "é".repeat(200);
        assert_eq!(validate_name(Some(&name)), Ok(name.as_str()));
    }

    #[test]
    fn length_message_is_readable() {
        let err = validate_name(Some("a")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "name must be between 2 and 200 characters, got 1"
        );
    }

    proptest! {
        #[test]
        fn accepts_every_length_in_range(len in NAME_MIN_CHARS..=NAME_MAX_CHARS) {
            let name = "n".repeat(len);
            prop_assert!(validate_name(Some(&name)).is_ok());
        }

        #[test]
        fn rejects_every_length_above_range(len in (NAME_MAX_CHARS + 1)..1_000usize) {
            let name = "n".repeat(len);
            let rejected = matches!(
                validate_name(Some(&name)),
                Err(ValidationError::NameLength { .. })
            );
            prop_assert!(rejected);
        }
    }
}
