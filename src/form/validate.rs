//! Length field validation.

use crate::error::ValidationError;

use super::{MAX_LENGTH, MIN_LENGTH};

/// A length that passed validation, always within `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Check the free-text length input.
///
/// Anything that is not an integer counts as missing. Integers too large to
/// represent are too long, negative ones too short.
pub fn validate(input: &str) -> Result<PasswordLength, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required);
    }

    let value = match input.parse::<i64>() {
        Ok(v) => v,
        Err(_) => return Err(classify_unparsable(input)),
    };

    if value < MIN_LENGTH as i64 {
        Err(ValidationError::TooShort)
    } else if value > MAX_LENGTH as i64 {
        Err(ValidationError::TooLong)
    } else {
        Ok(PasswordLength(value as usize))
    }
}

fn classify_unparsable(input: &str) -> ValidationError {
    let (negative, digits) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        ValidationError::Required
    } else if negative {
        ValidationError::TooShort
    } else {
        ValidationError::TooLong
    }
}
