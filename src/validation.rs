use std::ops::RangeInclusive;

use crate::error::{Result, RosterError};
use crate::model::Birthdate;

pub const KIT_NUMBER_RANGE: RangeInclusive<i32> = 1..=99;
pub const BIRTH_YEAR_RANGE: RangeInclusive<u16> = 1900..=2023;

/// Returns true if `text` contains at least one alphabetic character.
pub fn has_alphabetic(text: &str) -> bool {
    text.chars().any(char::is_alphabetic)
}

/// Case-insensitive name comparison used for uniqueness checks and search.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Team and player names must contain at least one letter.
pub fn validate_name(name: &str) -> Result<()> {
    if !has_alphabetic(name) {
        return Err(RosterError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

pub fn validate_kit_number(kit_number: i32) -> Result<()> {
    if !KIT_NUMBER_RANGE.contains(&kit_number) {
        return Err(RosterError::InvalidKitNumber { kit_number });
    }
    Ok(())
}

/// Check a birthdate against the roster's calendar rules.
///
/// February is always capped at 28 days; leap years are not considered.
pub fn validate_birthdate(birthdate: &Birthdate) -> Result<()> {
    let Birthdate { day, month, year } = *birthdate;

    let max_day = match month {
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1..=12 => 31,
        _ => 0,
    };

    if !BIRTH_YEAR_RANGE.contains(&year) || day < 1 || day > max_day {
        return Err(RosterError::InvalidBirthdate { day, month, year });
    }
    Ok(())
}
