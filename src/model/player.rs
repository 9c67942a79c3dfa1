use chrono::NaiveDate;
use serde::Serialize;

/// A player's date of birth as entered, before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Birthdate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl Birthdate {
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Convert to a [`NaiveDate`], if the triple names a real calendar day.
    ///
    /// This follows the real calendar, so 29 February of a leap year
    /// converts even though the roster rejects it.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

/// A player registered in a team's squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub kit_number: i32,
    pub club: String,
    pub birthdate: Birthdate,
    pub position: String,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        kit_number: i32,
        club: impl Into<String>,
        birthdate: Birthdate,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kit_number,
            club: club.into(),
            birthdate,
            position: position.into(),
        }
    }
}

/// Where a player sits in the roster: team index, then position in the squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerLocation {
    pub team_index: usize,
    pub player_index: usize,
}
