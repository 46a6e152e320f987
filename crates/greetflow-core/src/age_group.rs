use std::fmt;

use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Coarse age bracket for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Minor,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Under 18 is a minor, under 65 an adult, anything else a senior.
    pub fn classify(age: u8) -> Self {
        match age {
            0..=17 => AgeGroup::Minor,
            18..=64 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }

    pub fn of(person: &Person) -> Self {
        Self::classify(person.age)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Minor => "minor",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
