use std::{slice::Iter, str::FromStr};

use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::Property;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    /// Free text, possibly a slash-delimited list such as "Barbell/Flat Bench".
    pub equipment: String,
    /// Comma-separated muscle groups assisting the prime mover.
    pub synergists: String,
    /// Curated role label from the catalog, e.g. `primary_compound`.
    pub role: Option<String>,
    pub exercise_type: String,
}

impl Exercise {
    #[must_use]
    pub fn role(&self) -> ExerciseRole {
        ExerciseRole::classify(self)
    }
}

#[derive(
    Deref,
    Display,
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct ExerciseID(u32);

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ExerciseRole {
    #[strum(to_string = "primary_compound", serialize = "primaryCompound")]
    PrimaryCompound,
    #[strum(to_string = "secondary_compound", serialize = "secondaryCompound")]
    SecondaryCompound,
    #[strum(to_string = "isolation")]
    Isolation,
}

impl Property for ExerciseRole {
    fn iter() -> Iter<'static, ExerciseRole> {
        static ROLES: [ExerciseRole; 3] = [
            ExerciseRole::PrimaryCompound,
            ExerciseRole::SecondaryCompound,
            ExerciseRole::Isolation,
        ];
        ROLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseRole::PrimaryCompound => "Primary Compound",
            ExerciseRole::SecondaryCompound => "Secondary Compound",
            ExerciseRole::Isolation => "Isolation",
        }
    }
}

const PRIMARY_COMPOUND_PATTERNS: [&str; 17] = [
    "bench press",
    "squat",
    "deadlift",
    "pull-up",
    "pull up",
    "pullup",
    "chin-up",
    "chin up",
    "overhead press",
    "military press",
    "barbell row",
    "bent over row",
    "power clean",
    "hang clean",
    "clean and jerk",
    "snatch",
    "push press",
];

const SECONDARY_COMPOUND_PATTERNS: [&str; 20] = [
    "incline press",
    "decline press",
    "lat pulldown",
    "lunge",
    "leg curl",
    "leg press",
    "romanian",
    "step-up",
    "step up",
    "seated row",
    "cable row",
    "dumbbell row",
    "t-bar row",
    "inverted row",
    "push-up",
    "push up",
    "dip",
    "shoulder press",
    "hip thrust",
    "glute bridge",
];

const ISOLATION_PATTERNS: [&str; 18] = [
    "curl",
    "lateral raise",
    "front raise",
    "rear delt",
    "fly",
    "flye",
    "calf raise",
    "crunch",
    "extension",
    "kickback",
    "shrug",
    "pushdown",
    "pullover",
    "leg raise",
    "sit-up",
    "plank",
    "wrist",
    "adduction",
];

impl ExerciseRole {
    /// Determines the role of a catalog exercise.
    ///
    /// A curated role label takes precedence over any name-based heuristic.
    #[must_use]
    pub fn classify(exercise: &Exercise) -> Self {
        if let Some(role) = exercise
            .role
            .as_deref()
            .and_then(|label| ExerciseRole::from_str(label.trim()).ok())
        {
            return role;
        }
        Self::classify_name(&exercise.name, &exercise.synergists)
    }

    /// Determines the role from the exercise name and its synergist list alone.
    ///
    /// Names are matched case-insensitively against the primary compound,
    /// secondary compound and isolation vocabularies, in that order. Names
    /// matching none of them count as secondary compounds when at least two
    /// synergists are listed, otherwise as isolation.
    #[must_use]
    pub fn classify_name(name: &str, synergists: &str) -> Self {
        let name = name.to_lowercase();
        let matches = |patterns: &[&str]| patterns.iter().any(|p| name.contains(p));

        if matches(&PRIMARY_COMPOUND_PATTERNS) {
            ExerciseRole::PrimaryCompound
        } else if matches(&SECONDARY_COMPOUND_PATTERNS) {
            ExerciseRole::SecondaryCompound
        } else if matches(&ISOLATION_PATTERNS) {
            ExerciseRole::Isolation
        } else if synergist_count(synergists) >= 2 {
            ExerciseRole::SecondaryCompound
        } else {
            ExerciseRole::Isolation
        }
    }
}

fn synergist_count(synergists: &str) -> usize {
    synergists
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .count()
}
