use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FitnessGoal {
    #[strum(serialize = "strength")]
    Strength,
    #[strum(serialize = "hypertrophy", serialize = "muscle_gain")]
    Hypertrophy,
    #[strum(serialize = "endurance")]
    Endurance,
    #[strum(serialize = "balanced", serialize = "general")]
    Balanced,
    #[strum(serialize = "fat_loss", serialize = "fatLoss")]
    FatLoss,
}

impl Property for FitnessGoal {
    fn iter() -> Iter<'static, FitnessGoal> {
        static GOALS: [FitnessGoal; 5] = [
            FitnessGoal::Strength,
            FitnessGoal::Hypertrophy,
            FitnessGoal::Endurance,
            FitnessGoal::Balanced,
            FitnessGoal::FatLoss,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessGoal::Strength => "Strength",
            FitnessGoal::Hypertrophy => "Hypertrophy",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Balanced => "Balanced",
            FitnessGoal::FatLoss => "Fat Loss",
        }
    }
}

impl FitnessGoal {
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            FitnessGoal::Strength => {
                "Heavy compound lifts first with low reps and long rests, followed by lighter assistance work."
            }
            FitnessGoal::Hypertrophy => {
                "Moderate loads in the 6-15 rep range with an emphasis on secondary compounds and isolation volume."
            }
            FitnessGoal::Endurance => {
                "High reps and short rests, weighted toward isolation and bodyweight movements."
            }
            FitnessGoal::Balanced | FitnessGoal::FatLoss => {
                "An even mix of compound and isolation work in moderate rep ranges."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ExperienceLevel {
    #[strum(serialize = "beginner")]
    Beginner,
    #[strum(serialize = "intermediate")]
    Intermediate,
    #[strum(serialize = "advanced")]
    Advanced,
}

impl Property for ExperienceLevel {
    fn iter() -> Iter<'static, ExperienceLevel> {
        static LEVELS: [ExperienceLevel; 3] = [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SessionFormat {
    #[default]
    StraightSets,
    Supersets,
    Circuit,
}

impl Property for SessionFormat {
    fn iter() -> Iter<'static, SessionFormat> {
        static FORMATS: [SessionFormat; 3] = [
            SessionFormat::StraightSets,
            SessionFormat::Supersets,
            SessionFormat::Circuit,
        ];
        FORMATS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SessionFormat::StraightSets => "Straight Sets",
            SessionFormat::Supersets => "Supersets",
            SessionFormat::Circuit => "Circuit",
        }
    }
}
