use std::collections::BTreeMap;

use derive_more::Display;

use crate::{ExerciseRole, FitnessGoal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseSlot {
    pub role: ExerciseRole,
    pub rep_range: &'static str,
}

impl ExerciseSlot {
    #[must_use]
    pub fn reps(&self) -> RepRange {
        RepRange::parse(self.rep_range)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotShare {
    pub role: ExerciseRole,
    pub percentage: f64,
    pub rep_range: &'static str,
}

const fn share(role: ExerciseRole, percentage: f64, rep_range: &'static str) -> SlotShare {
    SlotShare {
        role,
        percentage,
        rep_range,
    }
}

const STRENGTH: [SlotShare; 3] = [
    share(ExerciseRole::PrimaryCompound, 0.5, "3-5"),
    share(ExerciseRole::SecondaryCompound, 0.3, "5-8"),
    share(ExerciseRole::Isolation, 0.2, "8-10"),
];

const HYPERTROPHY: [SlotShare; 3] = [
    share(ExerciseRole::PrimaryCompound, 0.3, "6-10"),
    share(ExerciseRole::SecondaryCompound, 0.4, "8-12"),
    share(ExerciseRole::Isolation, 0.3, "10-15"),
];

const ENDURANCE: [SlotShare; 3] = [
    share(ExerciseRole::PrimaryCompound, 0.2, "12-15"),
    share(ExerciseRole::SecondaryCompound, 0.3, "15-20"),
    share(ExerciseRole::Isolation, 0.5, "15-25"),
];

const BALANCED: [SlotShare; 3] = [
    share(ExerciseRole::PrimaryCompound, 0.33, "6-10"),
    share(ExerciseRole::SecondaryCompound, 0.33, "8-12"),
    share(ExerciseRole::Isolation, 0.34, "10-15"),
];

#[must_use]
pub fn distribution(goal: FitnessGoal) -> &'static [SlotShare] {
    match goal {
        FitnessGoal::Strength => &STRENGTH,
        FitnessGoal::Hypertrophy => &HYPERTROPHY,
        FitnessGoal::Endurance => &ENDURANCE,
        FitnessGoal::Balanced | FitnessGoal::FatLoss => &BALANCED,
    }
}

/// Splits a session of `total_exercises` exercises into role slots.
///
/// Every share gets at least one slot. Shares are filled in table order until
/// the total is reached; a shortfall is padded with isolation slots using the
/// rep range of the last share.
#[must_use]
pub fn exercise_slots(goal: FitnessGoal, total_exercises: usize) -> Vec<ExerciseSlot> {
    let shares = distribution(goal);
    let mut slots = Vec::with_capacity(total_exercises);

    for share in shares {
        if slots.len() >= total_exercises {
            break;
        }
        let count = share_count(total_exercises, share.percentage);
        for _ in 0..count {
            if slots.len() >= total_exercises {
                break;
            }
            slots.push(ExerciseSlot {
                role: share.role,
                rep_range: share.rep_range,
            });
        }
    }

    if let Some(last) = shares.last() {
        while slots.len() < total_exercises {
            slots.push(ExerciseSlot {
                role: ExerciseRole::Isolation,
                rep_range: last.rep_range,
            });
        }
    }

    slots.truncate(total_exercises);
    slots
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn share_count(total_exercises: usize, percentage: f64) -> usize {
    ((total_exercises as f64 * percentage).round() as usize).max(1)
}

#[must_use]
pub fn role_counts(slots: &[ExerciseSlot]) -> BTreeMap<ExerciseRole, usize> {
    let mut result = BTreeMap::new();
    for slot in slots {
        *result.entry(slot.role).or_insert(0) += 1;
    }
    result
}

/// Rep range of the first share for `role`, or "8-12" if the goal has none.
#[must_use]
pub fn default_rep_range(goal: FitnessGoal, role: ExerciseRole) -> &'static str {
    distribution(goal)
        .iter()
        .find(|s| s.role == role)
        .map_or(DEFAULT_REP_RANGE, |s| s.rep_range)
}

const DEFAULT_REP_RANGE: &str = "8-12";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("{min}-{max}")]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

impl Default for RepRange {
    fn default() -> Self {
        Self { min: 8, max: 12 }
    }
}

impl RepRange {
    /// Parses "min-max" or a single number. Malformed input yields 8-12.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let parts = value
            .split('-')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Vec<_>>();

        match parts.as_slice() {
            [Ok(reps)] => Self {
                min: *reps,
                max: *reps,
            },
            [Ok(min), Ok(max)] if min <= max => Self {
                min: *min,
                max: *max,
            },
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        u32::midpoint(self.min, self.max)
    }
}

#[must_use]
pub fn target_reps(rep_range: &str) -> u32 {
    RepRange::parse(rep_range).target()
}
