use std::{cmp::Reverse, slice::Iter};

use crate::{ExerciseRole, FitnessGoal, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Barbell,
    Bodyweight,
    Cable,
    Dumbbell,
    EzBar,
    Kettlebell,
    Machine,
    MedicineBall,
    PullUpBar,
    ResistanceBand,
    SmithMachine,
    StabilityBall,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 13] = [
            Equipment::Barbell,
            Equipment::Bodyweight,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::EzBar,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::MedicineBall,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::SmithMachine,
            Equipment::StabilityBall,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::EzBar => "EZ Bar",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::PullUpBar => "Pull-Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::StabilityBall => "Stability Ball",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

impl Equipment {
    /// Resolves a catalog equipment descriptor by its exact name.
    ///
    /// Only the part before the first "/" is considered, so "Barbell/Flat
    /// Bench" resolves to [`Equipment::Barbell`].
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        let primary = normalize(descriptor);
        Equipment::iter().find(|e| e.name() == primary).copied()
    }

    #[must_use]
    pub fn tier(self) -> i32 {
        match self {
            Equipment::Barbell => 10,
            Equipment::Dumbbell => 9,
            Equipment::Cable | Equipment::TrapBar => 8,
            Equipment::EzBar
            | Equipment::Kettlebell
            | Equipment::Machine
            | Equipment::PullUpBar => 7,
            Equipment::Bodyweight | Equipment::SmithMachine => 6,
            Equipment::ResistanceBand => 4,
            Equipment::MedicineBall => 3,
            Equipment::StabilityBall => 2,
        }
    }
}

fn normalize(descriptor: &str) -> &str {
    descriptor.split('/').next().unwrap_or_default().trim()
}

const DEFAULT_TIER: i32 = 5;

/// Tier of an equipment descriptor, 5 for unknown equipment.
#[must_use]
pub fn equipment_tier(descriptor: &str) -> i32 {
    Equipment::from_descriptor(descriptor).map_or(DEFAULT_TIER, Equipment::tier)
}

type Scores = &'static [(Equipment, i32)];

const STRENGTH_PRIMARY: Scores = &[
    (Equipment::Barbell, 5),
    (Equipment::TrapBar, 4),
    (Equipment::Dumbbell, 3),
    (Equipment::SmithMachine, 2),
    (Equipment::Kettlebell, 1),
    (Equipment::Machine, 1),
    (Equipment::PullUpBar, 3),
    (Equipment::Cable, 0),
    (Equipment::Bodyweight, 0),
    (Equipment::ResistanceBand, -2),
];

const STRENGTH_SECONDARY: Scores = &[
    (Equipment::Barbell, 4),
    (Equipment::Dumbbell, 4),
    (Equipment::TrapBar, 3),
    (Equipment::Machine, 3),
    (Equipment::PullUpBar, 3),
    (Equipment::Cable, 2),
    (Equipment::SmithMachine, 2),
    (Equipment::Kettlebell, 2),
    (Equipment::Bodyweight, 1),
    (Equipment::ResistanceBand, -1),
];

const STRENGTH_ISOLATION: Scores = &[
    (Equipment::Dumbbell, 4),
    (Equipment::Cable, 4),
    (Equipment::Machine, 4),
    (Equipment::EzBar, 3),
    (Equipment::Barbell, 1),
    (Equipment::Kettlebell, 1),
    (Equipment::Bodyweight, 0),
    (Equipment::ResistanceBand, 0),
];

const HYPERTROPHY_PRIMARY: Scores = &[
    (Equipment::Barbell, 5),
    (Equipment::Dumbbell, 4),
    (Equipment::SmithMachine, 4),
    (Equipment::TrapBar, 3),
    (Equipment::Machine, 3),
    (Equipment::PullUpBar, 3),
    (Equipment::Cable, 2),
    (Equipment::Kettlebell, 1),
    (Equipment::Bodyweight, 1),
    (Equipment::ResistanceBand, -1),
];

const HYPERTROPHY_SECONDARY: Scores = &[
    (Equipment::Dumbbell, 5),
    (Equipment::Machine, 5),
    (Equipment::Cable, 4),
    (Equipment::Barbell, 3),
    (Equipment::SmithMachine, 3),
    (Equipment::PullUpBar, 3),
    (Equipment::EzBar, 3),
    (Equipment::Kettlebell, 2),
    (Equipment::Bodyweight, 1),
    (Equipment::ResistanceBand, 0),
];

const HYPERTROPHY_ISOLATION: Scores = &[
    (Equipment::Cable, 5),
    (Equipment::Dumbbell, 5),
    (Equipment::Machine, 4),
    (Equipment::EzBar, 4),
    (Equipment::ResistanceBand, 2),
    (Equipment::Kettlebell, 1),
    (Equipment::Bodyweight, 1),
    (Equipment::Barbell, -2),
];

const ENDURANCE_PRIMARY: Scores = &[
    (Equipment::Kettlebell, 5),
    (Equipment::Bodyweight, 5),
    (Equipment::Dumbbell, 4),
    (Equipment::MedicineBall, 3),
    (Equipment::ResistanceBand, 3),
    (Equipment::Barbell, 2),
    (Equipment::Cable, 2),
    (Equipment::TrapBar, 1),
    (Equipment::Machine, 1),
];

const ENDURANCE_SECONDARY: Scores = &[
    (Equipment::Bodyweight, 5),
    (Equipment::Kettlebell, 5),
    (Equipment::Dumbbell, 4),
    (Equipment::ResistanceBand, 4),
    (Equipment::Cable, 3),
    (Equipment::MedicineBall, 3),
    (Equipment::Machine, 2),
    (Equipment::Barbell, 1),
];

const ENDURANCE_ISOLATION: Scores = &[
    (Equipment::Kettlebell, 5),
    (Equipment::Bodyweight, 5),
    (Equipment::ResistanceBand, 5),
    (Equipment::Cable, 4),
    (Equipment::Dumbbell, 3),
    (Equipment::MedicineBall, 3),
    (Equipment::Machine, 2),
    (Equipment::StabilityBall, 2),
    (Equipment::Barbell, 0),
];

const BALANCED_PRIMARY: Scores = &[
    (Equipment::Barbell, 4),
    (Equipment::Dumbbell, 4),
    (Equipment::TrapBar, 3),
    (Equipment::Kettlebell, 3),
    (Equipment::SmithMachine, 2),
    (Equipment::Machine, 2),
    (Equipment::Bodyweight, 2),
    (Equipment::PullUpBar, 2),
    (Equipment::Cable, 1),
    (Equipment::ResistanceBand, 0),
];

const BALANCED_SECONDARY: Scores = &[
    (Equipment::Dumbbell, 4),
    (Equipment::Cable, 4),
    (Equipment::Machine, 4),
    (Equipment::Barbell, 3),
    (Equipment::Kettlebell, 3),
    (Equipment::PullUpBar, 3),
    (Equipment::Bodyweight, 3),
    (Equipment::ResistanceBand, 2),
];

const BALANCED_ISOLATION: Scores = &[
    (Equipment::Cable, 4),
    (Equipment::Dumbbell, 4),
    (Equipment::Machine, 3),
    (Equipment::EzBar, 3),
    (Equipment::ResistanceBand, 3),
    (Equipment::Kettlebell, 2),
    (Equipment::Bodyweight, 2),
    (Equipment::Barbell, 0),
];

#[must_use]
pub fn equipment_scores(goal: FitnessGoal, role: ExerciseRole) -> Scores {
    match (goal, role) {
        (FitnessGoal::Strength, ExerciseRole::PrimaryCompound) => STRENGTH_PRIMARY,
        (FitnessGoal::Strength, ExerciseRole::SecondaryCompound) => STRENGTH_SECONDARY,
        (FitnessGoal::Strength, ExerciseRole::Isolation) => STRENGTH_ISOLATION,
        (FitnessGoal::Hypertrophy, ExerciseRole::PrimaryCompound) => HYPERTROPHY_PRIMARY,
        (FitnessGoal::Hypertrophy, ExerciseRole::SecondaryCompound) => HYPERTROPHY_SECONDARY,
        (FitnessGoal::Hypertrophy, ExerciseRole::Isolation) => HYPERTROPHY_ISOLATION,
        (FitnessGoal::Endurance, ExerciseRole::PrimaryCompound) => ENDURANCE_PRIMARY,
        (FitnessGoal::Endurance, ExerciseRole::SecondaryCompound) => ENDURANCE_SECONDARY,
        (FitnessGoal::Endurance, ExerciseRole::Isolation) => ENDURANCE_ISOLATION,
        (FitnessGoal::Balanced, ExerciseRole::PrimaryCompound) => BALANCED_PRIMARY,
        (FitnessGoal::Balanced, ExerciseRole::SecondaryCompound) => BALANCED_SECONDARY,
        (FitnessGoal::Balanced, ExerciseRole::Isolation) => BALANCED_ISOLATION,
        (FitnessGoal::FatLoss, _) => &[],
    }
}

/// Desirability of an equipment descriptor for a goal and role.
///
/// Unknown equipment and goals without a score matrix score 0.
#[must_use]
pub fn equipment_score(goal: FitnessGoal, role: ExerciseRole, descriptor: &str) -> i32 {
    Equipment::from_descriptor(descriptor).map_or(0, |equipment| {
        equipment_scores(goal, role)
            .iter()
            .find(|(e, _)| *e == equipment)
            .map_or(0, |(_, score)| *score)
    })
}

/// Up to `count` equipment types with the highest score, ties in table order.
#[must_use]
pub fn top_equipment(goal: FitnessGoal, role: ExerciseRole, count: usize) -> Vec<Equipment> {
    let mut scores = equipment_scores(goal, role).to_vec();
    scores.sort_by_key(|(_, score)| Reverse(*score));
    scores.into_iter().take(count).map(|(e, _)| e).collect()
}

/// Orders equipment descriptors by score, using the tier to break ties.
#[must_use]
pub fn rank_equipment<'a>(
    goal: FitnessGoal,
    role: ExerciseRole,
    descriptors: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    let mut result = descriptors.into_iter().collect::<Vec<_>>();
    result.sort_by_key(|d| {
        (
            Reverse(equipment_score(goal, role, d)),
            Reverse(equipment_tier(d)),
        )
    });
    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Barbell", Some(Equipment::Barbell))]
    #[case("Barbell/Flat Bench", Some(Equipment::Barbell))]
    #[case("  Kettlebell / Box ", Some(Equipment::Kettlebell))]
    #[case("EZ Bar", Some(Equipment::EzBar))]
    #[case("Dumbbells", None)]
    #[case("barbell", None)]
    #[case("Flat Bench/Barbell", None)]
    #[case("Sled", None)]
    #[case("", None)]
    fn test_equipment_from_descriptor(
        #[case] descriptor: &str,
        #[case] expected: Option<Equipment>,
    ) {
        assert_eq!(Equipment::from_descriptor(descriptor), expected);
    }

    #[rstest]
    #[case(FitnessGoal::Endurance, ExerciseRole::Isolation, "Barbell", 0)]
    #[case(FitnessGoal::Endurance, ExerciseRole::Isolation, "Kettlebell", 5)]
    #[case(FitnessGoal::Hypertrophy, ExerciseRole::PrimaryCompound, "Barbell", 5)]
    #[case(FitnessGoal::Hypertrophy, ExerciseRole::Isolation, "Barbell", -2)]
    #[case(FitnessGoal::Hypertrophy, ExerciseRole::Isolation, "Barbell/Preacher Bench", -2)]
    #[case(FitnessGoal::Strength, ExerciseRole::PrimaryCompound, "Resistance Band", -2)]
    #[case(FitnessGoal::Strength, ExerciseRole::Isolation, "Medicine Ball", 0)]
    #[case(FitnessGoal::Strength, ExerciseRole::PrimaryCompound, "Sled", 0)]
    #[case(FitnessGoal::Strength, ExerciseRole::PrimaryCompound, "Bands", 0)]
    #[case(FitnessGoal::FatLoss, ExerciseRole::PrimaryCompound, "Barbell", 0)]
    fn test_equipment_score(
        #[case] goal: FitnessGoal,
        #[case] role: ExerciseRole,
        #[case] descriptor: &str,
        #[case] expected: i32,
    ) {
        assert_eq!(equipment_score(goal, role, descriptor), expected);
    }

    #[test]
    fn test_equipment_scores_range() {
        for goal in FitnessGoal::iter() {
            for role in ExerciseRole::iter() {
                let scores = equipment_scores(*goal, *role);
                assert!(scores.iter().all(|(_, s)| (-2..=5).contains(s)));
                let unique = scores.iter().map(|(e, _)| e).collect::<HashSet<_>>();
                assert_eq!(unique.len(), scores.len(), "duplicate entry");
            }
        }
    }

    #[test]
    fn test_equipment_scores_missing_goal() {
        assert!(equipment_scores(FitnessGoal::FatLoss, ExerciseRole::Isolation).is_empty());
    }

    #[test]
    fn test_top_equipment() {
        assert_eq!(
            top_equipment(FitnessGoal::Endurance, ExerciseRole::Isolation, 4),
            vec![
                Equipment::Kettlebell,
                Equipment::Bodyweight,
                Equipment::ResistanceBand,
                Equipment::Cable,
            ]
        );
        assert_eq!(
            top_equipment(FitnessGoal::Strength, ExerciseRole::PrimaryCompound, 3),
            vec![Equipment::Barbell, Equipment::TrapBar, Equipment::Dumbbell]
        );
        assert_eq!(
            top_equipment(FitnessGoal::Balanced, ExerciseRole::Isolation, 100).len(),
            BALANCED_ISOLATION.len()
        );
        assert!(top_equipment(FitnessGoal::FatLoss, ExerciseRole::Isolation, 3).is_empty());
    }

    #[rstest]
    #[case("Barbell", 10)]
    #[case("Dumbbell/Incline Bench", 9)]
    #[case("Stability Ball", 2)]
    #[case("Sled", 5)]
    fn test_equipment_tier(#[case] descriptor: &str, #[case] expected: i32) {
        assert_eq!(equipment_tier(descriptor), expected);
    }

    #[test]
    fn test_equipment_tier_range() {
        assert!(Equipment::iter().all(|e| (2..=10).contains(&e.tier())));
    }

    #[test]
    fn test_rank_equipment() {
        // Cable and Dumbbell score 5 for hypertrophy isolation, Dumbbell has the higher tier
        assert_eq!(
            rank_equipment(
                FitnessGoal::Hypertrophy,
                ExerciseRole::Isolation,
                ["Barbell", "Sled", "Cable", "Dumbbell", "Machine"]
            ),
            vec!["Dumbbell", "Cable", "Machine", "Sled", "Barbell"]
        );
    }
}
