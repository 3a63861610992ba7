use derive_more::Deref;
use uuid::Uuid;

use crate::ExerciseID;

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    pub exercises: Vec<WorkoutExercise>,
    /// Grouping of `exercises` into blocks, absent for workouts created before
    /// blocks existed.
    pub blocks: Option<Vec<WorkoutBlock>>,
}

impl Workout {
    #[must_use]
    pub fn blocks_or_migrated(&self, migration: &impl BlockMigration) -> Vec<WorkoutBlock> {
        match &self.blocks {
            Some(blocks) => blocks.clone(),
            None => migration.blocks_from_exercises(&self.exercises),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub tracking: Tracking,
    pub duration_seconds: Option<u32>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn scheme(&self) -> ExerciseScheme {
        match (self.tracking, self.duration_seconds) {
            (Tracking::Duration, Some(work_seconds)) => ExerciseScheme::Interval {
                work_seconds,
                rest_seconds: self.rest_seconds,
            },
            _ => ExerciseScheme::Reps {
                sets: self.sets,
                reps: self.reps,
                rest_seconds: self.rest_seconds,
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    #[default]
    Reps,
    Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutBlock {
    pub id: BlockID,
    pub kind: BlockKind,
    pub rounds: u32,
    pub rest_between_exercises: u32,
    pub rest_between_rounds: u32,
    pub exercises: Vec<BlockExercise>,
}

impl WorkoutBlock {
    #[must_use]
    pub fn straight_set(exercise: &WorkoutExercise) -> Self {
        Self {
            id: BlockID::new(),
            kind: BlockKind::StraightSet,
            rounds: exercise.sets.max(1),
            rest_between_exercises: 0,
            rest_between_rounds: exercise.rest_seconds,
            exercises: vec![BlockExercise {
                exercise_id: exercise.exercise_id,
                scheme: exercise.scheme(),
            }],
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockID(Uuid);

impl BlockID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for BlockID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for BlockID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    StraightSet,
    Superset,
    Circuit,
}

impl BlockKind {
    #[must_use]
    pub fn for_group(count: usize) -> Self {
        if count >= 3 {
            BlockKind::Circuit
        } else {
            BlockKind::Superset
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockExercise {
    pub exercise_id: ExerciseID,
    pub scheme: ExerciseScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseScheme {
    Reps {
        sets: u32,
        reps: u32,
        rest_seconds: u32,
    },
    Interval {
        work_seconds: u32,
        rest_seconds: u32,
    },
}

/// Derives blocks for workouts that only have a flat exercise list.
pub trait BlockMigration {
    fn blocks_from_exercises(&self, exercises: &[WorkoutExercise]) -> Vec<WorkoutBlock>;
}

/// Puts every exercise into a block of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct StraightSetMigration;

impl BlockMigration for StraightSetMigration {
    fn blocks_from_exercises(&self, exercises: &[WorkoutExercise]) -> Vec<WorkoutBlock> {
        exercises.iter().map(WorkoutBlock::straight_set).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(id: u32, tracking: Tracking, duration_seconds: Option<u32>) -> WorkoutExercise {
        WorkoutExercise {
            exercise_id: id.into(),
            sets: 3,
            reps: 10,
            rest_seconds: 90,
            tracking,
            duration_seconds,
        }
    }

    #[rstest]
    #[case(
        Tracking::Reps,
        None,
        ExerciseScheme::Reps { sets: 3, reps: 10, rest_seconds: 90 }
    )]
    #[case(
        Tracking::Reps,
        Some(30),
        ExerciseScheme::Reps { sets: 3, reps: 10, rest_seconds: 90 }
    )]
    #[case(
        Tracking::Duration,
        None,
        ExerciseScheme::Reps { sets: 3, reps: 10, rest_seconds: 90 }
    )]
    #[case(
        Tracking::Duration,
        Some(45),
        ExerciseScheme::Interval { work_seconds: 45, rest_seconds: 90 }
    )]
    fn test_workout_exercise_scheme(
        #[case] tracking: Tracking,
        #[case] duration_seconds: Option<u32>,
        #[case] expected: ExerciseScheme,
    ) {
        assert_eq!(exercise(1, tracking, duration_seconds).scheme(), expected);
    }

    #[rstest]
    #[case(2, BlockKind::Superset)]
    #[case(3, BlockKind::Circuit)]
    #[case(5, BlockKind::Circuit)]
    fn test_block_kind_for_group(#[case] count: usize, #[case] expected: BlockKind) {
        assert_eq!(BlockKind::for_group(count), expected);
    }

    #[test]
    fn test_straight_set_migration() {
        let exercises = vec![
            exercise(1, Tracking::Reps, None),
            exercise(2, Tracking::Duration, Some(30)),
        ];
        let blocks = StraightSetMigration.blocks_from_exercises(&exercises);

        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.kind == BlockKind::StraightSet));
        assert_eq!(
            blocks
                .iter()
                .map(|b| b.exercises.clone())
                .collect::<Vec<_>>(),
            vec![
                vec![BlockExercise {
                    exercise_id: 1.into(),
                    scheme: ExerciseScheme::Reps {
                        sets: 3,
                        reps: 10,
                        rest_seconds: 90
                    },
                }],
                vec![BlockExercise {
                    exercise_id: 2.into(),
                    scheme: ExerciseScheme::Interval {
                        work_seconds: 30,
                        rest_seconds: 90
                    },
                }],
            ]
        );
        assert_eq!(blocks[0].rounds, 3);
        assert_eq!(blocks[0].rest_between_rounds, 90);
        assert_ne!(blocks[0].id, blocks[1].id);
    }

    #[test]
    fn test_workout_blocks_or_migrated() {
        let block = WorkoutBlock {
            id: 7.into(),
            kind: BlockKind::Superset,
            rounds: 3,
            rest_between_exercises: 0,
            rest_between_rounds: 90,
            exercises: vec![],
        };
        let mut workout = Workout {
            id: 1.into(),
            name: String::from("A"),
            exercises: vec![exercise(1, Tracking::Reps, None)],
            blocks: Some(vec![block.clone()]),
        };

        assert_eq!(
            workout.blocks_or_migrated(&StraightSetMigration),
            vec![block]
        );

        workout.blocks = None;
        let migrated = workout.blocks_or_migrated(&StraightSetMigration);
        assert_eq!(migrated.len(), 1);
        assert_eq!(migrated[0].kind, BlockKind::StraightSet);
    }
}
