use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::{
    BlockExercise, BlockID, BlockKind, BlockMigration, ExerciseID, StraightSetMigration, Workout,
    WorkoutBlock,
};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BlockError {
    #[error("At least two different exercises must be selected ({0} selected)")]
    InvalidSelection(usize),
    #[error("Exercise index {index} out of range (workout has {len} exercises)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Unknown block")]
    UnknownBlock,
}

/// Groups and ungroups the exercises of a workout.
pub struct BlockAssembler<M> {
    migration: M,
}

impl Default for BlockAssembler<StraightSetMigration> {
    fn default() -> Self {
        Self::new(StraightSetMigration)
    }
}

impl<M: BlockMigration> BlockAssembler<M> {
    pub fn new(migration: M) -> Self {
        Self { migration }
    }

    /// Combines the selected exercises into a superset or circuit.
    ///
    /// `selected` are indices into the flat exercise list of the workout. The
    /// selected exercises are removed from the blocks they belonged to and
    /// the new block takes the place of the first block affected. Blocks left
    /// without exercises are dropped. The flat exercise list is not changed.
    pub fn create_block(
        &self,
        workout: &Workout,
        selected: &[usize],
    ) -> Result<(Workout, WorkoutBlock), BlockError> {
        let selected = selected.iter().copied().collect::<BTreeSet<usize>>();

        if selected.len() < 2 {
            return Err(BlockError::InvalidSelection(selected.len()));
        }

        let len = workout.exercises.len();
        if let Some(index) = selected.iter().find(|i| **i >= len) {
            return Err(BlockError::IndexOutOfRange { index: *index, len });
        }

        let members = selected
            .iter()
            .map(|i| &workout.exercises[*i])
            .collect::<Vec<_>>();
        let rest_between_exercises = members.iter().map(|e| e.rest_seconds).min().unwrap_or(0);
        let rest_between_rounds = members.iter().map(|e| e.rest_seconds).max().unwrap_or(0);
        let block = WorkoutBlock {
            id: BlockID::new(),
            kind: BlockKind::for_group(members.len()),
            rounds: members.iter().map(|e| e.sets).max().unwrap_or(1).max(1),
            rest_between_exercises,
            rest_between_rounds,
            exercises: members
                .iter()
                .map(|e| BlockExercise {
                    exercise_id: e.exercise_id,
                    scheme: e.scheme(),
                })
                .collect(),
        };

        let mut occurrences = Occurrences::new(workout);
        let mut blocks = Vec::new();
        let mut insertion_point = None;

        for existing in workout.blocks_or_migrated(&self.migration) {
            let mut remaining = Vec::with_capacity(existing.exercises.len());
            let mut removed = false;

            for exercise in existing.exercises {
                match occurrences.next(exercise.exercise_id) {
                    Some(position) if selected.contains(&position) => removed = true,
                    Some(_) => remaining.push(exercise),
                    None => {
                        warn!(
                            "block {} references exercise {} not present in workout {}",
                            *existing.id, exercise.exercise_id, *workout.id
                        );
                        remaining.push(exercise);
                    }
                }
            }

            if removed && insertion_point.is_none() {
                insertion_point = Some(blocks.len());
            }

            if !remaining.is_empty() {
                blocks.push(WorkoutBlock {
                    exercises: remaining,
                    ..existing
                });
            }
        }

        let position = insertion_point.unwrap_or(blocks.len());
        blocks.insert(position, block.clone());

        debug!(
            "created {:?} with {} exercises at position {position} in workout {}",
            block.kind,
            block.exercises.len(),
            *workout.id
        );

        Ok((
            Workout {
                blocks: Some(blocks),
                ..workout.clone()
            },
            block,
        ))
    }

    /// Splits a block into one straight set block per exercise.
    pub fn ungroup_block(&self, workout: &Workout, id: BlockID) -> Result<Workout, BlockError> {
        let mut occurrences = Occurrences::new(workout);
        let mut blocks = Vec::new();
        let mut found = false;

        for existing in workout.blocks_or_migrated(&self.migration) {
            if existing.id != id {
                for exercise in &existing.exercises {
                    occurrences.next(exercise.exercise_id);
                }
                blocks.push(existing);
                continue;
            }

            found = true;
            for exercise in &existing.exercises {
                match occurrences
                    .next(exercise.exercise_id)
                    .and_then(|position| workout.exercises.get(position))
                {
                    Some(flat) => blocks.push(WorkoutBlock::straight_set(flat)),
                    None => blocks.push(WorkoutBlock {
                        id: BlockID::new(),
                        kind: BlockKind::StraightSet,
                        rounds: existing.rounds,
                        rest_between_exercises: 0,
                        rest_between_rounds: existing.rest_between_rounds,
                        exercises: vec![exercise.clone()],
                    }),
                }
            }
        }

        if !found {
            return Err(BlockError::UnknownBlock);
        }

        Ok(Workout {
            blocks: Some(blocks),
            ..workout.clone()
        })
    }
}

/// Positions of each exercise in the flat list, consumed in declaration order.
struct Occurrences {
    positions: BTreeMap<ExerciseID, Vec<usize>>,
    cursors: BTreeMap<ExerciseID, usize>,
}

impl Occurrences {
    fn new(workout: &Workout) -> Self {
        let mut positions: BTreeMap<ExerciseID, Vec<usize>> = BTreeMap::new();
        for (i, e) in workout.exercises.iter().enumerate() {
            positions.entry(e.exercise_id).or_default().push(i);
        }
        Self {
            positions,
            cursors: BTreeMap::new(),
        }
    }

    fn next(&mut self, exercise_id: ExerciseID) -> Option<usize> {
        let cursor = self.cursors.entry(exercise_id).or_insert(0);
        let position = self.positions.get(&exercise_id)?.get(*cursor).copied();
        if position.is_some() {
            *cursor += 1;
        }
        position
    }
}
