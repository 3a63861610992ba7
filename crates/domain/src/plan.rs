use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use chrono::Duration;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    DecodeError, ExerciseID, ExperienceLevel, FitnessGoal, SessionFormat, ValidationSettings,
};

/// Workout proposed by the plan generation service.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CandidatePlan {
    pub exercises: Vec<CandidateExercise>,
}

impl CandidatePlan {
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateExercise {
    #[serde(alias = "exerciseId")]
    pub exercise_id: ExerciseID,
    pub sets: i32,
    pub reps: i32,
    #[serde(alias = "muscleGroup")]
    pub muscle_group: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBudget {
    pub duration: Duration,
    pub warmup: Duration,
    pub cooldown: Duration,
    pub buffer: Duration,
    pub available_work: Duration,
    pub max_work: Duration,
}

impl SessionBudget {
    /// Splits a session duration into warmup, cooldown, buffer and work time.
    ///
    /// Warmup takes 10 % of the session (at most 10 min), cooldown 5 % (at
    /// most 5 min) and the buffer 5 %. The buffer may be used for work, so
    /// the maximum work time exceeds the available work time by the buffer.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        let duration = duration.max(Duration::zero());
        let warmup = (duration / 10).min(Duration::minutes(10));
        let cooldown = (duration / 20).min(Duration::minutes(5));
        let buffer = duration / 20;
        let available_work = duration - warmup - cooldown - buffer;
        Self {
            duration,
            warmup,
            cooldown,
            buffer,
            available_work,
            max_work: available_work + buffer,
        }
    }
}

pub trait TimeEstimator {
    fn average_exercise_seconds(
        &self,
        goal: FitnessGoal,
        experience: ExperienceLevel,
        format: SessionFormat,
    ) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTimeEstimator;

impl TimeEstimator for DefaultTimeEstimator {
    fn average_exercise_seconds(
        &self,
        goal: FitnessGoal,
        experience: ExperienceLevel,
        format: SessionFormat,
    ) -> u32 {
        let base = match goal {
            FitnessGoal::Strength => 360,
            FitnessGoal::Hypertrophy => 300,
            FitnessGoal::Endurance => 210,
            FitnessGoal::Balanced | FitnessGoal::FatLoss => 270,
        };
        let experience_percent = match experience {
            ExperienceLevel::Beginner => 110,
            ExperienceLevel::Intermediate => 100,
            ExperienceLevel::Advanced => 95,
        };
        let format_percent = match format {
            SessionFormat::StraightSets => 100,
            SessionFormat::Supersets => 80,
            SessionFormat::Circuit => 70,
        };
        base * experience_percent / 100 * format_percent / 100
    }
}

#[derive(Debug, Clone)]
pub struct PlanContext<'a> {
    pub candidate_ids: &'a HashSet<ExerciseID>,
    pub requested_muscles: &'a [String],
    pub goal: FitnessGoal,
    pub experience: ExperienceLevel,
    pub format: SessionFormat,
    pub budget: Option<SessionBudget>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanWarning {
    DuplicateExercises(Vec<ExerciseID>),
    UnknownExercises(Vec<ExerciseID>),
    InvalidVolume {
        exercise_id: ExerciseID,
        sets: i32,
        reps: i32,
    },
    MissingMuscles(Vec<String>),
    ExceedsBudget {
        estimated_seconds: i64,
        max_work_seconds: i64,
    },
    UnderfillsBudget {
        estimated_seconds: i64,
        available_work_seconds: i64,
    },
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanWarning::DuplicateExercises(ids) => {
                write!(f, "Plan contains duplicate exercises: {}", join(ids))
            }
            PlanWarning::UnknownExercises(ids) => {
                write!(f, "Plan contains unknown exercises: {}", join(ids))
            }
            PlanWarning::InvalidVolume {
                exercise_id,
                sets,
                reps,
            } => write!(
                f,
                "Exercise {exercise_id} has invalid volume ({sets} sets, {reps} reps)"
            ),
            PlanWarning::MissingMuscles(muscles) => {
                write!(f, "Requested muscles not trained: {}", join(muscles))
            }
            PlanWarning::ExceedsBudget {
                estimated_seconds,
                max_work_seconds,
            } => write!(
                f,
                "Estimated {estimated_seconds} s exceeds budgeted work time of {max_work_seconds} s"
            ),
            PlanWarning::UnderfillsBudget {
                estimated_seconds,
                available_work_seconds,
            } => write!(
                f,
                "Plan fills only {estimated_seconds} s of {available_work_seconds} s work time"
            ),
        }
    }
}

/// Checks generated plans for structural problems and time budget violations.
///
/// Validation never rejects a plan, it only reports warnings.
pub struct PlanValidator<E> {
    estimator: E,
    settings: ValidationSettings,
}

impl Default for PlanValidator<DefaultTimeEstimator> {
    fn default() -> Self {
        Self::new(DefaultTimeEstimator, ValidationSettings::default())
    }
}

impl<E: TimeEstimator> PlanValidator<E> {
    pub fn new(estimator: E, settings: ValidationSettings) -> Self {
        Self {
            estimator,
            settings,
        }
    }

    #[must_use]
    pub fn validate(&self, plan: &CandidatePlan, context: &PlanContext) -> Vec<PlanWarning> {
        let warnings = [
            duplicate_exercises(plan),
            self.unknown_exercises(plan, context.candidate_ids),
            invalid_volume(plan),
            missing_muscles(plan, context.requested_muscles),
            self.budget_violation(plan, context),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        for warning in &warnings {
            debug!("plan validation: {warning}");
        }

        warnings
    }

    fn unknown_exercises(
        &self,
        plan: &CandidatePlan,
        candidate_ids: &HashSet<ExerciseID>,
    ) -> Option<PlanWarning> {
        let mut seen = HashSet::new();
        let unknown = plan
            .exercises
            .iter()
            .map(|e| e.exercise_id)
            .filter(|id| !candidate_ids.contains(id) && seen.insert(*id))
            .take(self.settings.max_reported_unknown_ids)
            .collect::<Vec<_>>();

        if unknown.is_empty() {
            None
        } else {
            Some(PlanWarning::UnknownExercises(unknown))
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn budget_violation(&self, plan: &CandidatePlan, context: &PlanContext) -> Option<PlanWarning> {
        let budget = context.budget?;
        let per_exercise = self.estimator.average_exercise_seconds(
            context.goal,
            context.experience,
            context.format,
        );
        let estimated_seconds = i64::try_from(plan.exercises.len())
            .unwrap_or(i64::MAX)
            .saturating_mul(i64::from(per_exercise));
        let max_work_seconds = budget.max_work.num_seconds();
        let available_work_seconds = budget.available_work.num_seconds();

        if estimated_seconds > max_work_seconds {
            Some(PlanWarning::ExceedsBudget {
                estimated_seconds,
                max_work_seconds,
            })
        } else if (estimated_seconds as f64)
            < available_work_seconds as f64 * self.settings.underfill_ratio
        {
            Some(PlanWarning::UnderfillsBudget {
                estimated_seconds,
                available_work_seconds,
            })
        } else {
            None
        }
    }
}

fn duplicate_exercises(plan: &CandidatePlan) -> Option<PlanWarning> {
    let mut seen = HashSet::new();
    let duplicates = plan
        .exercises
        .iter()
        .map(|e| e.exercise_id)
        .filter(|id| !seen.insert(*id))
        .collect::<BTreeSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        Some(PlanWarning::DuplicateExercises(
            duplicates.into_iter().collect(),
        ))
    }
}

fn invalid_volume(plan: &CandidatePlan) -> Option<PlanWarning> {
    plan.exercises
        .iter()
        .find(|e| e.sets <= 0 || e.reps <= 0)
        .map(|e| PlanWarning::InvalidVolume {
            exercise_id: e.exercise_id,
            sets: e.sets,
            reps: e.reps,
        })
}

fn missing_muscles(plan: &CandidatePlan, requested: &[String]) -> Option<PlanWarning> {
    let trained = plan
        .exercises
        .iter()
        .map(|e| e.muscle_group.trim().to_lowercase())
        .collect::<HashSet<_>>();
    let missing = requested
        .iter()
        .filter(|m| !trained.contains(&m.trim().to_lowercase()))
        .cloned()
        .collect::<Vec<_>>();

    if missing.is_empty() {
        None
    } else {
        Some(PlanWarning::MissingMuscles(missing))
    }
}
