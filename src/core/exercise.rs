use crate::config::toml_config::ExerciseConfig;
use crate::core::catalog::{self, ExerciseId};
use crate::core::console::Console;
use crate::utils::error::Result;

pub trait Exercise {
    fn id(&self) -> ExerciseId;

    fn title(&self) -> &'static str {
        self.id().title()
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()>;
}

pub struct ExerciseRunner {
    exercise: Box<dyn Exercise>,
}

impl ExerciseRunner {
    pub fn new(exercise: Box<dyn Exercise>) -> Self {
        Self { exercise }
    }

    pub fn from_catalog(id: ExerciseId, config: &ExerciseConfig) -> Self {
        Self::new(catalog::build(id, config))
    }

    pub fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let id = self.exercise.id();
        tracing::info!(exercise = %id, "Starting exercise: {}", self.exercise.title());

        let outcome = self.exercise.run(console).and_then(|()| console.flush());
        match &outcome {
            Ok(()) => tracing::info!(exercise = %id, "Exercise finished"),
            Err(e) => tracing::error!(
                exercise = %id,
                "Exercise failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            ),
        }
        outcome
    }
}
