use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::stats::{AverageMode, ScoreStats};

pub struct ArrayStatsExercise {
    scores: Vec<i32>,
    average: AverageMode,
}

impl ArrayStatsExercise {
    pub fn new(scores: Vec<i32>, average: AverageMode) -> Self {
        Self { scores, average }
    }
}

impl Exercise for ArrayStatsExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::ArrayStats
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let stats = ScoreStats::compute(&self.scores)?;
        tracing::debug!(?stats, mode = ?self.average, "Computed score statistics");

        console.say("Activity 1")?;
        console.blank()?;
        console.say(format!("First element: {}", stats.first))?;
        console.say(format!("Lowest score: {}", stats.min))?;
        console.say(format!("Highest score: {}", stats.max))?;
        console.say(format!("Last element: {}", stats.last))?;
        console.blank()?;

        console.say("Activity 2")?;
        console.blank()?;
        for (index, score) in self.scores.iter().enumerate() {
            console.say(format!("index: {}", index))?;
            console.say(format!("element: {}", score))?;
        }
        console.blank()?;

        console.say("Activity 3")?;
        console.blank()?;
        console.say(format!("Sum of scores: {}", stats.sum))?;
        console.say(format!("Average score: {}", stats.average(self.average)))?;
        Ok(())
    }
}
