use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::ports::Speak;
use crate::domain::speak::{make_it_speak, Bird, Robot};

pub struct SpeakExercise;

impl Exercise for SpeakExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Speak
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let speakers: [&dyn Speak; 2] = [&Bird, &Robot];
        for speaker in speakers {
            console.say(make_it_speak(speaker))?;
        }
        Ok(())
    }
}
