use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::engine_car::{CarCapability, ToyotaVios};
use crate::domain::ports::EngineCar;

pub struct AbstractionExercise;

fn answered_yes(answer: &str) -> bool {
    answer.trim() == "yes"
}

impl Exercise for AbstractionExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Abstraction
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let car: &dyn EngineCar = &ToyotaVios;

        console.prompt("Do you want to start the engine? (yes/no): ")?;
        let start = console.next_line()?;
        if answered_yes(&start) {
            console.say(car.start_engine())?;
        } else {
            console.say(car.stop_engine())?;
        }

        console.prompt("Do you want to stop the engine? (yes/no): ")?;
        let stop = console.next_line()?;
        if answered_yes(&stop) {
            console.say(car.stop_engine())?;
        } else {
            console.say(car.start_engine())?;
        }

        console.say(car.show_brand())?;
        match car.capability() {
            CarCapability::Model(model) => console.say(model.show_model()),
            CarCapability::Basic => Ok(()),
        }
    }
}
