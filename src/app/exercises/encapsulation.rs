use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::person::Person;

pub struct EncapsulationExercise {
    age: i32,
}

impl EncapsulationExercise {
    pub fn new(age: i32) -> Self {
        Self { age }
    }
}

impl Exercise for EncapsulationExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Encapsulation
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let mut person = Person::new();
        if let Err(e) = person.set_age(self.age) {
            tracing::warn!(age = self.age, "Rejected age: {}", e);
            console.say(e)?;
        }

        match person.age() {
            Some(age) => console.say(format!("Age: {}", age)),
            None => console.say("Age: not set"),
        }
    }
}
