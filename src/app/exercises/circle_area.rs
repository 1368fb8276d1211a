use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::shapes::circle_area;

pub struct CircleAreaExercise;

impl Exercise for CircleAreaExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::CircleArea
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        console.say("Enter radius of the circle:")?;
        let radius = console.next_f64()?;
        let area = circle_area(radius);
        tracing::debug!(radius, area, "Circle area computed");
        console.say(format!("Area of the circle: {:.2}", area))
    }
}
