use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::ports::Measure;
use crate::domain::shapes::{Circle, Rectangle, Shape};

pub struct ShapesExercise {
    shapes: [Shape; 2],
}

impl ShapesExercise {
    pub fn new(circle_radius: f64, rectangle_width: f64, rectangle_height: f64) -> Self {
        Self {
            shapes: [
                Circle::new(circle_radius).into(),
                Rectangle::new(rectangle_width, rectangle_height).into(),
            ],
        }
    }
}

impl Exercise for ShapesExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Shapes
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        for shape in &self.shapes {
            console.say(format!("{} area: {:.2}", shape.name(), shape.compute_metric()))?;
        }
        Ok(())
    }
}
