use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::ports::Vehicle;
use crate::domain::vehicles::{Car, VehicleDetails, VehicleKind};

pub struct InheritanceExercise;

impl Exercise for InheritanceExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Inheritance
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        console.prompt("What brand do you want? ")?;
        let brand = console.next_line()?;
        console.prompt("What model? ")?;
        let model = console.next_line()?;
        console.prompt("Enter transmission: ")?;
        let transmission = console.next_line()?;
        console.prompt("Enter convertible: ")?;
        let convertible = console.next_line()?;
        console.prompt("Enter color: ")?;
        let color = console.next_line()?;

        let car = Car::new(VehicleDetails {
            brand,
            model: Some(model),
            year: None,
            color,
            transmission,
            convertible,
        });
        let vehicle: &dyn Vehicle = &car;

        console.say(vehicle.start())?;
        if let VehicleKind::Car(car) = vehicle.kind() {
            for line in car.display_info() {
                console.say(line)?;
            }
        }
        Ok(())
    }
}
