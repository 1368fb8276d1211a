use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::ports::Vehicle;
use crate::domain::vehicles::{compare_speed, Car, Motorcycle, VehicleDetails};
use std::cmp::Ordering;

pub struct PolymorphismExercise;

fn read_details(console: &mut Console<'_>) -> Result<VehicleDetails> {
    console.prompt("Brand: ")?;
    let brand = console.next_line()?;
    console.prompt("Year: ")?;
    let year = console.next_i32()?;
    console.prompt("Color: ")?;
    let color = console.next_line()?;
    console.prompt("Transmission: ")?;
    let transmission = console.next_line()?;
    console.prompt("Convertible (Yes/No): ")?;
    let convertible = console.next_line()?;

    Ok(VehicleDetails {
        brand,
        model: None,
        year: Some(year),
        color,
        transmission,
        convertible,
    })
}

fn print_info(console: &mut Console<'_>, heading: &str, vehicle: &dyn Vehicle) -> Result<()> {
    console.blank()?;
    console.say(format!("--- {} Information ---", heading))?;
    for line in vehicle.info_with_details() {
        console.say(line)?;
    }
    Ok(())
}

impl Exercise for PolymorphismExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Polymorphism
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        console.say("=== Enter Car Details ===")?;
        let car = Car::new(read_details(console)?);
        print_info(console, "Car", &car)?;

        console.blank()?;
        console.say("=== Enter Motorcycle Details ===")?;
        let motorcycle = Motorcycle::new(read_details(console)?);
        print_info(console, "Motorcycle", &motorcycle)?;

        let (car_ref, moto_ref): (&dyn Vehicle, &dyn Vehicle) = (&car, &motorcycle);
        console.blank()?;
        console.say(format!("Car speed: {} km/h", car_ref.speed()))?;
        console.say(format!("Motorcycle speed: {} km/h", moto_ref.speed()))?;

        let verdict = match compare_speed(moto_ref, car_ref) {
            Ordering::Greater => "Motorcycle is faster",
            Ordering::Less => "Car is faster",
            Ordering::Equal => "Both vehicles have the same speed",
        };
        console.say(verdict)
    }
}
