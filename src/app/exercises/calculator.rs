use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::calculator::{CalcError, Operation};

pub struct CalculatorExercise;

impl Exercise for CalculatorExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Calculator
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        console.say("Enter first number:")?;
        let first = console.next_i32()?;
        console.say("Enter second number:")?;
        let second = console.next_i32()?;
        console.say("Choose operation: +, -, *, /")?;
        let symbol = console.next_char()?;

        let outcome = Operation::try_from(symbol).and_then(|op| {
            tracing::debug!(first, second, operation = %op.symbol(), "Calculator input");
            op.apply(first, second)
        });
        match outcome {
            Ok(value) => console.say(value),
            Err(CalcError::UnknownOperation(_)) => console.say("Invalid operation"),
            Err(e) => {
                tracing::warn!("Calculation rejected: {}", e);
                console.say(format!("Error: {}", e))
            }
        }
    }
}
