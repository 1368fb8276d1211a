use oop_exercises::app::standalone::run_standalone;
use oop_exercises::ExerciseId;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_standalone(ExerciseId::CircleArea)
}
