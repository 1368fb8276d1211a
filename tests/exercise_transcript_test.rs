use anyhow::Result;
use oop_exercises::{Console, ExerciseConfig, ExerciseError, ExerciseId, ExerciseRunner};
use std::io::Cursor;

/// Runs one exercise with scripted input and returns everything it printed.
fn transcript(id: ExerciseId, config: &ExerciseConfig, input: &str) -> Result<String> {
    let mut out = Vec::new();
    {
        let mut console = Console::new(Cursor::new(input.as_bytes()), &mut out);
        ExerciseRunner::from_catalog(id, config).run(&mut console)?;
    }
    Ok(String::from_utf8(out)?)
}

fn run_default(id: ExerciseId, input: &str) -> Result<String> {
    transcript(id, &ExerciseConfig::default(), input)
}

fn failure(id: ExerciseId, input: &str) -> ExerciseError {
    let mut out = Vec::new();
    let mut console = Console::new(Cursor::new(input.as_bytes()), &mut out);
    ExerciseRunner::from_catalog(id, &ExerciseConfig::default())
        .run(&mut console)
        .expect_err("exercise should fail")
}

#[test]
fn test_calculator_add() -> Result<()> {
    let output = run_default(ExerciseId::Calculator, "2\n3\n+\n")?;
    assert_eq!(
        output,
        "Enter first number:\nEnter second number:\nChoose operation: +, -, *, /\n5\n"
    );
    Ok(())
}

#[test]
fn test_calculator_divide_by_zero_prints_fixed_message() -> Result<()> {
    let output = run_default(ExerciseId::Calculator, "10\n0\n/\n")?;
    assert!(output.ends_with("Error: Division by zero\n"));
    Ok(())
}

#[test]
fn test_calculator_integer_division_and_unknown_operation() -> Result<()> {
    let output = run_default(ExerciseId::Calculator, "7 2 /\n")?;
    assert!(output.ends_with("\n3\n"));

    let output = run_default(ExerciseId::Calculator, "7\n2\n%\n")?;
    assert!(output.ends_with("Invalid operation\n"));
    Ok(())
}

#[test]
fn test_calculator_overflow_prints_fixed_message() -> Result<()> {
    let output = run_default(ExerciseId::Calculator, "2147483647 1 +\n")?;
    assert!(output.ends_with("Choose operation: +, -, *, /\nError: Arithmetic overflow\n"));

    let output = run_default(ExerciseId::Calculator, "-2147483648\n-1\n/\n")?;
    assert!(output.ends_with("Error: Arithmetic overflow\n"));
    Ok(())
}

#[test]
fn test_invalid_utf8_input_fails_as_input_error() {
    let mut out = Vec::new();
    let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n']), &mut out);
    let err = ExerciseRunner::from_catalog(ExerciseId::CircleArea, &ExerciseConfig::default())
        .run(&mut console)
        .expect_err("non UTF-8 input should fail");
    assert!(matches!(err, ExerciseError::InvalidInputError { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_calculator_malformed_number_fails() {
    match failure(ExerciseId::Calculator, "two\n3\n+\n") {
        ExerciseError::InvalidInputError { found, .. } => assert_eq!(found, "two"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_circle_area() -> Result<()> {
    let output = run_default(ExerciseId::CircleArea, "5\n")?;
    assert_eq!(output, "Enter radius of the circle:\nArea of the circle: 78.54\n");

    let output = run_default(ExerciseId::CircleArea, "-5\n")?;
    assert!(output.ends_with("Area of the circle: 78.54\n"));
    Ok(())
}

#[test]
fn test_shapes() -> Result<()> {
    let output = run_default(ExerciseId::Shapes, "")?;
    assert_eq!(output, "Circle area: 78.54\nRectangle area: 24.00\n");
    Ok(())
}

#[test]
fn test_array_stats_exact_average() -> Result<()> {
    let output = run_default(ExerciseId::ArrayStats, "")?;
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines.contains(&"First element: 72"));
    assert!(lines.contains(&"Lowest score: 72"));
    assert!(lines.contains(&"Highest score: 99"));
    assert!(lines.contains(&"Last element: 74"));
    assert!(lines.contains(&"index: 9"));
    assert!(lines.contains(&"element: 74"));
    assert!(lines.contains(&"Sum of scores: 835"));
    assert_eq!(lines.last(), Some(&"Average score: 83.5"));
    Ok(())
}

#[test]
fn test_array_stats_truncated_average() -> Result<()> {
    let mut config = ExerciseConfig::default();
    config.array.average = oop_exercises::domain::stats::AverageMode::Truncated;

    let output = transcript(ExerciseId::ArrayStats, &config, "")?;
    assert!(output.ends_with("Average score: 83\n"));
    Ok(())
}

#[test]
fn test_array_stats_empty_scores_fail() {
    let mut config = ExerciseConfig::default();
    config.array.scores.clear();

    let mut out = Vec::new();
    let mut console = Console::new(Cursor::new(&b""[..]), &mut out);
    let result = ExerciseRunner::from_catalog(ExerciseId::ArrayStats, &config).run(&mut console);
    assert!(matches!(result, Err(ExerciseError::EmptyInputError)));
}

#[test]
fn test_encapsulation() -> Result<()> {
    assert_eq!(run_default(ExerciseId::Encapsulation, "")?, "Age: 20\n");

    let mut config = ExerciseConfig::default();
    config.person.age = -1;
    let output = transcript(ExerciseId::Encapsulation, &config, "")?;
    assert_eq!(output, "Age must be positive!\nAge: not set\n");
    Ok(())
}

#[test]
fn test_speak() -> Result<()> {
    assert_eq!(run_default(ExerciseId::Speak, "")?, "Tweet!\nBeep boop!\n");
    Ok(())
}

#[test]
fn test_composition() -> Result<()> {
    let output = run_default(ExerciseId::Composition, "")?;
    assert_eq!(
        output,
        "I am Francis, a student.\n\
         I am Mr. Cruz, a teacher.\n\
         \n\
         Message sent to teacher.\n\
         Message sent to teacher: Can I submit my project tomorrow?\n\
         Message sent to student.\n\
         \n\
         School has: Francis and Mr. Cruz\n"
    );
    Ok(())
}

#[test]
fn test_payroll() -> Result<()> {
    let output = run_default(ExerciseId::Payroll, "")?;
    assert_eq!(
        output,
        "Hourly employee pay: 800.00\nSalaried employee pay: 5000.00\n"
    );
    Ok(())
}

#[test]
fn test_abstraction_answers() -> Result<()> {
    let output = run_default(ExerciseId::Abstraction, "yes\nno\n")?;
    assert_eq!(
        output,
        "Do you want to start the engine? (yes/no): \
         Toyota Vios engine started using push button.\n\
         Do you want to stop the engine? (yes/no): \
         Toyota Vios engine started using push button.\n\
         Car Brand: Toyota\n\
         Model: Toyota Vios 2024\n"
    );

    let output = run_default(ExerciseId::Abstraction, "no\nyes\n")?;
    assert_eq!(
        output.matches("Toyota Vios engine stopped.").count(),
        2
    );
    Ok(())
}

#[test]
fn test_inheritance() -> Result<()> {
    let output = run_default(
        ExerciseId::Inheritance,
        "Toyota\nVios\nAutomatic\nNo\nSilver\n",
    )?;
    assert_eq!(
        output,
        "What brand do you want? What model? Enter transmission: \
         Enter convertible: Enter color: Vehicle is starting...\n\
         Brand: Toyota\n\
         Model: Vios\n\
         Transmission: Automatic\n\
         Convertible: No\n\
         Color: Silver\n"
    );
    Ok(())
}

#[test]
fn test_polymorphism() -> Result<()> {
    let input = "Toyota\n2020\nRed\nAutomatic\nNo\nYamaha\n2022\nBlue\nManual\nNo\n";
    let output = run_default(ExerciseId::Polymorphism, input)?;

    assert!(output.contains(
        "--- Car Information ---\n\
         Brand: Toyota\n\
         Year: 2020\n\
         Color: Red\n\
         Transmission: Automatic\n\
         Convertible: No\n"
    ));
    assert!(output.contains(
        "--- Motorcycle Information ---\n\
         Brand: Yamaha\n\
         Year: 2022\n"
    ));
    assert!(output.ends_with(
        "Car speed: 150 km/h\n\
         Motorcycle speed: 200 km/h\n\
         Motorcycle is faster\n"
    ));
    Ok(())
}

#[test]
fn test_polymorphism_bad_year_fails() {
    match failure(ExerciseId::Polymorphism, "Toyota\nnineteen\n") {
        ExerciseError::InvalidInputError { expected, found } => {
            assert_eq!(expected, "an integer");
            assert_eq!(found, "nineteen");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_input_is_an_input_error() {
    let err = failure(ExerciseId::CircleArea, "");
    assert!(matches!(err, ExerciseError::UnexpectedEofError { .. }));
    assert_eq!(err.exit_code(), 1);
}
