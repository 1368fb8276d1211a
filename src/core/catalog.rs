use crate::app::exercises::{
    AbstractionExercise, ArrayStatsExercise, CalculatorExercise, CircleAreaExercise,
    CompositionExercise, EncapsulationExercise, InheritanceExercise, PayrollExercise,
    PolymorphismExercise, ShapesExercise, SpeakExercise,
};
use crate::config::toml_config::ExerciseConfig;
use crate::core::exercise::Exercise;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseId {
    ArrayStats,
    Abstraction,
    Calculator,
    CircleArea,
    Inheritance,
    Shapes,
    Encapsulation,
    Speak,
    Composition,
    Polymorphism,
    Payroll,
}

impl ExerciseId {
    pub const ALL: [ExerciseId; 11] = [
        ExerciseId::ArrayStats,
        ExerciseId::Abstraction,
        ExerciseId::Calculator,
        ExerciseId::CircleArea,
        ExerciseId::Inheritance,
        ExerciseId::Shapes,
        ExerciseId::Encapsulation,
        ExerciseId::Speak,
        ExerciseId::Composition,
        ExerciseId::Polymorphism,
        ExerciseId::Payroll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseId::ArrayStats => "array-stats",
            ExerciseId::Abstraction => "abstraction",
            ExerciseId::Calculator => "calculator",
            ExerciseId::CircleArea => "circle-area",
            ExerciseId::Inheritance => "inheritance",
            ExerciseId::Shapes => "shapes",
            ExerciseId::Encapsulation => "encapsulation",
            ExerciseId::Speak => "speak",
            ExerciseId::Composition => "composition",
            ExerciseId::Polymorphism => "polymorphism",
            ExerciseId::Payroll => "payroll",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExerciseId::ArrayStats => "Score array statistics",
            ExerciseId::Abstraction => "Abstract car with a concrete model",
            ExerciseId::Calculator => "Four-function integer calculator",
            ExerciseId::CircleArea => "Circle area from a radius",
            ExerciseId::Inheritance => "Vehicle fields shared by a car",
            ExerciseId::Shapes => "Areas of a closed shape family",
            ExerciseId::Encapsulation => "Private age with a validating setter",
            ExerciseId::Speak => "Unrelated types sharing a speak contract",
            ExerciseId::Composition => "School composed of a student and a teacher",
            ExerciseId::Polymorphism => "Car and motorcycle speeds through one base type",
            ExerciseId::Payroll => "Hourly and salaried employee pay",
        }
    }

    /// Whether the exercise reads from the console.
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            ExerciseId::Abstraction
                | ExerciseId::Calculator
                | ExerciseId::CircleArea
                | ExerciseId::Inheritance
                | ExerciseId::Polymorphism
        )
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: ExerciseId,
    pub title: &'static str,
    pub interactive: bool,
}

pub fn entries() -> Vec<CatalogEntry> {
    ExerciseId::ALL
        .iter()
        .map(|&id| CatalogEntry {
            id,
            title: id.title(),
            interactive: id.is_interactive(),
        })
        .collect()
}

pub fn build(id: ExerciseId, config: &ExerciseConfig) -> Box<dyn Exercise> {
    match id {
        ExerciseId::ArrayStats => Box::new(ArrayStatsExercise::new(
            config.array.scores.clone(),
            config.array.average,
        )),
        ExerciseId::Abstraction => Box::new(AbstractionExercise),
        ExerciseId::Calculator => Box::new(CalculatorExercise),
        ExerciseId::CircleArea => Box::new(CircleAreaExercise),
        ExerciseId::Inheritance => Box::new(InheritanceExercise),
        ExerciseId::Shapes => Box::new(ShapesExercise::new(
            config.shapes.circle_radius,
            config.shapes.rectangle_width,
            config.shapes.rectangle_height,
        )),
        ExerciseId::Encapsulation => Box::new(EncapsulationExercise::new(config.person.age)),
        ExerciseId::Speak => Box::new(SpeakExercise),
        ExerciseId::Composition => Box::new(CompositionExercise::new(
            config.school.student.clone(),
            config.school.teacher.clone(),
            config.school.message.clone(),
        )),
        ExerciseId::Polymorphism => Box::new(PolymorphismExercise),
        ExerciseId::Payroll => Box::new(PayrollExercise::new(
            config.payroll.hourly_rate,
            config.payroll.hours_worked,
            config.payroll.monthly_salary,
        )),
    }
}
