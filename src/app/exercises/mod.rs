pub mod abstraction;
pub mod array_stats;
pub mod calculator;
pub mod circle_area;
pub mod composition;
pub mod encapsulation;
pub mod inheritance;
pub mod payroll;
pub mod polymorphism;
pub mod shapes;
pub mod speak;

pub use abstraction::AbstractionExercise;
pub use array_stats::ArrayStatsExercise;
pub use calculator::CalculatorExercise;
pub use circle_area::CircleAreaExercise;
pub use composition::CompositionExercise;
pub use encapsulation::EncapsulationExercise;
pub use inheritance::InheritanceExercise;
pub use payroll::PayrollExercise;
pub use polymorphism::PolymorphismExercise;
pub use shapes::ShapesExercise;
pub use speak::SpeakExercise;
