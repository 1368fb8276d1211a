// Domain layer: the exercise models and the capability traits they implement.

pub mod calculator;
pub mod engine_car;
pub mod payroll;
pub mod person;
pub mod ports;
pub mod school;
pub mod shapes;
pub mod speak;
pub mod stats;
pub mod vehicles;
