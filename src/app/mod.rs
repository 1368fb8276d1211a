pub mod exercises;
pub mod listing;
pub mod standalone;
