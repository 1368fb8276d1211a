use crate::utils::error::{ExerciseError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    age: Option<u32>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// Stores `age` only when it is positive; otherwise the previous value is kept.
    pub fn set_age(&mut self, age: i32) -> Result<()> {
        match u32::try_from(age) {
            Ok(valid) if valid > 0 => {
                self.age = Some(valid);
                Ok(())
            }
            _ => Err(ExerciseError::InvalidAgeError { age }),
        }
    }
}
