use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid operation '{0}'")]
    UnknownOperation(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Integer arithmetic; division truncates toward zero.
    pub fn apply(self, a: i32, b: i32) -> Result<i32, CalcError> {
        match self {
            Operation::Add => a.checked_add(b).ok_or(CalcError::Overflow),
            Operation::Subtract => a.checked_sub(b).ok_or(CalcError::Overflow),
            Operation::Multiply => a.checked_mul(b).ok_or(CalcError::Overflow),
            Operation::Divide => {
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                a.checked_div(b).ok_or(CalcError::Overflow)
            }
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' => Ok(Operation::Multiply),
            '/' => Ok(Operation::Divide),
            other => Err(CalcError::UnknownOperation(other)),
        }
    }
}
