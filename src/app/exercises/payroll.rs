use crate::core::{Console, Exercise, ExerciseId, Result};
use crate::domain::payroll::{HourlyEmployee, SalariedEmployee};
use crate::domain::ports::Payable;

pub struct PayrollExercise {
    hourly: HourlyEmployee,
    salaried: SalariedEmployee,
}

impl PayrollExercise {
    pub fn new(hourly_rate: f64, hours_worked: u32, monthly_salary: f64) -> Self {
        Self {
            hourly: HourlyEmployee {
                hourly_rate,
                hours_worked,
            },
            salaried: SalariedEmployee { monthly_salary },
        }
    }
}

impl Exercise for PayrollExercise {
    fn id(&self) -> ExerciseId {
        ExerciseId::Payroll
    }

    fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let staff: [(&str, &dyn Payable); 2] = [
            ("Hourly", &self.hourly),
            ("Salaried", &self.salaried),
        ];
        for (label, employee) in staff {
            console.say(format!("{} employee pay: {:.2}", label, employee.calculate_pay()))?;
        }
        Ok(())
    }
}
