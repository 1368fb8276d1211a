use crate::domain::ports::Payable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyEmployee {
    pub hourly_rate: f64,
    pub hours_worked: u32,
}

impl Payable for HourlyEmployee {
    fn calculate_pay(&self) -> f64 {
        self.hourly_rate * f64::from(self.hours_worked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalariedEmployee {
    pub monthly_salary: f64,
}

impl Payable for SalariedEmployee {
    fn calculate_pay(&self) -> f64 {
        self.monthly_salary
    }
}
