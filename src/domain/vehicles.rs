use crate::domain::ports::Vehicle;
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDetails {
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: String,
    pub transmission: String,
    pub convertible: String,
}

/// Tagged view of a `&dyn Vehicle`, used instead of downcasting.
#[derive(Debug, Clone, Copy)]
pub enum VehicleKind<'a> {
    Car(&'a Car),
    Motorcycle(&'a Motorcycle),
    Generic,
}

#[derive(Debug, Clone, Default)]
pub struct GenericVehicle {
    details: VehicleDetails,
}

impl GenericVehicle {
    pub fn new(details: VehicleDetails) -> Self {
        Self { details }
    }
}

impl Vehicle for GenericVehicle {
    fn details(&self) -> &VehicleDetails {
        &self.details
    }
}

#[derive(Debug, Clone, Default)]
pub struct Car {
    details: VehicleDetails,
}

impl Car {
    pub const SPEED_KMH: u32 = 150;

    pub fn new(details: VehicleDetails) -> Self {
        Self { details }
    }

    /// Full spec sheet; only cars carry a model name worth listing.
    pub fn display_info(&self) -> Vec<String> {
        let details = &self.details;
        vec![
            format!("Brand: {}", details.brand),
            format!("Model: {}", details.model.as_deref().unwrap_or("unknown")),
            format!("Transmission: {}", details.transmission),
            format!("Convertible: {}", details.convertible),
            format!("Color: {}", details.color),
        ]
    }
}

impl Vehicle for Car {
    fn details(&self) -> &VehicleDetails {
        &self.details
    }

    fn speed(&self) -> u32 {
        Self::SPEED_KMH
    }

    fn kind(&self) -> VehicleKind<'_> {
        VehicleKind::Car(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Motorcycle {
    details: VehicleDetails,
}

impl Motorcycle {
    pub const SPEED_KMH: u32 = 200;

    pub fn new(details: VehicleDetails) -> Self {
        Self { details }
    }
}

impl Vehicle for Motorcycle {
    fn details(&self) -> &VehicleDetails {
        &self.details
    }

    fn speed(&self) -> u32 {
        Self::SPEED_KMH
    }

    fn kind(&self) -> VehicleKind<'_> {
        VehicleKind::Motorcycle(self)
    }
}

pub fn compare_speed(first: &dyn Vehicle, second: &dyn Vehicle) -> Ordering {
    first.speed().cmp(&second.speed())
}
