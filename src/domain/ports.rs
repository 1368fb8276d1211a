use crate::domain::engine_car::CarCapability;
use crate::domain::vehicles::{VehicleDetails, VehicleKind};

/// A value with a single scalar measurement (area for shapes).
pub trait Measure {
    fn compute_metric(&self) -> f64;
}

pub trait Vehicle {
    fn details(&self) -> &VehicleDetails;

    fn speed(&self) -> u32 {
        0
    }

    fn start(&self) -> &'static str {
        "Vehicle is starting..."
    }

    fn info(&self) -> &'static str {
        "This is a vehicle"
    }

    /// The detail block printed for any vehicle.
    fn info_with_details(&self) -> Vec<String> {
        let details = self.details();
        let mut lines = vec![format!("Brand: {}", details.brand)];
        if let Some(year) = details.year {
            lines.push(format!("Year: {}", year));
        }
        lines.push(format!("Color: {}", details.color));
        lines.push(format!("Transmission: {}", details.transmission));
        lines.push(format!("Convertible: {}", details.convertible));
        lines
    }

    /// Narrows to the concrete variant so callers can reach subtype-only operations.
    fn kind(&self) -> VehicleKind<'_> {
        VehicleKind::Generic
    }
}

pub trait EngineCar {
    fn start_engine(&self) -> &'static str;
    fn stop_engine(&self) -> &'static str;

    fn brand(&self) -> &str {
        "Toyota"
    }

    fn show_brand(&self) -> String {
        format!("Car Brand: {}", self.brand())
    }

    fn capability(&self) -> CarCapability<'_> {
        CarCapability::Basic
    }
}

pub trait ShowModel {
    fn show_model(&self) -> String;
}

pub trait Speak {
    fn speak(&self) -> &'static str;
}

/// Someone belonging to a school.
pub trait Member {
    fn name(&self) -> &str;

    fn show_info(&self) -> String {
        format!("I am {}", self.name())
    }
}

pub trait Payable {
    fn calculate_pay(&self) -> f64;
}
