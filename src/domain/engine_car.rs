use crate::domain::ports::{EngineCar, ShowModel};

/// Extra operations an `EngineCar` may expose beyond the base contract.
pub enum CarCapability<'a> {
    Basic,
    Model(&'a dyn ShowModel),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToyotaVios;

impl EngineCar for ToyotaVios {
    fn start_engine(&self) -> &'static str {
        "Toyota Vios engine started using push button."
    }

    fn stop_engine(&self) -> &'static str {
        "Toyota Vios engine stopped."
    }

    fn capability(&self) -> CarCapability<'_> {
        CarCapability::Model(self)
    }
}

impl ShowModel for ToyotaVios {
    fn show_model(&self) -> String {
        "Model: Toyota Vios 2024".to_string()
    }
}
