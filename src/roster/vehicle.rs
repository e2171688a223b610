use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("{vehicle} does not implement move_action")]
    NotImplemented { vehicle: &'static str },
}

/// A machine that can describe how it moves.
///
/// Implementors are expected to override [`Vehicle::move_action`]; the
/// provided body only reports that the capability is missing.
pub trait Vehicle {
    fn name(&self) -> &'static str;

    fn move_action(&self) -> Result<&'static str, VehicleError> {
        Err(VehicleError::NotImplemented {
            vehicle: self.name(),
        })
    }
}

/// The bare vehicle with no movement of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaseVehicle;

impl Vehicle for BaseVehicle {
    fn name(&self) -> &'static str {
        "Vehicle"
    }
}

/// A UAV with AI navigation.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutonomousDrone;

impl Vehicle for AutonomousDrone {
    fn name(&self) -> &'static str {
        "AutonomousDrone"
    }

    fn move_action(&self) -> Result<&'static str, VehicleError> {
        Ok("🚁 Scanning terrain and avoiding obstacles with LiDAR!")
    }
}

/// An EV with regenerative braking.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElectricCar;

impl Vehicle for ElectricCar {
    fn name(&self) -> &'static str {
        "ElectricCar"
    }

    fn move_action(&self) -> Result<&'static str, VehicleError> {
        Ok("🔋 Accelerating with 800V battery system (0-60mph in 2.5s)!")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoboticSubmarine;

impl Vehicle for RoboticSubmarine {
    fn name(&self) -> &'static str {
        "RoboticSubmarine"
    }

    fn move_action(&self) -> Result<&'static str, VehicleError> {
        Ok("🤖 Diving to 1000m with pressure-resistant hull!")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    AutonomousDrone,
    ElectricCar,
    RoboticSubmarine,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::AutonomousDrone,
        VehicleKind::ElectricCar,
        VehicleKind::RoboticSubmarine,
    ];

    pub fn build(self) -> Box<dyn Vehicle> {
        match self {
            Self::AutonomousDrone => Box::new(AutonomousDrone),
            Self::ElectricCar => Box::new(ElectricCar),
            Self::RoboticSubmarine => Box::new(RoboticSubmarine),
        }
    }
}
