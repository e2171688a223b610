pub mod character;
pub mod vehicle;

pub use character::{Character, IdentityAssignment, Persona, PowerError, PowerOutcome, Villain};
pub use vehicle::{
    AutonomousDrone, BaseVehicle, ElectricCar, RoboticSubmarine, Vehicle, VehicleError,
    VehicleKind,
};
