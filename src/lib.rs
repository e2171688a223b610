pub mod demo;
pub mod roster;

pub use demo::config::DemoConfig;
pub use demo::DemoApp;
