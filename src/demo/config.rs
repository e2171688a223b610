use std::path::Path;

use anyhow::{Context, Result};
use ron::Value;
use serde::Deserialize;

use crate::roster::{Character, Persona, VehicleKind, Villain};

pub const CONFIG_ENV_VAR: &str = "CAPES_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub app_name: String,
    pub roster: Vec<RosterEntry>,
    pub fleet: Vec<VehicleKind>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            app_name: "Engineering Demo".to_string(),
            roster: vec![
                RosterEntry {
                    name: "Iron Man".to_string(),
                    secret_identity: "Tony Stark".to_string(),
                    powers: vec![
                        "Repulsor beams".to_string(),
                        "Flight".to_string(),
                        "AI-assisted suit".to_string(),
                    ],
                    weakness: "Power source depletion".to_string(),
                    energy_level: None,
                    evil_plan: None,
                    uses: vec![0],
                    identity_override: None,
                },
                RosterEntry {
                    name: "Ultron".to_string(),
                    secret_identity: "AI-1001".to_string(),
                    powers: vec!["Self-replication".to_string(), "Plasma beams".to_string()],
                    weakness: "Internet disconnection".to_string(),
                    energy_level: None,
                    evil_plan: Some("Erase humanity".to_string()),
                    uses: vec![1],
                    identity_override: None,
                },
            ],
            fleet: VehicleKind::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).context("failed to parse demo config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read demo config {}", path.display()))?;
        Self::from_ron_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Loads the file named by `CAPES_CONFIG`, falling back to the built-in roster.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!(target: "demo", path = ?path, "loading demo config");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub secret_identity: String,
    pub powers: Vec<String>,
    pub weakness: String,
    #[serde(default)]
    pub energy_level: Option<i32>,
    #[serde(default)]
    pub evil_plan: Option<String>,
    #[serde(default)]
    pub uses: Vec<usize>,
    #[serde(default)]
    pub identity_override: Option<Value>,
}

impl RosterEntry {
    /// Entries with an evil plan become villains, which always start at full energy.
    pub fn build(&self) -> Box<dyn Persona> {
        match &self.evil_plan {
            Some(plan) => Box::new(Villain::new(
                &self.name,
                &self.secret_identity,
                &self.powers,
                &self.weakness,
                plan,
            )),
            None => {
                let hero = Character::new(
                    &self.name,
                    &self.secret_identity,
                    &self.powers,
                    &self.weakness,
                );
                match self.energy_level {
                    Some(level) => Box::new(hero.with_energy_level(level)),
                    None => Box::new(hero),
                }
            }
        }
    }
}
