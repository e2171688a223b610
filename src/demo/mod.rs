pub mod config;

use std::io::Write;

use anyhow::{Context, Result};

use crate::roster::{IdentityAssignment, Persona, Vehicle};
use config::{DemoConfig, RosterEntry};

pub struct DemoApp {
    config: DemoConfig,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        tracing::info!(target: "demo", app = %self.config.app_name, "Demo starting");
        self.run_roster(out)?;
        self.run_fleet(out)?;
        tracing::info!(target: "demo", "Demo complete");
        Ok(())
    }

    fn run_roster(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "=== ENGINEERING SUPERHERO DEMO ===")?;

        for (slot, entry) in self.config.roster.iter().enumerate() {
            if slot > 0 {
                writeln!(out)?;
            }
            let mut persona = entry.build();
            writeln!(out, "{persona}")?;
            apply_identity_override(entry, persona.as_mut(), out)?;

            for &index in &entry.uses {
                let outcome = persona
                    .use_power(index)
                    .with_context(|| format!("{} could not use power {index}", entry.name))?;
                writeln!(out, "{outcome}")?;
            }
        }
        Ok(())
    }

    fn run_fleet(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\n=== POLYMORPHISM DEMO ===")?;

        let fleet: Vec<Box<dyn Vehicle>> =
            self.config.fleet.iter().map(|kind| kind.build()).collect();
        for vehicle in &fleet {
            let action = vehicle.move_action()?;
            tracing::trace!(vehicle = vehicle.name(), "vehicle moved");
            writeln!(out, "{action}")?;
        }
        Ok(())
    }
}

fn apply_identity_override(
    entry: &RosterEntry,
    persona: &mut dyn Persona,
    out: &mut impl Write,
) -> Result<()> {
    let Some(value) = &entry.identity_override else {
        return Ok(());
    };
    if persona.character_mut().assign_secret_identity(value) == IdentityAssignment::Rejected {
        writeln!(out, "{}", IdentityAssignment::Rejected)?;
    }
    Ok(())
}
