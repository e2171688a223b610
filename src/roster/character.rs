use std::fmt;

use ron::Value;
use thiserror::Error;

pub const DEFAULT_ENERGY_LEVEL: i32 = 100;
pub const HERO_POWER_COST: i32 = 10;
pub const VILLAIN_POWER_COST: i32 = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PowerError {
    #[error("power index {index} out of range for {name} ({available} powers)")]
    IndexOutOfRange {
        name: String,
        index: usize,
        available: usize,
    },
}

/// What happened when a persona reached for one of its powers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerOutcome {
    LowEnergy { name: String },
    Used { name: String, power: String },
    InvalidIndex { name: String, index: usize },
    Weaponized { name: String, power: String },
}

impl PowerOutcome {
    /// True when the power actually fired and energy was spent.
    pub fn fired(&self) -> bool {
        matches!(self, Self::Used { .. } | Self::Weaponized { .. })
    }
}

impl fmt::Display for PowerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowEnergy { name } => write!(f, "⚡ {name}: LOW ENERGY!"),
            Self::Used { name, power } => write!(f, "💥 {name} uses {power}!"),
            Self::InvalidIndex { name, .. } => write!(f, "❌ Invalid power index for {name}"),
            Self::Weaponized { name, power } => write!(f, "🤖 {name} weaponizes {power}!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAssignment {
    Updated,
    Rejected,
}

impl fmt::Display for IdentityAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "Secret identity updated"),
            Self::Rejected => write!(f, "⚠️ Secret identity must be a string!"),
        }
    }
}

/// Anything that can stand in for a [`Character`] and fire powers by position.
pub trait Persona: fmt::Display {
    fn character(&self) -> &Character;
    fn character_mut(&mut self) -> &mut Character;
    fn use_power(&mut self, index: usize) -> Result<PowerOutcome, PowerError>;

    fn name(&self) -> &str {
        &self.character().name
    }

    fn energy_level(&self) -> i32 {
        self.character().energy_level
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    secret_identity: String,
    pub powers: Vec<String>,
    pub weakness: String,
    pub energy_level: i32,
}

impl Character {
    pub fn new<P, S>(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: P,
        weakness: impl Into<String>,
    ) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            secret_identity: secret_identity.into(),
            powers: powers.into_iter().map(Into::into).collect(),
            weakness: weakness.into(),
            energy_level: DEFAULT_ENERGY_LEVEL,
        }
    }

    pub fn with_energy_level(mut self, energy_level: i32) -> Self {
        self.energy_level = energy_level;
        self
    }

    pub fn secret_identity(&self) -> &str {
        &self.secret_identity
    }

    pub fn set_secret_identity(&mut self, identity: impl Into<String>) {
        self.secret_identity = identity.into();
    }

    /// Assigns an untyped value. Only strings are stored; anything else is
    /// logged and dropped, leaving the previous identity in place.
    pub fn assign_secret_identity(&mut self, value: &Value) -> IdentityAssignment {
        match value {
            Value::String(identity) => {
                self.secret_identity = identity.clone();
                IdentityAssignment::Updated
            }
            other => {
                tracing::warn!(
                    name = %self.name,
                    value = ?other,
                    "rejected non-string secret identity"
                );
                IdentityAssignment::Rejected
            }
        }
    }

    pub fn power(&self, index: usize) -> Option<&str> {
        self.powers.get(index).map(String::as_str)
    }
}

impl Persona for Character {
    fn character(&self) -> &Character {
        self
    }

    fn character_mut(&mut self) -> &mut Character {
        self
    }

    fn use_power(&mut self, index: usize) -> Result<PowerOutcome, PowerError> {
        if self.energy_level <= 0 {
            tracing::debug!(
                name = %self.name,
                energy = self.energy_level,
                "power blocked by low energy"
            );
            return Ok(PowerOutcome::LowEnergy {
                name: self.name.clone(),
            });
        }

        let Some(power) = self.power(index).map(str::to_owned) else {
            tracing::debug!(name = %self.name, index, "invalid power index");
            return Ok(PowerOutcome::InvalidIndex {
                name: self.name.clone(),
                index,
            });
        };

        self.energy_level -= HERO_POWER_COST;
        tracing::debug!(name = %self.name, %power, energy = self.energy_level, "power used");
        Ok(PowerOutcome::Used {
            name: self.name.clone(),
            power,
        })
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🦾 {} | Powers: {} | Energy: {}%",
            self.name,
            self.powers.join(", "),
            self.energy_level
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Villain {
    base: Character,
    pub evil_plan: String,
}

impl Villain {
    pub fn new<P, S>(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: P,
        weakness: impl Into<String>,
        evil_plan: impl Into<String>,
    ) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: Character::new(name, secret_identity, powers, weakness),
            evil_plan: evil_plan.into(),
        }
    }
}

impl Persona for Villain {
    fn character(&self) -> &Character {
        &self.base
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.base
    }

    // No energy guard here: villains keep firing into negative energy.
    fn use_power(&mut self, index: usize) -> Result<PowerOutcome, PowerError> {
        let base = &mut self.base;
        let power = base
            .power(index)
            .map(str::to_owned)
            .ok_or_else(|| PowerError::IndexOutOfRange {
                name: base.name.clone(),
                index,
                available: base.powers.len(),
            })?;

        base.energy_level = base.energy_level.saturating_sub(VILLAIN_POWER_COST);
        tracing::debug!(
            name = %base.name,
            %power,
            energy = base.energy_level,
            "power weaponized"
        );
        Ok(PowerOutcome::Weaponized {
            name: base.name.clone(),
            power,
        })
    }
}

impl fmt::Display for Villain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}
