use serde::{Deserialize, Serialize};
use shared::models::WizardTable;

use super::WizardStep;
use crate::core::{AdminError, AdminResult};

/// Generate `count` tables named `{prefix}{n}` starting at `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    #[serde(default)]
    pub prefix: String,
    pub count: u32,
    #[serde(default = "default_start")]
    pub start: u32,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

/// Upper bound on tables generated in one go
pub const MAX_GENERATED_TABLES: u32 = 1000;

fn default_start() -> u32 {
    1
}

fn default_capacity() -> u32 {
    4
}

impl TableSpec {
    pub fn new(prefix: impl Into<String>, count: u32) -> Self {
        Self {
            prefix: prefix.into(),
            count,
            start: default_start(),
            capacity: default_capacity(),
        }
    }

    pub fn generate(&self) -> AdminResult<Vec<WizardTable>> {
        if self.count == 0 {
            return Err(AdminError::wizard(WizardStep::Tables, "Table count must be positive"));
        }
        if self.count > MAX_GENERATED_TABLES {
            return Err(AdminError::wizard(
                WizardStep::Tables,
                format!("At most {} tables can be generated at once", MAX_GENERATED_TABLES),
            ));
        }
        if self.capacity == 0 {
            return Err(AdminError::wizard(WizardStep::Tables, "Table capacity must be positive"));
        }
        let prefix = self.prefix.trim();
        let last = self.start.checked_add(self.count - 1).ok_or_else(|| {
            AdminError::wizard(WizardStep::Tables, "Table numbers out of range")
        })?;
        Ok((self.start..=last)
            .map(|n| WizardTable {
                name: format!("{}{}", prefix, n),
                capacity: self.capacity,
            })
            .collect())
    }
}
