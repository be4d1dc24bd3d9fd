// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML scenario files: a list of `[[timer]]` plans plus optional host
//! overrides.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::plan::{PlanError, TimerPlan};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("scenario has no [[timer]] entries")]
    Empty,

    #[error("duplicate timer name '{0}'")]
    DuplicateName(String),

    #[error("time_scale must be finite and non-negative (got {0})")]
    TimeScale(f64),

    #[error("tick_ms must be at least 1")]
    ZeroTick,

    #[error(transparent)]
    Plan(#[from] PlanError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Frame period override.
    #[serde(default)]
    pub tick_ms: Option<u64>,
    #[serde(default)]
    pub time_scale: Option<f64>,
    #[serde(default, rename = "timer")]
    pub timers: Vec<TimerPlan>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse and validate scenario text. `path` is only used in errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(text).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.timers.is_empty() {
            return Err(ScenarioError::Empty);
        }
        if self.tick_ms == Some(0) {
            return Err(ScenarioError::ZeroTick);
        }
        if let Some(scale) = self.time_scale {
            if !scale.is_finite() || scale < 0.0 {
                return Err(ScenarioError::TimeScale(scale));
            }
        }
        let mut names = HashSet::new();
        for plan in &self.timers {
            plan.validate()?;
            if !names.insert(plan.name.as_str()) {
                return Err(ScenarioError::DuplicateName(plan.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
