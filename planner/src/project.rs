//! Project files: a tokenomics configuration plus optional valuation inputs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use model_tokenomics::{template, TokenomicsData, ValuationInput};

use crate::error::{PlannerError, PlannerResult};

/// Everything the planner evaluates in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub tokenomics: TokenomicsData,

    /// Fundraising parameters; valuation is skipped when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<ValuationInput>,

    /// Questionnaire answers keyed by question id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub answers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Toml,
    Json,
}

impl ProjectFormat {
    /// `.json` files are JSON, everything else TOML
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProjectFormat::Json,
            _ => ProjectFormat::Toml,
        }
    }
}

impl Project {
    /// Project seeded from a named template
    pub fn from_template(name: &str) -> PlannerResult<Self> {
        let tokenomics = template(name).ok_or_else(|| PlannerError::UnknownTemplate(name.to_string()))?;
        Ok(Self {
            tokenomics,
            valuation: None,
            answers: BTreeMap::new(),
        })
    }

    /// Parse project text; `path` is only used in error messages
    pub fn parse(content: &str, format: ProjectFormat, path: &str) -> PlannerResult<Self> {
        let parsed: Result<Self, Box<dyn std::error::Error + Send + Sync>> = match format {
            ProjectFormat::Toml => toml::from_str(content).map_err(|e| e.into()),
            ProjectFormat::Json => serde_json::from_str(content).map_err(|e| e.into()),
        };
        parsed.map_err(|source| PlannerError::ProjectParse {
            path: path.to_string(),
            source,
        })
    }

    /// Load a project file, expanding `~`
    pub fn load(path: &str) -> PlannerResult<Self> {
        let expanded = shellexpand::tilde(path);
        let content = std::fs::read_to_string(expanded.as_ref()).map_err(|source| {
            PlannerError::ProjectRead {
                path: path.to_string(),
                source,
            }
        })?;
        Self::parse(&content, ProjectFormat::from_path(path), path)
    }

    /// Write the project in the format implied by `path`
    pub fn save(&self, path: &str) -> PlannerResult<()> {
        let content = match ProjectFormat::from_path(path) {
            ProjectFormat::Toml => toml::to_string_pretty(self)?,
            ProjectFormat::Json => serde_json::to_string_pretty(self)?,
        };
        let expanded = shellexpand::tilde(path);
        std::fs::write(expanded.as_ref(), content).map_err(|source| PlannerError::OutputWrite {
            path: path.to_string(),
            source,
        })
    }
}
