use serde::{Deserialize, Serialize};

use crate::branch::SemanticBranch;
use crate::error::{Result, SemanticBranchError};
use crate::names::ensure_valid_semantic_name;

/// Configuration for a [`Classifier`](crate::Classifier).
///
/// ```toml
/// include_builtin = true
///
/// [[categories]]
/// name = "chore"
/// stubs = ["chore", "deps"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Whether the built-in catalog takes part in classification.
    pub include_builtin: bool,
    /// Extra categories, checked before the built-in ones in declared order.
    pub categories: Vec<SemanticBranch>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            categories: Vec::new(),
        }
    }
}

impl ClassifierConfig {
    /// Only the given categories, without the built-in catalog.
    pub fn custom_only(categories: Vec<SemanticBranch>) -> Self {
        Self {
            include_builtin: false,
            categories,
        }
    }

    /// Parse a configuration from TOML and validate it.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| SemanticBranchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every stub of every custom category is a valid semantic name.
    pub fn validate(&self) -> Result<()> {
        for category in &self.categories {
            for stub in &category.stubs {
                ensure_valid_semantic_name(stub)?;
            }
        }
        Ok(())
    }
}
