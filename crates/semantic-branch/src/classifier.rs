//! Classification of branch names against a set of categories.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::{SemanticBranch, SemanticBranchEnum};
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::matcher::leading_token;

/// The outcome of a successful classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Name of the matched category.
    pub category: String,
    /// The normalized leading token that matched one of its stubs.
    pub stub: String,
}

/// Classifies branch names against custom and built-in categories.
///
/// Categories are checked in order: custom ones from the config first, then
/// the built-in catalog when enabled. The first match wins.
#[derive(Clone, Debug)]
pub struct Classifier {
    categories: Vec<SemanticBranch>,
}

impl Classifier {
    /// Build a classifier, validating the config's custom stubs.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let mut categories = config.categories;
        if config.include_builtin {
            categories.extend(SemanticBranchEnum::iter().map(|c| c.value().clone()));
        }
        debug!(categories = categories.len(), "built branch classifier");
        Ok(Self { categories })
    }

    /// A classifier over the built-in catalog only.
    pub fn builtin() -> Self {
        Self {
            categories: SemanticBranchEnum::iter().map(|c| c.value().clone()).collect(),
        }
    }

    /// All active categories, in the order they are checked.
    pub fn categories(&self) -> &[SemanticBranch] {
        &self.categories
    }

    /// Find the first category `branch_name` belongs to.
    pub fn classify(&self, branch_name: &str) -> Result<Option<Classification>> {
        for category in &self.categories {
            if category.is_match(branch_name)? {
                let classification = Classification {
                    category: category.name.clone(),
                    stub: leading_token(branch_name),
                };
                debug!(
                    branch = branch_name,
                    category = %classification.category,
                    "classified branch"
                );
                return Ok(Some(classification));
            }
        }
        debug!(branch = branch_name, "branch matched no category");
        Ok(None)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}
