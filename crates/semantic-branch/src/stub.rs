//! The canonical stub tokens.
//!
//! Every stub used by the built-in catalog is listed here, independent of the
//! category it belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SemanticBranchError;

/// A canonical stub: the short token a branch name starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticStubEnum {
    // Essential
    Main,
    Master,
    // Use case
    Feat,
    Feature,
    Build,
    Doc,
    Fix,
    Hotfix,
    Rls,
    Release,
    Clean,
    Cleanup,
    // Environment
    Sbx,
    Sandbox,
    Dev,
    Develop,
    Tst,
    Test,
    Int,
    Stg,
    Stage,
    Staging,
    Qa,
    Preprod,
    Prd,
    Prod,
    Blue,
    Green,
}

impl SemanticStubEnum {
    /// All canonical stubs, in declaration order.
    pub const ALL: [Self; 28] = [
        Self::Main,
        Self::Master,
        Self::Feat,
        Self::Feature,
        Self::Build,
        Self::Doc,
        Self::Fix,
        Self::Hotfix,
        Self::Rls,
        Self::Release,
        Self::Clean,
        Self::Cleanup,
        Self::Sbx,
        Self::Sandbox,
        Self::Dev,
        Self::Develop,
        Self::Tst,
        Self::Test,
        Self::Int,
        Self::Stg,
        Self::Stage,
        Self::Staging,
        Self::Qa,
        Self::Preprod,
        Self::Prd,
        Self::Prod,
        Self::Blue,
        Self::Green,
    ];

    /// Iterate over every canonical stub.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// The raw stub string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Master => "master",
            Self::Feat => "feat",
            Self::Feature => "feature",
            Self::Build => "build",
            Self::Doc => "doc",
            Self::Fix => "fix",
            Self::Hotfix => "hotfix",
            Self::Rls => "rls",
            Self::Release => "release",
            Self::Clean => "clean",
            Self::Cleanup => "cleanup",
            Self::Sbx => "sbx",
            Self::Sandbox => "sandbox",
            Self::Dev => "dev",
            Self::Develop => "develop",
            Self::Tst => "tst",
            Self::Test => "test",
            Self::Int => "int",
            Self::Stg => "stg",
            Self::Stage => "stage",
            Self::Staging => "staging",
            Self::Qa => "qa",
            Self::Preprod => "preprod",
            Self::Prd => "prd",
            Self::Prod => "prod",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

impl AsRef<str> for SemanticStubEnum {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SemanticStubEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticStubEnum {
    type Err = SemanticBranchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|stub| stub.as_str() == s)
            .ok_or_else(|| SemanticBranchError::UnknownStub {
                value: s.to_string(),
            })
    }
}
