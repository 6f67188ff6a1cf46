//! Semantic branch categories.
//!
//! A [`SemanticBranch`] names a category and lists the stubs that denote it.
//! [`SemanticBranchEnum`] is the closed catalog of built-in categories; its
//! values are built once per process and shared read-only.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SemanticBranchError};
use crate::matcher::{is_certain_semantic_branch, leading_token};
use crate::stub::SemanticStubEnum;

/// A named group of stubs denoting one branch purpose.
///
/// Stubs are not validated on construction. An invalid stub makes
/// [`is_match`](Self::is_match) fail instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticBranch {
    /// Category identifier (e.g. "feature").
    pub name: String,
    /// Stubs belonging to the category, in declared order. Duplicates are allowed.
    pub stubs: Vec<String>,
}

impl SemanticBranch {
    /// Create a category from a name and its stubs.
    pub fn new<I, S>(name: impl Into<String>, stubs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            stubs: stubs.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `branch_name` starts with one of this category's stubs.
    ///
    /// See [`is_certain_semantic_branch`] for the matching rules.
    pub fn is_match(&self, branch_name: &str) -> Result<bool> {
        is_certain_semantic_branch(branch_name, &self.stubs)
    }
}

/// The built-in semantic branch categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticBranchEnum {
    Main,
    Feature,
    Build,
    Doc,
    Fix,
    Release,
    Cleanup,
    Sandbox,
    Develop,
    Test,
    Int,
    Staging,
    Qa,
    Preprod,
    Prod,
    Blue,
    Green,
}

impl SemanticBranchEnum {
    /// All categories, in catalog order.
    pub const ALL: [Self; 17] = [
        Self::Main,
        Self::Feature,
        Self::Build,
        Self::Doc,
        Self::Fix,
        Self::Release,
        Self::Cleanup,
        Self::Sandbox,
        Self::Develop,
        Self::Test,
        Self::Int,
        Self::Staging,
        Self::Qa,
        Self::Preprod,
        Self::Prod,
        Self::Blue,
        Self::Green,
    ];

    /// Iterate over every category.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// The category identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Feature => "feature",
            Self::Build => "build",
            Self::Doc => "doc",
            Self::Fix => "fix",
            Self::Release => "release",
            Self::Cleanup => "cleanup",
            Self::Sandbox => "sandbox",
            Self::Develop => "develop",
            Self::Test => "test",
            Self::Int => "int",
            Self::Staging => "staging",
            Self::Qa => "qa",
            Self::Preprod => "preprod",
            Self::Prod => "prod",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// The canonical stubs of this category.
    pub fn stubs(self) -> &'static [SemanticStubEnum] {
        use SemanticStubEnum as S;
        match self {
            Self::Main => &[S::Main, S::Master],
            Self::Feature => &[S::Feat, S::Feature],
            Self::Build => &[S::Build],
            Self::Doc => &[S::Doc],
            Self::Fix => &[S::Fix, S::Hotfix],
            Self::Release => &[S::Rls, S::Release],
            Self::Cleanup => &[S::Clean, S::Cleanup],
            Self::Sandbox => &[S::Sbx, S::Sandbox],
            Self::Develop => &[S::Dev, S::Develop],
            Self::Test => &[S::Tst, S::Test],
            Self::Int => &[S::Int],
            Self::Staging => &[S::Stg, S::Stage, S::Staging],
            Self::Qa => &[S::Qa],
            Self::Preprod => &[S::Preprod],
            Self::Prod => &[S::Prd, S::Prod],
            Self::Blue => &[S::Blue],
            Self::Green => &[S::Green],
        }
    }

    /// The [`SemanticBranch`] value of this category.
    pub fn value(self) -> &'static SemanticBranch {
        static CATALOG: OnceLock<Vec<SemanticBranch>> = OnceLock::new();
        let catalog = CATALOG.get_or_init(|| {
            Self::iter()
                .map(|category| {
                    SemanticBranch::new(
                        category.name(),
                        category.stubs().iter().map(|stub| stub.as_str()),
                    )
                })
                .collect()
        });
        &catalog[self as usize]
    }

    /// Look up a category's [`SemanticBranch`] by identifier.
    pub fn lookup(name: &str) -> Result<&'static SemanticBranch> {
        Ok(name.parse::<Self>()?.value())
    }

    /// Returns `true` if `branch_name` belongs to this category.
    pub fn is_match(self, branch_name: &str) -> Result<bool> {
        self.value().is_match(branch_name)
    }

    /// The first category, in catalog order, that `branch_name` belongs to.
    ///
    /// Canonical stubs are valid by construction, so this cannot fail.
    pub fn classify(branch_name: &str) -> Option<Self> {
        let token = leading_token(branch_name);
        Self::iter().find(|category| category.stubs().iter().any(|stub| stub.as_str() == token))
    }
}

impl fmt::Display for SemanticBranchEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SemanticBranchEnum {
    type Err = SemanticBranchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| SemanticBranchError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::is_valid_semantic_name;

    #[test]
    fn semantic_branch_creation() {
        let feature = SemanticBranch::new("feature", ["feat", "feature"]);
        assert_eq!(feature.name, "feature");
        assert_eq!(feature.stubs, ["feat", "feature"]);
    }

    #[test]
    fn semantic_branch_is_match() {
        let feature = SemanticBranch::new("feature", ["feat", "feature"]);
        assert!(feature.is_match("feat").unwrap());
        assert!(feature.is_match("feature").unwrap());
        assert!(feature.is_match("feat-123").unwrap());
        assert!(feature.is_match("feature/description").unwrap());
        assert!(!feature.is_match("main").unwrap());
        assert!(!feature.is_match("fix").unwrap());
    }

    #[test]
    fn ad_hoc_branch_with_invalid_stub_fails_on_match() {
        let broken = SemanticBranch::new("broken", ["ok", "not-ok"]);
        assert_eq!(
            broken.is_match("ok").unwrap_err(),
            SemanticBranchError::InvalidSemanticName {
                value: "not-ok".into()
            }
        );
    }

    #[test]
    fn ad_hoc_branch_without_stubs_never_matches() {
        let empty = SemanticBranch::new("empty", Vec::<String>::new());
        assert!(!empty.is_match("empty").unwrap());
    }

    #[test]
    fn catalog_names() {
        let names: Vec<&str> = SemanticBranchEnum::iter()
            .map(|c| c.value().name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "main", "feature", "build", "doc", "fix", "release", "cleanup", "sandbox",
                "develop", "test", "int", "staging", "qa", "preprod", "prod", "blue", "green"
            ]
        );
    }

    #[test]
    fn catalog_values_agree_with_stub_table() {
        for category in SemanticBranchEnum::iter() {
            let value = category.value();
            assert_eq!(value.name, category.name());
            let expected: Vec<&str> = category.stubs().iter().map(|s| s.as_str()).collect();
            assert_eq!(value.stubs, expected);
        }
    }

    #[test]
    fn every_category_has_valid_stubs() {
        for category in SemanticBranchEnum::iter() {
            let value = category.value();
            assert!(!value.stubs.is_empty(), "{category} has no stubs");
            assert!(is_valid_semantic_name(&value.name));
            for stub in &value.stubs {
                assert!(is_valid_semantic_name(stub), "{category}: {stub}");
            }
        }
    }

    #[test]
    fn every_canonical_stub_belongs_to_exactly_one_category() {
        for stub in SemanticStubEnum::iter() {
            let owners = SemanticBranchEnum::iter()
                .filter(|c| c.stubs().contains(&stub))
                .count();
            assert_eq!(owners, 1, "{stub}");
        }
    }

    #[test]
    fn feature_category() {
        let feature = SemanticBranchEnum::Feature.value();
        assert_eq!(feature.stubs, ["feat", "feature"]);
        assert!(feature.is_match("feat").unwrap());
        assert!(feature.is_match("feature/add-login").unwrap());
        assert!(!feature.is_match("main").unwrap());
    }

    #[test]
    fn main_category() {
        let main = SemanticBranchEnum::Main;
        assert_eq!(main.value().stubs, ["main", "master"]);
        assert!(main.is_match("master").unwrap());
        assert!(main.is_match("main-backup").unwrap());
        assert!(!main.is_match("feature").unwrap());
    }

    #[test]
    fn lookup_fix() {
        let fix = SemanticBranchEnum::lookup("fix").unwrap();
        assert_eq!(fix.stubs, ["fix", "hotfix"]);
        assert!(fix.is_match("hotfix/security").unwrap());
        assert!(fix.is_match("fix-urgent").unwrap());
        assert!(!fix.is_match("feature").unwrap());
    }

    #[test]
    fn lookup_unknown_category() {
        assert_eq!(
            SemanticBranchEnum::lookup("chore").unwrap_err(),
            SemanticBranchError::UnknownCategory {
                name: "chore".into()
            }
        );
    }

    #[test]
    fn value_is_shared() {
        let a = SemanticBranchEnum::Staging.value();
        let b = SemanticBranchEnum::lookup("staging").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn classify_branches() {
        assert_eq!(
            SemanticBranchEnum::classify("feature/add-login"),
            Some(SemanticBranchEnum::Feature)
        );
        assert_eq!(
            SemanticBranchEnum::classify(" STG-eu-west "),
            Some(SemanticBranchEnum::Staging)
        );
        assert_eq!(
            SemanticBranchEnum::classify("hotfix/cve"),
            Some(SemanticBranchEnum::Fix)
        );
        assert_eq!(SemanticBranchEnum::classify("chore/deps"), None);
        assert_eq!(SemanticBranchEnum::classify(""), None);
    }

    #[test]
    fn classify_agrees_with_is_match() {
        for branch in ["main", "rls-1.2", "sbx/alice", "prd", "features", "green"] {
            let classified = SemanticBranchEnum::classify(branch);
            for category in SemanticBranchEnum::iter() {
                assert_eq!(
                    category.is_match(branch).unwrap(),
                    classified == Some(category),
                    "{branch} vs {category}"
                );
            }
        }
    }

    #[test]
    fn display_and_parse() {
        for category in SemanticBranchEnum::iter() {
            assert_eq!(category.to_string().parse::<SemanticBranchEnum>().unwrap(), category);
        }
    }

    #[test]
    fn semantic_branch_serde_roundtrip() {
        let branch = SemanticBranch::new("chore", ["chore", "deps"]);
        let json = serde_json::to_string(&branch).unwrap();
        assert_eq!(json, r#"{"name":"chore","stubs":["chore","deps"]}"#);
        let parsed: SemanticBranch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, branch);
    }
}
