//! Semantic branch names.
//!
//! A semantic branch name starts with a short lowercase token (a *stub*),
//! optionally followed by a separator (`-` or `/`) and free-form text:
//! `feat/add-login`, `hotfix-123`, `release`. This crate decides which
//! category such a branch belongs to.
//!
//! # Architecture
//!
//! - **Names** are the bare tokens a stub may consist of: lowercase ASCII
//!   letters and digits, starting with a letter.
//! - **Matching** normalizes a branch name, extracts its leading token, and
//!   compares it against a set of stubs. Stubs are validated strictly; branch
//!   names are tokenized leniently and never rejected.
//! - **Categories** group stubs under a name. The built-in catalog is the
//!   closed [`SemanticBranchEnum`]; callers may build ad-hoc
//!   [`SemanticBranch`] values or load extra ones through a
//!   [`ClassifierConfig`].
//!
//! # Modules
//!
//! - [`error`] — Error types
//! - [`names`] — Semantic name validation and the legal charset
//! - [`matcher`] — Branch name tokenization and stub matching
//! - [`stub`] — The canonical [`SemanticStubEnum`]
//! - [`branch`] — [`SemanticBranch`] and the [`SemanticBranchEnum`] catalog
//! - [`config`] — Serde-backed [`ClassifierConfig`]
//! - [`classifier`] — [`Classifier`] over built-in and custom categories

pub mod branch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod matcher;
pub mod names;
pub mod stub;

pub use branch::{SemanticBranch, SemanticBranchEnum};
pub use classifier::{Classification, Classifier};
pub use config::ClassifierConfig;
pub use error::{Result, SemanticBranchError};
pub use matcher::{is_certain_semantic_branch, leading_token, SEPARATORS};
pub use names::{ensure_valid_semantic_name, is_valid_semantic_name, SEMANTIC_NAME_CHARSET};
pub use stub::SemanticStubEnum;
