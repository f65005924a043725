//! Core of the CPU ranking browser.
//!
//! The three pieces with real semantics live here and have no UI dependency:
//! [`catalog`] parses the flat ranking file, [`selector`] narrows candidate
//! names by a typed query, and [`compare`] resolves two names to a verdict.
//! The [`cli`] module drives them from the command line and, with the `tui`
//! feature, from an interactive terminal browser.

pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod selector;

pub use catalog::{CpuCatalog, CpuEntry};
pub use compare::{compare, ComparisonResult, Outcome};
pub use error::{CompareError, CpuCompareError, ParseError, Result};
pub use selector::{filter, FilterableSelector};
