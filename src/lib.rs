//! Download page controller.
//!
//! Resolves the installer links of a download page from a version catalog and a
//! mirror list, picks the recommended version, and tracks which instructions panel
//! is shown. The page itself sits behind the [`page::Dom`] trait.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod mirror;
pub mod page;
pub mod version;
