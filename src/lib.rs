//! ruleset-gen - converts Clash rule-list files into platform rule formats.
//!
//! This crate turns `.list` rule files (comma-delimited domain/IP match
//! directives) into the two rule formats consumed by proxy clients:
//!
//! - **Egern**: a line-oriented text format with a header comment, an
//!   optional `no_resolve: true` marker, and per-key indented value lists
//! - **sing-box**: a JSON source rule-set with a fixed schema version and
//!   an array of single-key rule objects
//!
//! It also mirrors the Clash source tree into the `Egern/` and `Singbox/`
//! output trees and writes a `readme.md` with raw-download links next to
//! each converted file.
//!
//! # Quick Start
//!
//! ```ignore
//! use ruleset_gen::{batch, ListParser, EgernConverter, Platform};
//! use std::path::Path;
//!
//! // Convert a parsed rule list to an Egern document
//! let rules = ListParser::parse("DOMAIN,apple.com".as_bytes())?;
//! let doc = EgernConverter::convert(&rules, "Apple");
//!
//! // Or convert a whole tree of files in place
//! for file in batch::collect_files(Path::new("Egern"))? {
//!     batch::process_file(Platform::Egern, &file)?;
//! }
//! ```
//!
//! # Rule styles
//!
//! Recognized tags are `DOMAIN`, `DOMAIN-SUFFIX`, `DOMAIN-KEYWORD`,
//! `DOMAIN-WILDCARD`, `IP-CIDR`, and `IP-CIDR6`. Lines with other tags
//! pass through the parser and are dropped by the converters; not every
//! tag exists on every platform (sing-box has no wildcard key).

mod error;
mod rule;

pub mod batch;
pub mod converter;
pub mod layout;
pub mod mirror;

// Re-export core types
pub use error::{Error, Result};
pub use rule::{RuleLine, RuleStyle};

// Re-export converters
pub use converter::{
    EgernConverter, ListParser, RuleGroup, RuleSetDocument, SingboxConverter, RULESET_VERSION,
};

// Re-export batch processing
pub use batch::{collect_files, process_file, Platform};

// Re-export the directory mirror
pub use mirror::mirror_rulesets;
