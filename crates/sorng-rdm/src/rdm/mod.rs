//! # sorng-rdm — Remote Desktop Manager Connection Import
//!
//! Imports a Remote Desktop Manager XML export (`<ArrayOfConnection>`), a
//! flat list of records tagged with a type and a group path, as a tree of
//! groups and RDP/SSH connections.
//!
//! Architecture:
//! - `types` — protocol enums, connection entry, import config/result
//! - `error` — RDM-specific error type
//! - `document` — XML text → element tree
//! - `record` — typed view over one `<Connection>` record
//! - `tree` — result tree (root, groups, connections)
//! - `path` — group path resolution
//! - `mapper` — per-protocol record → entry mapping
//! - `secrets` — protected password fields (decryption disabled)
//! - `builder` — two-pass hierarchy reconstruction
//! - `converter` — result tree → app Connection JSON
//! - `service` — high-level orchestrator

pub mod types;
pub mod error;
pub mod document;
pub mod record;
pub mod tree;
pub mod path;
pub mod mapper;
pub mod secrets;
pub mod builder;
pub mod converter;
pub mod service;

// Re-exports
pub use types::*;
pub use error::{RdmError, RdmResult};
pub use tree::{ConnectionTree, NodeId, NodeKind, RootNodeType, TreeNode};
pub use service::RdmImportService;
