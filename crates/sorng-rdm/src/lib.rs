//! # SortOfRemote NG – Remote Desktop Manager Import
//!
//! Converts Remote Desktop Manager XML exports into a connection tree:
//!
//! - **Two-pass rebuild** – group containers first, then RDP/SSH connections
//! - **Group paths** – backslash-delimited paths resolved with last-good fallback
//! - **Field mapping** – per-protocol tables for host/port, redirection flags,
//!   color depth, sound, keyboard hook and RD Gateway
//! - **App conversion** – flat `Connection` JSON with `parentId` links

pub mod rdm;
