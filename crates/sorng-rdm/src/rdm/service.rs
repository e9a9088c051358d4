//! High-level entry point for Remote Desktop Manager imports.
//!
//! Parses the export, rebuilds the hierarchy under a fresh root node and
//! hands the finished tree to the caller. The service holds configuration
//! only; nothing carries over from one import to the next.

use log::info;
use serde_json::Value;

use super::builder::build_hierarchy;
use super::document::{parse_document, XmlElement};
use super::error::{RdmError, RdmResult};
use super::record::SourceRecord;
use super::tree::{ConnectionTree, RootNodeType};
use super::types::*;

const COLLECTION_ELEMENT: &str = "ArrayOfConnection";

#[derive(Debug, Clone, Default)]
pub struct RdmImportService {
    config: RdmImportConfig,
}

impl RdmImportService {
    pub fn new(config: RdmImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RdmImportConfig {
        &self.config
    }

    // ─── Format Detection ────────────────────────────────────────

    /// Detect an RDM export by extension or by sniffing its root element.
    pub fn detect_format(file_path: &str, content: &str) -> ImportFormat {
        if file_path.to_lowercase().ends_with(".rdm") {
            return ImportFormat::RemoteDesktopManagerXml;
        }

        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        let body = if trimmed.starts_with("<?xml") {
            trimmed.find("?>").map(|i| trimmed[i + 2..].trim_start()).unwrap_or("")
        } else {
            trimmed
        };
        if body.starts_with("<ArrayOfConnection") {
            return ImportFormat::RemoteDesktopManagerXml;
        }

        ImportFormat::Unknown
    }

    // ─── Import Operations ───────────────────────────────────────

    /// Convert an export into a connection tree.
    pub fn deserialize(&self, content: &str) -> RdmResult<ConnectionTree> {
        Ok(self.import(content)?.tree)
    }

    /// Convert an export and report what was imported.
    pub fn import(&self, content: &str) -> RdmResult<RdmImportResult> {
        let document = parse_document(content)?;
        let collection = connection_collection(&document)?;
        let records = SourceRecord::all_in(collection);

        let mut tree = ConnectionTree::new();
        let root = tree.add_root_node(self.config.root_name.clone(), RootNodeType::Connection);
        let stats = build_hierarchy(&mut tree, root, &records, self.config.path_separator);

        info!(
            "RDM import: {} records, {} groups, {} connections, {} skipped",
            stats.records, stats.groups, stats.connections, stats.skipped
        );

        Ok(RdmImportResult {
            total: stats.records,
            groups: stats.groups,
            imported: stats.connections,
            skipped: stats.skipped,
            tree,
        })
    }

    // ─── Validation ──────────────────────────────────────────────

    /// Summarize an export without returning its tree.
    pub fn validate(&self, content: &str) -> RdmResult<Value> {
        let result = self.import(content)?;

        Ok(serde_json::json!({
            "valid": true,
            "format": ImportFormat::RemoteDesktopManagerXml.as_str(),
            "records": result.total,
            "groups": result.groups,
            "connections": result.imported,
            "unsupported": result.skipped,
        }))
    }
}

fn connection_collection(document: &XmlElement) -> RdmResult<&XmlElement> {
    if document.name == COLLECTION_ELEMENT {
        Ok(document)
    } else {
        Err(RdmError::MissingRoot(document.name.clone()))
    }
}
