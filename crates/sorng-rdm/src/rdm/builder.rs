//! Rebuilds the group hierarchy from flat `<Connection>` records.
//!
//! Records reference their parent by path, and a parent may be declared
//! after its children. So all group containers are created first, in
//! document order, and connections are attached in a second pass.

use log::{debug, trace};

use super::mapper::map_record;
use super::path::{resolve_group_path, trim_own_name};
use super::record::{RecordKind, SourceRecord};
use super::tree::{ConnectionTree, NodeId};

/// Counts gathered while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub records: usize,
    pub groups: usize,
    pub connections: usize,
    pub skipped: usize,
}

/// Populate `destination` from `records` in two ordered passes.
pub fn build_hierarchy(
    tree: &mut ConnectionTree,
    destination: NodeId,
    records: &[SourceRecord],
    separator: char,
) -> BuildStats {
    let mut stats = BuildStats {
        records: records.len(),
        ..Default::default()
    };

    // Pass 1: containers
    for record in records.iter().filter(|r| r.kind() == RecordKind::Group) {
        let name = record.name();
        let group_path = record.group_path().unwrap_or_default();
        let parent_path = trim_own_name(&group_path, name.as_deref());
        let parent = resolve_group_path(tree, destination, Some(parent_path), separator);

        let name = name.unwrap_or_default();
        if tree.find_child_container(parent, &name).is_some() {
            debug!("Group '{}' already exists under '{}', reusing it", name, tree.node(parent).name());
            continue;
        }
        trace!("Creating group '{}' under '{}'", name, tree.node(parent).name());
        tree.add_container(parent, name);
        stats.groups += 1;
    }

    // Pass 2: connections
    for record in records {
        let kind = record.kind();
        if !kind.is_connection() {
            if let RecordKind::Unsupported(discriminator) = kind {
                debug!(
                    "Skipping record '{}' with unsupported type {:?}",
                    record.name().unwrap_or_default(),
                    discriminator
                );
                stats.skipped += 1;
            }
            continue;
        }

        let group_path = record.group_path();
        let parent = resolve_group_path(tree, destination, group_path.as_deref(), separator);
        if let Some(entry) = map_record(record) {
            trace!("Attaching '{}' under '{}'", entry.name, tree.node(parent).name());
            tree.add_connection(parent, entry);
            stats.connections += 1;
        }
    }

    stats
}
