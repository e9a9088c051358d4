//! Converter from an imported [`ConnectionTree`] to the application's flat
//! `Connection` JSON model (`serde_json::Value`).
//!
//! Groups and connections become one object each; nesting is expressed with
//! `parentId`. Top-level root nodes are not emitted, their children are.
//! Ids are minted here, so the tree itself stays free of random data.

use serde_json::{json, Map, Value};

use super::error::RdmResult;
use super::tree::{ConnectionTree, NodeId, NodeKind};
use super::types::*;

/// Flatten every root node's subtree into app connections, parents first.
pub fn tree_to_flat_connections(tree: &ConnectionTree) -> Vec<Value> {
    let now = chrono::Utc::now().to_rfc3339();
    let mut result = Vec::new();
    for &root in tree.root_nodes() {
        for (child, _) in tree.children(root) {
            flatten_node(tree, child, None, &now, &mut result);
        }
    }
    result
}

/// Same as [`tree_to_flat_connections`], serialized as a JSON array.
pub fn tree_to_json_string(tree: &ConnectionTree) -> RdmResult<String> {
    Ok(serde_json::to_string_pretty(&tree_to_flat_connections(tree))?)
}

fn flatten_node(
    tree: &ConnectionTree,
    id: NodeId,
    parent_id: Option<&str>,
    timestamp: &str,
    result: &mut Vec<Value>,
) {
    let node = tree.node(id);
    let node_id = uuid::Uuid::new_v4().to_string();

    let mut obj = match &node.kind {
        NodeKind::Connection(entry) => entry_to_app_fields(entry),
        NodeKind::Root { name, .. } | NodeKind::Container { name } => group_fields(name),
    };
    obj.insert("id".into(), json!(node_id));
    obj.insert("createdAt".into(), json!(timestamp));
    obj.insert("updatedAt".into(), json!(timestamp));
    if let Some(pid) = parent_id {
        obj.insert("parentId".into(), json!(pid));
    }
    result.push(Value::Object(obj));

    for (child, _) in tree.children(id) {
        flatten_node(tree, child, Some(&node_id), timestamp, result);
    }
}

fn group_fields(name: &str) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("name".into(), json!(name));
    obj.insert("isGroup".into(), json!(true));
    obj.insert("expanded".into(), json!(true));
    obj
}

/// Connection fields of one entry; optional fields only when non-empty.
pub fn entry_to_app_fields(entry: &ConnectionEntry) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("name".into(), json!(entry.name));
    obj.insert("protocol".into(), json!(protocol_to_app(entry.protocol())));
    obj.insert("hostname".into(), json!(entry.hostname));
    obj.insert("port".into(), json!(entry.port));
    obj.insert("isGroup".into(), json!(false));

    if !entry.username.is_empty() {
        obj.insert("username".into(), json!(entry.username));
    }
    if let Some(rdp) = entry.rdp() {
        if !rdp.domain.is_empty() {
            obj.insert("domain".into(), json!(rdp.domain));
        }
        obj.insert("rdpSettings".into(), build_rdp_settings(rdp));
    }
    obj
}

fn protocol_to_app(protocol: RdmProtocol) -> &'static str {
    match protocol {
        RdmProtocol::RDP => "rdp",
        RdmProtocol::SSH2 => "ssh",
    }
}

fn build_rdp_settings(rdp: &RdpSettings) -> Value {
    let mut settings = Map::new();

    settings.insert("display".into(), json!({
        "colorDepth": rdp_colors_to_depth(rdp.colors),
        "smartSizing": rdp.resolution == RDPResolutions::SmartSize,
        "resizeToWindow": rdp.resolution == RDPResolutions::FitToWindow,
    }));

    let playback = match rdp.redirect_sound {
        RDPSounds::BringToThisComputer => "local",
        RDPSounds::LeaveAtRemoteComputer => "remote",
        RDPSounds::DoNotPlay => "disabled",
    };
    settings.insert("audio".into(), json!({ "playbackMode": playback }));

    let keyboard = if rdp.redirect_keys { "remote" } else { "local" };
    settings.insert("input".into(), json!({ "keyboardHookMode": keyboard }));

    let mut redir = Map::new();
    redir.insert("printers".into(), json!(rdp.redirect_printers));
    redir.insert("ports".into(), json!(rdp.redirect_ports));
    redir.insert("smartCards".into(), json!(rdp.redirect_smart_cards));
    if rdp.redirect_disk_drives {
        redir.insert("drives".into(), json!([]));
    }
    settings.insert("deviceRedirection".into(), Value::Object(redir));

    settings.insert("performance".into(), json!({
        "disableWallpaper": !rdp.display_wallpaper,
        "disableTheming": !rdp.display_themes,
        "persistentBitmapCaching": rdp.cache_bitmaps,
    }));

    settings.insert("advanced".into(), json!({ "adminSession": rdp.use_console_session }));

    if rdp.gateway.usage_method != RDGatewayUsageMethod::Never {
        let mut gw = Map::new();
        gw.insert("enabled".into(), json!(true));
        if !rdp.gateway.hostname.is_empty() {
            gw.insert("hostname".into(), json!(rdp.gateway.hostname));
        }
        if !rdp.gateway.username.is_empty() {
            gw.insert("username".into(), json!(rdp.gateway.username));
        }
        if !rdp.gateway.domain.is_empty() {
            gw.insert("domain".into(), json!(rdp.gateway.domain));
        }
        settings.insert("gateway".into(), Value::Object(gw));
    }

    Value::Object(settings)
}

fn rdp_colors_to_depth(colors: RDPColors) -> u32 {
    match colors {
        RDPColors::Colors256 => 8,
        RDPColors::Colors15Bit => 15,
        RDPColors::Colors16Bit => 16,
        RDPColors::Colors24Bit => 24,
        RDPColors::Colors32Bit => 32,
    }
}
