use sorng_rdm::rdm::*;

const EXPORT: &str = include_str!("fixtures/remote_desktop_manager.rdm");

fn import() -> ConnectionTree {
    RdmImportService::default().deserialize(EXPORT).unwrap()
}

fn group(tree: &ConnectionTree, parent: NodeId, name: &str) -> NodeId {
    tree.find_child_container(parent, name)
        .unwrap_or_else(|| panic!("group {name} missing"))
}

fn first_connection(tree: &ConnectionTree, parent: NodeId) -> ConnectionEntry {
    tree.children(parent)
        .find_map(|(_, node)| node.connection().cloned())
        .expect("connection")
}

#[test]
fn test_tree_has_a_single_connection_root() {
    let tree = import();
    assert_eq!(tree.root_nodes().len(), 1);
    let root = tree.node(tree.root_nodes()[0]);
    assert!(matches!(root.kind, NodeKind::Root { root_type: RootNodeType::Connection, .. }));
    assert!(!root.children.is_empty());
}

#[test]
fn test_all_sub_root_folders_imported() {
    let tree = import();
    let root = tree.root_nodes()[0];
    let names: Vec<&str> = tree.children(root).map(|(_, n)| n.name()).collect();
    assert_eq!(names, vec!["Group1", "Group2"]);

    let group2 = group(&tree, root, "Group2");
    group(&tree, group2, "Nested");
}

#[test]
fn test_rdp_connection_fields() {
    let tree = import();
    let root = tree.root_nodes()[0];
    let conn = first_connection(&tree, group(&tree, root, "Group1"));

    assert_eq!(conn.protocol(), RdmProtocol::RDP);
    assert_eq!(conn.name, "server1_displayname");
    assert_eq!(conn.hostname, "server1");
    assert_eq!(conn.port, 9933);
    assert_eq!(conn.username, "myusername1");
    assert_eq!(conn.password, "");

    let rdp = conn.rdp().unwrap();
    assert_eq!(rdp.domain, "mydomain");
    assert!(rdp.use_console_session);
    assert_eq!(rdp.gateway.usage_method, RDGatewayUsageMethod::Always);
    assert_eq!(rdp.gateway.hostname, "gatewayserverhost.innerdomain.net");
    assert_eq!(rdp.gateway.username, "gatewayusername");
    assert_eq!(rdp.gateway.domain, "innerdomain");
    assert_eq!(rdp.gateway.password, "");
    assert_eq!(rdp.resolution, RDPResolutions::FitToWindow);
    assert_eq!(rdp.colors, RDPColors::Colors24Bit);
    assert_eq!(rdp.redirect_sound, RDPSounds::DoNotPlay);
    assert!(rdp.redirect_keys);
    assert!(rdp.redirect_smart_cards);
    assert!(rdp.redirect_disk_drives);
    assert!(rdp.redirect_ports);
    assert!(rdp.redirect_printers);
    assert!(rdp.display_wallpaper);
}

#[test]
fn test_ssh_connection_fields() {
    let tree = import();
    let root = tree.root_nodes()[0];
    let group2 = group(&tree, root, "Group2");
    let conn = first_connection(&tree, group2);

    assert_eq!(conn.protocol(), RdmProtocol::SSH2);
    assert_eq!(conn.name, "server2_displayname");
    assert_eq!(conn.hostname, "server2");
    assert_eq!(conn.port, 2222);
    assert_eq!(conn.username, "myusername2");

    // groups come before connections under the same parent
    let kinds: Vec<bool> = tree.children(group2).map(|(_, n)| n.is_container()).collect();
    assert_eq!(kinds, vec![true, false]);
}

#[test]
fn test_unsupported_records_are_dropped() {
    let result = RdmImportService::default().import(EXPORT).unwrap();
    assert_eq!(result.total, 6);
    assert_eq!(result.groups, 3);
    assert_eq!(result.imported, 2);
    assert_eq!(result.skipped, 1);

    let root = result.tree.root_nodes()[0];
    let group1 = group(&result.tree, root, "Group1");
    assert_eq!(result.tree.children(group1).count(), 1);
}

#[test]
fn test_single_group_and_rdp_scenario() {
    let xml = r#"<ArrayOfConnection>
  <Connection><ConnectionType>Group</ConnectionType><Name>Group1</Name></Connection>
  <Connection>
    <ConnectionType>RDPConfigured</ConnectionType>
    <Name>srv</Name>
    <Group>Group1</Group>
    <Url>server1:9933</Url>
    <UsesHardDrives>true</UsesHardDrives>
  </Connection>
</ArrayOfConnection>"#;
    let tree = RdmImportService::default().deserialize(xml).unwrap();
    let root = tree.root_nodes()[0];
    assert_eq!(tree.children(root).count(), 1);

    let group1 = group(&tree, root, "Group1");
    let conn = first_connection(&tree, group1);
    assert_eq!(conn.hostname, "server1");
    assert_eq!(conn.port, 9933);
    let rdp = conn.rdp().unwrap();
    assert!(rdp.display_wallpaper);
    assert!(rdp.redirect_disk_drives);
}

#[test]
fn test_ungrouped_ssh_attaches_to_root() {
    let xml = r#"<ArrayOfConnection>
  <Connection>
    <ConnectionType>SSHShell</ConnectionType>
    <Name>box</Name>
    <Terminal><Host>server2</Host><HostPort>2222</HostPort><Username>myusername2</Username></Terminal>
  </Connection>
  <Connection><ConnectionType>Unknown</ConnectionType><Name>x</Name></Connection>
</ArrayOfConnection>"#;
    let tree = RdmImportService::default().deserialize(xml).unwrap();
    let root = tree.root_nodes()[0];
    let children: Vec<_> = tree.children(root).collect();
    assert_eq!(children.len(), 1);

    let conn = children[0].1.connection().unwrap();
    assert_eq!(conn.protocol(), RdmProtocol::SSH2);
    assert_eq!(conn.hostname, "server2");
    assert_eq!(conn.port, 2222);
    assert_eq!(conn.username, "myusername2");
}

#[test]
fn test_conversion_is_repeatable() {
    let service = RdmImportService::default();
    assert_eq!(service.deserialize(EXPORT).unwrap(), service.deserialize(EXPORT).unwrap());
}

#[test]
fn test_malformed_export_produces_nothing() {
    let truncated = &EXPORT[..EXPORT.len() / 2];
    let err = RdmImportService::default().deserialize(truncated).unwrap_err();
    assert!(matches!(err, RdmError::MalformedInput { .. }));
}

#[test]
fn test_flat_app_connections() {
    let flat = converter::tree_to_flat_connections(&import());
    // Group1, server1, Group2, Nested, server2
    assert_eq!(flat.len(), 5);
    let names: Vec<&str> = flat.iter().filter_map(|c| c["name"].as_str()).collect();
    assert_eq!(
        names,
        vec!["Group1", "server1_displayname", "Group2", "Nested", "server2_displayname"]
    );
    assert_eq!(flat[1]["parentId"], flat[0]["id"]);
    assert_eq!(flat[4]["parentId"], flat[2]["id"]);
    assert_eq!(flat[4]["protocol"], "ssh");
}
