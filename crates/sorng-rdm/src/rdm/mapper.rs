//! Maps RDM `<Connection>` records to [`ConnectionEntry`] values.
//!
//! One function per supported `ConnectionType`. Every field is optional in
//! the source: a missing or unparsable value leaves the entry field at its
//! default and never fails the import.

use log::debug;

use super::record::{RecordKind, SourceRecord};
use super::secrets::protected_secret;
use super::types::*;

/// Map a record to a connection entry, or `None` for groups and
/// unsupported record kinds.
pub fn map_record(record: &SourceRecord) -> Option<ConnectionEntry> {
    match record.kind() {
        RecordKind::RdpConfigured => Some(map_rdp(record)),
        RecordKind::SshShell => Some(map_ssh(record)),
        RecordKind::Group | RecordKind::Unsupported(_) => None,
    }
}

// ─── SSH ────────────────────────────────────────────────────────────

/// `SSHShell`: host, port and user come from the `<Terminal>` section.
pub fn map_ssh(record: &SourceRecord) -> ConnectionEntry {
    let mut entry = ConnectionEntry {
        name: record.name().unwrap_or_default(),
        hostname: String::new(),
        port: RdmProtocol::SSH2.default_port(),
        username: String::new(),
        password: String::new(),
        settings: ProtocolSettings::Ssh,
    };

    if let Some(terminal) = record.section("Terminal") {
        entry.hostname = terminal.field("Host").unwrap_or_default();
        if let Some(port) = parse_port(terminal.field("HostPort").as_deref()) {
            entry.port = port;
        }
        entry.username = terminal.field("Username").unwrap_or_default();
    }

    entry
}

// ─── RDP ────────────────────────────────────────────────────────────

/// `RDPConfigured`: host and port from `Url` (`host:port`), flags from
/// top-level fields, credentials and gateway from the `<RDP>` section.
pub fn map_rdp(record: &SourceRecord) -> ConnectionEntry {
    let url = record.field("Url");
    let mut url_parts = url.as_deref().map(|u| u.split(':'));
    let hostname = url_parts
        .as_mut()
        .and_then(Iterator::next)
        .unwrap_or_default()
        .to_string();
    let port = parse_port(url_parts.as_mut().and_then(Iterator::next))
        .unwrap_or_else(|| RdmProtocol::RDP.default_port());

    // Each flag has its own polarity: "Disable*" and serial ports default on,
    // the remaining "Uses*" flags and Console default off.
    let mut rdp = RdpSettings {
        display_wallpaper: !field_is(record, "DisableWallpaper", "true"),
        cache_bitmaps: !field_is(record, "DisableBitmapCache", "true"),
        display_themes: !field_is(record, "DisableThemes", "true"),
        redirect_smart_cards: field_is(record, "UsesSmartDevices", "true"),
        redirect_disk_drives: field_is(record, "UsesHardDrives", "true"),
        redirect_printers: field_is(record, "UsesPrinters", "true"),
        redirect_ports: !field_is(record, "UsesSerialPorts", "false"),
        use_console_session: field_is(record, "Console", "true"),
        ..Default::default()
    };

    let mut username = String::new();
    let mut password = String::new();

    if let Some(section) = record.section("RDP") {
        rdp.domain = section.field("Domain").unwrap_or_default();
        username = section.field("UserName").unwrap_or_default();
        password = protected_secret("SafePassword", section.field("SafePassword").as_deref());

        rdp.gateway.hostname = section.field("GatewayHostname").unwrap_or_default();
        rdp.gateway.domain = section.field("GatewayDomain").unwrap_or_default();
        rdp.gateway.username = section.field("GatewayUserName").unwrap_or_default();
        rdp.gateway.password = protected_secret(
            "GatewaySafePassword",
            section.field("GatewaySafePassword").as_deref(),
        );
        if let Some(method) = gateway_usage_from_token(section.field("GatewayUsageMethod").as_deref()) {
            rdp.gateway.usage_method = method;
        }
    }

    if let Some(colors) = colors_from_token(record.field("ScreenColor").as_deref()) {
        rdp.colors = colors;
    }
    if let Some(sound) = sound_from_token(record.field("SoundHook").as_deref()) {
        rdp.redirect_sound = sound;
    }
    rdp.redirect_keys = redirect_keys_from_token(record.field("KeyboardHook").as_deref());

    ConnectionEntry {
        name: record.name().unwrap_or_default(),
        hostname,
        port,
        username,
        password,
        settings: ProtocolSettings::Rdp(rdp),
    }
}

// ─── Token tables ───────────────────────────────────────────────────

pub fn gateway_usage_from_token(token: Option<&str>) -> Option<RDGatewayUsageMethod> {
    match token? {
        "None" => Some(RDGatewayUsageMethod::Never),
        "Always" => Some(RDGatewayUsageMethod::Always),
        _ => None,
    }
}

pub fn colors_from_token(token: Option<&str>) -> Option<RDPColors> {
    match token? {
        "C256" => Some(RDPColors::Colors256),
        "C15Bits" => Some(RDPColors::Colors15Bit),
        "C16Bits" => Some(RDPColors::Colors16Bit),
        "C24Bits" => Some(RDPColors::Colors24Bit),
        "C32Bits" => Some(RDPColors::Colors32Bit),
        _ => None,
    }
}

pub fn sound_from_token(token: Option<&str>) -> Option<RDPSounds> {
    match token? {
        "DoNotPlay" => Some(RDPSounds::DoNotPlay),
        "LeaveAtRemoteComputer" => Some(RDPSounds::LeaveAtRemoteComputer),
        _ => None,
    }
}

/// Unlike the other tables, anything but the one known token turns key
/// redirection off.
pub fn redirect_keys_from_token(token: Option<&str>) -> bool {
    matches!(token, Some("OnTheRemoteComputer"))
}

// ─── Helpers ────────────────────────────────────────────────────────

fn field_is(record: &SourceRecord, name: &str, literal: &str) -> bool {
    record.field(name).as_deref() == Some(literal)
}

fn parse_port(token: Option<&str>) -> Option<u16> {
    let token = token?;
    match token.trim().parse() {
        Ok(port) => Some(port),
        Err(_) => {
            debug!("Ignoring non-numeric port '{}'", token);
            None
        }
    }
}
