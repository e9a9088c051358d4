//! Remote Desktop Manager import data types — protocol enums, the
//! normalized connection entry, import configuration and results.

use serde::{Deserialize, Serialize};

use super::tree::ConnectionTree;

// ─── Protocol Types ─────────────────────────────────────────────────

/// Protocols an RDM export can be imported as. Any other
/// `ConnectionType` is dropped during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RdmProtocol {
    RDP,
    SSH2,
}

impl RdmProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RDP => "RDP",
            Self::SSH2 => "SSH2",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::RDP => 3389,
            Self::SSH2 => 22,
        }
    }
}

// ─── RDP Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RDPResolutions {
    FitToWindow,
    Fullscreen,
    SmartSize,
}
impl Default for RDPResolutions { fn default() -> Self { Self::FitToWindow } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RDPColors {
    Colors256,
    Colors15Bit,
    Colors16Bit,
    Colors24Bit,
    Colors32Bit,
}
impl Default for RDPColors { fn default() -> Self { Self::Colors32Bit } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RDPSounds {
    BringToThisComputer,
    LeaveAtRemoteComputer,
    DoNotPlay,
}
impl Default for RDPSounds { fn default() -> Self { Self::BringToThisComputer } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RDGatewayUsageMethod {
    Never,
    Always,
    Detect,
}
impl Default for RDGatewayUsageMethod { fn default() -> Self { Self::Never } }

// ─── Connection Entry ───────────────────────────────────────────────

/// RD Gateway settings read from the `<RDP>` sub-section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdGatewaySettings {
    pub usage_method: RDGatewayUsageMethod,
    pub hostname: String,
    pub username: String,
    pub domain: String,
    /// Always empty: protected secrets are not decrypted.
    pub password: String,
}

/// RDP-only fields of a connection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdpSettings {
    pub domain: String,
    pub use_console_session: bool,
    pub gateway: RdGatewaySettings,

    // ── Appearance ──────────────────────────────────────────────
    pub resolution: RDPResolutions,
    pub colors: RDPColors,
    pub cache_bitmaps: bool,
    pub display_wallpaper: bool,
    pub display_themes: bool,

    // ── Redirect ────────────────────────────────────────────────
    pub redirect_keys: bool,
    pub redirect_disk_drives: bool,
    pub redirect_printers: bool,
    pub redirect_ports: bool,
    pub redirect_smart_cards: bool,
    pub redirect_sound: RDPSounds,
}

impl Default for RdpSettings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            use_console_session: false,
            gateway: RdGatewaySettings::default(),
            resolution: RDPResolutions::default(),
            colors: RDPColors::default(),
            cache_bitmaps: true,
            display_wallpaper: true,
            display_themes: true,
            redirect_keys: false,
            redirect_disk_drives: false,
            redirect_printers: false,
            redirect_ports: true,
            redirect_smart_cards: false,
            redirect_sound: RDPSounds::default(),
        }
    }
}

/// Protocol-specific part of an entry, keyed by protocol so RDP fields
/// can never leak onto an SSH entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolSettings {
    Rdp(RdpSettings),
    Ssh,
}

/// One importable connection (a leaf of the result tree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub name: String,
    pub hostname: String,
    pub port: u16,
    pub username: String,
    /// Always empty: protected secrets are not decrypted.
    pub password: String,
    pub settings: ProtocolSettings,
}

impl ConnectionEntry {
    pub fn protocol(&self) -> RdmProtocol {
        match self.settings {
            ProtocolSettings::Rdp(_) => RdmProtocol::RDP,
            ProtocolSettings::Ssh => RdmProtocol::SSH2,
        }
    }

    pub fn rdp(&self) -> Option<&RdpSettings> {
        match &self.settings {
            ProtocolSettings::Rdp(rdp) => Some(rdp),
            ProtocolSettings::Ssh => None,
        }
    }
}

// ─── Import Config ──────────────────────────────────────────────────

/// Configuration for import operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RdmImportConfig {
    /// Separator between group names in a record's `Group` path.
    pub path_separator: char,
    /// Name given to the top-level category node.
    pub root_name: String,
}

impl Default for RdmImportConfig {
    fn default() -> Self {
        Self {
            path_separator: '\\',
            root_name: "Connections".into(),
        }
    }
}

// ─── Import Result ──────────────────────────────────────────────────

/// Result of an import operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RdmImportResult {
    /// `<Connection>` records in the source document.
    pub total: usize,
    /// Group containers created.
    pub groups: usize,
    /// Connection entries attached.
    pub imported: usize,
    /// Records with an unsupported `ConnectionType`.
    pub skipped: usize,
    pub tree: ConnectionTree,
}

// ─── Supported Import Formats ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportFormat {
    RemoteDesktopManagerXml,
    Unknown,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoteDesktopManagerXml => "Remote Desktop Manager XML (.rdm)",
            Self::Unknown => "Unknown",
        }
    }
}
