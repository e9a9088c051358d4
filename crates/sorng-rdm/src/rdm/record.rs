//! Read-only view over one `<Connection>` record of an RDM export.

use super::document::XmlElement;

/// The record's `ConnectionType` discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    Group,
    SshShell,
    RdpConfigured,
    /// Anything else, including an absent `ConnectionType`.
    Unsupported(Option<String>),
}

impl RecordKind {
    pub fn from_discriminator(value: Option<&str>) -> Self {
        match value {
            Some("Group") => Self::Group,
            Some("SSHShell") => Self::SshShell,
            Some("RDPConfigured") => Self::RdpConfigured,
            other => Self::Unsupported(other.map(str::to_string)),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::SshShell | Self::RdpConfigured)
    }
}

/// A flat source record. Fields are read on demand; absent fields are `None`.
#[derive(Debug, Clone, Copy)]
pub struct SourceRecord<'a> {
    element: &'a XmlElement,
}

impl<'a> SourceRecord<'a> {
    pub fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    /// All `<Connection>` children of the collection element, in order.
    pub fn all_in(collection: &'a XmlElement) -> Vec<SourceRecord<'a>> {
        collection.children_named("Connection").map(Self::new).collect()
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::from_discriminator(self.field("ConnectionType").as_deref())
    }

    pub fn name(&self) -> Option<String> {
        self.field("Name")
    }

    pub fn group_path(&self) -> Option<String> {
        self.field("Group")
    }

    /// Text of a direct child field.
    pub fn field(&self, name: &str) -> Option<String> {
        self.element.child_text(name)
    }

    /// A nested sub-section such as `<Terminal>` or `<RDP>`.
    pub fn section(&self, name: &str) -> Option<SourceRecord<'a>> {
        self.element.child(name).map(Self::new)
    }
}
