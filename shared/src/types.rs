use std::fmt;
use std::net::IpAddr;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// A managed endpoint as last reported by the controlling service.
/// This is the canonical data model consumed by the client helpers and tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Client identifier, e.g. "C.1234567890abcdef"
    pub client_id: String,

    /// Hostname reported by the client
    pub hostname: String,

    /// Last time the client contacted the service, microseconds since the epoch
    pub last_ping: i64,

    /// Network interfaces reported by the client
    #[serde(default)]
    pub interfaces: Vec<NetworkInterface>,

    /// Free-form labels attached by operators
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ClientRecord {
    /// Last ping as a UTC timestamp, if it is within chrono's representable range
    pub fn last_ping_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.last_ping)
    }

    /// Hardware addresses of all interfaces that report one
    pub fn mac_addresses(&self) -> impl Iterator<Item = &[u8]> {
        self.interfaces
            .iter()
            .map(|iface| iface.mac_address.as_slice())
            .filter(|mac| !mac.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface name, e.g. "eth0"
    pub name: String,

    /// Raw hardware address; empty when the interface has none
    #[serde(default)]
    pub mac_address: Vec<u8>,

    #[serde(default)]
    pub addresses: Vec<IpAddr>,
}

/// Filesystem access method of a path specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    Unset,
    Os,
    Tsk,
    Registry,
    Tmpfile,
    Ntfs,
}

impl PathType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::Unset => "UNSET",
            PathType::Os => "OS",
            PathType::Tsk => "TSK",
            PathType::Registry => "REGISTRY",
            PathType::Tmpfile => "TMPFILE",
            PathType::Ntfs => "NTFS",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
