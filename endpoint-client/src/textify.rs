use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::types::ClientRecord;
use crate::liveness::{self, Liveness};

/// Renders a hardware address as lowercase colon-separated octets.
/// An empty address renders as an empty string.
pub fn format_address(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Human-readable view of a client, one row of a status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    pub client_id: String,
    pub hostname: String,
    pub last_seen: String,
    pub status: Liveness,
    pub icon: &'static str,
    pub mac_addresses: Vec<String>,
}

impl ClientSummary {
    pub fn from_record(record: &ClientRecord) -> Self {
        Self::from_record_at(record, liveness::now_micros())
    }

    pub fn from_record_at(record: &ClientRecord, now: i64) -> Self {
        let status = liveness::liveness_at(record.last_ping, now);
        Self {
            client_id: record.client_id.clone(),
            hostname: record.hostname.clone(),
            last_seen: liveness::last_seen_at(record.last_ping, now),
            status,
            icon: status.icon(),
            mac_addresses: record.mac_addresses().map(format_address).collect(),
        }
    }
}

/// Most recent last ping across a set of clients
pub fn newest_ping(records: &[ClientRecord]) -> Option<DateTime<Utc>> {
    records.iter().filter_map(ClientRecord::last_ping_time).max()
}

const HEADERS: [&str; 5] = ["", "CLIENT", "HOSTNAME", "LAST SEEN", "MAC"];

/// Lays summaries out as a bordered table with a header row
pub fn render_table(summaries: &[ClientSummary]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS.iter().map(|h| Cell::new(*h)));

    for s in summaries {
        table.add_row(vec![
            Cell::new(s.icon),
            Cell::new(&s.client_id),
            Cell::new(&s.hostname),
            Cell::new(&s.last_seen),
            Cell::new(s.mac_addresses.join(",")),
        ]);
    }

    table.to_string()
}
