use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;

use crate::dnssec::{DnskeyRecord, DsRecord, TrustAnchorStore};

/// Which projections a report includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Ds,
    Dnskey,
    All,
}

impl RecordKind {
    fn includes_ds(self) -> bool {
        self != RecordKind::Dnskey
    }

    fn includes_dnskey(self) -> bool {
        self != RecordKind::Ds
    }
}

/// Anchors valid at one point in time, ordered by key tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorReport {
    pub zone: String,
    pub evaluated_at: String,
    pub ds: Vec<DsRecord>,
    pub dnskey: Vec<DnskeyRecord>,
}

impl AnchorReport {
    pub fn build(store: &TrustAnchorStore, now: DateTime<Utc>, kind: RecordKind) -> Self {
        let ds = if kind.includes_ds() {
            by_key_tag(store.valid_ds_records(now))
        } else {
            Vec::new()
        };
        let dnskey = if kind.includes_dnskey() {
            by_key_tag(store.valid_dnskey_records(now))
        } else {
            Vec::new()
        };

        Self {
            zone: store.zone().to_string(),
            evaluated_at: now.to_rfc3339(),
            ds,
            dnskey,
        }
    }

    /// Zone file presentation format, DS records first
    pub fn to_text(&self) -> String {
        self.ds
            .iter()
            .map(ToString::to_string)
            .chain(self.dnskey.iter().map(ToString::to_string))
            .map(|line| line + "\n")
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn by_key_tag<T>(records: HashMap<u16, T>) -> Vec<T> {
    let mut entries: Vec<(u16, T)> = records.into_iter().collect();
    entries.sort_by_key(|(key_tag, _)| *key_tag);
    entries.into_iter().map(|(_, record)| record).collect()
}
