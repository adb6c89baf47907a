//! Static reference metadata (`https://static.api.nexon.co.kr/fifaonline4/latest/*.json`).
//!
//! Each file is a flat JSON array of `{key, label}` objects. They are loaded
//! into a [`Lookup`] that answers both "what is id X called" and "which id
//! has name Y".

use crate::cli::types::{ids::SpId, meta::MetaKind};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

/// A row of one of the static metadata files.
pub trait MetaEntry: DeserializeOwned {
    type Key: Ord + Clone;

    /// Which metadata file these entries come from.
    const KIND: MetaKind;

    fn key(&self) -> Self::Key;
    fn label(&self) -> &str;
}

/// Forward (`id -> label`) and reverse (`label -> id`) lookup tables.
///
/// Labels are not unique in every file (`spid.json` repeats names across
/// seasons); the reverse table keeps the last id in payload order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup<K: Ord> {
    pub by_id: BTreeMap<K, String>,
    pub by_name: BTreeMap<String, K>,
}

impl<K: Ord> Default for Lookup<K> {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_name: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> Lookup<K> {
    pub fn from_entries<E>(entries: impl IntoIterator<Item = E>) -> Self
    where
        E: MetaEntry<Key = K>,
    {
        let mut lookup = Lookup::default();
        for entry in entries {
            let key = entry.key();
            let label = entry.label().to_string();
            lookup.by_name.insert(label.clone(), key.clone());
            lookup.by_id.insert(key, label);
        }
        lookup
    }

    pub fn name(&self, key: &K) -> Option<&str> {
        self.by_id.get(key).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<&K> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchTypeEntry {
    pub matchtype: u16,
    pub desc: String,
}

impl MetaEntry for MatchTypeEntry {
    type Key = u16;
    const KIND: MetaKind = MetaKind::MatchTypes;

    fn key(&self) -> u16 {
        self.matchtype
    }

    fn label(&self) -> &str {
        &self.desc
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpIdEntry {
    pub id: SpId,
    pub name: String,
}

impl MetaEntry for SpIdEntry {
    type Key = SpId;
    const KIND: MetaKind = MetaKind::Spid;

    fn key(&self) -> SpId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeasonEntry {
    #[serde(rename = "seasonId")]
    pub season_id: u32,
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "seasonImg", default)]
    pub season_img: Option<String>,
}

impl MetaEntry for SeasonEntry {
    type Key = u32;
    const KIND: MetaKind = MetaKind::Seasons;

    fn key(&self) -> u32 {
        self.season_id
    }

    fn label(&self) -> &str {
        &self.class_name
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionEntry {
    pub spposition: u8,
    pub desc: String,
}

impl MetaEntry for PositionEntry {
    type Key = u8;
    const KIND: MetaKind = MetaKind::Positions;

    fn key(&self) -> u8 {
        self.spposition
    }

    fn label(&self) -> &str {
        &self.desc
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DivisionEntry {
    #[serde(rename = "divisionId")]
    pub division_id: u32,
    #[serde(rename = "divisionName")]
    pub division_name: String,
}

impl MetaEntry for DivisionEntry {
    type Key = u32;
    const KIND: MetaKind = MetaKind::Divisions;

    fn key(&self) -> u32 {
        self.division_id
    }

    fn label(&self) -> &str {
        &self.division_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_builds_both_directions() {
        let entries: Vec<MatchTypeEntry> = serde_json::from_value(json!([
            {"matchtype": 30, "desc": "리그 친선"},
            {"matchtype": 50, "desc": "공식경기"}
        ]))
        .unwrap();

        let lookup = Lookup::from_entries(entries);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.name(&30), Some("리그 친선"));
        assert_eq!(lookup.id("공식경기"), Some(&50));
        assert_eq!(lookup.name(&99), None);
    }

    #[test]
    fn test_lookup_duplicate_names_keep_last_id() {
        let entries: Vec<SpIdEntry> = serde_json::from_value(json!([
            {"id": 101000001, "name": "데이비드 시먼"},
            {"id": 214000001, "name": "데이비드 시먼"}
        ]))
        .unwrap();

        let lookup = Lookup::from_entries(entries);
        assert_eq!(lookup.by_id.len(), 2);
        assert_eq!(lookup.by_name.len(), 1);
        assert_eq!(lookup.id("데이비드 시먼"), Some(&SpId::new(214000001)));
    }

    #[test]
    fn test_season_entry_ignores_image_when_absent() {
        let entry: SeasonEntry =
            serde_json::from_value(json!({"seasonId": 101, "className": "ICON (ICON)"})).unwrap();
        assert_eq!(entry.key(), 101);
        assert_eq!(entry.label(), "ICON (ICON)");
        assert!(entry.season_img.is_none());
    }

    #[test]
    fn test_entry_kinds_match_files() {
        assert_eq!(DivisionEntry::KIND.file_name(), "division.json");
        assert_eq!(PositionEntry::KIND.file_name(), "spposition.json");
        assert_eq!(SeasonEntry::KIND.file_name(), "seasonid.json");
    }
}
