use std::collections::HashMap;

use crate::{cli::types::ids::SpId, nexon::meta::Lookup};

/// Point-in-time `spId -> display name` snapshot used to resolve rosters.
///
/// Usually built from the `spid.json` metadata:
///
/// ```rust
/// use fo4_stats::{dataset::PlayerDirectory, SpId};
///
/// let directory: PlayerDirectory = [(SpId::new(101000001), "데이비드 시먼".to_string())]
///     .into_iter()
///     .collect();
/// assert_eq!(directory.name(SpId::new(101000001)), Some("데이비드 시먼"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDirectory {
    names: HashMap<SpId, String>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sp_id: SpId, name: impl Into<String>) -> Option<String> {
        self.names.insert(sp_id, name.into())
    }

    pub fn name(&self, sp_id: SpId) -> Option<&str> {
        self.names.get(&sp_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(SpId, String)> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = (SpId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl From<&Lookup<SpId>> for PlayerDirectory {
    fn from(lookup: &Lookup<SpId>) -> Self {
        lookup
            .by_id
            .iter()
            .map(|(sp_id, name)| (*sp_id, name.clone()))
            .collect()
    }
}

impl From<Lookup<SpId>> for PlayerDirectory {
    fn from(lookup: Lookup<SpId>) -> Self {
        lookup.by_id.into_iter().collect()
    }
}
