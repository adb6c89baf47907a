use crate::cli::types::ids::{AccessId, MatchId, MatchType, SpId};
use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// One stat category of a side, keyed by stat name (`shootTotal`, `passTry`, ...).
///
/// Insertion order of the payload is preserved.
pub type StatMap = serde_json::Map<String, Value>;

/// Match detail payload from `/matches/{matchId}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawMatch {
    #[serde(rename = "matchId")]
    pub match_id: MatchId,
    /// Wall-clock time as reported by the API. A trailing UTC offset
    /// (`Z`, `+09:00`) is accepted and dropped.
    #[serde(rename = "matchDate", deserialize_with = "deserialize_match_date")]
    pub match_date: NaiveDateTime,
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
    /// One entry per side. Anything other than two means the opponent left
    /// before stats were recorded.
    #[serde(rename = "matchInfo", default)]
    pub match_info: Vec<SideRecord>,
}

fn deserialize_match_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_local()))
        .map_err(|e| de::Error::custom(format!("invalid matchDate {raw:?}: {e}")))
}

/// One side's statistics for a match.
///
/// Every section is optional at the serde level so a truncated payload still
/// parses; the flattener reports which section is missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SideRecord {
    #[serde(rename = "accessId", default, skip_serializing_if = "Option::is_none")]
    pub access_id: Option<AccessId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(rename = "matchDetail", default, skip_serializing_if = "Option::is_none")]
    pub match_detail: Option<StatMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot: Option<StatMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<StatMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defence: Option<StatMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Vec<Participant>>,
}

/// A player fielded by one side
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    #[serde(rename = "spId")]
    pub sp_id: SpId,
    #[serde(rename = "spPosition", default, skip_serializing_if = "Option::is_none")]
    pub sp_position: Option<u8>,
    #[serde(rename = "spGrade", default, skip_serializing_if = "Option::is_none")]
    pub sp_grade: Option<u8>,
}

/// Response of `/users?nickname=...`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserInfo {
    #[serde(rename = "accessId")]
    pub access_id: AccessId,
    pub nickname: String,
    #[serde(default)]
    pub level: Option<u32>,
}

/// Nickname resolution results in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserLookup {
    pub by_access_id: BTreeMap<AccessId, String>,
    pub by_nickname: BTreeMap<String, AccessId>,
}

impl FromIterator<UserInfo> for UserLookup {
    fn from_iter<I: IntoIterator<Item = UserInfo>>(iter: I) -> Self {
        let mut lookup = UserLookup::default();
        for user in iter {
            lookup
                .by_nickname
                .insert(user.nickname.clone(), user.access_id.clone());
            lookup.by_access_id.insert(user.access_id, user.nickname);
        }
        lookup
    }
}
