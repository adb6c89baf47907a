//! Korea national team roster pool used for the `korea` flag.

use std::collections::HashSet;

/// Players who make up the usual Korea national team squads.
pub const NATIONAL_ROSTER: [&str; 17] = [
    "고정운", "기성용", "김민재", "김태환", "박주영", "손흥민", "유상철", "윤석영", "이동준",
    "이범영", "이창민", "지동원", "차두리", "차범근", "홍명보", "홍정호", "홍철",
];

/// A side needs strictly more than this many roster members to be flagged.
pub const KOREA_THRESHOLD: usize = 5;

pub fn is_roster_member(name: &str) -> bool {
    NATIONAL_ROSTER.contains(&name)
}

/// Number of distinct roster members among `names`.
///
/// The same footballer fielded twice (e.g. two cards of different seasons)
/// counts once.
pub fn roster_member_count<'a>(names: impl IntoIterator<Item = &'a str>) -> usize {
    names
        .into_iter()
        .filter(|name| is_roster_member(name))
        .collect::<HashSet<_>>()
        .len()
}

/// `"Y"` when more than [`KOREA_THRESHOLD`] roster members are fielded, else `"N"`.
pub fn korea_flag(member_count: usize) -> &'static str {
    if member_count > KOREA_THRESHOLD {
        "Y"
    } else {
        "N"
    }
}
