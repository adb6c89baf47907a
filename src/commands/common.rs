//! Output helpers shared across commands.

use serde::Serialize;
use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{nexon::Lookup, Result};

/// Write `value` as pretty JSON to `out`, or to stdout when `out` is `None`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            fs::write(path, json)?;
            println!("✓ Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

/// `id<TAB>label` lines of a metadata table, ordered by id.
pub fn lookup_lines<K: Ord + Display>(lookup: &Lookup<K>) -> Vec<String> {
    lookup
        .by_id
        .iter()
        .map(|(id, label)| format!("{id}\t{label}"))
        .collect()
}

/// Print a lookup either as JSON or as tab-separated lines.
pub fn print_lookup<K>(lookup: &Lookup<K>, as_json: bool) -> Result<()>
where
    K: Ord + Display + Serialize,
{
    if as_json {
        write_json(lookup, None)
    } else {
        for line in lookup_lines(lookup) {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nexon::meta::PositionEntry;

    #[test]
    fn test_lookup_lines_sorted_by_id() {
        let lookup = Lookup::from_entries(vec![
            PositionEntry {
                spposition: 2,
                desc: "RWB".to_string(),
            },
            PositionEntry {
                spposition: 0,
                desc: "GK".to_string(),
            },
        ]);

        assert_eq!(lookup_lines(&lookup), vec!["0\tGK", "2\tRWB"]);
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&serde_json::json!({"matchId": "m"}), Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["matchId"], "m");
    }
}
