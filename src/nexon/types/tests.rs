//! Unit tests for Nexon payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_raw_match_deserialization() {
        let raw: RawMatch = serde_json::from_value(json!({
            "matchId": "6274cc931a6484c5cdaa76d0",
            "matchDate": "2022-05-06T16:32:02",
            "matchType": 50,
            "matchInfo": []
        }))
        .unwrap();

        assert_eq!(raw.match_id.as_str(), "6274cc931a6484c5cdaa76d0");
        assert_eq!(
            raw.match_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2022-05-06 16:32:02"
        );
        assert_eq!(raw.match_type.as_u16(), 50);
        assert!(raw.match_info.is_empty());
    }

    #[test]
    fn test_raw_match_date_with_offset_keeps_wall_clock() {
        for date in ["2022-05-06T16:32:02Z", "2022-05-06T16:32:02+09:00", "2022-05-06T16:32:02.37"] {
            let raw: RawMatch = serde_json::from_value(json!({
                "matchId": "m",
                "matchDate": date,
                "matchType": 50
            }))
            .unwrap();

            assert_eq!(
                raw.match_date.format("%Y-%m-%d %H:%M:%S").to_string(),
                "2022-05-06 16:32:02",
                "{date}"
            );
        }
    }

    #[test]
    fn test_raw_match_rejects_garbage_date() {
        let result = serde_json::from_value::<RawMatch>(json!({
            "matchId": "m",
            "matchDate": "yesterday",
            "matchType": 50
        }));

        assert!(result.unwrap_err().to_string().contains("matchDate"));
    }

    #[test]
    fn test_raw_match_missing_match_info_defaults_to_empty() {
        let raw: RawMatch = serde_json::from_value(json!({
            "matchId": "m",
            "matchDate": "2022-05-06T16:32:02",
            "matchType": 52
        }))
        .unwrap();

        assert!(raw.match_info.is_empty());
    }

    #[test]
    fn test_side_record_keeps_stat_order() {
        let side: SideRecord = serde_json::from_value(json!({
            "shoot": {"shootTotal": 10, "effectiveShootTotal": 6, "goalTotal": 2}
        }))
        .unwrap();

        let keys: Vec<&str> = side.shoot.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["shootTotal", "effectiveShootTotal", "goalTotal"]);
        assert!(side.match_detail.is_none());
        assert!(side.player.is_none());
    }

    #[test]
    fn test_participant_ignores_unknown_fields() {
        let participant: Participant = serde_json::from_value(json!({
            "spId": 101000001,
            "spPosition": 0,
            "spGrade": 5,
            "status": {"shoot": 0, "spRating": 6.5}
        }))
        .unwrap();

        assert_eq!(participant.sp_id.as_u32(), 101000001);
        assert_eq!(participant.sp_position, Some(0));
        assert_eq!(participant.sp_grade, Some(5));
    }

    #[test]
    fn test_side_record_serialization_skips_absent_sections() {
        let side = SideRecord {
            nickname: Some("owner".to_string()),
            ..SideRecord::default()
        };

        let value = serde_json::to_value(&side).unwrap();
        assert_eq!(value, json!({"nickname": "owner"}));
    }

    #[test]
    fn test_user_lookup_from_users() {
        let users = vec![
            UserInfo {
                access_id: AccessId::new("a1"),
                nickname: "first".to_string(),
                level: Some(10),
            },
            UserInfo {
                access_id: AccessId::new("a2"),
                nickname: "second".to_string(),
                level: None,
            },
        ];

        let lookup: UserLookup = users.into_iter().collect();
        assert_eq!(lookup.by_access_id.len(), 2);
        assert_eq!(lookup.by_nickname.get("second"), Some(&AccessId::new("a2")));
    }
}
