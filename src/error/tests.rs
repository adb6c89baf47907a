//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fo4_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fo4_error = Fo4Error::from(json_error);

        match fo4_error {
            Fo4Error::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fo4_error = Fo4Error::from(io_error);

        match fo4_error {
            Fo4Error::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let fo4_error = Fo4Error::from(header_error);

        match fo4_error {
            Fo4Error::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let fo4_error = Fo4Error::from(parse_error);

        match fo4_error {
            Fo4Error::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = Fo4Error::MissingApiKey {
            env_var: "FO4_API_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API key not provided"));
        assert!(error_string.contains("FO4_API_KEY"));
    }

    #[test]
    fn test_invalid_rank_depth_error() {
        let error = Fo4Error::InvalidRankDepth { n: 15 };
        assert_eq!(
            error.to_string(),
            "Ranking depth must be a positive multiple of 10, got 15"
        );
    }

    #[test]
    fn test_unknown_player_id_names_player_and_match() {
        let error = Fo4Error::UnknownPlayerId {
            sp_id: 101000001,
            match_id: "6274cc931a6484c5cdaa76d0".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("101000001"));
        assert!(error_string.contains("6274cc931a6484c5cdaa76d0"));
        assert!(error.is_match_fault());
    }

    #[test]
    fn test_missing_section_names_section_and_match() {
        let error = Fo4Error::MissingSection {
            section: "shoot",
            match_id: "abc".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Match abc has a side without a `shoot` section"
        );
        assert!(error.is_match_fault());
    }

    #[test]
    fn test_transport_errors_are_not_match_faults() {
        assert!(!Fo4Error::NoData.is_match_fault());
        assert!(!Fo4Error::InvalidLimit { limit: 0 }.is_match_fault());
    }

    #[test]
    fn test_no_data_error() {
        let error = Fo4Error::NoData;
        assert_eq!(error.to_string(), "Nexon API returned no data");
        assert_eq!(format!("{:?}", error), "NoData");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fo4_error = Fo4Error::from(io_error);

        let error_trait: &dyn std::error::Error = &fo4_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(Fo4Error::NoData)
        }

        match test_function().unwrap_err() {
            Fo4Error::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
