use super::*;
use crate::accounts::AccountRecord;
use crate::matching::{Match, MatchTier};

fn sample_matches() -> Vec<Match> {
    vec![
        Match::new(
            AccountRecord::new("1800", "Bank")
                .with_description("Guthaben bei Kreditinstituten")
                .with_examples("Girokonto", "Kasse")
                .with_new_position("A.IV", "Flüssige Mittel"),
            0.8123,
        ),
        Match::new(AccountRecord::new("1000", "Kasse"), 0.6049),
    ]
}

mod table_tests {
    use super::*;

    #[test]
    fn test_input_row_first() {
        let table = ResultTable::assemble("Bankkonto", "Neues Konto", "Bilanz", &sample_matches());

        let input = table.input_row();
        assert!(input.is_input());
        assert_eq!(input.score, ScoreCell::Input);
        assert_eq!(input.name, "Bankkonto");
        assert_eq!(input.description, "Neues Konto");
        assert_eq!(input.new_position_code, "Bilanz");
        assert!(input.account_number.is_empty());

        assert_eq!(table.len(), 3);
        assert_eq!(table.match_count(), 2);
    }

    #[test]
    fn test_match_rows_keep_order_and_round() {
        let table = ResultTable::assemble("x", "y", "Bilanz", &sample_matches());
        let rows = table.match_rows();

        assert_eq!(rows[0].account_number, "1800");
        assert_eq!(rows[0].score, ScoreCell::Score(0.81));
        assert_eq!(rows[0].positive_examples, "Girokonto");
        assert_eq!(rows[0].new_position_description, "Flüssige Mittel");
        assert_eq!(rows[1].account_number, "1000");
        assert_eq!(rows[1].score, ScoreCell::Score(0.6));
        assert_eq!(rows[1].description, "");
    }

    #[test]
    fn test_empty_matches_still_has_input_row() {
        let table = ResultTable::assemble("x", "", "GuV", &[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.match_count(), 0);
        assert!(table.match_rows().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let dup = Match::new(AccountRecord::new("1000", "Kasse"), 0.7);
        let table = ResultTable::assemble("x", "y", "Bilanz", &[dup.clone(), dup]);
        assert_eq!(table.match_count(), 2);
    }

    #[test]
    fn test_score_cell_display() {
        assert_eq!(ScoreCell::Input.to_string(), "INPUT");
        assert_eq!(ScoreCell::Score(0.6).to_string(), "0.60");
    }

    #[test]
    fn test_json_uses_column_names() {
        let table = ResultTable::assemble("Bankkonto", "", "Bilanz", &sample_matches());
        let json = table.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["Score"], "INPUT");
        assert_eq!(value[1]["Score"], 0.81);
        assert_eq!(value[1]["Sachkontonummer"], "1800");
        assert_eq!(value[1]["Position neu"], "A.IV");
    }

    #[test]
    fn test_text_preview() {
        let table = ResultTable::assemble("Bankkonto", "", "Bilanz", &sample_matches());
        let text = table.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Score"));
        assert!(lines[1].starts_with("INPUT"));
        assert!(lines[2].starts_with("0.81"));
        assert!(lines[2].contains("Bank"));
    }

    #[test]
    fn test_text_preview_clips_long_cells() {
        let long = "x".repeat(100);
        let table = ResultTable::assemble(&long, "", "Bilanz", &[]);
        let text = table.to_text();
        assert!(!text.contains(&long));
        assert!(text.contains('…'));
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_write_xlsx_roundtrip() {
        use calamine::{Data, Reader, open_workbook_auto};

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("result.xlsx");
        let table = ResultTable::assemble("Bankkonto", "Neu", "Bilanz", &sample_matches());

        table.write_xlsx(&path).expect("write workbook");

        let mut workbook = open_workbook_auto(&path).expect("open workbook");
        let range = workbook
            .worksheet_range(crate::constants::RESULT_SHEET_NAME)
            .expect("sheet");

        assert_eq!(range.height(), 4);
        assert_eq!(range.get((0, 0)), Some(&Data::String("Score".to_string())));
        assert_eq!(range.get((1, 0)), Some(&Data::String("INPUT".to_string())));
        assert_eq!(range.get((2, 0)), Some(&Data::Float(0.81)));
        assert_eq!(range.get((2, 1)), Some(&Data::String("1800".to_string())));
    }

    #[test]
    fn test_write_xlsx_bad_path() {
        let table = ResultTable::assemble("x", "y", "Bilanz", &[]);
        let err = table
            .write_xlsx(std::path::Path::new("/nonexistent/dir/out.xlsx"))
            .expect_err("directory does not exist");
        assert!(matches!(err, ReportError::Xlsx { .. }));
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let tier = MatchTier::Threshold {
            threshold: 0.6,
            rung: 0,
        };
        let status = StatusMessage::from_tier(&tier, 3, 0.5);
        assert_eq!(status, StatusMessage::Success {
            count: 3,
            threshold: 0.6
        });
        assert_eq!(status.to_string(), "3 Sachkonten mit Score >60% gefunden.");
        assert!(!status.is_warning());
    }

    #[test]
    fn test_no_match_message() {
        let tier = MatchTier::NoMatch {
            lowest_threshold: 0.5,
        };
        let status = StatusMessage::from_tier(&tier, 0, 0.5);
        assert_eq!(
            status.to_string(),
            "Keine Sachkonten mit einer Wahrscheinlichkeit >50% gefunden."
        );
        assert!(status.is_warning());
    }

    #[test]
    fn test_fallback_message() {
        let status = StatusMessage::from_tier(&MatchTier::Fallback { size: 5 }, 5, 0.5);
        assert!(status.to_string().contains("Die 5 ähnlichsten Sachkonten"));
        assert!(status.is_warning());
    }

    #[test]
    fn test_no_candidates_message() {
        let status = StatusMessage::from_tier(&MatchTier::NoCandidates, 0, 0.5);
        assert_eq!(status, StatusMessage::NoCandidates);
        assert!(status.is_warning());
    }
}
