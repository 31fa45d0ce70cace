#[cfg(test)]
mod tests {
    use amon::libs::analyzer::Analyzer;
    use amon::libs::event::EventRecord;
    use amon::libs::idle::IdleInterval;
    use amon::libs::summary::IdleSummary;
    use chrono::NaiveDate;

    fn rec(id: i64, timestamp: &str) -> EventRecord {
        EventRecord {
            id,
            timestamp: timestamp.to_string(),
            event_type: "Move".to_string(),
            details: format!("Position: ({}, {})", id, id),
        }
    }

    #[test]
    fn test_annotation_pass_marks_gaps_over_threshold() {
        let records = vec![
            rec(1, "2025-06-01 10:00:00.000000"),
            rec(2, "2025-06-01 10:01:05.000000"), // 65s -> 1.08 minutes
            rec(3, "2025-06-01 10:02:05.000000"), // exactly 60s -> not idle
            rec(4, "2025-06-01 10:05:05.000000"), // 180s -> 3.00 minutes
        ];

        let annotated = Analyzer::new(60).annotate(&records);
        let annotations: Vec<&str> = annotated.iter().map(|a| a.idle_minutes.as_str()).collect();
        assert_eq!(annotations, vec!["", "1.08", "", "3.00"]);
        // Every input row is emitted, in order.
        assert_eq!(annotated.iter().map(|a| a.record.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_annotation_pass_skips_malformed_timestamps_but_emits_rows() {
        let records = vec![
            rec(1, "2025-06-01 10:00:00.000000"),
            rec(2, "not a timestamp"),
            rec(3, "2025-06-01 10:03:00.000000"), // measured from row 1: 180s
        ];

        let annotated = Analyzer::new(60).annotate(&records);
        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[1].idle_minutes, "");
        assert_eq!(annotated[2].idle_minutes, "3.00");
    }

    #[test]
    fn test_passes_accept_timestamps_without_subseconds() {
        let records = vec![rec(1, "2025-06-01 10:00:00"), rec(2, "2025-06-01 10:02:00.500000")];

        let annotated = Analyzer::new(60).annotate(&records);
        assert_eq!(annotated[1].idle_minutes, "2.01"); // 120.5s

        let intervals = Analyzer::new(60).summarize(&records);
        assert_eq!(intervals.len(), 1);
    }

    #[test]
    fn test_summary_pass_keys_intervals_to_the_earlier_date() {
        let records = vec![
            rec(1, "2025-06-01 23:58:00.000000"),
            rec(2, "2025-06-02 00:01:00.000000"), // spans midnight, keyed to June 1
            rec(3, "2025-06-02 00:05:00.000000"),
        ];

        let intervals = Analyzer::new(60).summarize(&records);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(intervals[0].from.format("%H:%M:%S").to_string(), "23:58:00");
        assert_eq!(intervals[0].to.format("%H:%M:%S").to_string(), "00:01:00");
        assert_eq!(intervals[1].date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    }

    #[test]
    fn test_summary_pass_preserves_day_and_interval_order() {
        let records = vec![
            rec(1, "2025-06-01 09:00:00.000000"),
            rec(2, "2025-06-01 09:10:00.000000"),
            rec(3, "2025-06-01 09:10:30.000000"),
            rec(4, "2025-06-01 09:20:00.000000"),
            rec(5, "2025-06-02 08:00:00.000000"),
            rec(6, "2025-06-02 08:05:00.000000"),
        ];

        let intervals = Analyzer::new(60).summarize(&records);
        let days: Vec<NaiveDate> = intervals.iter().map(|i| i.date).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            ]
        );
        // Within June 1, intervals appear in the order their gaps closed.
        assert_eq!(intervals[0].from.format("%H:%M:%S").to_string(), "09:00:00");
        assert_eq!(intervals[1].from.format("%H:%M:%S").to_string(), "09:10:30");
        assert_eq!(intervals[2].from.format("%H:%M:%S").to_string(), "09:20:00");
    }

    #[test]
    fn test_first_row_is_never_annotated() {
        let records = vec![rec(1, "2025-06-01 10:00:00.000000")];
        let annotated = Analyzer::new(60).annotate(&records);
        assert_eq!(annotated[0].idle_minutes, "");
        assert!(Analyzer::new(60).summarize(&records).is_empty());
    }

    #[test]
    fn test_offline_analysis_is_idempotent() {
        let records = vec![
            rec(1, "2025-06-01 10:00:00.000000"),
            rec(2, "2025-06-01 10:05:00.000000"),
            rec(3, "2025-06-01 10:05:30.000000"),
        ];
        let analyzer = Analyzer::new(60);
        let temp_dir = tempfile::tempdir().unwrap();

        let first = temp_dir.path().join("annotated_first.csv");
        let second = temp_dir.path().join("annotated_second.csv");
        let annotated = analyzer.annotate(&records);
        analyzer.write_annotated(&annotated, &first).unwrap();
        analyzer.write_annotated(&analyzer.annotate(&records), &second).unwrap();
        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());

        let summary_path = temp_dir.path().join("summary.csv");
        let summary = IdleSummary::with_path(summary_path.clone());
        summary.write_all(&analyzer.summarize(&records)).unwrap();
        let first_bytes = std::fs::read(&summary_path).unwrap();
        summary.write_all(&analyzer.summarize(&records)).unwrap();
        assert_eq!(std::fs::read(&summary_path).unwrap(), first_bytes);
    }

    #[test]
    fn test_summary_rewrite_replaces_live_appends() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("summary.csv");
        let summary = IdleSummary::with_path(path.clone());

        let stale = IdleInterval {
            date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
            from: chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            to: chrono::NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
            minutes: 5.0,
        };
        summary.append(&stale).unwrap();
        summary.append(&stale).unwrap();

        let records = vec![rec(1, "2025-06-01 10:00:00.000000"), rec(2, "2025-06-01 10:02:00.000000")];
        summary.write_all(&Analyzer::new(60).summarize(&records)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Date,From,To,Duration (Minutes)");
        assert_eq!(lines[1], "2025-06-01,10:00:00,10:02:00,2.00");
    }
}
