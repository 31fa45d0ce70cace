#[cfg(test)]
mod tests {
    use amon::libs::formatter::{format_minutes, IdleGroup};
    use amon::libs::idle::IdleInterval;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_format_minutes_two_decimal_precision() {
        assert_eq!(format_minutes(0.5), "0.50");
        assert_eq!(format_minutes(65.0 / 60.0), "1.08");
        assert_eq!(format_minutes(90.0 / 60.0), "1.50");
        assert_eq!(format_minutes(3600.0 / 60.0), "60.00");
    }

    #[test]
    fn test_idle_group_formatting() {
        let intervals = vec![
            IdleInterval {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                from: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                to: NaiveTime::from_hms_opt(10, 2, 0).unwrap(),
                minutes: 2.0,
            },
            IdleInterval {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                from: NaiveTime::from_hms_opt(11, 30, 15).unwrap(),
                to: NaiveTime::from_hms_opt(11, 35, 45).unwrap(),
                minutes: 5.5,
            },
        ];

        let formatted = intervals.format();
        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted[0].id, 1);
        assert_eq!(formatted[0].date, "2025-06-01");
        assert_eq!(formatted[0].from, "10:00:00");
        assert_eq!(formatted[0].to, "10:02:00");
        assert_eq!(formatted[0].duration_minutes, "2.00");
        assert_eq!(formatted[1].id, 2);
        assert_eq!(formatted[1].duration_minutes, "5.50");
    }
}
