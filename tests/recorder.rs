#[cfg(test)]
mod tests {
    use amon::db::events::Events;
    use amon::libs::data_storage::DataStorage;
    use amon::libs::event::EventKind;
    use amon::libs::recorder::{EventRecorder, EVENTS_CSV_FILE_NAME};
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RecorderTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecorderTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecorderTestContext { _temp_dir: temp_dir }
        }
    }

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test_context(RecorderTestContext)]
    #[test]
    fn test_recorder_assigns_sequential_ids_and_mirrors_rows(_ctx: &mut RecorderTestContext) {
        let mut recorder = EventRecorder::new().unwrap();
        assert_eq!(recorder.last_id(), None);

        // Identifiers start at 1 and increase without gaps.
        let id1 = recorder.record(EventKind::Move, "Position: (10, 20)", ts(9, 0, 0)).unwrap();
        let id2 = recorder.record(EventKind::Click, "Position: (10, 20), Button: Left", ts(9, 0, 5)).unwrap();
        let id3 = recorder.record(EventKind::Scroll, "Position: (10, 20), Delta: (0, -2)", ts(9, 0, 9)).unwrap();
        assert_eq!((id1, id2, id3), (1, 2, 3));
        assert_eq!(recorder.last_id(), Some(3));

        // A new recorder over the same artifacts keeps the id sequence and
        // does not write a second mirror header.
        drop(recorder);
        let mut recorder = EventRecorder::new().unwrap();
        let id4 = recorder.record(EventKind::KeyPress, "Key: Escape", ts(9, 1, 0)).unwrap();
        assert_eq!(id4, 4);

        let mirror_path = DataStorage::new().get_path(EVENTS_CSV_FILE_NAME).unwrap();
        let mirror = std::fs::read_to_string(mirror_path).unwrap();
        let lines: Vec<&str> = mirror.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "ID,Timestamp,Event Type,Details");
        assert_eq!(lines.iter().filter(|line| line.starts_with("ID,")).count(), 1);
        assert!(lines[1].starts_with("1,2025-06-01 09:00:00.000000,Move,"));

        // The durable log matches what the recorder reported.
        let mut store = Events::new().unwrap();
        let records = store.read_all().unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.windows(2).all(|pair| pair[1].id == pair[0].id + 1));
        assert_eq!(records[0].event_type, "Move");
        assert_eq!(records[3].event_type, "KeyPress");

        let daily = store.fetch_daily(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
        assert_eq!(daily.len(), 4);
        let other_day = store.fetch_daily(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()).unwrap();
        assert!(other_day.is_empty());
    }
}
