#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use worklog::libs::config::Config;
    use worklog::libs::event::{ActionEvent, ActionType};
    use worklog::libs::report::{
        attendance_report, daily_report, monthly_report, tracking_report, FormatAttendance, FormatTracking, StageKind,
    };
    use worklog::libs::snapshot::{DateRange, JobRecord, PersonProfile, SessionRecord, Snapshot};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        date(d).and_hms_opt(h, m, s).unwrap()
    }

    fn event(task_id: i64, person_id: i64, action_type: ActionType, time: NaiveDateTime, stage: &str, pages: u32) -> ActionEvent {
        ActionEvent {
            task_id,
            person_id,
            action_type,
            occurred_at: time,
            logical_time: None,
            stage: Some(stage.to_string()),
            page_count: pages,
            performer_name: Some("Asha".to_string()),
        }
    }

    fn profile(person_id: i64, name: &str) -> PersonProfile {
        PersonProfile {
            person_id,
            name: name.to_string(),
            department: Some("Production".to_string()),
            role: Some("Processor".to_string()),
            assignment: None,
        }
    }

    fn session(id: i64, person_id: i64, d: u32, login: Option<(u32, u32)>, logout: Option<(u32, u32)>) -> SessionRecord {
        SessionRecord {
            id,
            person_id,
            login_time: login.map(|(h, m)| date(d).and_hms_opt(h, m, 0).unwrap()),
            logout_time: logout.map(|(h, m)| date(d).and_hms_opt(h, m, 0).unwrap()),
            session_date: date(d),
        }
    }

    fn job(job_id: i64, name: &str, po_hours: f64) -> JobRecord {
        JobRecord {
            job_id,
            name: name.to_string(),
            po_hours,
        }
    }

    #[test]
    fn test_attendance_rows_are_sorted_and_numbered() {
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha"), profile(2, "Birgit")],
            sessions: vec![
                session(3, 2, 2, Some((10, 5)), Some((19, 0))),
                session(1, 1, 1, Some((10, 0)), Some((19, 0))),
                session(2, 2, 1, Some((9, 55)), Some((18, 45))),
            ],
            events: vec![],
            jobs: vec![],
        };

        let entries = attendance_report(&snapshot, date(2));
        let serials: Vec<usize> = entries.iter().map(|entry| entry.serial).collect();
        assert_eq!(serials, vec![1, 2, 3]);
        // Sorted by date, then login time.
        assert_eq!(entries[0].person_id, 2);
        assert_eq!(entries[0].date, date(1));
        assert_eq!(entries[1].person_id, 1);
        assert_eq!(entries[2].date, date(2));
    }

    #[test]
    fn test_attendance_without_profile_gets_placeholders() {
        let snapshot = Snapshot {
            profiles: vec![],
            sessions: vec![session(1, 42, 1, Some((10, 0)), None)],
            events: vec![],
            jobs: vec![],
        };

        let rows = attendance_report(&snapshot, date(1)).format();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].person_name, "Unknown");
        assert_eq!(rows[0].department, "N/A");
        assert_eq!(rows[0].role, "N/A");
        assert_eq!(rows[0].date, "01-04-2024");
        assert_eq!(rows[0].status, "Present");
    }

    #[test]
    fn test_absent_session_row() {
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha")],
            sessions: vec![session(1, 1, 1, None, None)],
            events: vec![],
            jobs: vec![],
        };

        let rows = attendance_report(&snapshot, date(1)).format();
        assert_eq!(rows[0].status, "Absent");
        assert_eq!(rows[0].work_duration, "00:00");
        assert_eq!(rows[0].in_time, "N/A");
        assert_eq!(rows[0].punch_record, "");
    }

    #[test]
    fn test_daily_report_joins_job_metadata() {
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha")],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 10),
                event(7, 1, ActionType::Complete, at(1, 11, 0, 0), "Processor", 10),
                event(9, 1, ActionType::Start, at(1, 12, 0, 0), "QC", 0),
            ],
            jobs: vec![job(7, "Annual Report", 3.0)],
        };

        let entries = daily_report(&snapshot, 1, &Config::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_name, "Annual Report");
        // Job 9 has no metadata but is still emitted.
        assert_eq!(entries[1].job_name, "Unknown");
        assert_eq!(entries[0].serial, 1);
        assert_eq!(entries[1].serial, 2);
    }

    #[test]
    fn test_daily_report_filters_by_person() {
        let snapshot = Snapshot {
            profiles: vec![],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 0),
                event(8, 2, ActionType::Start, at(1, 9, 30, 0), "Processor", 0),
            ],
            jobs: vec![],
        };

        let entries = daily_report(&snapshot, 2, &Config::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_id, 8);
    }

    #[test]
    fn test_monthly_po_hours_counted_once_per_day() {
        // Three qualifying events for the same job on the same day must
        // credit the job's PO hours exactly once.
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha")],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 5),
                event(7, 1, ActionType::Pause, at(1, 10, 0, 0), "Processor", 0),
                event(7, 1, ActionType::Resume, at(1, 11, 0, 0), "Processor", 0),
            ],
            jobs: vec![job(7, "Annual Report", 4.0)],
        };

        let rows = monthly_report(&snapshot, &Config::default());
        assert_eq!(rows.len(), 1);
        let cell = rows[0].cells.get(&date(1)).unwrap();
        assert!((cell.hours - 4.0).abs() < f64::EPSILON);
        assert!((rows[0].total_hours - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_monthly_sums_distinct_jobs_and_days() {
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha")],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 5),
                event(8, 1, ActionType::Start, at(1, 12, 0, 0), "QC", 2),
                event(7, 1, ActionType::Resume, at(2, 9, 0, 0), "Processor", 0),
            ],
            jobs: vec![job(7, "Annual Report", 4.0), job(8, "Brochure", 1.5)],
        };

        let rows = monthly_report(&snapshot, &Config::default());
        let day_one = rows[0].cells.get(&date(1)).unwrap();
        let day_two = rows[0].cells.get(&date(2)).unwrap();
        assert!((day_one.hours - 5.5).abs() < f64::EPSILON);
        // The same job on a new day is credited again.
        assert!((day_two.hours - 4.0).abs() < f64::EPSILON);
        assert!((rows[0].total_hours - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tracking_report_collects_stages() {
        let snapshot = Snapshot {
            profiles: vec![],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 0),
                event(7, 1, ActionType::Complete, at(1, 11, 0, 0), "DTP", 0),
                event(7, 1, ActionType::Start, at(1, 11, 30, 0), "QC", 0),
                event(7, 2, ActionType::Start, at(1, 13, 0, 0), "QC CXN", 0),
            ],
            jobs: vec![job(7, "Annual Report", 4.0)],
        };

        let rows = tracking_report(&snapshot);
        assert_eq!(rows.len(), 1);
        let dtp = rows[0].stage(StageKind::Dtp);
        assert_eq!(dtp.start, Some(at(1, 9, 0, 0)));
        assert_eq!(dtp.end, Some(at(1, 11, 0, 0)));
        assert_eq!(dtp.status.to_string(), "Completed");
        let qc = rows[0].stage(StageKind::Qc);
        assert_eq!(qc.status.to_string(), "In Progress");
        let cxn = rows[0].stage(StageKind::QcCorrection);
        assert_eq!(cxn.start, Some(at(1, 13, 0, 0)));
        let qa = rows[0].stage(StageKind::Qa);
        assert_eq!(qa.status.to_string(), "Not Started");
    }

    #[test]
    fn test_tracking_sequence_follows_processing_order() {
        let snapshot = Snapshot {
            profiles: vec![],
            sessions: vec![],
            events: vec![
                event(9, 1, ActionType::Start, at(2, 9, 0, 0), "Processor", 0),
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 0),
                event(8, 1, ActionType::Start, at(1, 14, 0, 0), "Processor", 0),
            ],
            jobs: vec![],
        };

        let rows = tracking_report(&snapshot);
        let order: Vec<i64> = rows.iter().map(|row| row.job_id).collect();
        assert_eq!(order, vec![7, 8, 9]);
        let sequences: Vec<usize> = rows.iter().map(|row| row.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_tracking_elapsed_carries_seconds() {
        let snapshot = Snapshot {
            profiles: vec![],
            sessions: vec![],
            events: vec![
                event(7, 1, ActionType::Start, at(1, 9, 0, 0), "QC", 0),
                event(7, 1, ActionType::Complete, at(1, 9, 10, 42), "QC", 0),
            ],
            jobs: vec![],
        };

        let rows = tracking_report(&snapshot).format();
        assert_eq!(rows[0].qc.elapsed, "00:10:42");
    }

    #[test]
    fn test_empty_window_yields_empty_reports() {
        let snapshot = Snapshot {
            profiles: vec![profile(1, "Asha")],
            sessions: vec![session(1, 1, 1, Some((10, 0)), Some((19, 0)))],
            events: vec![event(7, 1, ActionType::Start, at(1, 9, 0, 0), "Processor", 0)],
            jobs: vec![],
        }
        .filter_range(DateRange::new(Some(date(10)), Some(date(20))));

        assert!(attendance_report(&snapshot, date(10)).is_empty());
        assert!(daily_report(&snapshot, 1, &Config::default()).is_empty());
        assert!(monthly_report(&snapshot, &Config::default()).is_empty());
        assert!(tracking_report(&snapshot).is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive_to_end_of_day() {
        let range = DateRange::new(Some(date(1)), Some(date(2)));
        assert!(range.contains_datetime(at(2, 23, 59, 59)));
        assert!(!range.contains_datetime(at(3, 0, 0, 0)));
        assert!(range.contains_date(date(1)));
        assert!(!range.contains_date(date(3)));
    }

    #[test]
    fn test_stage_kind_parsing() {
        assert_eq!(StageKind::parse("Processor"), Some(StageKind::Dtp));
        assert_eq!(StageKind::parse("dtp"), Some(StageKind::Dtp));
        assert_eq!(StageKind::parse("QC"), Some(StageKind::Qc));
        assert_eq!(StageKind::parse("QA Correction"), Some(StageKind::QaCorrection));
        assert_eq!(StageKind::parse("qc-cxn"), Some(StageKind::QcCorrection));
        assert_eq!(StageKind::parse("Binding"), None);
        assert_eq!(StageKind::parse(""), None);
    }
}
