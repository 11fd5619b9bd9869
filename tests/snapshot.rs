#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::libs::event::ActionType;
    use worklog::libs::snapshot::Snapshot;

    struct SnapshotTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SnapshotTestContext {
        fn setup() -> Self {
            SnapshotTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_reads_snapshot_with_optional_fields_absent(ctx: &mut SnapshotTestContext) {
        let path = ctx.temp_dir.path().join("snapshot.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "sessions": [
                    {{"id": 1, "person_id": 1, "session_date": "2024-01-05"}}
                ],
                "events": [
                    {{
                        "task_id": 7,
                        "person_id": 1,
                        "action_type": "taken_by",
                        "occurred_at": "2024-01-05T09:00:00"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let snapshot = Snapshot::read(&path).unwrap();
        assert!(snapshot.profiles.is_empty());
        assert!(snapshot.jobs.is_empty());
        assert_eq!(snapshot.sessions.len(), 1);
        assert!(snapshot.sessions[0].login_time.is_none());
        assert_eq!(snapshot.events[0].action_type, ActionType::TakenBy);
        assert_eq!(snapshot.events[0].page_count, 0);
        assert!(snapshot.events[0].stage.is_none());
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_missing_file_is_terminal(ctx: &mut SnapshotTestContext) {
        let error = Snapshot::read(&ctx.temp_dir.path().join("absent.json")).unwrap_err();
        assert!(error.to_string().contains("Failed to read snapshot file"));
    }

    #[test_context(SnapshotTestContext)]
    #[test]
    fn test_malformed_file_is_terminal(ctx: &mut SnapshotTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        let error = Snapshot::read(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse snapshot file"));
    }
}
