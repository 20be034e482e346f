#[cfg(test)]
mod tests {
    use taskdeck::libs::task::{Repeat, Task, TaskFilter};
    use taskdeck::store::tasks::{TaskStore, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StoreTestContext {
        fn document(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("tasks.json")
        }

        fn store(&self) -> TaskStore {
            TaskStore::load(self.document()).unwrap()
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_document_yields_empty_store(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_malformed_document_is_an_error(ctx: &mut StoreTestContext) {
        std::fs::write(ctx.document(), "this is not json").unwrap();
        assert!(TaskStore::load(ctx.document()).is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_next_id_never_reuses_deleted_ids(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        for id in [1, 2, 3, 4] {
            store.insert(Task::new(id, &format!("Task {}", id), "2025-01-01", "", ""));
        }
        store.remove(&[2]);

        // Ids present: {1, 3, 4} — the gap is never filled.
        assert_eq!(store.next_id(), 5);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_overwrites_fields_in_place(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let mut task = Task::new(1, "Original", "2025-01-01", "09:00", "");
        task.image = "pic.png".to_string();
        store.insert(task);

        let updated = store
            .update(
                1,
                TaskUpdate {
                    title: "Renamed".to_string(),
                    due_date: "2025-02-02".to_string(),
                    due_time: "10:30".to_string(),
                    repeat: Repeat::Weekly,
                    image: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.due_date, "2025-02-02");
        assert_eq!(updated.due_time, "10:30");
        assert_eq!(updated.repeat, Repeat::Weekly);
        // No new upload: the existing reference is kept.
        assert_eq!(updated.image, "pic.png");

        let replaced = store
            .update(
                1,
                TaskUpdate {
                    title: "Renamed".to_string(),
                    due_date: "2025-02-02".to_string(),
                    due_time: "10:30".to_string(),
                    repeat: Repeat::Weekly,
                    image: Some("new.png".to_string()),
                },
            )
            .unwrap();
        assert_eq!(replaced.image, "new.png");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_unknown_id_is_a_noop(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        store.insert(Task::new(1, "Only", "2025-01-01", "", ""));

        let result = store.update(
            42,
            TaskUpdate {
                title: "Ghost".to_string(),
                due_date: String::new(),
                due_time: String::new(),
                repeat: Repeat::None,
                image: None,
            },
        );

        assert!(result.is_none());
        assert_eq!(store.find(1).unwrap().title, "Only");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_remove_returns_removed_records(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        for id in [1, 2, 3] {
            store.insert(Task::new(id, &format!("Task {}", id), "2025-01-01", "", ""));
        }

        let removed = store.remove(&[1, 3, 99]);
        let removed_ids: Vec<i64> = removed.iter().map(|task| task.id).collect();

        assert_eq!(removed_ids, vec![1, 3]);
        assert_eq!(store.len(), 1);
        assert!(store.find(2).is_some());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_done_twice_restores_original(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        store.insert(Task::new(1, "Flip me", "2025-01-01", "", ""));

        store.toggle_done(&[1]);
        assert!(store.find(1).unwrap().done);
        store.toggle_done(&[1]);
        assert!(!store.find(1).unwrap().done);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_image_reports_cleared_filenames(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let mut with_image = Task::new(1, "Pictured", "2025-01-01", "", "");
        with_image.image = "photo.jpg".to_string();
        store.insert(with_image);
        store.insert(Task::new(2, "Bare", "2025-01-01", "", ""));

        let cleared = store.clear_image(&[1, 2]);

        assert_eq!(cleared, vec!["photo.jpg".to_string()]);
        assert_eq!(store.find(1).unwrap().image, "");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_then_load_round_trips(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let mut task = Task::new(1, "Persist me", "2025-03-03", "08:15", "");
        task.image = "keep.png".to_string();
        task.done = true;
        store.insert(task.clone());
        store.insert(Task::new(2, "Me too", "", "", ""));
        store.save().unwrap();

        let reloaded = TaskStore::load(ctx.document()).unwrap();
        assert_eq!(reloaded.tasks(), store.tasks());
        assert_eq!(reloaded.find(1), Some(&task));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fetch_by_ids(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        for id in [1, 2, 3] {
            store.insert(Task::new(id, &format!("Task {}", id), "", "", ""));
        }

        let picked = store.fetch(TaskFilter::ByIds(vec![2, 3]));
        let picked_ids: Vec<i64> = picked.iter().map(|task| task.id).collect();
        assert_eq!(picked_ids, vec![2, 3]);
    }
}
