#[cfg(test)]
mod tests {
    use taskdeck::libs::task::{Task, TaskFilter};
    use taskdeck::store::tasks::TaskStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SearchTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SearchTestContext {
        fn setup() -> Self {
            SearchTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl SearchTestContext {
        fn seeded_store(&self) -> TaskStore {
            let mut store = TaskStore::load(self.temp_dir.path().join("tasks.json")).unwrap();
            store.insert(Task::new(1, "Gym", "2024-01-05", "09:00", ""));
            store.insert(Task::new(2, "Swim", "2024-01-02", "", ""));
            store.insert(Task::new(3, "Gym (Day 2)", "2024-01-06", "09:00", ""));
            store.insert(Task::new(4, "Unscheduled gym", "", "", ""));
            store
        }
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_empty_query_returns_all_scheduled_tasks_sorted(ctx: &mut SearchTestContext) {
        let results = ctx.seeded_store().fetch(TaskFilter::Query(String::new()));
        let ids: Vec<i64> = results.iter().map(|task| task.id).collect();

        // Ascending by due date; the task without one is excluded entirely.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_query_matches_substring_case_insensitively(ctx: &mut SearchTestContext) {
        let store = ctx.seeded_store();

        let results = store.fetch(TaskFilter::Query("gym".to_string()));
        let titles: Vec<&str> = results.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, vec!["Gym", "Gym (Day 2)"]);

        let shouted = store.fetch(TaskFilter::Query("GYM".to_string()));
        assert_eq!(shouted.len(), 2);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_query_never_surfaces_tasks_without_due_date(ctx: &mut SearchTestContext) {
        // "Unscheduled gym" matches the query but has no due date.
        let results = ctx.seeded_store().fetch(TaskFilter::Query("unscheduled".to_string()));
        assert!(results.is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_non_matching_query_returns_nothing(ctx: &mut SearchTestContext) {
        let results = ctx.seeded_store().fetch(TaskFilter::Query("run".to_string()));
        assert!(results.is_empty());
    }
}
