#[cfg(test)]
mod tests {
    use taskdeck::libs::ics::calendar;
    use taskdeck::libs::task::Task;

    fn event_count(document: &str) -> usize {
        document.matches("BEGIN:VEVENT").count()
    }

    #[test]
    fn test_empty_store_yields_empty_calendar() {
        let document = calendar(&[]);
        assert_eq!(event_count(&document), 0);
        assert!(document.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(document.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn test_event_carries_summary_start_and_description() {
        let task = Task::new(1, "Dentist", "2024-03-15", "14:30", "");
        let document = calendar(&[task]);

        assert_eq!(event_count(&document), 1);
        assert!(document.contains("SUMMARY:Dentist\r\n"));
        assert!(document.contains("DTSTART:20240315T143000\r\n"));
        assert!(document.contains("DESCRIPTION:Exported from Task Tracker\r\n"));
        assert!(document.contains("UID:1@taskdeck\r\n"));
    }

    #[test]
    fn test_missing_due_time_defaults_to_midnight() {
        let task = Task::new(1, "All day", "2024-03-15", "", "");
        let document = calendar(&[task]);
        assert!(document.contains("DTSTART:20240315T000000\r\n"));
    }

    #[test]
    fn test_tasks_without_title_or_date_are_skipped() {
        let untitled = Task::new(1, "", "2024-03-15", "10:00", "");
        let undated = Task::new(2, "Sometime", "", "10:00", "");
        let unparseable = Task::new(3, "Someday", "next week", "10:00", "");
        let kept = Task::new(4, "Real", "2024-03-16", "10:00", "");

        let document = calendar(&[untitled, undated, unparseable, kept]);

        assert_eq!(event_count(&document), 1);
        assert!(document.contains("SUMMARY:Real\r\n"));
    }

    #[test]
    fn test_summary_text_is_escaped() {
        let task = Task::new(1, "Lunch, maybe; with Bob\\Alice", "2024-03-15", "", "");
        let document = calendar(&[task]);
        assert!(document.contains(r"SUMMARY:Lunch\, maybe\; with Bob\\Alice"));
    }

    #[test]
    fn test_done_tasks_are_still_exported() {
        let mut task = Task::new(1, "Finished", "2024-03-15", "08:00", "");
        task.done = true;
        assert_eq!(event_count(&calendar(&[task])), 1);
    }
}
