use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE DATE", "DUE TIME", "DONE", "REPEAT", "IMAGE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.due_date,
                task.due_time,
                if task.done { "✔" } else { "" },
                task.repeat.as_str(),
                task.image
            ]);
        }
        table.printstd();
    }
}
