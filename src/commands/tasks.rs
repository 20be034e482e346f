use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::store::tasks::TaskStore;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Include tasks without a due date, in storage order
    #[arg(short, long)]
    all: bool,
}

// Prints the same view the home page serves: scheduled tasks ascending by
// due date, unless --all asks for the raw collection.
pub fn cmd(args: TasksArgs) -> Result<()> {
    let store = TaskStore::open()?;
    let filter = if args.all { TaskFilter::All } else { TaskFilter::Scheduled };
    let tasks = store.fetch(filter);

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks);
    Ok(())
}
