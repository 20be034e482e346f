// web/pages.rs — HTML rendering.
//
// The interface is a single page: search bar, task table with bulk-action
// checkboxes, and an add/edit form. Markup ships as raw-string templates
// with placeholder substitution; all user-supplied text is escaped.

use crate::libs::task::{Repeat, Task};
use crate::web::routes::{ACTION_DELETE, ACTION_REMOVE_IMAGE, ACTION_TOGGLE};

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Task Tracker</title>
<style>
  body { font-family: sans-serif; margin: 2rem auto; max-width: 64rem; color: #222; }
  h1 { font-size: 1.4rem; }
  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
  th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
  th { background: #f2f2f2; }
  img.thumb { max-height: 48px; }
  form.inline { display: inline; }
  fieldset { margin: 1rem 0; padding: 1rem; }
  .actions button { margin-right: 0.5rem; }
</style>
</head>
<body>
<h1>Task Tracker</h1>

<form action="/" method="get">
  <input type="text" name="q" value="{{query}}" placeholder="Search tasks">
  <button type="submit">Search</button>
</form>

<form class="inline" action="/export_ics" method="get">
  <button type="submit">Export tasks to calendar (.ics)</button>
</form>

<form action="/bulk_action" method="post" enctype="multipart/form-data" id="bulkForm">
  <table>
    <tr>
      <th>Delete</th><th>Remove image</th><th>Toggle</th>
      <th>ID</th><th>Title</th><th>Due date</th><th>Due time</th>
      <th>Image</th><th>Done</th><th></th>
    </tr>
{{rows}}
  </table>
  <div class="actions">
    <button type="submit" name="action" value="{{action_delete}}">Delete task</button>
    <button type="submit" name="action" value="{{action_remove_image}}">Remove task image</button>
    <button type="submit" name="action" value="{{action_toggle}}">Toggle complete/incomplete</button>
  </div>
</form>

<fieldset>
<legend>{{form_title}}</legend>
<form action="{{form_action}}" method="post" enctype="multipart/form-data">
  <p><label>Title <input type="text" name="title" value="{{title}}"></label></p>
  <p><label>Due date <input type="date" name="due_date" value="{{due_date}}"></label></p>
  <p><label>Due time <input type="time" name="due_time" value="{{due_time}}"></label></p>
  <p><label><input type="checkbox" name="repeat_daily"{{daily_checked}}> Repeat daily</label>
     <label><input type="checkbox" name="repeat_weekly"{{weekly_checked}}> Repeat weekly</label></p>
  <p><label>Image <input type="file" name="image"></label></p>
  <p><button type="submit">{{form_submit}}</button></p>
</form>
</fieldset>

</body>
</html>
"#;

const ROW: &str = r#"    <tr>
      <td><input type="checkbox" name="delete_ids" value="{{id}}"></td>
      <td><input type="checkbox" name="remove_image_ids" value="{{id}}"></td>
      <td><input type="checkbox" name="toggle_ids" value="{{id}}"></td>
      <td>{{id}}</td>
      <td>{{title}}</td>
      <td>{{due_date}}</td>
      <td>{{due_time}}</td>
      <td>{{image}}</td>
      <td>{{done}}</td>
      <td><a href="/edit/{{id}}">Edit</a></td>
    </tr>
"#;

/// Renders the home page: the task table plus either an empty add form or
/// the edit form pre-filled with `task_to_edit`.
pub fn home(tasks: &[Task], query: &str, task_to_edit: Option<&Task>) -> String {
    let rows: String = tasks.iter().map(row).collect();

    let (form_title, form_action, form_submit) = match task_to_edit {
        Some(task) => ("Edit task".to_string(), format!("/update/{}", task.id), "Update task"),
        None => ("Add task".to_string(), "/add".to_string(), "Add task"),
    };
    let blank = Task::new(0, "", "", "", "");
    let form_task = task_to_edit.unwrap_or(&blank);

    PAGE.replace("{{action_delete}}", ACTION_DELETE)
        .replace("{{action_remove_image}}", ACTION_REMOVE_IMAGE)
        .replace("{{action_toggle}}", ACTION_TOGGLE)
        .replace("{{form_title}}", &form_title)
        .replace("{{form_action}}", &form_action)
        .replace("{{form_submit}}", form_submit)
        .replace("{{title}}", &escape_html(&form_task.title))
        .replace("{{due_date}}", &escape_html(&form_task.due_date))
        .replace("{{due_time}}", &escape_html(&form_task.due_time))
        .replace("{{daily_checked}}", checked(form_task.repeat == Repeat::Daily))
        .replace("{{weekly_checked}}", checked(form_task.repeat == Repeat::Weekly))
        .replace("{{query}}", &escape_html(query))
        .replace("{{rows}}", &rows)
}

fn row(task: &Task) -> String {
    let image = if task.image.is_empty() {
        String::new()
    } else {
        format!(r#"<img class="thumb" src="/uploads/{0}" alt="{0}">"#, escape_html(&task.image))
    };
    ROW.replace("{{id}}", &task.id.to_string())
        .replace("{{title}}", &escape_html(&task.title))
        .replace("{{due_date}}", &escape_html(&task.due_date))
        .replace("{{due_time}}", &escape_html(&task.due_time))
        .replace("{{image}}", &image)
        .replace("{{done}}", if task.done { "✔" } else { "✗" })
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_user_text() {
        let task = Task::new(1, "<script>alert(1)</script>", "2025-01-01", "09:00", "");
        let page = home(&[task], "", None);
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_edit_form_prefilled() {
        let task = Task::new(7, "Gym", "2025-01-01", "09:00", "").with_repeat(Repeat::Daily);
        let page = home(&[task.clone()], "", Some(&task));
        assert!(page.contains("/update/7"));
        assert!(page.contains(r#"value="Gym""#));
        assert!(page.contains(r#"name="repeat_daily" checked"#));
        assert!(page.contains(r#"name="repeat_weekly">"#));
    }

    #[test]
    fn test_row_links_image_and_edit() {
        let mut task = Task::new(3, "Shop", "2025-02-02", "", "");
        task.image = "list.png".to_string();
        let page = home(&[task], "", None);
        assert!(page.contains("/uploads/list.png"));
        assert!(page.contains("/edit/3"));
    }
}
