//! iCalendar document builder.
//!
//! Projects the task collection into a plain-text VCALENDAR document, one
//! VEVENT per exported task. Only tasks carrying both a title and a due
//! date are exported; date-times are emitted as floating local values (no
//! timezone), which is what single-user calendar imports expect.

use crate::libs::recurrence::{DATE_FORMAT, TIME_FORMAT};
use crate::libs::task::Task;
use chrono::{NaiveDate, NaiveTime, Utc};

/// Download name offered for the exported document.
pub const CALENDAR_FILE_NAME: &str = "tasks.ics";
/// Media type of the exported document.
pub const CALENDAR_MEDIA_TYPE: &str = "text/calendar; charset=utf-8";

const PRODID: &str = "-//taskdeck//taskdeck//EN";
const EVENT_DESCRIPTION: &str = "Exported from Task Tracker";

/// Builds the full calendar document for the given tasks.
///
/// Tasks without a title or without a due date are skipped, as are tasks
/// whose due date does not parse. An unparseable due time degrades to
/// midnight rather than dropping the event.
pub fn calendar(tasks: &[Task]) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", PRODID));

    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    for task in tasks {
        if task.title.is_empty() || task.due_date.is_empty() {
            continue;
        }
        let date = match NaiveDate::parse_from_str(&task.due_date, DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => continue,
        };
        let time = NaiveTime::parse_from_str(&task.due_time, TIME_FORMAT).unwrap_or_else(|_| NaiveTime::from_hms_opt(0, 0, 0).unwrap());

        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}@taskdeck", task.id));
        push_line(&mut out, &format!("DTSTAMP:{}", stamp));
        push_line(&mut out, &format!("DTSTART:{}T{}", date.format("%Y%m%d"), time.format("%H%M%S")));
        push_line(&mut out, &format!("SUMMARY:{}", escape_text(&task.title)));
        push_line(&mut out, &format!("DESCRIPTION:{}", escape_text(EVENT_DESCRIPTION)));
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

// RFC 5545 content lines end with CRLF.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

// TEXT value escaping per RFC 5545 §3.3.11.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
