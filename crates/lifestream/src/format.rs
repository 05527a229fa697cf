use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use colored::{Color, Colorize};
use serde_json::Value;

use lifestream_core::Entry;

const TAG_COLORS: [Color; 8] = [
    Color::BrightBlack,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Entries sharing one calendar date, in the order the server returned them.
#[derive(Debug, PartialEq, Eq)]
pub struct DayGroup {
    pub date: String,
    pub lines: Vec<String>,
}

/// Colour for a tag: the sum of its bytes picks one of [`TAG_COLORS`].
fn tag_color(tag: &str) -> Color {
    let sum: usize = tag.bytes().map(usize::from).sum();
    TAG_COLORS[sum % TAG_COLORS.len()]
}

/// Bold tag in a colour fixed by the tag text, so a tag keeps its colour across runs.
pub fn colorize_tag(tag: &str) -> String {
    tag.color(tag_color(tag)).bold().to_string()
}

/// `[<id> ][HH:MM:SS][ tags]` then the text, on its own line when it spans several.
pub fn format_entry_line<Tz: TimeZone>(entry: &Entry, show_id: bool, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let created = local_time(entry, tz);

    let mut line = String::new();
    if show_id {
        line.push_str(&entry.id);
        line.push(' ');
    }
    line.push_str(&format!("[{}]", created.format("%H:%M:%S")));

    if !entry.tags.is_empty() {
        let tags: Vec<String> = entry.tags.iter().map(|t| colorize_tag(t)).collect();
        line.push(' ');
        line.push_str(&tags.join(", "));
    }

    let separator = if entry.raw.contains('\n') { '\n' } else { ' ' };
    line.push(separator);
    line.push_str(&entry.raw);
    line
}

pub fn group_entries_by_day<Tz: TimeZone>(entries: &[Entry], show_id: bool, tz: &Tz) -> Vec<DayGroup>
where
    Tz::Offset: Display,
{
    let mut groups: Vec<DayGroup> = Vec::new();
    for entry in entries {
        let date = local_time(entry, tz).format("%Y-%m-%d").to_string();
        let line = format_entry_line(entry, show_id, tz);

        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.lines.push(line),
            None => groups.push(DayGroup {
                date,
                lines: vec![line],
            }),
        }
    }
    groups
}

pub fn print_entries(entries: &[Entry], show_id: bool) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    for group in group_entries_by_day(entries, show_id, &Local) {
        println!("[{}]", group.date.blue().bold());
        for line in group.lines {
            println!("  {}", line);
        }
    }
}

/// Rows of `tag  count`, highest count first.
///
/// Accepts either `{"tag": count, ..}` or `[{"tag": .., "count": ..}, ..]`.
/// Returns `None` for any other shape so the caller can fall back to raw JSON.
pub fn format_tag_stats(stats: &Value) -> Option<Vec<String>> {
    let mut rows: Vec<(String, i64)> = match stats {
        Value::Object(map) => map
            .iter()
            .map(|(tag, count)| count.as_i64().map(|c| (tag.clone(), c)))
            .collect::<Option<_>>()?,
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let tag = item.get("tag")?.as_str()?;
                let count = item.get("count")?.as_i64()?;
                Some((tag.to_string(), count))
            })
            .collect::<Option<_>>()?,
        _ => return None,
    };

    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let width = rows.iter().map(|(tag, _)| tag.chars().count()).max().unwrap_or(0);

    Some(
        rows.into_iter()
            .map(|(tag, count)| {
                let padding = " ".repeat(width - tag.chars().count());
                format!("{}{}  {}", colorize_tag(&tag), padding, count)
            })
            .collect(),
    )
}

fn local_time<Tz: TimeZone>(entry: &Entry, tz: &Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp_millis(entry.created_at)
        .unwrap_or_default()
        .with_timezone(tz)
}
