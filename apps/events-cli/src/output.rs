//! Plain-text rendering of events for the terminal

use events_client::Event;
use std::collections::BTreeMap;
use std::fmt::Write;

/// One line per event: `<id>  <title> | <date> <time> | <location> | <category> | <spots>`
pub fn event_line(event: &Event) -> String {
    format!(
        "{}  {} | {} {} | {} | {} | {}/{} spots left",
        event.id,
        event.title,
        event.date,
        event.time,
        event.location,
        event.category,
        event.spots_left(),
        event.max_participants
    )
}

pub fn event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events yet.".to_string();
    }
    events.iter().map(event_line).collect::<Vec<_>>().join("\n")
}

/// Location headings with their events indented underneath.
pub fn grouped_list(groups: &BTreeMap<String, Vec<Event>>) -> String {
    if groups.is_empty() {
        return "No events yet.".to_string();
    }

    let mut out = String::new();
    for (location, events) in groups {
        let _ = writeln!(out, "{location} ({})", events.len());
        for event in events {
            let _ = writeln!(out, "  {}", event_line(event));
        }
    }
    out.trim_end().to_string()
}

/// Full detail view of a single event.
pub fn event_detail(event: &Event) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", event.title);
    let _ = writeln!(out, "  id:          {}", event.id);
    let _ = writeln!(out, "  category:    {}", event.category);
    let _ = writeln!(out, "  when:        {} {}", event.date, event.time);
    let _ = writeln!(out, "  where:       {}", event.location);
    let _ = writeln!(
        out,
        "  capacity:    {} ({} registered)",
        event.max_participants, event.curr_participants
    );
    if let Some(url) = &event.image_url {
        let _ = writeln!(out, "  image:       {url}");
    }
    let _ = write!(out, "\n{}", event.description);
    out
}
