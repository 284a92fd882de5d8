//! Plain-text presentation of screen state for the terminal front end.

use std::fmt::Write as _;

use jiff::Timestamp;
use jiff::tz::TimeZone;
use zenflow_core::models::{Record, StressLevel, Tip, User};
use zenflow_core::stats::DashboardStats;

use crate::controllers::EditDraft;
use crate::error::AppError;

pub fn greeting(user: &User) -> String {
    format!("Hello, {}! How are you feeling today?", user.first_name())
}

pub fn level_badge(level: StressLevel) -> String {
    format!("{} {} ({})", level.emoji(), level.value(), level.label())
}

/// The five level buttons, with the current selection marked.
pub fn level_picker(selected: Option<StressLevel>) -> String {
    let mut out = String::new();
    for level in StressLevel::ALL {
        let mark = if selected == Some(level) { '>' } else { ' ' };
        let _ = writeln!(out, "{mark} {}", level_badge(level));
    }
    out
}

pub fn format_timestamp(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime("%d/%m/%Y %H:%M").to_string()
}

pub fn record_item(record: &Record, tz: &TimeZone) -> String {
    let level = match record.level() {
        Some(level) => level_badge(level),
        None => format!("? {}", record.stress_level),
    };
    let mut line = format!(
        "#{} {}  {}",
        record.id,
        format_timestamp(record.recorded_at, tz),
        level
    );
    if let Some(name) = &record.owner_name {
        let _ = write!(line, "  [{name}]");
    }
    if let Some(notes) = &record.notes {
        let _ = write!(line, "\n    {notes}");
    }
    line
}

pub fn history(records: &[Record], tz: &TimeZone) -> String {
    if records.is_empty() {
        return "No records yet.\n".to_string();
    }
    records
        .iter()
        .map(|r| record_item(r, tz) + "\n")
        .collect()
}

pub fn draft(draft: &EditDraft) -> String {
    let notes = if draft.notes.trim().is_empty() {
        "(no notes)"
    } else {
        draft.notes.as_str()
    };
    format!(
        "Editing #{}: {}\n    {notes}",
        draft.record_id,
        level_badge(draft.level)
    )
}

pub fn stat_card(title: &str, value: &str) -> String {
    format!("{title:<22}{value}")
}

pub fn dashboard(stats: &DashboardStats) -> String {
    let mode = stats
        .mode
        .and_then(|m| StressLevel::new(m).ok())
        .map_or_else(|| "-".to_string(), level_badge);
    let mut out = String::new();
    let _ = writeln!(out, "{}", stat_card("Average level", &format!("{:.2}", stats.mean)));
    let _ = writeln!(out, "{}", stat_card("Most frequent", &mode));
    let _ = writeln!(
        out,
        "{}",
        stat_card(
            "High stress",
            &format!("{:.1}%", stats.high_stress_percentage)
        )
    );
    let _ = writeln!(out, "{}", stat_card("Total records", &stats.total.to_string()));
    let _ = writeln!(out);
    for (level, count) in StressLevel::ALL.iter().zip(stats.distribution) {
        let _ = writeln!(
            out,
            "{} {:<10}{:>4} {}",
            level.emoji(),
            level.label(),
            count,
            "#".repeat(count.min(40))
        );
    }
    let _ = writeln!(out);
    let noun = if stats.total == 1 { "record" } else { "records" };
    let _ = writeln!(out, "Based on {} {noun}", stats.total);
    out
}

pub fn tips(tips: &[Tip]) -> String {
    let mut out = String::new();
    for tip in tips {
        let _ = writeln!(out, "{}. {}\n   {}\n", tip.id, tip.title, tip.description);
    }
    out
}

/// A blocking alert: title line, then the message.
pub fn dialog(error: &AppError) -> String {
    format!("{}\n{error}", error.title())
}
