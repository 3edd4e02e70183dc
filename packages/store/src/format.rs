//! Display strings for cards and badges.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::models::{ProjectStatus, SkillLevel};

/// Relative time for the messages list: today's messages show the clock time,
/// yesterday's say "Yesterday", older ones show the date. Clock times and
/// dates are in the device's local time zone.
pub fn format_timestamp(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_timestamp_in(ts, now, &Local)
}

/// [`format_timestamp`] with an explicit time zone for the displayed time.
/// The "Yesterday" cut-off only depends on elapsed time.
pub fn format_timestamp_in<Tz>(ts: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let hours = (now - ts).num_hours();
    let local = ts.with_timezone(tz);
    if hours < 24 {
        local.format("%H:%M").to_string()
    } else if hours < 48 {
        "Yesterday".to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

/// "Jun 28, 2023".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_budget(budget: u32) -> String {
    format!("${budget}")
}

/// The first `limit` skills and how many were left out.
pub fn skill_preview(skills: &[String], limit: usize) -> (&[String], usize) {
    let shown = &skills[..skills.len().min(limit)];
    (shown, skills.len() - shown.len())
}

/// Avatar placeholder text.
pub fn initials(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Open => "Open",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        let now = utc(2023, 7, 15, 12, 0);
        assert_eq!(format_timestamp_in(utc(2023, 7, 15, 10, 30), now, &Utc), "10:30");
        assert_eq!(format_timestamp_in(utc(2023, 7, 14, 12, 30), now, &Utc), "12:30");
        assert_eq!(format_timestamp_in(utc(2023, 7, 14, 9, 15), now, &Utc), "Yesterday");
        assert_eq!(format_timestamp_in(utc(2023, 7, 13, 12, 0), now, &Utc), "Jul 13");
        assert_eq!(format_timestamp_in(utc(2023, 7, 3, 8, 0), now, &Utc), "Jul 3");
    }

    #[test]
    fn test_format_timestamp_uses_local_zone() {
        let now = utc(2023, 7, 15, 12, 0);
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_timestamp_in(utc(2023, 7, 15, 10, 30), now, &tokyo), "19:30");
        // 20:00 UTC on the 12th is already the 13th in Tokyo.
        assert_eq!(format_timestamp_in(utc(2023, 7, 12, 20, 0), now, &tokyo), "Jul 13");

        let ts = utc(2023, 7, 15, 10, 30);
        assert_eq!(
            format_timestamp(ts, now),
            ts.with_timezone(&Local).format("%H:%M").to_string()
        );
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 8).unwrap();
        assert_eq!(format_date(date), "Jun 8, 2023");
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(1500), "$1500");
        assert_eq!(format_budget(0), "$0");
    }

    #[test]
    fn test_skill_preview() {
        let skills: Vec<String> = ["React", "CSS", "Figma", "Jest", "Vite"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (shown, more) = skill_preview(&skills, 3);
        assert_eq!(shown, ["React", "CSS", "Figma"]);
        assert_eq!(more, 2);

        let (shown, more) = skill_preview(&skills[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("sarah Johnson"), "S");
        assert_eq!(initials("  "), "?");
        assert_eq!(initials("élodie"), "É");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(SkillLevel::Expert.label(), "Expert");
    }
}
