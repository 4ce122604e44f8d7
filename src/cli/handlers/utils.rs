use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// "June 15, 2023"
pub fn format_day(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "January 2023"
pub fn format_month(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

pub fn format_moment(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Glyph for a timeline icon. Unknown icons get the heart.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "star" => "★",
        "ring" => "◎",
        "flag" => "⚑",
        "calendar" => "▦",
        _ => "♥",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KNOWN_ICONS, timestamp};

    #[test]
    fn test_date_formats() {
        let date = timestamp::parse("2023-06-05").unwrap();
        assert_eq!(format_day(&date), "June 5, 2023");
        assert_eq!(format_month(&date), "June 2023");
        assert_eq!(format_moment(&date), "2023-06-05 00:00");
    }

    #[test]
    fn test_unknown_icon_falls_back_to_heart() {
        assert_eq!(icon_glyph("unicorn"), icon_glyph("heart"));
        assert_ne!(icon_glyph("star"), icon_glyph("heart"));
    }

    #[test]
    fn test_known_icons_have_glyphs() {
        for icon in KNOWN_ICONS.iter().filter(|i| **i != "heart") {
            assert_ne!(icon_glyph(icon), "♥", "{icon} should have its own glyph");
        }
    }
}
