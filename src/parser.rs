use crate::types::{ClockOffset, PlaylistEntry};

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to parse broadcast time: {0}")]
    TimeParse(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Failed to parse duration: {0}")]
    DurationParse(String),
}

/// Extracts the currently playing piece from a daily playlist page.
///
/// Succeeds with a complete record or fails with an error naming the
/// first field that could not be extracted; never returns a partially
/// filled record.
pub fn parse_playlist_entry(html: &str, offset: ClockOffset) -> Result<PlaylistEntry, ParseError> {
    let document = Html::parse_document(html);

    // The broadcast time lives in its own div.time, a sibling of the
    // piece-info block rather than a child of it, so it has to be
    // located at document level.
    let time_selector = Selector::parse("div.time").unwrap();
    let time_text = document
        .select(&time_selector)
        .next()
        .map(element_text)
        .ok_or_else(|| ParseError::TimeParse("time element not found".to_string()))?;
    let (hour, minute) = parse_broadcast_time(&time_text, offset)?;

    let piece_selector = Selector::parse("div.piece-info").unwrap();
    let piece = document
        .select(&piece_selector)
        .next()
        .ok_or_else(|| ParseError::MissingField("piece-info container".to_string()))?;

    let composer = required_text(piece, "a.playlist-item__composer", "composer")?;
    let title = required_text(piece, "li.playlist-item__title", "title")?;

    let musicians_selector = Selector::parse("li.playlist-item__musicians").unwrap();
    let performers: Vec<String> = piece.select(&musicians_selector).map(element_text).collect();

    // The duration <li> carries no class of its own; it is always the
    // last list item inside the container.
    let li_selector = Selector::parse("li").unwrap();
    let duration_text = piece
        .select(&li_selector)
        .last()
        .map(element_text)
        .ok_or_else(|| {
            ParseError::DurationParse("no list items in piece-info".to_string())
        })?;
    let (duration_min, duration_sec) = parse_duration(&duration_text)?;

    Ok(PlaylistEntry {
        hour,
        minute,
        composer,
        title,
        performers,
        duration_min,
        duration_sec,
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn required_text(
    scope: ElementRef,
    selector: &str,
    field: &str,
) -> Result<String, ParseError> {
    let selector = Selector::parse(selector).unwrap();
    let text = scope
        .select(&selector)
        .next()
        .map(element_text)
        .ok_or_else(|| ParseError::MissingField(field.to_string()))?;
    if text.is_empty() {
        return Err(ParseError::MissingField(field.to_string()));
    }
    Ok(text)
}

/// Parses "H:MM AM|PM" and applies the configured offset to the hour.
///
/// The parsed 12-hour value is not range-checked; a malformed hour on
/// the page carries through into an out-of-range result.
fn parse_broadcast_time(text: &str, offset: ClockOffset) -> Result<(u32, u32), ParseError> {
    let time_pattern = Regex::new(r"^(\d{1,2}):(\d{2})\s+(AM|PM)$").unwrap();
    let caps = time_pattern
        .captures(text.trim())
        .ok_or_else(|| ParseError::TimeParse(format!("unexpected time text: '{}'", text)))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| ParseError::TimeParse(format!("invalid hour: {}", &caps[1])))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| ParseError::TimeParse(format!("invalid minute: {}", &caps[2])))?;

    let hour = match &caps[3] {
        "AM" => hour + offset.am,
        _ => hour + offset.pm,
    };

    Ok((hour, minute))
}

/// Parses the trailing "N min M s" fragment.
fn parse_duration(text: &str) -> Result<(u32, u32), ParseError> {
    let duration_pattern = Regex::new(r"^(\d+) min (\d+) s$").unwrap();
    let caps = duration_pattern
        .captures(text.trim())
        .ok_or_else(|| ParseError::DurationParse(format!("unexpected duration text: '{}'", text)))?;

    let minutes: u32 = caps[1]
        .parse()
        .map_err(|_| ParseError::DurationParse(format!("invalid minutes: {}", &caps[1])))?;
    let seconds: u32 = caps[2]
        .parse()
        .map_err(|_| ParseError::DurationParse(format!("invalid seconds: {}", &caps[2])))?;

    Ok((minutes, seconds))
}
