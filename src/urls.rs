use chrono::{Datelike, NaiveDate};

/// Builds the daily playlist page URL for one station and date, e.g.
/// `http://www.wqxr.org/playlist-daily/2017/oct/13/?scheduleStation=wqxr`.
pub fn playlist_daily_url(date: NaiveDate, station: &str) -> String {
    format!(
        "{}/playlist-daily/{}/{}/{:02}/?scheduleStation={}",
        crate::BASE_URL,
        date.year(),
        date.format("%b").to_string().to_lowercase(),
        date.day(),
        station,
    )
}
