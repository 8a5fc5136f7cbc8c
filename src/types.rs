use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Hours added to the 12-hour clock value shown on the playlist page.
///
/// WQXR displays Eastern US time; the defaults (+6 for AM, +18 for PM)
/// shift it to the Central European local time the record is printed in.
/// This is a fixed shift, not a standard AM/PM-to-24h conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockOffset {
    pub am: u32,
    pub pm: u32,
}

impl Default for ClockOffset {
    fn default() -> Self {
        Self { am: 6, pm: 18 }
    }
}

/// One playlist record: the piece on air at the queried moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub hour: u32,
    pub minute: u32,
    pub composer: String,
    pub title: String,
    pub performers: Vec<String>,
    pub duration_min: u32,
    pub duration_sec: u32,
}

impl PlaylistEntry {
    pub fn performer_line(&self) -> String {
        self.performers.join(", ")
    }
}

impl Display for PlaylistEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Since {}:{:02} is playing:", self.hour, self.minute)?;
        writeln!(f, "{} - {}", self.composer, self.title)?;
        writeln!(f, "{}", self.performer_line())?;
        writeln!(
            f,
            "Duration: {}:{:02} min.",
            self.duration_min, self.duration_sec
        )
    }
}
