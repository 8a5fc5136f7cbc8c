mod parser;
pub mod scraper;
pub mod types;
pub mod urls;

pub use self::scraper::WebScraper;

pub(crate) const BASE_URL: &str = "http://www.wqxr.org";

pub const DEFAULT_STATION: &str = "wqxr";
