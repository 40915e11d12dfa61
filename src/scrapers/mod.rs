pub mod listing;
pub mod request;
pub mod traits;
pub mod types;
pub mod weekly_mansion;

pub use traits::ScraperTrait;
pub use types::SearchParams;
pub use weekly_mansion::WeeklyMansionScraper;
