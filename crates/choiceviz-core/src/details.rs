//! What to do when a game card is selected.

use crate::bundle::GameRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameDetails {
    /// Open this image URL.
    Image(String),
    /// Nothing to open; show a notice naming the game instead.
    NoImage { title: String },
}

impl GameDetails {
    pub fn for_record(record: &GameRecord) -> Self {
        match record.image_url() {
            Some(url) => GameDetails::Image(url.to_string()),
            None => GameDetails::NoImage {
                title: record.title.clone(),
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            GameDetails::Image(url) => url.clone(),
            GameDetails::NoImage { title } => {
                format!("{title}\n\nNo image available for this game")
            }
        }
    }
}
