use serde::Serialize;

use super::{Category, EventStatus, TeamSize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub date: &'static str,
    pub entry_fee: &'static str,
    pub team_size: TeamSize,
    pub venue: &'static str,
    pub status: EventStatus,
    pub on_campus: bool,
}

impl Event {
    /// Case-insensitive substring match on title or subtitle.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.subtitle.to_lowercase().contains(&query)
    }
}
