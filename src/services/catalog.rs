use crate::models::{Category, Event};

pub const ALL_CATEGORIES: &str = "All categories";

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }

    /// Every selectable option, sentinel first.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => event.category == *category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum KindFilter {
    #[default]
    AllTypes,
    Solo,
    Group,
}

impl KindFilter {
    pub const ALL: [KindFilter; 3] = [Self::AllTypes, Self::Solo, Self::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllTypes => "All Types",
            Self::Solo => "Solo",
            Self::Group => "Group",
        }
    }

    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::AllTypes => true,
            Self::Solo => event.team_size.is_individual(),
            Self::Group => !event.team_size.is_individual(),
        }
    }
}

impl std::str::FromStr for KindFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("invalid event type: {}", s))
    }
}

/// The three independent catalog filters. An event is shown only when it
/// passes all of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventFilter {
    pub category: CategoryFilter,
    pub query: String,
    pub kind: KindFilter,
}

impl EventFilter {
    /// Build a filter from raw request values; anything unrecognised falls
    /// back to its default.
    pub fn from_params(
        category: Option<&str>,
        query: Option<&str>,
        kind: Option<&str>,
    ) -> Self {
        Self {
            category: category
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            query: query.unwrap_or_default().to_string(),
            kind: kind.and_then(|k| k.parse().ok()).unwrap_or_default(),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(event)
            && event.matches_query(&self.query)
            && self.kind.matches(event)
    }

    /// Matching events in catalog order.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
