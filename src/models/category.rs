use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    ActingAndDrama,
    FineArts,
    MusicAndDance,
    LiteratureAndDebate,
    SpecialEvents,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::ActingAndDrama,
        Self::FineArts,
        Self::MusicAndDance,
        Self::LiteratureAndDebate,
        Self::SpecialEvents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActingAndDrama => "Acting and Drama",
            Self::FineArts => "Fine Arts",
            Self::MusicAndDance => "Music and Dance",
            Self::LiteratureAndDebate => "Literature and Debate",
            Self::SpecialEvents => "Special Events",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("invalid category: {}", s))
    }
}
