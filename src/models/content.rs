use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
    pub role: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Accent {
    Red,
    Blue,
    Yellow,
}

impl Accent {
    pub fn gradient(&self) -> &'static str {
        match self {
            Self::Red => "from-red-900",
            Self::Blue => "from-blue-900",
            Self::Yellow => "from-yellow-900",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Society {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Accent,
}
