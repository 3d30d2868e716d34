use serde::{Deserialize, Serialize};

const INDIVIDUAL: &str = "Individual";

/// Team size as printed on an event card.
///
/// Display only; nothing checks registrations against it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TeamSize {
    Individual,
    Range { min: u16, max: u16 },
}

impl TeamSize {
    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Individual)
    }
}

impl std::fmt::Display for TeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "{}", INDIVIDUAL),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

impl std::str::FromStr for TeamSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == INDIVIDUAL {
            return Ok(Self::Individual);
        }

        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid team size: {}", s))?;
        let min = min
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("invalid team size: {}", s))?;
        let max = max
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("invalid team size: {}", s))?;

        if min == 0 || min > max {
            return Err(format!("invalid team size: {}", s));
        }

        Ok(Self::Range { min, max })
    }
}
