use serde::{Deserialize, Serialize};

/// Raw wizard input, accumulated field by field across the three steps.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,

    pub participation_type: String,
    pub accommodation: String,
    pub tshirt_size: String,
    pub roll_number: String,
    pub college: String,

    pub payment_method: String,
    pub evidence: Option<EvidenceFile>,
}

/// Uploaded payment screenshot, held in memory until submission.
#[derive(Clone, PartialEq)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl EvidenceFile {
    /// Text after the last `.` of the file name, or the whole name when it
    /// has no dot.
    pub fn extension(&self) -> &str {
        self.file_name.rsplit('.').next().unwrap_or(&self.file_name)
    }
}

impl std::fmt::Debug for EvidenceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationTier {
    AllEvents,
    OnlineOnly,
}

impl ParticipationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllEvents => "all_events",
            Self::OnlineOnly => "online_only",
        }
    }

    pub fn plan_name(&self) -> &'static str {
        match self {
            Self::AllEvents => "All Events (Online + Offline)",
            Self::OnlineOnly => "Online Only",
        }
    }

    /// Fee in rupees.
    pub fn amount(&self) -> u32 {
        match self {
            Self::AllEvents => 999,
            Self::OnlineOnly => 499,
        }
    }

    /// Plan name for any submitted value; unknown values are shown as-is.
    pub fn plan_name_for(value: &str) -> String {
        value
            .parse::<Self>()
            .map(|tier| tier.plan_name().to_string())
            .unwrap_or_else(|_| value.to_string())
    }

    /// Anything other than online-only is charged the full fee.
    pub fn amount_for(value: &str) -> u32 {
        match value.parse::<Self>() {
            Ok(Self::OnlineOnly) => Self::OnlineOnly.amount(),
            _ => Self::AllEvents.amount(),
        }
    }
}

impl std::str::FromStr for ParticipationTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_events" => Ok(Self::AllEvents),
            "online_only" => Ok(Self::OnlineOnly),
            _ => Err(format!("invalid participation type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "upi")]
    Upi,
    #[serde(rename = "card")]
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::BankTransfer => "card",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(Self::Upi),
            "card" => Ok(Self::BankTransfer),
            _ => Err(format!("invalid payment method: {}", s)),
        }
    }
}

/// Step 1 fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Step 2 fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipationInfo {
    pub participation_type: String,
    pub accommodation: String,
    pub tshirt_size: String,
    pub roll_number: String,
    pub college: String,
}

/// Everything needed to create the account, checked locally.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub personal: PersonalInfo,
    pub participation: ParticipationInfo,
    pub payment_method: String,
    pub evidence: EvidenceFile,
}

/// Account metadata stored with the provider; the provider holds no other
/// profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpMetadata {
    pub full_name: String,
    pub gender: String,
    pub mobile: String,
    pub participation_type: String,
    pub accommodation: String,
    pub tshirt_size: String,
    pub roll_number: String,
    pub college: String,
    pub payment_method: String,
    pub payment_screenshot_url: String,
}

impl SignUpMetadata {
    pub fn new(
        submission: &Submission,
        payment_screenshot_url: String,
    ) -> Self {
        let Submission {
            personal,
            participation,
            payment_method,
            ..
        } = submission;

        Self {
            full_name: personal.full_name.clone(),
            gender: personal.gender.clone(),
            mobile: personal.mobile.clone(),
            participation_type: participation.participation_type.clone(),
            accommodation: participation.accommodation.clone(),
            tshirt_size: participation.tshirt_size.clone(),
            roll_number: participation.roll_number.clone(),
            college: participation.college.clone(),
            payment_method: payment_method.clone(),
            payment_screenshot_url,
        }
    }
}
