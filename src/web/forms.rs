use serde::Deserialize;

use crate::services::{DetailsFields, PersonalFields};

#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignInQuery {
    pub registered: Option<String>,
}

#[derive(Deserialize)]
pub struct MagicLinkForm {
    pub email: String,
}

#[derive(Deserialize)]
pub struct EventsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize)]
pub struct PaymentDetailsQuery {
    #[serde(alias = "payment_method")]
    pub method: Option<String>,
}

/// One wizard step. Only the fields of the step being shown are sent; the
/// rest stay `None`.
#[derive(Deserialize, Default)]
pub struct StepForm {
    pub action: Option<String>,

    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,

    pub participation_type: Option<String>,
    pub accommodation: Option<String>,
    pub tshirt_size: Option<String>,
    pub roll_number: Option<String>,
    pub college: Option<String>,
}

impl StepForm {
    pub fn is_back(&self) -> bool {
        self.action.as_deref() == Some("back")
    }

    /// Step 1 input, or `None` when the request carried none of it.
    pub fn personal(&self) -> Option<PersonalFields> {
        let sent = [
            &self.full_name,
            &self.gender,
            &self.email,
            &self.mobile,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_some());
        if !sent {
            return None;
        }

        Some(PersonalFields {
            full_name: self.full_name.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            mobile: self.mobile.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            confirm_password: self.confirm_password.clone().unwrap_or_default(),
        })
    }

    /// Step 2 input, or `None` when the request carried none of it.
    pub fn details(&self) -> Option<DetailsFields> {
        let sent = [
            &self.participation_type,
            &self.accommodation,
            &self.tshirt_size,
            &self.roll_number,
            &self.college,
        ]
        .iter()
        .any(|field| field.is_some());
        if !sent {
            return None;
        }

        Some(DetailsFields {
            participation_type: self
                .participation_type
                .clone()
                .unwrap_or_default(),
            accommodation: self.accommodation.clone().unwrap_or_default(),
            tshirt_size: self.tshirt_size.clone().unwrap_or_default(),
            roll_number: self.roll_number.clone().unwrap_or_default(),
            college: self.college.clone().unwrap_or_default(),
        })
    }
}
