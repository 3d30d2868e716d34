use askama::Template;

use crate::data;
use crate::models::{
    Event, Faq, ParticipationTier, PaymentMethod, ProviderUser, Society,
    TeamMember,
};
use crate::services::{
    CategoryFilter, EventFilter, KindFilter, StarField, TimeLeft, Wizard,
};

/// Layout context shared by every full page: navbar state and the star
/// background.
pub struct Shell {
    pub user: Option<ProviderUser>,
    pub stars: StarField,
}

impl Shell {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub countdown: TimeLeft,
    pub dates: &'static str,
    pub venue: &'static str,
    pub societies: Vec<Society>,
}

#[derive(Template)]
#[template(path = "partials/countdown.html")]
pub struct CountdownTemplate {
    pub countdown: TimeLeft,
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate<'a> {
    pub shell: Shell,
    pub filter: EventFilter,
    pub categories: Vec<CategoryFilter>,
    pub kinds: [KindFilter; 3],
    pub events: Vec<&'a Event>,
    pub signed_in: bool,
}

#[derive(Template)]
#[template(path = "partials/event_grid.html")]
pub struct EventGridTemplate<'a> {
    pub events: Vec<&'a Event>,
    pub signed_in: bool,
}

#[derive(Template)]
#[template(path = "team.html")]
pub struct TeamTemplate {
    pub shell: Shell,
    pub senior_coordinators: Vec<TeamMember>,
    pub coordinators: Vec<TeamMember>,
}

#[derive(Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub shell: Shell,
    pub faqs: Vec<Faq>,
}

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SignInTemplate {
    pub shell: Shell,
    pub email: String,
    pub error: Option<String>,
    pub notice: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct MagicLinkTemplate {
    pub shell: Shell,
    pub email: String,
    pub message: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub shell: Shell,
    pub wizard: WizardView,
    pub payment: PaymentDetailsView,
}

#[derive(Template)]
#[template(path = "partials/wizard.html")]
pub struct WizardTemplate {
    pub wizard: WizardView,
    pub payment: PaymentDetailsView,
}

#[derive(Template)]
#[template(path = "partials/payment_details.html")]
pub struct PaymentDetailsTemplate {
    pub payment: PaymentDetailsView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
}

/// Everything the wizard markup needs, copied out of a [`Wizard`] so
/// neither the passwords nor the evidence bytes reach a template.
pub struct WizardView {
    pub step: u8,
    pub error: Option<String>,

    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub mobile: String,

    pub participation_type: String,
    pub accommodation: String,
    pub tshirt_size: String,
    pub roll_number: String,
    pub college: String,

    pub payment_method: String,
    pub evidence_name: Option<String>,
    pub plan_name: String,
}

/// One entry of the progress bar.
pub struct StepMarker {
    pub number: u8,
    pub title: &'static str,
    pub active: bool,
}

impl WizardView {
    const STEPS: [(u8, &'static str); 3] =
        [(1, "Personal"), (2, "Details"), (3, "Payment")];
    const TSHIRT_SIZES: [&'static str; 5] = ["S", "M", "L", "XL", "XXL"];

    pub fn new(wizard: &Wizard) -> Self {
        let form = wizard.form();

        Self {
            step: wizard.step(),
            error: wizard.error().map(str::to_string),
            full_name: form.full_name.clone(),
            gender: form.gender.clone(),
            email: form.email.clone(),
            mobile: form.mobile.clone(),
            participation_type: form.participation_type.clone(),
            accommodation: form.accommodation.clone(),
            tshirt_size: form.tshirt_size.clone(),
            roll_number: form.roll_number.clone(),
            college: form.college.clone(),
            payment_method: form.payment_method.clone(),
            evidence_name: form
                .evidence
                .as_ref()
                .map(|f| f.file_name.clone()),
            plan_name: ParticipationTier::plan_name_for(
                &form.participation_type,
            ),
        }
    }

    pub fn steps(&self) -> Vec<StepMarker> {
        Self::STEPS
            .into_iter()
            .map(|(number, title)| StepMarker {
                number,
                title,
                active: number <= self.step,
            })
            .collect()
    }

    pub fn tshirt_sizes(&self) -> [&'static str; 5] {
        Self::TSHIRT_SIZES
    }
}

/// Instructions for the chosen payment method.
pub struct PaymentDetailsView {
    pub method: Option<PaymentMethod>,
    pub amount: u32,
    pub upi_id: &'static str,
    pub qr_url: String,
    pub bank_name: &'static str,
    pub account_name: &'static str,
    pub account_no: &'static str,
    pub ifsc: &'static str,
}

impl PaymentDetailsView {
    pub fn new(method: &str, participation_type: &str) -> Self {
        let amount = ParticipationTier::amount_for(participation_type);

        Self {
            method: method.parse().ok(),
            amount,
            upi_id: data::UPI_ID,
            qr_url: data::upi_qr_url(amount),
            bank_name: data::BANK_NAME,
            account_name: data::BANK_ACCOUNT_NAME,
            account_no: data::BANK_ACCOUNT_NO,
            ifsc: data::BANK_IFSC,
        }
    }

    pub fn is_upi(&self) -> bool {
        self.method == Some(PaymentMethod::Upi)
    }

    pub fn is_bank_transfer(&self) -> bool {
        self.method == Some(PaymentMethod::BankTransfer)
    }
}
