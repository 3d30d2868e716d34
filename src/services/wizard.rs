//! Three-step registration wizard.
//!
//! The wizard owns a single [`RegistrationForm`] and a [`Stage`]. Later
//! stages carry the validated records of the earlier ones, so the payment
//! step can only exist once personal and participation details have
//! passed validation.

use crate::common::WizardError;
use crate::models::{
    EvidenceFile, ParticipationInfo, PersonalInfo, RegistrationForm,
    Submission,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Personal,
    Details(PersonalInfo),
    Payment(PersonalInfo, ParticipationInfo),
}

impl Stage {
    /// 1-based step number shown in the progress bar.
    pub fn number(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Details(_) => 2,
            Self::Payment(..) => 3,
        }
    }
}

/// Step 1 input as submitted by the browser.
#[derive(Debug, Default, Clone)]
pub struct PersonalFields {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

/// Step 2 input as submitted by the browser.
#[derive(Debug, Default, Clone)]
pub struct DetailsFields {
    pub participation_type: String,
    pub accommodation: String,
    pub tshirt_size: String,
    pub roll_number: String,
    pub college: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    form: RegistrationForm,
    stage: Stage,
    error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::default(),
            stage: Stage::Personal,
            error: None,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn step(&self) -> u8 {
        self.stage.number()
    }

    /// Message from the last failed transition or submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn update_personal(&mut self, fields: PersonalFields) {
        let form = &mut self.form;
        form.full_name = fields.full_name;
        form.gender = fields.gender;
        form.email = fields.email;
        form.mobile = fields.mobile;
        form.password = fields.password;
        form.confirm_password = fields.confirm_password;
        self.error = None;
    }

    pub fn update_details(&mut self, fields: DetailsFields) {
        let form = &mut self.form;
        form.participation_type = fields.participation_type;
        form.accommodation = fields.accommodation;
        form.tshirt_size = fields.tshirt_size;
        form.roll_number = fields.roll_number;
        form.college = fields.college;
        self.error = None;
    }

    pub fn update_payment_method(&mut self, method: String) {
        self.form.payment_method = method;
        self.error = None;
    }

    /// Attach a new evidence file. Keeps the previous one when `file` is
    /// `None`.
    pub fn attach_evidence(&mut self, file: Option<EvidenceFile>) {
        if let Some(file) = file {
            self.form.evidence = Some(file);
            self.error = None;
        }
    }

    /// Move forward one step if the current step validates. On failure the
    /// stage is left unchanged and the error is recorded.
    pub fn advance(&mut self) -> Result<u8, WizardError> {
        let next = match &self.stage {
            Stage::Personal => {
                validate_personal(&self.form).map(Stage::Details)
            }
            Stage::Details(personal) => validate_participation(&self.form)
                .map(|participation| {
                    Stage::Payment(personal.clone(), participation)
                }),
            Stage::Payment(..) => Err(WizardError::NotAtPayment),
        };

        match next {
            Ok(stage) => {
                self.stage = stage;
                self.error = None;
                Ok(self.step())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Step back. Always allowed past the first step; keeps all entered data.
    pub fn back(&mut self) -> u8 {
        self.error = None;
        self.stage = match std::mem::replace(&mut self.stage, Stage::Personal) {
            Stage::Personal | Stage::Details(_) => Stage::Personal,
            Stage::Payment(personal, _) => Stage::Details(personal),
        };
        self.step()
    }

    /// Everything needed for the provider calls, validated locally.
    pub fn submission(&mut self) -> Result<Submission, WizardError> {
        let result = match &self.stage {
            Stage::Payment(personal, participation) => {
                if self.form.payment_method.is_empty() {
                    Err(WizardError::MissingPaymentMethod)
                } else if let Some(evidence) = &self.form.evidence {
                    Ok(Submission {
                        personal: personal.clone(),
                        participation: participation.clone(),
                        payment_method: self.form.payment_method.clone(),
                        evidence: evidence.clone(),
                    })
                } else {
                    Err(WizardError::MissingEvidence)
                }
            }
            _ => Err(WizardError::NotAtPayment),
        };

        match &result {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }
}

fn filled(values: &[&str]) -> bool {
    values.iter().all(|v| !v.is_empty())
}

fn validate_personal(
    form: &RegistrationForm,
) -> Result<PersonalInfo, WizardError> {
    if !filled(&[
        form.full_name.as_str(),
        form.gender.as_str(),
        form.email.as_str(),
        form.mobile.as_str(),
        form.password.as_str(),
        form.confirm_password.as_str(),
    ]) {
        return Err(WizardError::MissingFields);
    }

    if form.password != form.confirm_password {
        return Err(WizardError::PasswordMismatch);
    }

    Ok(PersonalInfo {
        full_name: form.full_name.clone(),
        gender: form.gender.clone(),
        email: form.email.clone(),
        mobile: form.mobile.clone(),
        password: form.password.clone(),
    })
}

fn validate_participation(
    form: &RegistrationForm,
) -> Result<ParticipationInfo, WizardError> {
    if !filled(&[
        form.participation_type.as_str(),
        form.accommodation.as_str(),
        form.tshirt_size.as_str(),
        form.roll_number.as_str(),
        form.college.as_str(),
    ]) {
        return Err(WizardError::MissingFields);
    }

    Ok(ParticipationInfo {
        participation_type: form.participation_type.clone(),
        accommodation: form.accommodation.clone(),
        tshirt_size: form.tshirt_size.clone(),
        roll_number: form.roll_number.clone(),
        college: form.college.clone(),
    })
}
