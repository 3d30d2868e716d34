use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::data;
use crate::models::Event;
use crate::services::{Provider, RegistrationService, SessionService};
use crate::web::security::RateLimiter;
use crate::web::wizard_store::{DraftLimits, WizardStore};

/// Drafts untouched for this long are dropped.
const WIZARD_DRAFT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn Provider>,
    pub sessions: Arc<SessionService>,
    pub registrations: Arc<RegistrationService>,
    pub wizards: Arc<WizardStore>,
    pub rate_limiter: Arc<RateLimiter>,
    pub events: Arc<Vec<Event>>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn Provider>) -> Self {
        let sessions =
            SessionService::new(provider.clone(), config.session_cache_ttl);
        let registrations =
            RegistrationService::new(provider.clone(), &config.evidence_bucket);
        let wizards = WizardStore::new(DraftLimits {
            max_age: WIZARD_DRAFT_MAX_AGE,
            max_drafts: config.max_wizard_drafts,
            evidence_budget: config.wizard_evidence_budget,
        });

        Self {
            config: Arc::new(config),
            provider,
            sessions: Arc::new(sessions),
            registrations: Arc::new(registrations),
            wizards: Arc::new(wizards),
            rate_limiter: Arc::new(RateLimiter::new()),
            events: Arc::new(data::catalog()),
        }
    }
}
