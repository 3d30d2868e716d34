use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::services::Wizard;

/// Bounds on what the draft store may hold at once.
#[derive(Debug, Clone, Copy)]
pub struct DraftLimits {
    pub max_age: Duration,
    pub max_drafts: usize,
    /// Total evidence bytes across all drafts.
    pub evidence_budget: usize,
}

struct Draft {
    wizard: Wizard,
    touched_at: Instant,
}

impl Draft {
    fn evidence_bytes(&self) -> usize {
        self.wizard
            .form()
            .evidence
            .as_ref()
            .map_or(0, |file| file.bytes.len())
    }
}

/// In-memory registration drafts, one per browser, keyed by the id in the
/// wizard cookie. Nothing survives a restart.
pub struct WizardStore {
    drafts: Mutex<HashMap<Uuid, Draft>>,
    limits: DraftLimits,
}

impl WizardStore {
    pub fn new(limits: DraftLimits) -> Self {
        Self {
            drafts: Mutex::new(HashMap::new()),
            limits,
        }
    }

    /// Begin an empty draft and return its id.
    pub fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.save(id, Wizard::new());
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Wizard> {
        let drafts = self
            .drafts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        drafts
            .get(&id)
            .filter(|draft| draft.touched_at.elapsed() < self.limits.max_age)
            .map(|draft| draft.wizard.clone())
    }

    /// Store `wizard` under `id`. Stale drafts are pruned, then the least
    /// recently touched ones are evicted until the store fits its limits.
    /// The draft just saved is never evicted.
    pub fn save(&self, id: Uuid, wizard: Wizard) {
        let now = Instant::now();
        let max_age = self.limits.max_age;
        let mut drafts = self
            .drafts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        drafts.retain(|_, draft| {
            now.duration_since(draft.touched_at) < max_age
        });
        drafts.insert(
            id,
            Draft {
                wizard,
                touched_at: now,
            },
        );

        let mut evidence: usize =
            drafts.values().map(Draft::evidence_bytes).sum();
        while drafts.len() > self.limits.max_drafts
            || evidence > self.limits.evidence_budget
        {
            let oldest = drafts
                .iter()
                .filter(|(key, _)| **key != id)
                .min_by_key(|(_, draft)| draft.touched_at)
                .map(|(key, _)| *key);

            let Some(oldest) = oldest else { break };
            if let Some(evicted) = drafts.remove(&oldest) {
                evidence -= evicted.evidence_bytes();
                log::debug!("Evicted registration draft {}", oldest);
            }
        }
    }

    pub fn discard(&self, id: Uuid) {
        self.drafts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&id);
    }

    pub fn len(&self) -> usize {
        self.drafts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
