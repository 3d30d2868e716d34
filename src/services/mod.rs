pub mod ambient;
pub mod catalog;
pub mod countdown;
pub mod provider;
pub mod registration;
pub mod session;
pub mod supabase;
pub mod wizard;

pub use ambient::{Star, StarField};
pub use catalog::{CategoryFilter, EventFilter, KindFilter};
pub use countdown::TimeLeft;
pub use provider::Provider;
pub use registration::{RegistrationService, evidence_key};
pub use session::SessionService;
pub use supabase::SupabaseProvider;
pub use wizard::{DetailsFields, PersonalFields, Stage, Wizard};
