pub mod auth;
pub mod events;
pub mod public;
pub mod register;

use actix_web::web;

/// Register every page route. Unmatched paths fall through to
/// [`public::not_found`], installed as the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    events::configure(cfg);
    auth::configure(cfg);
    register::configure(cfg);
}
