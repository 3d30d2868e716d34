use actix_web::cookie::{Cookie, SameSite, time::Duration as CookieDuration};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use uuid::Uuid;

use crate::models::ProviderUser;
use crate::services::StarField;
use crate::web::state::AppState;
use crate::web::templates::Shell;

pub const ACCESS_COOKIE: &str = "ch_access";
pub const WIZARD_COOKIE: &str = "ch_wizard";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn access_token(req: &HttpRequest) -> Option<String> {
    req.cookie(ACCESS_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
}

pub async fn current_user(
    state: &AppState,
    req: &HttpRequest,
) -> Option<ProviderUser> {
    let token = access_token(req)?;
    state.sessions.current_user(&token).await
}

/// Layout context for a full page.
pub fn shell(state: &AppState, user: Option<ProviderUser>) -> Shell {
    let stars = StarField::generate(
        state.config.ambient_star_count,
        &mut rand::thread_rng(),
    );
    Shell { user, stars }
}

pub fn wizard_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(WIZARD_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value().trim()).ok())
}

pub fn session_cookie(
    access_token: &str,
    expires_in_secs: i64,
) -> Cookie<'static> {
    Cookie::build(ACCESS_COOKIE, access_token.to_string())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(expires_in_secs.max(0)))
        .finish()
}

pub fn wizard_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(WIZARD_COOKIE, id.to_string())
        .path("/register")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie(
    name: &'static str,
    path: &'static str,
) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .path(path)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

/// See-other redirect, or `HX-Redirect` for htmx requests so the whole
/// page navigates instead of swapping a fragment.
pub fn redirect(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

pub fn render_with_status<T: Template>(
    status: StatusCode,
    t: T,
) -> HttpResponse {
    let mut res = render(t);
    if res.status().is_success() {
        *res.status_mut() = status;
    }
    res
}
