use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::data;
use crate::services::TimeLeft;
use crate::web::helpers::{current_user, render, render_with_status, shell};
use crate::web::state::AppState;
use crate::web::templates::{
    CountdownTemplate, FaqTemplate, HomeTemplate, NotFoundTemplate,
    TeamTemplate,
};

fn time_left(state: &AppState) -> TimeLeft {
    TimeLeft::until(&state.config.festival_starts_at, &Utc::now())
}

#[get("/")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let user = current_user(&state, &req).await;

    render(HomeTemplate {
        shell: shell(&state, user),
        countdown: time_left(&state),
        dates: data::FESTIVAL_DATES,
        venue: data::FESTIVAL_VENUE,
        societies: data::societies(),
    })
}

/// Countdown fragment; polls itself until the festival starts.
#[get("/countdown")]
pub async fn countdown(state: web::Data<AppState>) -> impl Responder {
    render(CountdownTemplate {
        countdown: time_left(&state),
    })
}

#[get("/team")]
pub async fn team(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let user = current_user(&state, &req).await;

    render(TeamTemplate {
        shell: shell(&state, user),
        senior_coordinators: data::senior_coordinators(),
        coordinators: data::coordinators(),
    })
}

#[get("/faq")]
pub async fn faq(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let user = current_user(&state, &req).await;

    render(FaqTemplate {
        shell: shell(&state, user),
        faqs: data::faqs(),
    })
}

/// Default service for unmatched routes.
pub async fn not_found(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> HttpResponse {
    let user = current_user(&state, &req).await;

    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: shell(&state, user),
        },
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(countdown).service(team).service(faq);
}
