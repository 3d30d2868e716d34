use actix_web::{HttpRequest, Responder, get, web};

use crate::services::{CategoryFilter, EventFilter, KindFilter};
use crate::web::forms::EventsQuery;
use crate::web::helpers::{current_user, render, shell};
use crate::web::state::AppState;
use crate::web::templates::{EventGridTemplate, EventsTemplate};

fn filter_from(query: &EventsQuery) -> EventFilter {
    EventFilter::from_params(
        query.category.as_deref(),
        query.q.as_deref(),
        query.kind.as_deref(),
    )
}

#[get("/events")]
pub async fn events_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    let user = current_user(&state, &req).await;
    let signed_in = user.is_some();
    let filter = filter_from(&query);

    render(EventsTemplate {
        shell: shell(&state, user),
        events: filter.apply(&state.events),
        filter,
        categories: CategoryFilter::options(),
        kinds: KindFilter::ALL,
        signed_in,
    })
}

/// Grid fragment re-requested by the filter controls.
#[get("/events/grid")]
pub async fn events_grid(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    let signed_in = current_user(&state, &req).await.is_some();
    let filter = filter_from(&query);

    render(EventGridTemplate {
        events: filter.apply(&state.events),
        signed_in,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(events_page).service(events_grid);
}
