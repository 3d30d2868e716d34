use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::web::forms::{MagicLinkForm, SignInForm, SignInQuery};
use crate::web::helpers::{
    ACCESS_COOKIE, access_token, client_ip, current_user, redirect,
    removal_cookie, render, session_cookie, shell,
};
use crate::web::security::{
    MAGIC_LINK_LIMIT, RATE_LIMITED_MESSAGE, SIGN_IN_LIMIT,
};
use crate::web::state::AppState;
use crate::web::templates::{MagicLinkTemplate, SignInTemplate};

pub const REGISTERED_NOTICE: &str =
    "Registration Successful! Please check your email to confirm.";
pub const MAGIC_LINK_SENT: &str = "Check your email for the magic link!";

#[get("/signin")]
pub async fn signin_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<SignInQuery>,
) -> impl Responder {
    let user = current_user(&state, &req).await;
    let notice = query.registered.as_ref().map(|_| REGISTERED_NOTICE);

    render(SignInTemplate {
        shell: shell(&state, user),
        email: String::new(),
        error: None,
        notice,
    })
}

#[post("/signin")]
pub async fn signin_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SignInForm>,
) -> impl Responder {
    let form = form.into_inner();

    let error = if !state
        .rate_limiter
        .check("signin", &client_ip(&req), SIGN_IN_LIMIT)
    {
        RATE_LIMITED_MESSAGE.to_string()
    } else {
        match state
            .provider
            .sign_in_with_password(&form.email, &form.password)
            .await
        {
            Ok(session) => {
                log::info!("User {} signed in", session.user.id);
                state
                    .sessions
                    .remember(&session.access_token, session.user.clone());

                let cookie =
                    session_cookie(&session.access_token, session.expires_in);
                let mut res = redirect(&req, "/");
                if let Err(e) = res.add_cookie(&cookie) {
                    log::error!("Failed to set session cookie: {}", e);
                }
                return res;
            }
            Err(e) => {
                log::warn!("Sign-in failed: {}", e);
                e.to_string()
            }
        }
    };

    let user = current_user(&state, &req).await;
    render(SignInTemplate {
        shell: shell(&state, user),
        email: form.email,
        error: Some(error),
        notice: None,
    })
}

#[post("/signout")]
pub async fn signout(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    if let Some(token) = access_token(&req) {
        if let Err(e) = state.provider.sign_out(&token).await {
            log::warn!("Provider sign-out failed: {}", e);
        }
        state.sessions.forget(&token);
    }

    let mut res = redirect(&req, "/");
    if let Err(e) = res.add_cookie(&removal_cookie(ACCESS_COOKIE, "/")) {
        log::error!("Failed to clear session cookie: {}", e);
    }
    res
}

#[get("/login")]
pub async fn magic_link_form(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let user = current_user(&state, &req).await;

    render(MagicLinkTemplate {
        shell: shell(&state, user),
        email: String::new(),
        message: None,
    })
}

#[post("/login")]
pub async fn magic_link_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<MagicLinkForm>,
) -> HttpResponse {
    let email = form.into_inner().email;

    let message = if !state
        .rate_limiter
        .check("magic_link", &client_ip(&req), MAGIC_LINK_LIMIT)
    {
        RATE_LIMITED_MESSAGE.to_string()
    } else {
        match state.provider.send_magic_link(&email).await {
            Ok(()) => MAGIC_LINK_SENT.to_string(),
            Err(e) => {
                log::warn!("Magic link request failed: {}", e);
                e.to_string()
            }
        }
    };

    let user = current_user(&state, &req).await;
    render(MagicLinkTemplate {
        shell: shell(&state, user),
        email,
        message: Some(message),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(signin_form)
        .service(signin_submit)
        .service(signout)
        .service(magic_link_form)
        .service(magic_link_submit);
}
