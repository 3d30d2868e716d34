use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use chrono::Utc;
use futures_util::TryStreamExt;
use uuid::Uuid;

use crate::common::UploadError;
use crate::models::EvidenceFile;
use crate::services::{Stage, Wizard};
use crate::web::forms::{PaymentDetailsQuery, StepForm};
use crate::web::helpers::{
    WIZARD_COOKIE, client_ip, current_user, is_htmx, redirect, removal_cookie,
    render, shell, wizard_cookie, wizard_id,
};
use crate::web::security::{RATE_LIMITED_MESSAGE, REGISTER_LIMIT};
use crate::web::state::AppState;
use crate::web::templates::{
    PaymentDetailsTemplate, PaymentDetailsView, RegisterTemplate,
    WizardTemplate, WizardView,
};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Payment step body. A file part with no name or no bytes means the user
/// did not pick a new file.
#[derive(Default)]
struct PaymentUpload {
    action: Option<String>,
    payment_method: Option<String>,
    evidence: Option<EvidenceFile>,
}

impl PaymentUpload {
    fn is_back(&self) -> bool {
        self.action.as_deref() == Some("back")
    }
}

fn field_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

async fn read_payment_upload(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<PaymentUpload, UploadError> {
    let mut upload = PaymentUpload::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "action" => upload.action = Some(field_text(&bytes)),
            "payment_method" => {
                upload.payment_method = Some(field_text(&bytes))
            }
            "screenshot" => {
                upload.evidence = file_name
                    .filter(|n| !n.is_empty() && !bytes.is_empty())
                    .map(|file_name| EvidenceFile {
                        file_name,
                        content_type: content_type.unwrap_or_else(|| {
                            DEFAULT_CONTENT_TYPE.to_string()
                        }),
                        bytes,
                    });
            }
            _ => {}
        }
    }

    Ok(upload)
}

/// The caller's draft, or a fresh one when the cookie is missing or the
/// draft has expired. The flag is true for a fresh draft.
fn load_draft(state: &AppState, req: &HttpRequest) -> (Uuid, Wizard, bool) {
    if let Some(id) = wizard_id(req) {
        if let Some(wizard) = state.wizards.get(id) {
            return (id, wizard, false);
        }
    }

    let id = state.wizards.start();
    (id, Wizard::new(), true)
}

/// Store the draft and render it: the wizard fragment for htmx, the whole
/// page otherwise.
async fn respond(
    state: &AppState,
    req: &HttpRequest,
    id: Uuid,
    wizard: Wizard,
    fresh: bool,
) -> HttpResponse {
    let view = WizardView::new(&wizard);
    let payment = PaymentDetailsView::new(
        &view.payment_method,
        &view.participation_type,
    );
    state.wizards.save(id, wizard);

    let mut res = if is_htmx(req) {
        render(WizardTemplate {
            wizard: view,
            payment,
        })
    } else {
        let user = current_user(state, req).await;
        render(RegisterTemplate {
            shell: shell(state, user),
            wizard: view,
            payment,
        })
    };

    if fresh {
        if let Err(e) = res.add_cookie(&wizard_cookie(id)) {
            log::error!("Failed to set wizard cookie: {}", e);
        }
    }
    res
}

/// Always starts an empty draft; an earlier draft from this browser is
/// dropped.
#[get("/register")]
pub async fn register_page(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    if let Some(previous) = wizard_id(&req) {
        state.wizards.discard(previous);
    }

    let id = state.wizards.start();
    respond(&state, &req, id, Wizard::new(), true).await
}

#[post("/register/step")]
pub async fn register_step(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<StepForm>,
) -> impl Responder {
    let (id, mut wizard, fresh) = load_draft(&state, &req);

    let at_personal = matches!(wizard.stage(), Stage::Personal);
    let at_details = matches!(wizard.stage(), Stage::Details(_));
    if at_personal {
        if let Some(fields) = form.personal() {
            wizard.update_personal(fields);
        }
    } else if at_details {
        if let Some(fields) = form.details() {
            wizard.update_details(fields);
        }
    }

    if form.is_back() {
        wizard.back();
    } else if let Err(e) = wizard.advance() {
        log::debug!("Wizard stayed at step {}: {}", wizard.step(), e);
    }

    respond(&state, &req, id, wizard, fresh).await
}

#[post("/register/submit")]
pub async fn register_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> impl Responder {
    let (id, mut wizard, fresh) = load_draft(&state, &req);

    let max_bytes = state.config.max_evidence_bytes;
    let upload = match read_payment_upload(payload, max_bytes).await {
        Ok(upload) => upload,
        Err(e) => {
            log::warn!("Rejected payment upload: {}", e);
            wizard.set_error(e.to_string());
            return respond(&state, &req, id, wizard, fresh).await;
        }
    };

    let back = upload.is_back();
    if let Some(method) = upload.payment_method {
        wizard.update_payment_method(method);
    }
    wizard.attach_evidence(upload.evidence);

    if back {
        wizard.back();
        return respond(&state, &req, id, wizard, fresh).await;
    }

    let submission = match wizard.submission() {
        Ok(submission) => submission,
        Err(_) => return respond(&state, &req, id, wizard, fresh).await,
    };

    if !state
        .rate_limiter
        .check("register", &client_ip(&req), REGISTER_LIMIT)
    {
        wizard.set_error(RATE_LIMITED_MESSAGE);
        return respond(&state, &req, id, wizard, fresh).await;
    }

    match state
        .registrations
        .complete(&submission, Utc::now().timestamp_millis())
        .await
    {
        Ok(()) => {
            state.wizards.discard(id);

            let cookie = removal_cookie(WIZARD_COOKIE, "/register");
            let mut res = redirect(&req, "/signin?registered=1");
            if let Err(e) = res.add_cookie(&cookie) {
                log::error!("Failed to clear wizard cookie: {}", e);
            }
            res
        }
        Err(e) => {
            wizard.set_error(e.to_string());
            respond(&state, &req, id, wizard, fresh).await
        }
    }
}

/// Payment instructions fragment for the selected method.
#[get("/register/payment-details")]
pub async fn payment_details(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PaymentDetailsQuery>,
) -> impl Responder {
    let participation_type = wizard_id(&req)
        .and_then(|id| state.wizards.get(id))
        .map(|wizard| wizard.form().participation_type.clone())
        .unwrap_or_default();

    render(PaymentDetailsTemplate {
        payment: PaymentDetailsView::new(
            query.method.as_deref().unwrap_or_default(),
            &participation_type,
        ),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_page)
        .service(register_step)
        .service(register_submit)
        .service(payment_details);
}
