use crate::board::{self, BoardFilter};
use crate::counts;
use crate::errors::AppError;
use crate::models::{
    display_timestamp, new_signature_id, wire_timestamp, BoardEntry, BoardQuery, BoardResponse,
    Category, SignatureCounts, SignatureRequest, StoredSignature, SubmitResponse, VisitorRequest,
    VisitorResponse,
};
use crate::relay::{Attachment, OutboundMessage};
use crate::state::AppState;
use crate::storage::persist_cache;
use crate::ui::render_index;
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let cache = state.cache.lock().await;
    let counts = counts::tally(&cache.signatures);
    Html(render_index(&counts))
}

/// Submit one signature. The remote append is best-effort: a ledger failure
/// is logged and the submitter still gets a success, because the local cache
/// write is the one that decides the outcome.
pub async fn submit_signature(
    State(state): State<AppState>,
    Json(payload): Json<SignatureRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name is required"));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::bad_request("email is required"));
    }
    if payload.category.trim().is_empty() {
        return Err(AppError::bad_request("category is required"));
    }
    let timestamp = match payload.timestamp {
        Some(value) if value.trim().is_empty() => {
            return Err(AppError::bad_request("timestamp must not be empty"));
        }
        Some(value) => value,
        None => display_timestamp(),
    };

    let record = StoredSignature {
        id: new_signature_id(),
        name: payload.name,
        email: payload.email,
        category: payload.category,
        timestamp,
    };

    if let Some(ledger) = &state.ledger {
        if let Err(err) = ledger.append_signature(&record).await {
            warn!("ledger append failed, record kept locally: {err}");
        }
    }

    let mut cache = state.cache.lock().await;
    cache.signatures.push(record.clone());
    persist_cache(&state.cache_path, &cache).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            message: "Signature recorded successfully".into(),
            data: record,
        }),
    ))
}

/// Aggregate counts: remote ledger preferred, local cache scan otherwise.
pub async fn get_counts(State(state): State<AppState>) -> Json<SignatureCounts> {
    let remote = match &state.ledger {
        Some(ledger) => match ledger.signature_counts().await {
            Ok(counts) => Some(counts),
            Err(err) => {
                warn!("remote counts unavailable, using local cache: {err}");
                None
            }
        },
        None => None,
    };

    let cache = state.cache.lock().await;
    Json(counts::resolve(remote, &cache.signatures))
}

/// Visitor tick. A visit is recorded only when the client claims to be new
/// and the durable visited flag is still unset; clearing the flag makes the
/// client count again. The reported count prefers the remote ledger and
/// falls back to the per-process tally.
pub async fn visitor_tick(
    State(state): State<AppState>,
    payload: Option<Json<VisitorRequest>>,
) -> Json<VisitorResponse> {
    let claims_new = payload.map(|Json(p)| p.is_new_visitor).unwrap_or(false);

    let recorded = {
        let mut cache = state.cache.lock().await;
        if claims_new && !cache.visited {
            cache.visited = true;
            if let Err(err) = persist_cache(&state.cache_path, &cache).await {
                warn!("failed to persist visited flag: {}", err.message);
            }
            state.visitors.record();
            true
        } else {
            false
        }
    };

    // The remote log runs with the cache lock released; local writes never
    // wait on the bridge.
    if recorded {
        if let Some(ledger) = &state.ledger {
            if let Err(err) = ledger.log_visitor(&display_timestamp()).await {
                warn!("visitor log failed: {err}");
            }
        }
    }

    let count = match &state.ledger {
        Some(ledger) => match ledger.visitor_count().await {
            Ok(count) => count,
            Err(err) => {
                warn!("remote visitor count unavailable, using process tally: {err}");
                state.visitors.current()
            }
        },
        None => state.visitors.current(),
    };

    Json(VisitorResponse {
        count,
        timestamp: wire_timestamp(),
    })
}

/// One page of the wall of support, insertion order, filtered then sliced.
pub async fn board_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Json<BoardResponse> {
    let category_param = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"));
    let category = match category_param {
        Some(raw) => match Category::parse(raw) {
            Some(category) => Some(category),
            // An unrecognized category matches no records.
            None => {
                return Json(BoardResponse {
                    page: 1,
                    total_pages: 1,
                    total: 0,
                    signatures: Vec::new(),
                });
            }
        },
        None => None,
    };
    let filter = BoardFilter {
        search: query.search.unwrap_or_default(),
        category,
    };

    let cache = state.cache.lock().await;
    let filtered: Vec<&StoredSignature> = cache
        .signatures
        .iter()
        .filter(|signature| filter.matches(signature))
        .collect();

    let total_pages = board::total_pages(filtered.len());
    let page = query.page.unwrap_or(1).clamp(1, total_pages);
    let signatures = board::page_slice(&filtered, page)
        .iter()
        .map(|signature| BoardEntry::from(*signature))
        .collect();

    Json(BoardResponse {
        page,
        total_pages,
        total: filtered.len(),
        signatures,
    })
}

/// Anonymous message with attachments. No local fallback exists on this
/// path, so a relay failure is reported as one.
pub async fn send_message(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut message = String::new();
    let mut can_share = false;
    let mut attachments = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "message" {
            message = field
                .text()
                .await
                .map_err(|err| AppError::bad_request(err.to_string()))?;
        } else if name == "canShareOnInstagram" {
            let value = field
                .text()
                .await
                .map_err(|err| AppError::bad_request(err.to_string()))?;
            can_share = value == "true";
        } else if name.starts_with("file_") {
            let filename = field.file_name().unwrap_or("attachment").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|err| AppError::bad_request(err.to_string()))?
                .to_vec();
            attachments.push(Attachment {
                filename,
                content_type,
                data,
            });
        }
    }

    if message.trim().is_empty() {
        return Err(AppError::bad_request("message is required"));
    }

    let outbound = OutboundMessage::compose(&message, can_share, &display_timestamp(), attachments);
    if let Err(err) = state.relay.send(&outbound).await {
        error!("message relay failed: {err}");
        return Err(AppError::internal_message("failed to send message"));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Your message has been sent successfully"
    })))
}
