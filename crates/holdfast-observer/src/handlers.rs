//! REST API endpoint handlers for the admin balance server.
//!
//! All handlers read from the in-memory [`GameSnapshot`] via the shared
//! [`AppState`]. Analytics are computed on demand from the current
//! snapshot; nothing is cached between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/admin/history` | Cached daily history |
//! | `GET` | `/api/admin/events` | Cached event catalog |
//! | `GET` | `/api/admin/balance/drift` | Stat drift summary |
//! | `GET` | `/api/admin/balance/mix` | Event category mix (?days=N) |
//! | `GET` | `/api/admin/balance/categories` | Event design balance by category |
//!
//! [`GameSnapshot`]: crate::state::GameSnapshot

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};

use holdfast_analytics::{
    DEFAULT_MIX_WINDOW, DriftLabel, category_percent, compute_category_balance, compute_drift,
    compute_event_mix, drift_notes, mix_hint,
};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/admin/balance/mix` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct MixQuery {
    /// Number of trailing days to analyze (default 30).
    pub days: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    let history_days = snapshot.history.len();
    let builtin_count = snapshot.catalog.builtin.len();
    let custom_count = snapshot.catalog.custom.len();
    let last_refresh = snapshot
        .last_refresh
        .map_or_else(|| String::from("never"), |t| t.to_rfc3339());

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Holdfast Balance Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Holdfast Balance Observer</h1>
    <p class="subtitle">World-balance analytics for the admin dashboard</p>

    <div>
        <div class="metric">
            <div class="label">History days</div>
            <div class="value">{history_days}</div>
        </div>
        <div class="metric">
            <div class="label">Built-in events</div>
            <div class="value">{builtin_count}</div>
        </div>
        <div class="metric">
            <div class="label">Custom events</div>
            <div class="value">{custom_count}</div>
        </div>
        <div class="metric">
            <div class="label">Last refresh</div>
            <div class="value">{last_refresh}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/admin/history">/api/admin/history</a> -- Cached daily history</li>
        <li><a href="/api/admin/events">/api/admin/events</a> -- Cached event catalog</li>
        <li><a href="/api/admin/balance/drift">/api/admin/balance/drift</a> -- Stat drift summary</li>
        <li><a href="/api/admin/balance/mix">/api/admin/balance/mix</a> -- Event mix (?days=N)</li>
        <li><a href="/api/admin/balance/categories">/api/admin/balance/categories</a> -- Design balance by category</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/admin/history -- cached daily history
// ---------------------------------------------------------------------------

/// Return the cached daily history exactly as fetched from upstream
/// (a bare array, oldest first, matching the game server's shape).
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    Ok(Json(serde_json::to_value(&snapshot.history)?))
}

// ---------------------------------------------------------------------------
// GET /api/admin/events -- cached event catalog
// ---------------------------------------------------------------------------

/// Return the cached event catalog (`builtin`, `custom`, `total`).
pub async fn get_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    Ok(Json(serde_json::to_value(&snapshot.catalog)?))
}

// ---------------------------------------------------------------------------
// GET /api/admin/balance/drift -- stat drift summary
// ---------------------------------------------------------------------------

/// Return the drift summary with per-stat direction labels and advisory
/// notes.
///
/// With fewer than two history days there is nothing to average; the
/// response carries `"available": false` so the dashboard can render
/// its "not enough history" fallback instead of an error state.
pub async fn get_drift(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;

    let Some(summary) = compute_drift(&snapshot.history) else {
        return Ok(Json(serde_json::json!({
            "available": false,
            "reason": "not enough history to compute drift",
        })));
    };

    let notes: Vec<serde_json::Value> = drift_notes(&summary)
        .into_iter()
        .map(|note| {
            serde_json::json!({
                "code": note,
                "message": note.message(),
            })
        })
        .collect();

    Ok(Json(serde_json::json!({
        "available": true,
        "summary": summary,
        "labels": {
            "morale": DriftLabel::classify(summary.avg_morale),
            "supplies": DriftLabel::classify(summary.avg_supplies),
            "threat": DriftLabel::classify(summary.avg_threat),
        },
        "notes": notes,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/admin/balance/mix -- event category mix
// ---------------------------------------------------------------------------

/// Return the event category mix over the last `days` days (default 30).
///
/// # Query Parameters
///
/// - `days`: trailing window size; must be at least 1
pub async fn get_mix(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MixQuery>,
) -> Result<impl IntoResponse, ObserverError> {
    let days = query.days.unwrap_or(DEFAULT_MIX_WINDOW);
    if days == 0 {
        return Err(ObserverError::InvalidQuery(String::from(
            "days must be at least 1",
        )));
    }

    let snapshot = state.snapshot.read().await;

    let Some(mix) = compute_event_mix(&snapshot.history, days) else {
        return Ok(Json(serde_json::json!({
            "available": false,
            "reason": "no history in the requested window",
        })));
    };

    let categories: Vec<serde_json::Value> = mix
        .by_category
        .iter()
        .map(|(category, &count)| {
            let percent = category_percent(count, mix.total);
            let hint = mix_hint(category, percent).map(|h| {
                serde_json::json!({
                    "code": h,
                    "message": h.message(),
                })
            });
            serde_json::json!({
                "category": category,
                "count": count,
                "percent": percent,
                "hint": hint,
            })
        })
        .collect();

    Ok(Json(serde_json::json!({
        "available": true,
        "window": days,
        "total": mix.total,
        "categories": categories,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/admin/balance/categories -- event design balance
// ---------------------------------------------------------------------------

/// Return average per-option stat impact of the event catalog, grouped
/// by category in first-occurrence order.
///
/// An empty catalog yields an empty list, not an unavailable marker;
/// "no events defined" is a valid answer rather than missing data.
pub async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let snapshot = state.snapshot.read().await;
    let summaries =
        compute_category_balance(&snapshot.catalog.builtin, &snapshot.catalog.custom);

    Ok(Json(serde_json::json!({
        "count": summaries.len(),
        "categories": summaries,
    })))
}
