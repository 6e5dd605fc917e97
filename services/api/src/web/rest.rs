//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, OpenApi, ToSchema};

use adboard_core::domain::AdRecord;
use adboard_core::ports::PortError;

use crate::web::state::AppState;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(serve_ad_handler, record_click_handler, analytics_handler),
    components(schemas(
        AdBody,
        NoAdsBody,
        ClickRequest,
        ClickResponse,
        AnalyticsRowBody,
        AnalyticsResponse
    )),
    tags(
        (name = "Adboard API", description = "Mock endpoints for ad serving, click tracking and analytics.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request and Response Structs
//=========================================================================================

#[derive(Deserialize, IntoParams)]
pub struct ServeParams {
    /// One of the listed categories, or "all" for no filter.
    pub category: Option<String>,
}

/// One served creative.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdBody {
    id: String,
    title: String,
    description: String,
    image_url: String,
    click_url: String,
    advertiser: String,
    category: String,
}

impl From<AdRecord> for AdBody {
    fn from(ad: AdRecord) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            image_url: ad.image_url,
            click_url: ad.click_url,
            advertiser: ad.advertiser,
            category: ad.category.as_str().to_string(),
        }
    }
}

/// The body of an empty-pool response.
#[derive(Serialize, ToSchema)]
pub struct NoAdsBody {
    message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ClickRequest {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ClickResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// One aggregate dashboard row; `ctr` is recomputed on every read.
#[derive(Serialize, ToSchema)]
pub struct AnalyticsRowBody {
    id: String,
    category: String,
    impressions: u64,
    clicks: u64,
    ctr: f64,
}

#[derive(Serialize, ToSchema)]
pub struct AnalyticsResponse {
    ads: Vec<AnalyticsRowBody>,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Serve one ad for a category.
///
/// Picks uniformly at random from the records matching the requested
/// category; "all" or no category draws from the whole catalog.
#[utoipa::path(
    get,
    path = "/ads",
    params(ServeParams),
    responses(
        (status = 200, description = "One matching ad", body = AdBody),
        (status = 404, description = "No ads match the category", body = NoAdsBody),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn serve_ad_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<ServeParams>,
) -> Response {
    match app_state.serving.select(params.category.as_deref()).await {
        Ok(ad) => (StatusCode::OK, Json(AdBody::from(ad))).into_response(),
        Err(PortError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(NoAdsBody {
                message: "No ads".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serve ad: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serve ad".to_string(),
            )
                .into_response()
        }
    }
}

/// Record a click on a served ad.
///
/// Acknowledgment only; callers treat this as fire-and-forget and nothing is
/// persisted.
#[utoipa::path(
    post,
    path = "/ads/click",
    request_body = ClickRequest,
    responses(
        (status = 200, description = "Click acknowledged", body = ClickResponse),
        (status = 400, description = "Missing or empty id", body = ClickResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn record_click_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<ClickRequest>,
) -> Response {
    let id = req.id.unwrap_or_default();
    match app_state.clicks.record(&id).await {
        Ok(_receipt) => (
            StatusCode::OK,
            Json(ClickResponse {
                ok: true,
                error: None,
            }),
        )
            .into_response(),
        Err(PortError::Validation(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ClickResponse {
                ok: false,
                error: Some(message),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to record click: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ClickResponse {
                    ok: false,
                    error: Some("Failed to record click".to_string()),
                }),
            )
                .into_response()
        }
    }
}

/// List the aggregate analytics rows.
#[utoipa::path(
    get,
    path = "/analytics",
    responses(
        (status = 200, description = "Aggregate counters per ad", body = AnalyticsResponse)
    )
)]
pub async fn analytics_handler(State(app_state): State<Arc<AppState>>) -> Json<AnalyticsResponse> {
    let ads = app_state
        .analytics
        .list()
        .iter()
        .map(|row| AnalyticsRowBody {
            id: row.id.clone(),
            category: row.category.label().to_string(),
            impressions: row.impressions,
            clicks: row.clicks,
            ctr: row.ctr(),
        })
        .collect();
    Json(AnalyticsResponse { ads })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::{json, Value};

    use adboard_core::analytics::AnalyticsFeed;
    use adboard_core::catalog::AdCatalog;
    use adboard_core::clicks::ClickRecorder;
    use adboard_core::ports::{AdServing, ClickSink};
    use adboard_core::selector::AdSelector;

    use crate::adapters::rng::SeededRandom;
    use crate::config::Config;

    fn test_state() -> Arc<AppState> {
        let serving: Arc<dyn AdServing> = Arc::new(AdSelector::new(
            AdCatalog::builtin(),
            Arc::new(SeededRandom::new(1)),
        ));
        let clicks: Arc<dyn ClickSink> = Arc::new(ClickRecorder::new());
        let config = Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            log_level: tracing::Level::INFO,
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            rng_seed: Some(1),
        };
        Arc::new(AppState {
            serving,
            clicks,
            analytics: Arc::new(AnalyticsFeed::builtin()),
            config: Arc::new(config),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn serve_returns_a_matching_record() {
        let response = serve_ad_handler(
            State(test_state()),
            Query(ServeParams {
                category: Some("finance".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], "fi1");
        assert_eq!(body["category"], "finance");
        assert_eq!(body["advertiser"], "OakVest");
        assert!(body["imageUrl"].is_string());
    }

    #[tokio::test]
    async fn serve_unknown_category_is_404_no_ads() {
        let response = serve_ad_handler(
            State(test_state()),
            Query(ServeParams {
                category: Some("crypto".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "No ads" }));
    }

    #[tokio::test]
    async fn click_without_id_is_400() {
        for id in [None, Some(String::new())] {
            let response =
                record_click_handler(State(test_state()), Json(ClickRequest { id })).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({ "ok": false, "error": "Missing id" })
            );
        }
    }

    #[tokio::test]
    async fn click_with_id_is_acknowledged() {
        let response = record_click_handler(
            State(test_state()),
            Json(ClickRequest {
                id: Some("t1".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn analytics_lists_the_mock_rows_with_recomputed_ctr() {
        let Json(response) = analytics_handler(State(test_state())).await;
        assert_eq!(response.ads.len(), 5);

        let game = response.ads.iter().find(|r| r.id == "GAME-301").unwrap();
        assert_eq!(game.category, "Gaming");
        assert_eq!(game.impressions, 15_600);
        assert_eq!(game.clicks, 468);
        assert_eq!(game.ctr, 3.0);

        let dev = response.ads.iter().find(|r| r.id == "DEV-101").unwrap();
        assert_eq!(dev.ctr, 310.0 / 12_500.0 * 100.0);
    }
}
