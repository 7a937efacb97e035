//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use deva_domain::{
    CharacterId, DisplaySettings, DomainError, FacetOptions, Filters, ProfileDetails,
    SpotlightAction, UserProfile,
};
use deva_shared::{
    CharacterDto, ExploreResponse, RelatedResponse, SetQueryRequest, SettingsFieldMetadata,
    SpotlightResponse, TimelineResponse, ToggleFacetRequest, UpdateSettingsRequest,
};

use super::session::Session;
use crate::app::App;
use crate::use_cases::{ExploreError, ProfileError, RelatedError, SettingsError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/characters", get(list_characters))
        .route("/api/characters/{id}", get(get_character))
        .route("/api/characters/{id}/related", get(related_characters))
        .route("/api/facets", get(facets))
        .route("/api/timeline", get(timeline))
        .route("/api/explore", get(get_explore))
        .route("/api/explore/query", put(set_explore_query))
        .route("/api/explore/toggle", post(toggle_explore_facet))
        .route("/api/explore/reset", post(reset_explore))
        .route("/api/spotlight", get(get_spotlight))
        .route("/api/spotlight/{action}", post(move_spotlight))
        .route("/api/settings", get(get_settings).put(update_settings))
        .route("/api/settings/reset", post(reset_settings))
        .route("/api/settings/metadata", get(get_settings_metadata))
        .route("/api/profile", get(get_profile).put(update_profile))
        .route("/api/profile/favorites/{id}", post(toggle_favorite))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

/// `?q=...` plus any number of facet parameters; a facet may repeat
/// (`region=Lanka&region=Ayodhya`) or carry a comma-separated list.
async fn list_characters(
    State(app): State<Arc<App>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<ExploreResponse> {
    let mut query = String::new();
    let mut facets = Vec::with_capacity(params.len());
    for (key, value) in params {
        if key == "q" {
            query = value;
        } else {
            facets.push((key, value));
        }
    }
    Json(
        app.use_cases
            .explore
            .browse
            .search(&query, Filters::from_pairs(facets)),
    )
}

async fn get_character(
    State(app): State<Arc<App>>,
    session: Option<Session>,
    Path(id): Path<String>,
) -> Result<Json<CharacterDto>, ApiError> {
    let character = app.use_cases.explore.browse.get(&id)?;
    if let Some(Session(session)) = session {
        let id = CharacterId::new(character.id.as_str())?;
        app.use_cases.profile.record_view(session, id).await;
    }
    Ok(Json(character))
}

async fn related_characters(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<RelatedResponse>, ApiError> {
    Ok(Json(app.use_cases.related.execute(&id).await?))
}

async fn facets(State(app): State<Arc<App>>) -> Json<FacetOptions> {
    Json(app.use_cases.explore.browse.facets())
}

async fn timeline(State(app): State<Arc<App>>) -> Json<TimelineResponse> {
    Json(app.use_cases.timeline.listing())
}

// =============================================================================
// Explore session
// =============================================================================

#[derive(Debug, Deserialize)]
struct ExploreParams {
    #[serde(rename = "type")]
    type_param: Option<String>,
}

async fn get_explore(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Query(params): Query<ExploreParams>,
) -> Json<ExploreResponse> {
    Json(
        app.use_cases
            .explore
            .session
            .current(session, params.type_param.as_deref())
            .await,
    )
}

async fn set_explore_query(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Json(request): Json<SetQueryRequest>,
) -> Json<ExploreResponse> {
    Json(
        app.use_cases
            .explore
            .session
            .set_query(session, request.query)
            .await,
    )
}

async fn toggle_explore_facet(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Json(request): Json<ToggleFacetRequest>,
) -> Json<ExploreResponse> {
    Json(
        app.use_cases
            .explore
            .session
            .toggle(session, request.facet, &request.value, request.selected)
            .await,
    )
}

async fn reset_explore(
    State(app): State<Arc<App>>,
    Session(session): Session,
) -> Json<ExploreResponse> {
    Json(app.use_cases.explore.session.reset(session).await)
}

// =============================================================================
// Spotlight
// =============================================================================

async fn get_spotlight(
    State(app): State<Arc<App>>,
    Session(session): Session,
) -> Json<SpotlightResponse> {
    Json(app.use_cases.timeline.spotlight(session).await)
}

async fn move_spotlight(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Path(action): Path<String>,
) -> Result<Json<SpotlightResponse>, ApiError> {
    let action: SpotlightAction = action.parse()?;
    Ok(Json(app.use_cases.timeline.navigate(session, action).await))
}

// =============================================================================
// Settings
// =============================================================================

async fn get_settings(
    State(app): State<Arc<App>>,
    Session(session): Session,
) -> Result<Json<DisplaySettings>, ApiError> {
    Ok(Json(app.use_cases.settings.get(session).await?))
}

async fn update_settings(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<DisplaySettings>, ApiError> {
    Ok(Json(app.use_cases.settings.update(session, request).await?))
}

async fn reset_settings(
    State(app): State<Arc<App>>,
    Session(session): Session,
) -> Result<Json<DisplaySettings>, ApiError> {
    Ok(Json(app.use_cases.settings.reset(session).await?))
}

async fn get_settings_metadata(State(app): State<Arc<App>>) -> Json<Vec<SettingsFieldMetadata>> {
    Json(app.use_cases.settings.metadata())
}

// =============================================================================
// Profile
// =============================================================================

async fn get_profile(
    State(app): State<Arc<App>>,
    Session(session): Session,
) -> Json<UserProfile> {
    Json(app.use_cases.profile.get(session).await)
}

async fn update_profile(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Json(details): Json<ProfileDetails>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(app.use_cases.profile.update(session, details).await?))
}

async fn toggle_favorite(
    State(app): State<Arc<App>>,
    Session(session): Session,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(
        app.use_cases.profile.toggle_favorite(session, &id).await?,
    ))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::infrastructure::ports::RepoError> for ApiError {
    fn from(e: crate::infrastructure::ports::RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ExploreError> for ApiError {
    fn from(e: ExploreError) -> Self {
        match e {
            ExploreError::CharacterNotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<RelatedError> for ApiError {
    fn from(e: RelatedError) -> Self {
        match e {
            RelatedError::CharacterNotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::CharacterNotFound(_) => ApiError::NotFound,
            ProfileError::Domain(e) => e.into(),
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Repo(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::JsonCharacterSource;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{LlmResponse, MockLlmPort};
    use crate::infrastructure::settings::SqliteSettingsRepo;
    use crate::stores::SessionStore;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const SESSION: &str = "2b1f6a9e-3c4d-4e5f-8a7b-9c0d1e2f3a4b";

    struct TestServer {
        router: Router,
        _dir: tempfile::TempDir,
    }

    async fn server() -> TestServer {
        let dir = tempfile::tempdir().unwrap();
        let clock = Arc::new(FixedClock(
            chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ));
        let settings = SqliteSettingsRepo::new(
            dir.path().join("settings.db").to_str().unwrap(),
            clock,
        )
        .await
        .unwrap();

        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Ok(LlmResponse::text(r#"["Hanuman", "Sita", "Rama"]"#)));

        let app = Arc::new(App::new(
            Arc::new(JsonCharacterSource::bundled().unwrap()),
            Arc::new(llm),
            Arc::new(settings),
            Arc::new(SessionStore::default()),
        ));

        TestServer {
            router: routes().with_state(app),
            _dir: dir,
        }
    }

    impl TestServer {
        async fn send(
            &self,
            method: Method,
            uri: &str,
            session: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut request = Request::builder().method(method).uri(uri);
            if let Some(session) = session {
                request = request.header("X-Session-Id", session);
            }
            let request = match body {
                Some(body) => request
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => request.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let value = serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
            (status, value)
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Method::GET, uri, Some(SESSION), None).await
        }
    }

    fn ids(response: &Value) -> Vec<String> {
        response["characters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_check() {
        let server = server().await;
        let (status, body) = server.send(Method::GET, "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));
    }

    mod characters {
        use super::*;

        #[tokio::test]
        async fn search_by_query_and_facets() {
            let server = server().await;

            let (status, body) = server.get("/api/characters?q=thunderbolt").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(ids(&body), ["indra"]);

            let (_, body) = server
                .get("/api/characters?type=Rakshasa&yuga=Treta%20Yuga")
                .await;
            assert_eq!(ids(&body), ["ravana", "kumbhakarna"]);
            assert_eq!(body["activeCount"], 2);
        }

        #[tokio::test]
        async fn repeated_facet_values_are_ored() {
            let server = server().await;
            let (_, body) = server
                .get("/api/characters?region=Lanka&region=Kishkindha")
                .await;
            assert_eq!(
                ids(&body),
                ["hanuman", "sugriva", "ravana", "kumbhakarna"]
            );
        }

        #[tokio::test]
        async fn unknown_character_is_404() {
            let server = server().await;
            let (status, _) = server.get("/api/characters/kamadeva").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn viewing_a_character_records_it() {
            let server = server().await;
            let (status, body) = server.get("/api/characters/shiva").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["yuga"], "All Yugas");
            assert_eq!(body["yugaDeclared"], false);

            let (_, profile) = server.get("/api/profile").await;
            assert_eq!(profile["recentlyViewed"], json!(["shiva"]));
        }

        #[tokio::test]
        async fn related_suggestions_resolve_catalog_ids() {
            let server = server().await;
            let (status, body) = server.get("/api/characters/rama/related").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body["suggestions"],
                json!([
                    {"name": "Hanuman", "characterId": "hanuman"},
                    {"name": "Sita"}
                ])
            );
        }

        #[tokio::test]
        async fn facets_and_timeline() {
            let server = server().await;

            let (_, facets) = server.get("/api/facets").await;
            assert_eq!(facets["yuga"].as_array().unwrap().len(), 5);
            assert!(facets["region"]
                .as_array()
                .unwrap()
                .contains(&json!("Lanka")));

            let (_, timeline) = server.get("/api/timeline").await;
            assert_eq!(timeline["total"], 37);
            assert_eq!(timeline["eras"][0]["era"], "Satya Yuga");
            assert_eq!(timeline["eras"][4]["era"], "All Yugas");
        }
    }

    mod session_routes {
        use super::*;

        #[tokio::test]
        async fn stateful_routes_require_session_header() {
            let server = server().await;
            for uri in ["/api/explore", "/api/spotlight", "/api/settings", "/api/profile"] {
                let (status, _) = server.send(Method::GET, uri, None, None).await;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
                let (status, _) = server.send(Method::GET, uri, Some("abc"), None).await;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            }
        }

        #[tokio::test]
        async fn explore_flow() {
            let server = server().await;

            let (_, body) = server.get("/api/explore?type=Vanara").await;
            assert_eq!(ids(&body), ["hanuman", "sugriva"]);
            assert_eq!(body["typeParam"], "Vanara");

            let (_, body) = server
                .send(
                    Method::PUT,
                    "/api/explore/query",
                    Some(SESSION),
                    Some(json!({"query": "sugr"})),
                )
                .await;
            assert_eq!(ids(&body), ["sugriva"]);
            assert_eq!(body["activeCount"], 2);

            let (_, body) = server
                .send(
                    Method::POST,
                    "/api/explore/toggle",
                    Some(SESSION),
                    Some(json!({"facet": "type", "value": "Vanara", "selected": false})),
                )
                .await;
            assert_eq!(ids(&body), ["sugriva"]);
            assert_eq!(body["activeCount"], 1);

            let (_, body) = server
                .send(Method::POST, "/api/explore/reset", Some(SESSION), None)
                .await;
            assert_eq!(body["characters"].as_array().unwrap().len(), 37);
            assert_eq!(body["activeCount"], 0);
        }

        #[tokio::test]
        async fn spotlight_navigation() {
            let server = server().await;

            let (_, body) = server.get("/api/spotlight").await;
            assert_eq!(body["era"], "Satya Yuga");
            assert_eq!(body["characterIndex"], 0);

            let (_, body) = server
                .send(Method::POST, "/api/spotlight/prev-era", Some(SESSION), None)
                .await;
            assert_eq!(body["era"], "All Yugas");
            assert_eq!(body["featured"]["id"], "brahma");

            let (status, _) = server
                .send(Method::POST, "/api/spotlight/sideways", Some(SESSION), None)
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn settings_update_and_reset() {
            let server = server().await;

            let (_, defaults) = server.get("/api/settings").await;

            let (status, updated) = server
                .send(
                    Method::PUT,
                    "/api/settings",
                    Some(SESSION),
                    Some(json!({"palette": "midnight"})),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(updated["palette"], "midnight");
            assert_eq!(updated["fontSize"], defaults["fontSize"]);

            let (_, reread) = server.get("/api/settings").await;
            assert_eq!(reread, updated);

            let (_, reset) = server
                .send(Method::POST, "/api/settings/reset", Some(SESSION), None)
                .await;
            assert_eq!(reset, defaults);

            let (_, metadata) = server
                .send(Method::GET, "/api/settings/metadata", None, None)
                .await;
            assert_eq!(metadata.as_array().unwrap().len(), 3);
        }

        #[tokio::test]
        async fn profile_edit_and_favorites() {
            let server = server().await;

            let (status, _) = server
                .send(
                    Method::PUT,
                    "/api/profile",
                    Some(SESSION),
                    Some(json!({"email": "missing-at"})),
                )
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);

            let (_, profile) = server
                .send(
                    Method::POST,
                    "/api/profile/favorites/garuda",
                    Some(SESSION),
                    None,
                )
                .await;
            assert_eq!(profile["favorites"], json!(["garuda"]));

            let (status, _) = server
                .send(
                    Method::POST,
                    "/api/profile/favorites/nobody",
                    Some(SESSION),
                    None,
                )
                .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }
}
