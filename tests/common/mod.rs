//! Local stand-in for the Places JSON endpoints.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};

use lodgegrid::Config;

/// Canned answer for one request
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Text(&'static str),
    Status(StatusCode),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(value) => Json(value).into_response(),
            Reply::Text(body) => (StatusCode::OK, body).into_response(),
            Reply::Status(code) => code.into_response(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub endpoint: &'static str,
    pub params: HashMap<String, String>,
}

#[derive(Default)]
struct MockState {
    /// Keyed by `"{location}|{type}"` or `"pagetoken={token}"`
    nearby: HashMap<String, Reply>,
    /// Keyed by place id
    details: HashMap<String, Reply>,
    requests: Mutex<Vec<Request>>,
}

impl MockState {
    fn record(&self, endpoint: &'static str, params: &HashMap<String, String>) {
        self.requests.lock().unwrap().push(Request {
            endpoint,
            params: params.clone(),
        });
    }
}

#[derive(Default)]
pub struct MockPlacesBuilder {
    state: MockState,
}

impl MockPlacesBuilder {
    pub fn search(mut self, location: &str, category: &str, reply: Reply) -> Self {
        self.state
            .nearby
            .insert(format!("{}|{}", location, category), reply);
        self
    }

    pub fn page(mut self, token: &str, reply: Reply) -> Self {
        self.state
            .nearby
            .insert(format!("pagetoken={}", token), reply);
        self
    }

    pub fn details(mut self, place_id: &str, reply: Reply) -> Self {
        self.state.details.insert(place_id.to_string(), reply);
        self
    }

    pub async fn start(self) -> MockPlaces {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/nearbysearch/json", get(nearby_handler))
            .route("/details/json", get(details_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockPlaces {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

pub struct MockPlaces {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockPlaces {
    pub fn builder() -> MockPlacesBuilder {
        MockPlacesBuilder::default()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, endpoint: &str) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.endpoint == endpoint)
            .collect()
    }

    pub fn config(&self) -> Config {
        test_config(&self.base_url)
    }
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        page_token_delay_ms: 0,
        timeout_secs: 5,
        ..Config::default()
    }
}

async fn nearby_handler(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    state.record("nearbysearch", &params);

    let key = match params.get("pagetoken") {
        Some(token) => format!("pagetoken={}", token),
        None => format!(
            "{}|{}",
            params.get("location").map(String::as_str).unwrap_or_default(),
            params.get("type").map(String::as_str).unwrap_or_default()
        ),
    };

    state
        .nearby
        .get(&key)
        .cloned()
        .unwrap_or_else(|| Reply::Json(json!({"status": "ZERO_RESULTS", "results": []})))
}

async fn details_handler(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    state.record("details", &params);

    params
        .get("place_id")
        .and_then(|id| state.details.get(id))
        .cloned()
        .unwrap_or_else(|| Reply::Json(json!({"status": "NOT_FOUND"})))
}

/// A Nearby Search result element
pub fn raw_place(place_id: &str, name: &str) -> Value {
    json!({
        "place_id": place_id,
        "name": name,
        "vicinity": format!("{} street", name),
        "geometry": {"location": {"lat": 49.84, "lng": 24.03}},
        "types": ["lodging", "point_of_interest", "establishment"]
    })
}

pub fn search_page(results: Vec<Value>, next_page_token: Option<&str>) -> Reply {
    let mut body = json!({"status": "OK", "results": results});
    if let Some(token) = next_page_token {
        body["next_page_token"] = json!(token);
    }
    Reply::Json(body)
}
