#![allow(dead_code)]

use std::net::TcpListener as StdTcpListener;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Runs the marquee binary against an isolated config directory
pub struct MarqueeTest {
    pub config_dir: TempDir,
    base_url: Option<String>,
}

impl MarqueeTest {
    pub fn new() -> Self {
        MarqueeTest {
            config_dir: TempDir::new().expect("Failed to create temp directory"),
            base_url: None,
        }
    }

    /// Point the binary at a mock backend through the environment
    pub fn with_backend(backend: &MockBackend) -> Self {
        let mut test = Self::new();
        test.base_url = Some(backend.base_url());
        test
    }

    /// Write a signed-in user into the config file
    pub fn sign_in(&self) -> &Self {
        self.run_success(&["config", "set", "user.name", "Dana"]);
        self.run_success(&["config", "set", "user.email", "dana@example.com"]);
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
        cmd.args(args)
            .env("MARQUEE_CONFIG_DIR", self.config_dir.path())
            .env_remove("MARQUEE_BASE_URL")
            .env_remove("MARQUEE_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());
        if let Some(url) = &self.base_url {
            cmd.env("MARQUEE_BASE_URL", url);
        }
        cmd.output().expect("Failed to execute marquee command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut args = args.to_vec();
        args.push("--json");
        let stdout = self.run_success(&args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("invalid JSON from {args:?}: {e}\n{stdout}"))
    }
}

pub fn movie(id: &str, title: &str, year: i32, rating: f64, duration: u32) -> Value {
    json!({
        "_id": id,
        "title": title,
        "genre": "Action",
        "poster": format!("https://img.example.com/{id}.jpg"),
        "duration": duration,
        "releaseYear": year,
        "rating": rating,
        "summary": format!("{title} is a movie about things."),
    })
}

/// Five records, two of which match "bat"
pub fn seed_movies() -> Vec<Value> {
    vec![
        movie("m1", "Heat", 1995, 4.5, 170),
        movie("m2", "Batman Begins", 2005, 4.0, 140),
        movie("m3", "Alien", 1979, 4.2, 117),
        movie("m4", "The Batman", 2022, 3.9, 176),
        movie("m5", "Up", 2009, 4.1, 96),
    ]
}

#[derive(Default)]
pub struct MockState {
    pub movies: Vec<Value>,
    pub favorites: Vec<Value>,
    /// "GET /api/movie?search=bat" style log, query string as sent
    pub requests: Vec<String>,
    /// Answer every search with this status
    pub fail_search: Option<u16>,
    /// Close the connection on every search without answering
    pub drop_search: bool,
    /// Report this deletedCount without touching the data
    pub delete_count: Option<u64>,
    next_id: u64,
}

impl MockState {
    fn collection(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "movie" => Some(&mut self.movies),
            "favmovie" => Some(&mut self.favorites),
            _ => None,
        }
    }
}

type Shared = Arc<Mutex<MockState>>;

/// In-process catalog server on an ephemeral port
pub struct MockBackend {
    pub state: Shared,
    port: u16,
}

impl MockBackend {
    pub fn start(movies: Vec<Value>, favorites: Vec<Value>) -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState {
            movies,
            favorites,
            ..Default::default()
        }));

        let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind mock backend");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let port = listener.local_addr().expect("local addr").port();

        let app = Router::new()
            .route("/api/{collection}", get(list_or_search).post(create))
            .route("/api/{collection}/{id}", get(get_one).delete(delete_one))
            .with_state(state.clone());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock runtime");
            rt.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("mock server");
            });
        });

        MockBackend { state, port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api", self.port)
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn favorites(&self) -> Vec<Value> {
        self.state.lock().unwrap().favorites.clone()
    }

    pub fn movies(&self) -> Vec<Value> {
        self.state.lock().unwrap().movies.clone()
    }
}

#[derive(serde::Deserialize)]
struct SearchParams {
    search: Option<String>,
}

async fn list_or_search(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    Query(params): Query<SearchParams>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    let line = match raw {
        Some(raw) => format!("GET /api/{collection}?{raw}"),
        None => format!("GET /api/{collection}"),
    };
    state.requests.push(line);

    if params.search.is_some() && state.drop_search {
        drop(state);
        // Unwinding the connection task closes the socket with no response
        std::panic::resume_unwind(Box::new("connection dropped"));
    }

    if let (Some(_), Some(status)) = (&params.search, state.fail_search) {
        return Err(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));
    }

    let records = state.collection(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let found: Vec<Value> = match params.search {
        Some(q) => records
            .iter()
            .filter(|m| {
                m["title"]
                    .as_str()
                    .is_some_and(|t| t.to_lowercase().contains(&q.to_lowercase()))
            })
            .cloned()
            .collect(),
        None => records.clone(),
    };
    Ok(Json(Value::Array(found)))
}

async fn get_one(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.requests.push(format!("GET /api/{collection}/{id}"));
    let records = state.collection(&collection).ok_or(StatusCode::NOT_FOUND)?;
    records
        .iter()
        .find(|m| m["_id"] == id.as_str())
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(
    State(state): State<Shared>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.requests.push(format!("POST /api/{collection}"));
    state.next_id += 1;
    let id = format!("new{}", state.next_id);
    body["_id"] = json!(id);
    state
        .collection(&collection)
        .ok_or(StatusCode::NOT_FOUND)?
        .push(body);
    Ok(Json(json!({ "acknowledged": true, "insertedId": id })))
}

async fn delete_one(
    State(state): State<Shared>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.requests.push(format!("DELETE /api/{collection}/{id}"));
    if let Some(count) = state.delete_count {
        return Ok(Json(json!({ "deletedCount": count })));
    }
    let records = state.collection(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let before = records.len();
    records.retain(|m| m["_id"] != id.as_str());
    Ok(Json(json!({ "deletedCount": before - records.len() })))
}
