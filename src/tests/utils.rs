use crate::db::{init_db, Database, ListingRepo};
use crate::router::{respond, RouterState};
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::Value;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// A fresh, empty SQLite file in a scratch directory removed on drop.
pub struct TempDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for TempDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

pub fn temp_db(prefix: &str) -> TempDb {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .unwrap_or_else(|e| panic!("could not create scratch dir: {e}"));
    let path = dir.path().join("listings.sqlite");

    TempDb {
        db: Database::new(path.to_string_lossy().into_owned()),
        _dir: dir,
    }
}

/// Router state over its own scratch database. Derefs to [`RouterState`].
pub struct TestState {
    state: RouterState,
    pub db: TempDb,
}

impl Deref for TestState {
    type Target = RouterState;

    fn deref(&self) -> &RouterState {
        &self.state
    }
}

/// Router state over a fresh database, mounted at `/listings`.
pub fn init_test_state() -> TestState {
    init_test_state_at("/listings")
}

pub fn init_test_state_at(base_path: &str) -> TestState {
    let db = temp_db("listings_test");
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestState {
        state: RouterState {
            listings: ListingRepo::new((*db).clone()),
            base_path: base_path.to_string(),
        },
        db,
    }
}

/// Run raw SQL against the test database, e.g. to break the store.
pub fn exec_sql(state: &TestState, sql: &str) {
    state
        .db
        .with_conn(|conn| {
            conn.execute_batch(sql)
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap_or_else(|e| panic!("{sql}: {e}"));
}

pub fn send(
    state: &RouterState,
    method: Method,
    uri: &str,
    accept: Option<&str>,
    body: Option<(&str, String)>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header("Accept", accept);
    }

    let req = match body {
        Some((content_type, data)) => builder
            .header("Content-Type", content_type)
            .body(Body::from(data))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    respond(req, state)
}

pub fn get_json(state: &RouterState, uri: &str) -> Response {
    send(state, Method::GET, uri, Some("application/json"), None)
}

pub fn send_json(state: &RouterState, method: Method, uri: &str, payload: Value) -> Response {
    send(
        state,
        method,
        uri,
        Some("application/json"),
        Some(("application/json", payload.to_string())),
    )
}

pub fn send_form(state: &RouterState, method: Method, uri: &str, form: &str) -> Response {
    send(
        state,
        method,
        uri,
        Some("text/html"),
        Some(("application/x-www-form-urlencoded", form.to_string())),
    )
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn read_json(resp: Response) -> Value {
    serde_json::from_str(&read_body(resp)).expect("response body is not JSON")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
