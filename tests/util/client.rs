use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Method, Request, StatusCode,
    },
    Router,
};
use recipe_app::server::{
    model::{app::AppState, session::user::SESSION_USER_ID_KEY},
    router::routes,
};
use recipe_test_utils::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

/// Name of the session cookie set by [`SessionManagerLayer`].
const SESSION_COOKIE: &str = "id";

/// Drives the full router in-process, carrying the session cookie between requests.
pub struct ApiClient {
    router: Router,
    store: Arc<MemoryStore>,
    cookie: Option<String>,
}

/// Status and raw body of a response.
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl ApiClient {
    /// Builds a client whose sessions share the store of `test`.
    pub fn new(test: &TestSetup) -> Self {
        let state: AppState = test.state();
        let router = routes()
            .with_state(state)
            .layer(SessionManagerLayer::new((*test.store).clone()));

        Self {
            router,
            store: test.store.clone(),
            cookie: None,
        }
    }

    /// Authenticates subsequent requests as `user_id` without checking credentials.
    pub async fn force_authenticate(&mut self, user_id: i32) -> Result<(), TestError> {
        let session = Session::new(None, self.store.clone(), None);
        session.insert(SESSION_USER_ID_KEY, user_id).await?;
        session.save().await?;

        let session_id = session.id().expect("saved session has an ID");
        self.cookie = Some(session_id.to_string());

        Ok(())
    }

    pub async fn get(&mut self, path: &str) -> ApiResponse {
        self.send(Method::GET, path, Body::empty()).await
    }

    pub async fn post<T: Serialize>(&mut self, path: &str, payload: &T) -> ApiResponse {
        let body = serde_json::to_vec(payload).expect("payload serializes to JSON");

        self.send(Method::POST, path, Body::from(body)).await
    }

    async fn send(&mut self, method: Method, path: &str, body: Body) -> ApiResponse {
        let mut request = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, cookie));
        }
        let request = request.body(body).expect("request is well formed");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});

        self.track_cookie(response.headers().get_all(SET_COOKIE).iter());

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body is readable");

        ApiResponse {
            status,
            body: body.to_vec(),
        }
    }

    /// Follows session cookie changes the same way a browser would.
    fn track_cookie<'a>(&mut self, headers: impl Iterator<Item = &'a axum::http::HeaderValue>) {
        for header in headers {
            let Ok(header) = header.to_str() else {
                continue;
            };
            let Some(value) = header
                .split(';')
                .next()
                .and_then(|pair| pair.trim().strip_prefix(SESSION_COOKIE))
                .and_then(|rest| rest.strip_prefix('='))
            else {
                continue;
            };

            let removed = value.is_empty() || header.contains("Max-Age=0");
            self.cookie = (!removed).then(|| value.to_string());
        }
    }
}
