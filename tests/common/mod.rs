#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use snaplink::infrastructure::memory::InMemoryLinkRepository;
use snaplink::routes::router;
use snaplink::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()), BASE_URL)
}

pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(router(state.clone())).unwrap();
    (server, state)
}
