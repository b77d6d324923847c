#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use snaplink::domain::code_generator::CodeGenerator;
use snaplink::domain::entities::{NewShortLink, ShortLink};
use snaplink::domain::errors::{GeneratorError, StoreError};
use snaplink::domain::repositories::ShortLinkRepository;
use snaplink::infrastructure::persistence::InMemoryShortLinkRepository;
use snaplink::routes::app_router;
use snaplink::state::{AppSettings, AppState};
use snaplink::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "https://s.example.com";

pub fn test_settings() -> AppSettings {
    AppSettings {
        base_url: BASE_URL.to_string(),
        ..AppSettings::default()
    }
}

/// State over a fresh in-memory store; the store is returned for inspection.
pub fn create_test_state(
    generator: Arc<dyn CodeGenerator>,
    settings: AppSettings,
) -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let state = AppState::new(repository.clone(), generator, settings);
    (state, repository)
}

pub fn create_default_state() -> (AppState, Arc<InMemoryShortLinkRepository>) {
    create_test_state(Arc::new(RandomCodeGenerator::default()), test_settings())
}

/// Full router without rate limiting.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, None).unwrap()).unwrap()
}

/// Returns the scripted code for each attempt, repeating the last one.
pub struct ScriptedCodeGenerator {
    codes: Vec<String>,
}

impl ScriptedCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CodeGenerator for ScriptedCodeGenerator {
    fn generate(&self, _long_url: &str, attempt: u32) -> Result<String, GeneratorError> {
        let index = (attempt as usize).min(self.codes.len() - 1);
        Ok(self.codes[index].clone())
    }
}

/// Hands out codes from a list in call order, across requests.
pub struct QueueCodeGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
}

impl QueueCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }

    /// Number of codes handed out so far.
    pub fn calls(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for QueueCodeGenerator {
    fn generate(&self, _long_url: &str, _attempt: u32) -> Result<String, GeneratorError> {
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.codes.len();
        Ok(self.codes[index].clone())
    }
}

/// Store whose backend is always down.
pub struct UnavailableRepository;

#[async_trait]
impl ShortLinkRepository for UnavailableRepository {
    async fn insert_unique(&self, _new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn lookup(&self, _code: &str) -> Result<Option<ShortLink>, StoreError> {
        Err(StoreError::Timeout("lookup exceeded 2000ms".to_string()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn create_unavailable_server() -> TestServer {
    let state = AppState::new(
        Arc::new(UnavailableRepository),
        Arc::new(RandomCodeGenerator::default()),
        test_settings(),
    );
    create_test_server(state)
}

pub async fn insert_link(repository: &InMemoryShortLinkRepository, code: &str, url: &str) {
    repository
        .insert_unique(NewShortLink::new(code, url))
        .await
        .unwrap();
}
