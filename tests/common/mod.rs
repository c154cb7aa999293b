#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use robot_backend::application::services::{
    AskService, ProviderChain, QueryNormalizer, RegistryFetcher, ResolutionService,
};
use robot_backend::domain::clients::{PageSource, SearchProvider, TextGenerator, WeatherSource};
use robot_backend::domain::weather::CurrentWeather;
use robot_backend::error::ClientError;
use robot_backend::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ROMASHKA_URL: &str = "https://orginfo.uz/organization/abc123/";
pub const VASILEK_URL: &str = "https://orginfo.uz/organization/def456/";

pub const ROMASHKA_PAGE: &str = r#"<html><body>
<h1>ООО «Ромашка»</h1>
<dl>
  <dt>ИНН</dt><dd>301234567</dd>
  <dt>Статус</dt><dd>Действующий</dd>
  <dt>Адрес</dt><dd>г. Ташкент</dd>
</dl>
</body></html>"#;

pub const VASILEK_PAGE: &str = r#"<html><body>
<h1>ЧП «Василёк»</h1>
<table><tr><td>ИНН</td><td>309876543</td></tr></table>
</body></html>"#;

/// Completion API stand-in with a fixed reply.
pub struct FakeGenerator {
    reply: Option<String>,
}

impl FakeGenerator {
    pub fn unconfigured() -> Self {
        Self { reply: None }
    }

    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn is_configured(&self) -> bool {
        self.reply.is_some()
    }

    async fn complete(&self, _system: &str, _user: &str, _max: u32) -> Result<String, ClientError> {
        self.reply
            .clone()
            .ok_or(ClientError::NotConfigured("OPENAI_API_KEY"))
    }
}

/// Search provider returning fixed links and counting calls.
pub struct FakeSearch {
    name: &'static str,
    links: Vec<String>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeSearch {
    pub fn new(name: &'static str, links: &[&str]) -> Self {
        Self {
            name,
            links: links.iter().map(|l| l.to_string()).collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn search(&self, _phrase: &str, max_results: usize) -> Result<Vec<String>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.links.iter().take(max_results).cloned().collect())
    }
}

/// Registry pages served from memory; unknown URLs answer 404.
pub struct FakePages {
    pages: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
}

impl FakePages {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, html)| (url.to_string(), html.to_string()))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn registry() -> Self {
        Self::new(&[(ROMASHKA_URL, ROMASHKA_PAGE), (VASILEK_URL, VASILEK_PAGE)])
    }
}

#[async_trait]
impl PageSource for FakePages {
    async fn fetch_page(&self, url: &str) -> Result<String, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages.get(url).cloned().ok_or(ClientError::Status {
            status: 404,
            body: "not found".to_string(),
        })
    }
}

pub struct FakeWeather;

#[async_trait]
impl WeatherSource for FakeWeather {
    async fn current_weather(&self) -> Result<CurrentWeather, ClientError> {
        Ok(CurrentWeather {
            temperature: Some(21.0),
            weather_code: Some(2),
        })
    }
}

pub fn create_test_state(
    generator: FakeGenerator,
    providers: Vec<FakeSearch>,
    pages: FakePages,
) -> AppState {
    let generator: Arc<dyn TextGenerator> = Arc::new(generator);
    let providers: Vec<Arc<dyn SearchProvider>> = providers
        .into_iter()
        .map(|p| Arc::new(p) as Arc<dyn SearchProvider>)
        .collect();
    let fetcher = Arc::new(RegistryFetcher::new(Arc::new(pages)));

    let resolution_service = Arc::new(ResolutionService::new(
        QueryNormalizer::new(generator.clone()),
        ProviderChain::new(providers),
        fetcher.clone(),
        1,
    ));
    let ask_service = Arc::new(AskService::new(generator, fetcher, Arc::new(FakeWeather)));

    AppState::new(resolution_service, ask_service)
}

/// State with no completion API, one provider returning both registry pages.
pub fn default_test_state() -> AppState {
    create_test_state(
        FakeGenerator::unconfigured(),
        vec![FakeSearch::new("fake", &[ROMASHKA_URL, VASILEK_URL])],
        FakePages::registry(),
    )
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Decodes a raw query string into key/value pairs.
pub fn query_pairs(raw: Option<String>) -> HashMap<String, String> {
    url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}
