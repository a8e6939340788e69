#![allow(dead_code)]

use pulga_cache::SessionStore;
use pulga_client::{ClientConfig, Navigator, StorefrontApi, StorefrontView};
use pulga_fetch::MockTransport;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const API_URL: &str = "http://api.test";
pub const DETAIL_URL: &str = "http://detail.test";

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
    pub scrolls: Mutex<u32>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }

    pub fn scrolls(&self) -> u32 {
        *self.scrolls.lock().unwrap()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.lock().unwrap().push(url.to_string());
    }

    fn scroll_to_top(&self) {
        *self.scrolls.lock().unwrap() += 1;
    }
}

pub struct Harness {
    pub mock: Arc<MockTransport>,
    pub session: SessionStore,
    pub api: StorefrontApi,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        let mock = Arc::new(MockTransport::new());
        let session = SessionStore::in_memory();
        let config = ClientConfig::new(API_URL).with_detail_url(DETAIL_URL);
        let api = StorefrontApi::with_transport(config, session.clone(), mock.clone());
        Self {
            mock,
            session,
            api,
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }

    pub fn view(&self) -> StorefrontView {
        StorefrontView::new(self.api.clone(), self.navigator.clone())
    }
}

pub fn product(n: u32) -> Value {
    json!({
        "id": format!("pub-{n}"),
        "id_producto": format!("p-{n}"),
        "titulo": format!("Product {n}"),
        "precio": 15000,
        "categoria": "HOGAR",
        "condicion": "NUEVO"
    })
}

pub fn products(count: u32) -> Vec<Value> {
    (1..=count).map(product).collect()
}

pub fn envelope(count: u32, total: u64, total_pages: u32) -> Value {
    json!({
        "productos": products(count),
        "metadata": {"total": total, "totalPages": total_pages}
    })
}
