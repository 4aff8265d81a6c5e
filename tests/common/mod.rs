//! Helpers for integration tests.

use httpmock::MockServer;
use pushkind_storefront::client::HttpInventoryApi;
use pushkind_storefront::models::config::ClientConfig;
use pushkind_storefront::processing::bridge::FormBridge;
use pushkind_storefront::view::MemoryView;

pub type TestBridge = FormBridge<HttpInventoryApi, MemoryView>;

/// Bridge talking to the given mock server and rendering into memory.
pub fn bridge_for(server: &MockServer) -> TestBridge {
    bridge_at(&server.base_url())
}

/// Bridge for an arbitrary API base, reachable or not.
pub fn bridge_at(api_base: &str) -> TestBridge {
    let config = ClientConfig {
        api_base: api_base.to_string(),
        ..Default::default()
    };
    let api = HttpInventoryApi::new(&config).expect("Failed to create API client.");
    FormBridge::new(api, MemoryView::new(), &config)
}
