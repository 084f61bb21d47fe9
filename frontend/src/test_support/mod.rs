#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::ApiClient;
    use crate::state::session::StaticTokenStore;
    use httpmock::MockServer;
    use leptos::*;
    use std::rc::Rc;

    /// Provides an [`ApiClient`] pointed at `server` with a fixed token.
    pub fn provide_api(server: &MockServer) -> ApiClient {
        let client = ApiClient::new_with_base_url(server.url("/api"))
            .with_token_store(Rc::new(StaticTokenStore::new(Some("test-access"), None)));
        provide_context(client.clone());
        client
    }

    pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..200 {
            if condition() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        false
    }
}
