//! Access to the credentials issued at login.
//!
//! Login itself happens outside this application; the pages only read the
//! tokens it left behind. The API client receives a [`TokenStore`] instead
//! of reaching for browser storage, so tests and embedders can hand it a
//! fixed token.

use std::cell::RefCell;
use web_sys::Storage;

use crate::utils::storage::{self as storage_utils, read_item};

pub const ACCESS_TOKEN_KEY: &str = "tt_access";
pub const REFRESH_TOKEN_KEY: &str = "tt_refresh";
const CONTEXT_KEY: &str = "tt_context";

pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store_access_token(&self, token: &str);
    fn clear(&self);
}

/// Tokens kept by the login screen in web storage.
///
/// "Remember me" sessions live in localStorage, the rest in sessionStorage;
/// whichever holds the access token (or the tenant context) wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn active_storage(&self) -> Option<Storage> {
        if let Ok(local) = storage_utils::local_storage() {
            if read_item(&local, ACCESS_TOKEN_KEY).is_some()
                || read_item(&local, CONTEXT_KEY).is_some()
            {
                return Some(local);
            }
        }
        match storage_utils::session_storage() {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("token storage unavailable: {}", err);
                None
            }
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        self.active_storage()
            .and_then(|s| read_item(&s, ACCESS_TOKEN_KEY))
    }

    fn refresh_token(&self) -> Option<String> {
        self.active_storage()
            .and_then(|s| read_item(&s, REFRESH_TOKEN_KEY))
    }

    fn store_access_token(&self, token: &str) {
        if let Some(storage) = self.active_storage() {
            if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
                log::warn!("could not persist refreshed access token");
            }
        }
    }

    fn clear(&self) {
        for storage in [
            storage_utils::local_storage().ok(),
            storage_utils::session_storage().ok(),
        ]
        .into_iter()
        .flatten()
        {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct StaticTokenStore {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
}

impl StaticTokenStore {
    pub fn new(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self {
            access: RefCell::new(access.map(str::to_string)),
            refresh: RefCell::new(refresh.map(str::to_string)),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl TokenStore for StaticTokenStore {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn store_access_token(&self, token: &str) {
        *self.access.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.access.borrow_mut().take();
        self.refresh.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_store_keeps_refreshed_token() {
        let store = StaticTokenStore::new(Some("old"), Some("r1"));
        assert_eq!(store.access_token().as_deref(), Some("old"));
        store.store_access_token("new");
        assert_eq!(store.access_token().as_deref(), Some("new"));
        assert_eq!(store.refresh_token().as_deref(), Some("r1"));
        store.clear();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
