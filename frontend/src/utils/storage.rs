use thiserror::Error;
use web_sys::{Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("No localStorage")]
    NoLocalStorage,
    #[error("No sessionStorage")]
    NoSessionStorage,
}

pub fn window() -> Result<Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

pub fn local_storage() -> Result<Storage, StorageError> {
    window()?
        .local_storage()
        .map_err(|_| StorageError::NoLocalStorage)?
        .ok_or(StorageError::NoLocalStorage)
}

pub fn session_storage() -> Result<Storage, StorageError> {
    window()?
        .session_storage()
        .map_err(|_| StorageError::NoSessionStorage)?
        .ok_or(StorageError::NoSessionStorage)
}

pub fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}
