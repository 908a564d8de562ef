//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 `TokenStorage`。

use shortdash::session::{StorageError, TokenStorage};

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError("window is not available".into()))?
            .local_storage()
            .map_err(|e| StorageError(format!("{:?}", e)))?
            .ok_or_else(|| StorageError("localStorage is disabled".into()))
    }
}

impl TokenStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }
}
