use crate::errors::Result;
use crate::storage::{MemoryStorage, Storage};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStorageFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Storage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn() -> BoxedStorageFuture + Send + Sync>;

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> = Lazy::new(|| {
    let mut registry: HashMap<String, StorageConstructor> = HashMap::new();
    registry.insert(
        MemoryStorage::PLUGIN_NAME.to_string(),
        Arc::new(|| -> BoxedStorageFuture {
            Box::pin(async {
                let storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
                Ok(storage)
            })
        }),
    );
    RwLock::new(registry)
});

pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    // 注册表只存放构造函数，锁中毒时内容仍然可用
    let mut registry = STORAGE_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.insert(name, constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if registry.is_empty() {
        tracing::debug!("No storage plugins registered.");
    } else {
        tracing::debug!("Registered storage plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
