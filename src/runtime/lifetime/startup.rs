use crate::errors::Result;
use crate::runtime::lifetime::shutdown::ShutdownTrigger;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub shutdown: ShutdownTrigger,
}

/// 准备服务器启动的上下文
/// 包括存储后端和关闭信号
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        crate::storage::register::debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized");

    Ok(StartupContext {
        storage,
        shutdown: ShutdownTrigger::new(),
    })
}
