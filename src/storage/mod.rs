use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{GraderError, Result};
use crate::models::{
    evaluations::{entities::EvaluationRecord, requests::SubmitEvaluationForm},
    weights::entities::WeightConfiguration,
};

pub mod memory;
pub mod register;

pub use memory::MemoryStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 成绩管理方法
    // 提交一条成绩：配置初始化、重名检查、计算与写入作为一个整体完成
    async fn submit_evaluation(&self, form: SubmitEvaluationForm) -> Result<EvaluationRecord>;
    // 切换记录是否计入
    async fn toggle_counted(&self, id: i64) -> Result<EvaluationRecord>;
    // 按插入顺序列出全部记录
    async fn list_evaluations(&self) -> Result<Vec<EvaluationRecord>>;

    /// 权重配置方法
    // 获取当前权重配置
    async fn get_weights(&self) -> Result<WeightConfiguration>;
}

/// 根据配置的存储类型创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    create_storage_by_name(&AppConfig::get().storage.storage_type).await
}

pub async fn create_storage_by_name(name: &str) -> Result<Arc<dyn Storage>> {
    let constructor = register::get_storage_plugin(name).ok_or_else(|| {
        GraderError::storage_plugin_not_found(format!("Storage backend '{name}' is not registered"))
    })?;
    let storage = constructor().await?;
    Ok(Arc::from(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage_by_name("memory").await.unwrap();
        assert!(storage.list_evaluations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend() {
        let err = create_storage_by_name("sqlite").await.err().unwrap();
        assert_eq!(err.code(), "E008");
    }
}
