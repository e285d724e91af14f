//! 纯内存存储后端
//!
//! 记录和权重配置放在同一个 `Gradebook` 中，由一把互斥锁保护，
//! 一次提交在一次加锁内完成，并发提交不会丢失更新或产生重复 ID。

use tokio::sync::Mutex;

use crate::errors::Result;
use crate::grading::Gradebook;
use crate::models::{
    evaluations::{entities::EvaluationRecord, requests::SubmitEvaluationForm},
    weights::entities::WeightConfiguration,
};
use crate::storage::Storage;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    gradebook: Mutex<Gradebook>,
}

impl MemoryStorage {
    pub const PLUGIN_NAME: &'static str = "memory";

    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn submit_evaluation(&self, form: SubmitEvaluationForm) -> Result<EvaluationRecord> {
        self.gradebook.lock().await.submit(&form)
    }

    async fn toggle_counted(&self, id: i64) -> Result<EvaluationRecord> {
        self.gradebook.lock().await.toggle_counted(id)
    }

    async fn list_evaluations(&self) -> Result<Vec<EvaluationRecord>> {
        Ok(self.gradebook.lock().await.records().to_vec())
    }

    async fn get_weights(&self) -> Result<WeightConfiguration> {
        Ok(self.gradebook.lock().await.weights())
    }
}
