use serde::Serialize;

use crate::models::evaluations::entities::EvaluationRecord;
use crate::models::weights::entities::WeightConfiguration;

// 成绩列表响应
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationListResponse {
    pub items: Vec<EvaluationRecord>,
    pub total: usize,
    pub counted: usize,
}

impl EvaluationListResponse {
    pub fn from_records(items: Vec<EvaluationRecord>) -> Self {
        let counted = items.iter().filter(|r| r.counted).count();
        Self {
            total: items.len(),
            counted,
            items,
        }
    }
}

// 权重配置响应
#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    pub weights: WeightConfiguration,
    pub configured: bool,
    pub weights_consistent: bool,
}

impl From<WeightConfiguration> for WeightsResponse {
    fn from(weights: WeightConfiguration) -> Self {
        Self {
            configured: weights.is_configured(),
            weights_consistent: weights.weights_sum_to_hundred(),
            weights,
        }
    }
}
