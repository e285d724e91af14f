use tracing::{debug, warn};

use crate::errors::{GraderError, Result};
use crate::models::weights::entities::WeightConfiguration;
use crate::utils::number::parse_decimal;

/// 表单中的四个配置字段（原始字符串）
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightFields<'a> {
    pub hv_max: &'a str,
    pub hv_weight: &'a str,
    pub lv_max: &'a str,
    pub lv_weight: &'a str,
}

/// 仅在尚未配置时用表单值初始化权重配置，返回本次是否写入了配置
///
/// 配置一旦写入就不再改变，之后提交的配置字段全部忽略。
/// 候选配置无法解析或任一满分 ≤ 0 时不写入，返回配置错误。
pub fn ensure_configured(
    config: &mut WeightConfiguration,
    fields: &WeightFields<'_>,
) -> Result<bool> {
    if config.is_configured() {
        return Ok(false);
    }

    let candidate = WeightConfiguration {
        hv_max: parse_field(fields.hv_max, "HV-Max-Punkte")?,
        lv_max: parse_field(fields.lv_max, "LV-Max-Punkte")?,
        hv_weight: parse_field(fields.hv_weight, "HV-Gewichtung")?,
        lv_weight: parse_field(fields.lv_weight, "LV-Gewichtung")?,
    };

    if candidate.hv_max <= 0.0 || candidate.lv_max <= 0.0 {
        return Err(GraderError::configuration(format!(
            "Maximum points must be greater than zero (HV: {}, LV: {})",
            candidate.hv_max, candidate.lv_max
        )));
    }

    if !candidate.weights_sum_to_hundred() {
        warn!(
            "Weights do not add up to 100% (HV: {}%, LV: {}%), accepting anyway",
            candidate.hv_weight, candidate.lv_weight
        );
    }

    *config = candidate;
    debug!("Weight configuration set: {:?}", config);
    Ok(true)
}

fn parse_field(raw: &str, label: &str) -> Result<f64> {
    parse_decimal(raw)
        .ok_or_else(|| GraderError::configuration(format!("{label} is not a number: '{raw}'")))
}
