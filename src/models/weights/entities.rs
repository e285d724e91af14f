use serde::{Deserialize, Serialize};

/// HV/LV 满分与权重配置
///
/// 初始全为 0，第一次提交时设置，之后不再变化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightConfiguration {
    pub hv_max: f64,
    pub lv_max: f64,
    pub hv_weight: f64, // 百分比
    pub lv_weight: f64, // 百分比
}

impl WeightConfiguration {
    pub fn new(hv_max: f64, lv_max: f64, hv_weight: f64, lv_weight: f64) -> Self {
        Self {
            hv_max,
            lv_max,
            hv_weight,
            lv_weight,
        }
    }

    /// HV 满分为 0 时视为尚未配置
    pub fn is_configured(&self) -> bool {
        self.hv_max != 0.0
    }

    /// 两个权重之和是否为 100
    ///
    /// 只用于提示，写入路径不会因此拒绝配置。
    pub fn weights_sum_to_hundred(&self) -> bool {
        (self.hv_weight + self.lv_weight - 100.0).abs() < 1e-9
    }
}
