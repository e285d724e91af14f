use serde::Deserialize;

use crate::grading::weights::WeightFields;

/// 新增成绩的表单（application/x-www-form-urlencoded）
///
/// 字段名与页面表单保持一致，全部按原始字符串接收，数值在评分核心中解析。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitEvaluationForm {
    #[serde(rename = "vorname", default)]
    pub first_name: String,
    #[serde(rename = "nachname", default)]
    pub last_name: String,
    #[serde(default)]
    pub hv_max: String,
    #[serde(rename = "hv_gewichtung", default)]
    pub hv_weight: String,
    #[serde(default)]
    pub lv_max: String,
    #[serde(rename = "lv_gewichtung", default)]
    pub lv_weight: String,
    #[serde(rename = "hv_punkte", default)]
    pub hv_points: String,
    #[serde(rename = "lv_punkte", default)]
    pub lv_points: String,
}

impl SubmitEvaluationForm {
    pub fn weight_fields(&self) -> WeightFields<'_> {
        WeightFields {
            hv_max: &self.hv_max,
            hv_weight: &self.hv_weight,
            lv_max: &self.lv_max,
            lv_weight: &self.lv_weight,
        }
    }
}

/// 首页查询参数，`rejected` 为上一次提交被拒绝时的错误代码
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexQuery {
    pub rejected: Option<String>,
}
