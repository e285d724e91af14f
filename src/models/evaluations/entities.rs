use serde::{Deserialize, Serialize};

/// 一条学生成绩记录
///
/// 百分比和分数在创建时根据当时的权重配置计算一次，之后不再重新计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub hv_points: f64,
    pub hv_percent: f64,
    pub hv_grade: u8,
    pub lv_points: f64,
    pub lv_percent: f64,
    pub lv_grade: u8,
    pub overall_percent: f64,
    pub overall_grade: u8,
    /// 是否计入统计，创建时为 true
    pub counted: bool,
}
