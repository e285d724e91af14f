use crate::errors::{GraderError, Result};
use crate::models::evaluations::entities::EvaluationRecord;

/// 检查姓名是否已存在，不存在时原样返回姓氏
///
/// 只做大小写敏感的完全匹配，不去除空白。
pub fn validate_unique_name<'a>(
    first_name: &str,
    last_name: &'a str,
    existing: &[EvaluationRecord],
) -> Result<&'a str> {
    let duplicate = existing
        .iter()
        .any(|record| record.first_name == first_name && record.last_name == last_name);

    if duplicate {
        return Err(GraderError::duplicate_name(format!(
            "'{first_name} {last_name}' already has an evaluation"
        )));
    }
    Ok(last_name)
}
