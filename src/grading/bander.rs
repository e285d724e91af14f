/// 分数段上限（含）与对应分数，按上限升序排列
///
/// | 百分比 ≤ | 分数 |
/// |---------|------|
/// | 22      | 6    |
/// | 49      | 5    |
/// | 64      | 4    |
/// | 79      | 3    |
/// | 94      | 2    |
/// | 其余    | 1    |
pub const GRADE_BANDS: [(f64, u8); 5] = [(22.0, 6), (49.0, 5), (64.0, 4), (79.0, 3), (94.0, 2)];

pub const BEST_GRADE: u8 = 1;
pub const WORST_GRADE: u8 = 6;

/// 将百分比映射为 1–6 的分数，不做范围校验
pub fn band(percentage: f64) -> u8 {
    GRADE_BANDS
        .iter()
        .find(|(upper, _)| percentage <= *upper)
        .map_or(BEST_GRADE, |(_, grade)| *grade)
}
