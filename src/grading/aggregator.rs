use serde::Serialize;

use super::bander::band;
use crate::errors::{GraderError, Result};
use crate::models::weights::entities::WeightConfiguration;

/// 一次汇总的计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub hv_percent: f64,
    pub lv_percent: f64,
    pub hv_grade: u8,
    pub lv_grade: u8,
    pub overall_percent: f64,
    pub overall_grade: u8,
}

/// 根据原始分和权重配置计算百分比、加权总百分比和三个分数
///
/// 满分 ≤ 0 时返回配置错误；结果溢出为无穷大或 NaN 时返回校验错误。
pub fn aggregate(
    hv_points: f64,
    lv_points: f64,
    config: &WeightConfiguration,
) -> Result<ScoreBreakdown> {
    if config.hv_max <= 0.0 || config.lv_max <= 0.0 {
        return Err(GraderError::configuration(format!(
            "Maximum points must be greater than zero (HV: {}, LV: {})",
            config.hv_max, config.lv_max
        )));
    }

    let hv_percent = 100.0 * hv_points / config.hv_max;
    let lv_percent = 100.0 * lv_points / config.lv_max;
    let overall_percent =
        hv_percent * config.hv_weight / 100.0 + lv_percent * config.lv_weight / 100.0;

    if !(hv_percent.is_finite() && lv_percent.is_finite() && overall_percent.is_finite()) {
        return Err(GraderError::validation(format!(
            "Points out of range (HV: {hv_points}, LV: {lv_points})"
        )));
    }

    Ok(ScoreBreakdown {
        hv_percent,
        lv_percent,
        hv_grade: band(hv_percent),
        lv_grade: band(lv_percent),
        overall_percent,
        overall_grade: band(overall_percent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_half_points_everywhere() {
        let config = WeightConfiguration::new(50.0, 30.0, 60.0, 40.0);
        let scores = aggregate(25.0, 15.0, &config).unwrap();
        assert_eq!(scores.hv_percent, 50.0);
        assert_eq!(scores.lv_percent, 50.0);
        assert_eq!(scores.overall_percent, 50.0);
        assert_eq!(scores.hv_grade, 4);
        assert_eq!(scores.lv_grade, 4);
        assert_eq!(scores.overall_grade, 4);
    }

    #[test]
    fn test_weighted_overall() {
        let config = WeightConfiguration::new(40.0, 20.0, 70.0, 30.0);
        let scores = aggregate(38.0, 8.0, &config).unwrap();
        assert!(approx(scores.hv_percent, 95.0));
        assert!(approx(scores.lv_percent, 40.0));
        assert!(approx(scores.overall_percent, 78.5));
        assert_eq!(scores.hv_grade, 1);
        assert_eq!(scores.lv_grade, 5);
        assert_eq!(scores.overall_grade, 3);
    }

    #[test]
    fn test_deterministic() {
        let config = WeightConfiguration::new(37.5, 22.0, 55.0, 45.0);
        let first = aggregate(19.25, 17.0, &config).unwrap();
        for _ in 0..10 {
            assert_eq!(aggregate(19.25, 17.0, &config).unwrap(), first);
        }
    }

    #[test]
    fn test_inconsistent_weights_are_still_applied() {
        let config = WeightConfiguration::new(10.0, 10.0, 80.0, 80.0);
        let scores = aggregate(10.0, 10.0, &config).unwrap();
        assert!(approx(scores.overall_percent, 160.0));
        assert_eq!(scores.overall_grade, 1);
    }

    #[test]
    fn test_overflowing_percentage_is_rejected() {
        let config = WeightConfiguration::new(0.5, 30.0, 0.0, 100.0);
        let err = aggregate(f64::MAX, 15.0, &config).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));

        let err = aggregate(f64::INFINITY, 15.0, &config).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_zero_maximum_is_configuration_error() {
        let err = aggregate(10.0, 10.0, &WeightConfiguration::default()).unwrap_err();
        assert_eq!(err.code(), "E003");

        let config = WeightConfiguration::new(30.0, 0.0, 50.0, 50.0);
        assert!(matches!(
            aggregate(10.0, 10.0, &config),
            Err(GraderError::Configuration(_))
        ));
    }
}
