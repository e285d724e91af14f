use tracing::info;

use super::aggregator::aggregate;
use super::names::validate_unique_name;
use super::record_store::{EvaluationDraft, RecordStore};
use super::weights::ensure_configured;
use crate::errors::{GraderError, Result};
use crate::models::evaluations::entities::EvaluationRecord;
use crate::models::evaluations::requests::SubmitEvaluationForm;
use crate::models::weights::entities::WeightConfiguration;
use crate::utils::number::parse_decimal;

/// 一次考试的全部状态：成绩记录和权重配置
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    records: RecordStore,
    weights: WeightConfiguration,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一次提交：初始化配置、检查重名、计算分数、写入记录
    ///
    /// 配置在姓名校验之前写入，因此即使这次提交被拒绝，配置也会保留。
    pub fn submit(&mut self, form: &SubmitEvaluationForm) -> Result<EvaluationRecord> {
        ensure_configured(&mut self.weights, &form.weight_fields())?;

        let last_name =
            validate_unique_name(&form.first_name, &form.last_name, self.records.all())?;
        let hv_points = parse_points(&form.hv_points, "HV-Punkte")?;
        let lv_points = parse_points(&form.lv_points, "LV-Punkte")?;
        let scores = aggregate(hv_points, lv_points, &self.weights)?;

        let record = self.records.append(EvaluationDraft {
            first_name: form.first_name.clone(),
            last_name: last_name.to_string(),
            hv_points,
            lv_points,
            scores,
        })?;

        info!(
            "Evaluation {} created for {} {} (overall {:.2}% => {})",
            record.id,
            record.first_name,
            record.last_name,
            record.overall_percent,
            record.overall_grade
        );
        Ok(record)
    }

    pub fn toggle_counted(&mut self, id: i64) -> Result<EvaluationRecord> {
        self.records.toggle_counted(id)
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        self.records.all()
    }

    pub fn weights(&self) -> WeightConfiguration {
        self.weights
    }
}

fn parse_points(raw: &str, label: &str) -> Result<f64> {
    parse_decimal(raw)
        .ok_or_else(|| GraderError::validation(format!("{label} is not a number: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first_name: &str, last_name: &str, hv: &str, lv: &str) -> SubmitEvaluationForm {
        SubmitEvaluationForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            hv_max: "50".to_string(),
            hv_weight: "60".to_string(),
            lv_max: "30".to_string(),
            lv_weight: "40".to_string(),
            hv_points: hv.to_string(),
            lv_points: lv.to_string(),
        }
    }

    #[test]
    fn test_submit_computes_and_stores() {
        let mut book = Gradebook::new();
        let record = book.submit(&form("Anna", "Muster", "25", "15")).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.hv_percent, 50.0);
        assert_eq!(record.lv_percent, 50.0);
        assert_eq!(record.overall_percent, 50.0);
        assert_eq!(
            (record.hv_grade, record.lv_grade, record.overall_grade),
            (4, 4, 4)
        );
        assert!(record.counted);
        assert_eq!(book.records(), &[record]);
        assert_eq!(book.weights(), WeightConfiguration::new(50.0, 30.0, 60.0, 40.0));
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        let mut book = Gradebook::new();
        book.submit(&form("Anna", "Muster", "25", "15")).unwrap();

        let err = book.submit(&form("Anna", "Muster", "40", "20")).unwrap_err();
        assert!(matches!(err, GraderError::DuplicateName(_)));
        assert_eq!(book.records().len(), 1);

        let padded = book.submit(&form("Anna ", "Muster", "40", "20")).unwrap();
        assert_eq!(padded.id, 2);
        assert_eq!(book.records().len(), 2);
    }

    #[test]
    fn test_empty_last_name_never_stored() {
        let mut book = Gradebook::new();
        let err = book.submit(&form("Anna", "", "25", "15")).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));
        assert!(book.records().is_empty());

        // 配置在被拒绝的提交中也已写入
        assert!(book.weights().is_configured());
    }

    #[test]
    fn test_later_config_fields_ignored() {
        let mut book = Gradebook::new();
        book.submit(&form("Anna", "Muster", "25", "15")).unwrap();

        let mut second = form("Ben", "Kurz", "50", "30");
        second.hv_max = "100".to_string();
        second.lv_max = "100".to_string();
        second.hv_weight = "10".to_string();
        second.lv_weight = "90".to_string();
        let record = book.submit(&second).unwrap();

        assert_eq!(book.weights(), WeightConfiguration::new(50.0, 30.0, 60.0, 40.0));
        assert_eq!(record.hv_percent, 100.0);
        assert_eq!(record.overall_grade, 1);
    }

    #[test]
    fn test_invalid_points_rejected() {
        let mut book = Gradebook::new();
        let err = book.submit(&form("Anna", "Muster", "viele", "15")).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));
        assert!(book.records().is_empty());
    }

    #[test]
    fn test_overflowing_points_rejected() {
        let mut book = Gradebook::new();
        let mut first = form("Anna", "Muster", "25", "15");
        first.hv_weight = "0".to_string();
        first.lv_weight = "100".to_string();
        book.submit(&first).unwrap();

        let huge = format!("1{}", "0".repeat(400));
        let err = book.submit(&form("Ben", "Kurz", &huge, "15")).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));
        let err = book.submit(&form("Carl", "Lang", "10", &huge)).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));

        assert_eq!(book.records().len(), 1);
        assert!(book.records().iter().all(|r| r.overall_percent.is_finite()));
    }

    #[test]
    fn test_unconfigured_submission_fails_with_configuration_error() {
        let mut book = Gradebook::new();
        let mut first = form("Anna", "Muster", "25", "15");
        first.hv_max = String::new();

        let err = book.submit(&first).unwrap_err();
        assert!(matches!(err, GraderError::Configuration(_)));
        assert!(!book.weights().is_configured());
        assert!(book.records().is_empty());
    }

    #[test]
    fn test_ids_follow_record_count() {
        let mut book = Gradebook::new();
        book.submit(&form("Anna", "Muster", "25", "15")).unwrap();
        let _ = book.submit(&form("Anna", "Muster", "25", "15"));
        let _ = book.submit(&form("Ben", "", "25", "15"));
        let record = book.submit(&form("Ben", "Kurz", "10", "10")).unwrap();
        assert_eq!(record.id, 2);
    }

    #[test]
    fn test_toggle_through_gradebook() {
        let mut book = Gradebook::new();
        book.submit(&form("Anna", "Muster", "25", "15")).unwrap();
        assert!(!book.toggle_counted(1).unwrap().counted);
        assert!(book.toggle_counted(7).is_err());
        assert!(!book.records()[0].counted);
    }
}
