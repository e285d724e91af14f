use tracing::debug;

use super::aggregator::ScoreBreakdown;
use crate::errors::{GraderError, Result};
use crate::models::evaluations::entities::EvaluationRecord;

/// 待写入的记录，尚未分配 ID
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationDraft {
    pub first_name: String,
    pub last_name: String,
    pub hv_points: f64,
    pub lv_points: f64,
    pub scores: ScoreBreakdown,
}

/// 按插入顺序保存的成绩记录
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<EvaluationRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录，ID 为当前记录数 + 1
    ///
    /// 姓氏为空的记录不会写入。
    pub fn append(&mut self, draft: EvaluationDraft) -> Result<EvaluationRecord> {
        if draft.last_name.is_empty() {
            return Err(GraderError::validation("Last name must not be empty"));
        }

        let record = EvaluationRecord {
            id: self.records.len() as i64 + 1,
            first_name: draft.first_name,
            last_name: draft.last_name,
            hv_points: draft.hv_points,
            hv_percent: draft.scores.hv_percent,
            hv_grade: draft.scores.hv_grade,
            lv_points: draft.lv_points,
            lv_percent: draft.scores.lv_percent,
            lv_grade: draft.scores.lv_grade,
            overall_percent: draft.scores.overall_percent,
            overall_grade: draft.scores.overall_grade,
            counted: true,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// 切换第一条 ID 匹配记录的计入标志，返回更新后的记录
    pub fn toggle_counted(&mut self, id: i64) -> Result<EvaluationRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| GraderError::record_not_found(format!("No evaluation with id {id}")))?;

        record.counted = !record.counted;
        debug!("Evaluation {} counted = {}", record.id, record.counted);
        Ok(record.clone())
    }

    pub fn all(&self) -> &[EvaluationRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first_name: &str, last_name: &str) -> EvaluationDraft {
        EvaluationDraft {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            hv_points: 25.0,
            lv_points: 15.0,
            scores: ScoreBreakdown {
                hv_percent: 50.0,
                lv_percent: 50.0,
                hv_grade: 4,
                lv_grade: 4,
                overall_percent: 50.0,
                overall_grade: 4,
            },
        }
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut store = RecordStore::new();
        for (i, name) in ["Muster", "Beispiel", "Kurz"].iter().enumerate() {
            let record = store.append(draft("Anna", name)).unwrap();
            assert_eq!(record.id, i as i64 + 1);
            assert!(record.counted);
        }
        assert_eq!(store.all().len(), 3);
        let names: Vec<_> = store.all().iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, ["Muster", "Beispiel", "Kurz"]);
    }

    #[test]
    fn test_append_rejects_empty_last_name() {
        let mut store = RecordStore::new();
        store.append(draft("Anna", "Muster")).unwrap();

        let err = store.append(draft("Ben", "")).unwrap_err();
        assert!(matches!(err, GraderError::Validation(_)));
        assert_eq!(store.all().len(), 1);

        let record = store.append(draft("Ben", "Kurz")).unwrap();
        assert_eq!(record.id, 2);
    }

    #[test]
    fn test_append_snapshots_scores() {
        let mut store = RecordStore::new();
        let record = store.append(draft("Anna", "Muster")).unwrap();
        assert_eq!(record.hv_points, 25.0);
        assert_eq!(record.overall_percent, 50.0);
        assert_eq!(record.overall_grade, 4);
        assert_eq!(store.all()[0], record);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut store = RecordStore::new();
        store.append(draft("Anna", "Muster")).unwrap();
        store.append(draft("Ben", "Kurz")).unwrap();

        let toggled = store.toggle_counted(2).unwrap();
        assert!(!toggled.counted);
        assert!(store.all()[0].counted);
        assert!(!store.all()[1].counted);

        let toggled = store.toggle_counted(2).unwrap();
        assert!(toggled.counted);
        assert!(store.all()[1].counted);
    }

    #[test]
    fn test_toggle_changes_only_the_flag() {
        let mut store = RecordStore::new();
        let original = store.append(draft("Anna", "Muster")).unwrap();
        let toggled = store.toggle_counted(1).unwrap();
        assert_eq!(
            EvaluationRecord {
                counted: true,
                ..toggled
            },
            original
        );
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let mut store = RecordStore::new();
        store.append(draft("Anna", "Muster")).unwrap();
        let before = store.all().to_vec();

        let err = store.toggle_counted(42).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(store.all(), before.as_slice());
    }
}
