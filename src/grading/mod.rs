//! 评分核心：分数段划分、加权汇总、记录存储与一次性权重配置
//!
//! 这里的代码都是同步的纯内存操作，不依赖 HTTP 层。

pub mod aggregator;
pub mod bander;
pub mod gradebook;
pub mod names;
pub mod record_store;
pub mod weights;

pub use aggregator::{ScoreBreakdown, aggregate};
pub use bander::band;
pub use gradebook::Gradebook;
pub use record_store::{EvaluationDraft, RecordStore};
