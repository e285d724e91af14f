//! Exam Grader - 本地考试成绩评定服务
//!
//! 基于 Actix Web 构建的单用户成绩录入与导出工具，所有数据只保存在内存中。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `export`: PDF 成绩单导出
//! - `grading`: 评分核心（分档、加权、记录管理）
//! - `models`: 数据模型定义
//! - `routes`: 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数
//! - `views`: HTML 页面与片段渲染

pub mod config;
pub mod errors;
pub mod export;
pub mod grading;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
pub mod views;
