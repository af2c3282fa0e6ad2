//! # LeetCode Extractor
//!
//! 一个通过 CDP 监控 LeetCode 提交结果并自动抓取题目数据的 Rust 工具
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次提交
//! - `extractor` - 七个独立的 DOM 字段抓取器 + 聚合
//! - `parse` - 纯文本解析（标题拆分 / 示例块 / 复杂度行）
//! - `Storage` - 单槽位本地持久化能力
//! - `Notifier` - 页面内提示能力
//! - `Explainer` - Gemini 代码讲解能力
//!
//! ### ③ 监控层（Watcher）
//! - `watcher/` - 检测 "Accepted" 状态与页内导航
//! - `SessionState` - 每页会话状态（已抓取标志 + 上次 URL）
//! - `SubmissionWatcher` - 变更探针 + 轮询循环，回调注册
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一次通过提交"的完整处理流程
//! - `ExtractionFlow` - 流程编排（抓取 → 持久化 → 提示 → 讲解）

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod popup;
pub mod services;
pub mod watcher;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use browser::connect_to_browser_and_page;
pub use config::Config;
pub use error::ExplainError;
pub use infrastructure::JsExecutor;
pub use models::{Example, ExtensionMessage, PopupPayload, SubmissionRecord};
pub use watcher::{SessionState, SubmissionWatcher};
pub use workflow::ExtractionFlow;
