//! 抓取流程 - 流程层
//!
//! 核心职责：定义"一次通过的提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 抓取全部字段并组装记录（不会失败）
//! 2. 持久化到单槽位（覆盖旧记录），再显示页面提示
//! 3. 发消息给展示面，异步发起 Gemini 讲解（独立失败域）
//!
//! 讲解请求的任何失败只记日志，永远不影响步骤 1-2

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::infrastructure::JsExecutor;
use crate::models::{ExtensionMessage, SubmissionRecord};
use crate::services::extractor::{self, TITLE_NOT_FOUND};
use crate::services::notifier::NoticeColor;
use crate::services::{Explainer, Notifier, Storage};

const SUCCESS_NOTICE: &str = "✅ Problem data extracted successfully!";
const FAILURE_NOTICE: &str = "❌ Failed to save problem data.";

/// 抓取流程编排
///
/// - 不持有 page 资源，只依赖业务能力（services）
/// - 每次回调处理一条提交
pub struct ExtractionFlow {
    storage: Storage,
    notifier: Notifier,
    explainer: Arc<Explainer>,
    popup_tx: UnboundedSender<String>,
}

impl ExtractionFlow {
    pub fn new(config: &Config, popup_tx: UnboundedSender<String>) -> Self {
        Self {
            storage: Storage::new(&config.storage_file),
            notifier: Notifier::new(config.notice_duration_ms, config.confirm_on_success),
            explainer: Arc::new(Explainer::new(config)),
            popup_tx,
        }
    }

    /// 处理一次通过的提交
    pub async fn run(&self, executor: &JsExecutor) -> SubmissionRecord {
        // ========== 步骤 1: 抓取 + 持久化 ==========
        let record = extractor::extract_submission(executor).await;
        info!("✅ 提交数据抓取完成: {}", record.full_title);

        if let Err(e) = self.storage.save(&record).await {
            // 最坏情况：本地记录缺失。提示失败但流程继续返回记录
            error!("记录持久化失败: {:#}", e);
            self.notifier
                .show_notice(executor, FAILURE_NOTICE, NoticeColor::Red)
                .await;
            return record;
        }
        info!("💾 记录已持久化: {}", self.storage.path().display());

        // ========== 步骤 2: 页面提示 ==========
        self.notifier
            .show_notice(executor, SUCCESS_NOTICE, NoticeColor::Green)
            .await;
        if let Err(e) = self.notifier.confirm_success(executor, SUCCESS_NOTICE).await {
            warn!("确认框显示失败: {}", e);
        }

        // 通知展示面
        for message in build_messages(&record) {
            if self.popup_tx.send(message).is_err() {
                debug!("展示面已关闭，消息被丢弃");
                break;
            }
        }

        // ========== 步骤 3: 异步讲解（独立失败域）==========
        self.spawn_explanation(&record);

        record
    }

    /// 发起 Gemini 讲解请求，结果只记日志
    fn spawn_explanation(&self, record: &SubmissionRecord) {
        if !self.explainer.is_configured() {
            warn!("未配置 GEMINI_API_KEY，跳过讲解步骤");
            return;
        }

        let explainer = Arc::clone(&self.explainer);
        let code = record.submitted_code.clone();
        let title = prompt_title(record);

        tokio::spawn(async move {
            match explainer.explain(&code, title.as_deref()).await {
                Ok(text) => info!("📘 Gemini 讲解:\n\n{}", text),
                Err(e) => warn!("讲解请求失败: {}", e),
            }
        });
    }
}

/// 发给展示面的两条消息（数据 + 成功信号），已序列化为 JSON
fn build_messages(record: &SubmissionRecord) -> Vec<String> {
    vec![
        ExtensionMessage::LeetcodeData {
            payload: record.to_popup_payload(),
        }
        .to_json(),
        ExtensionMessage::ExtractionSuccess.to_json(),
    ]
}

/// 讲解提示词用的标题；抓取失败的哨兵标题不传给模型
fn prompt_title(record: &SubmissionRecord) -> Option<String> {
    if record.full_title == TITLE_NOT_FOUND {
        None
    } else {
        Some(record.full_title.clone())
    }
}
