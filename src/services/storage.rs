//! 单槽位持久化 - 业务能力层
//!
//! 本地只保留最近一次通过提交的记录，每次写入整体覆盖，
//! 不保留历史

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tokio::fs;
use tracing::{debug, warn};

use crate::models::SubmissionRecord;

/// 持久化槽位的键名
pub const STORAGE_KEY: &str = "lastAcceptedSubmission";

/// 单槽位存储
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入记录，覆盖旧内容
    pub async fn save(&self, record: &SubmissionRecord) -> Result<()> {
        let document = json!({ STORAGE_KEY: record });
        let content = serde_json::to_string_pretty(&document)?;

        fs::write(&self.path, content)
            .await
            .with_context(|| format!("无法写入存储文件: {}", self.path.display()))?;

        debug!("记录已写入: {}", self.path.display());
        Ok(())
    }

    /// 读取最近一次保存的记录
    ///
    /// 文件不存在或无法解析时返回 None（读取失败不是致命错误）
    pub async fn load_last(&self) -> Option<SubmissionRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(_) => return None,
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                warn!("存储文件无法解析 {}: {}", self.path.display(), e);
                return None;
            }
        };

        serde_json::from_value(document.get(STORAGE_KEY)?.clone()).ok()
    }
}
