//! 内部消息通道的数据模型
//!
//! 抓取侧发往展示面的消息格式

use serde::{Deserialize, Serialize};

/// popup 展示面需要的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupPayload {
    pub title: String,
    pub difficulty: String,
    pub topics: Vec<String>,
    pub code: String,
}

/// 抓取侧发往展示面的消息
///
/// 线上格式按 "type" 字段区分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtensionMessage {
    #[serde(rename = "LEETCODE_DATA")]
    LeetcodeData { payload: PopupPayload },
    #[serde(rename = "EXTRACTION_SUCCESS")]
    ExtractionSuccess,
}

impl ExtensionMessage {
    /// 从 JSON 文本解析消息；无法识别的类型返回 None（由接收方忽略）
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// 序列化为通道上传输的 JSON 文本
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
