//! 错误类型
//!
//! 流程层统一使用 anyhow；Gemini 边界的失败需要被捕获并记录
//! 而不是向上传播，所以单独建类型

use thiserror::Error;

/// Gemini 讲解调用错误
///
/// 这些错误只会被记录日志，永远不会影响抓取/持久化的同步路径
#[derive(Debug, Error)]
pub enum ExplainError {
    /// API 密钥未配置
    #[error("未配置 GEMINI_API_KEY，跳过讲解")]
    MissingApiKey,

    /// 网络请求失败
    #[error("Gemini 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 非 2xx 状态码
    #[error("Gemini 返回错误状态: {status}")]
    BadStatus { status: u16 },

    /// 响应体中找不到 candidates[0].content.parts[0].text
    #[error("Gemini 响应中没有有效的候选文本")]
    EmptyReply,
}
