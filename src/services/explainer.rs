//! Gemini 代码讲解 - 业务能力层
//!
//! 把提交代码和题目标题拼成固定模板的提示词，请求一次
//! generateContent，取第一个候选文本。整条链路是尽力而为：
//! 任何失败都由调用方记录日志，不影响抓取与持久化

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ExplainError;

/// 标题缺失时提示词中使用的占位
pub const UNKNOWN_PROBLEM: &str = "Unknown Problem";

/// Gemini 讲解客户端
pub struct Explainer {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl Explainer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            api_base: config.gemini_api_base.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// 是否配置了密钥（未配置时流程层直接跳过讲解）
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// 请求一次代码讲解
    ///
    /// # 参数
    /// - `code`: 提交的代码文本
    /// - `title`: 题目标题，未知时传 None
    ///
    /// # 返回
    /// 返回讲解全文
    pub async fn explain(&self, code: &str, title: Option<&str>) -> Result<String, ExplainError> {
        if !self.is_configured() {
            return Err(ExplainError::MissingApiKey);
        }

        let title = title.unwrap_or(UNKNOWN_PROBLEM);
        let prompt = build_prompt(code, title);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        debug!("调用 Gemini API，模型: {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "generationConfig": { "temperature": 0.4 }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let reply = parse_reply(&body).ok_or(ExplainError::EmptyReply)?;

        info!("📘 Gemini 讲解获取成功 ({} 字符)", reply.len());
        Ok(reply)
    }
}

/// 构建讲解提示词（要求模型按固定模板输出）
fn build_prompt(code: &str, title: &str) -> String {
    format!(
        r#"
Problem: {title}

Solution Approach: Brute Force

Logic Explanation based on code language (C++):
{code}

Now give the response in the following format:

Problem: [Problem Name and Number]
Solution Approach: [Brute Force/Optimized]
Logic Explanation based on code language:
[Your explanation here]

Complexity Analysis:

Time Complexity: O([complexity])
[Brief explanation of why this is the time complexity]

Space Complexity: O([complexity])
[Brief explanation of memory usage]
[Note any additional data structures created]
"#
    )
}

/// 从响应体中取 candidates[0].content.parts[0].text
///
/// 路径缺失属于已处理的失败，返回 None
fn parse_reply(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_title_and_code() {
        let prompt = build_prompt("def solve(): pass", "1. Two Sum");
        assert!(prompt.contains("Problem: 1. Two Sum"));
        assert!(prompt.contains("def solve(): pass"));
        assert!(prompt.contains("Complexity Analysis:"));
    }

    #[test]
    fn test_parse_reply_valid_body() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "这是一段讲解" }] }
            }]
        });
        assert_eq!(parse_reply(&body).as_deref(), Some("这是一段讲解"));
    }

    #[test]
    fn test_parse_reply_malformed_body() {
        assert_eq!(parse_reply(&json!({})), None);
        assert_eq!(parse_reply(&json!({ "candidates": [] })), None);
        assert_eq!(
            parse_reply(&json!({ "candidates": [{ "content": {} }] })),
            None
        );
        assert_eq!(
            parse_reply(&json!({ "candidates": [{ "content": { "parts": [{}] } }] })),
            None
        );
    }

    #[test]
    fn test_unconfigured_explainer_reports_missing_key() {
        let config = Config {
            gemini_api_key: String::new(),
            ..Config::default()
        };
        let explainer = Explainer::new(&config);
        assert!(!explainer.is_configured());
    }
}
