//! 页面内提示 - 业务能力层
//!
//! 向页面注入一个固定在右上角、自动消失的提示条

use anyhow::Result;
use tracing::{debug, warn};

use crate::infrastructure::JsExecutor;

/// 提示条颜色通道
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeColor {
    Green,
    Red,
}

impl NoticeColor {
    fn css(self) -> &'static str {
        match self {
            NoticeColor::Green => "green",
            NoticeColor::Red => "red",
        }
    }
}

/// 页面提示器
pub struct Notifier {
    duration_ms: u64,
    confirm_on_success: bool,
}

impl Notifier {
    pub fn new(duration_ms: u64, confirm_on_success: bool) -> Self {
        Self {
            duration_ms,
            confirm_on_success,
        }
    }

    /// 显示瞬时提示条
    ///
    /// 注入失败只记日志，提示属于尽力而为的步骤
    pub async fn show_notice(&self, executor: &JsExecutor, message: &str, color: NoticeColor) {
        let script = build_notice_script(message, color, self.duration_ms);
        match executor.eval(script).await {
            Ok(_) => debug!("页面提示已显示: {}", message),
            Err(e) => warn!("页面提示注入失败: {}", e),
        }
    }

    /// 抓取成功后的可选阻塞式确认框
    ///
    /// confirm() 会挂起页面脚本直到用户关闭，默认关闭此功能
    pub async fn confirm_success(&self, executor: &JsExecutor, message: &str) -> Result<()> {
        if !self.confirm_on_success {
            return Ok(());
        }
        let script = format!("window.confirm({})", serde_json::to_string(message)?);
        executor.eval(script).await?;
        Ok(())
    }
}

/// 构建提示条注入脚本
fn build_notice_script(message: &str, color: NoticeColor, duration_ms: u64) -> String {
    // JSON 转义防止消息文本破坏脚本结构
    let message_json = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());

    format!(
        r#"
        (() => {{
            const popup = document.createElement("div");
            popup.textContent = {message};
            popup.style.cssText = `
                position: fixed;
                top: 10px;
                right: 10px;
                background: {color};
                color: white;
                padding: 8px 12px;
                border-radius: 5px;
                z-index: 9999;
                font-size: 14px;
            `;
            document.body.appendChild(popup);
            setTimeout(() => popup.remove(), {duration});
            return true;
        }})()
        "#,
        message = message_json,
        color = color.css(),
        duration = duration_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_script_embeds_message_and_color() {
        let script = build_notice_script("✅ done", NoticeColor::Green, 3000);
        assert!(script.contains("\"✅ done\""));
        assert!(script.contains("background: green"));
        assert!(script.contains("popup.remove(), 3000"));
    }

    #[test]
    fn test_notice_script_escapes_quotes() {
        let script = build_notice_script(r#"he said "hi""#, NoticeColor::Red, 1000);
        assert!(script.contains(r#"\"hi\""#));
        assert!(script.contains("background: red"));
    }
}
