//! 展示面（popup surface）
//!
//! 从内部消息通道接收抓取结果，把标题/难度/标签/代码渲染成
//! 标记文本。无法识别的消息类型一律忽略

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::models::{ExtensionMessage, PopupPayload};

/// 把 payload 渲染成展示用的标记文本
pub fn render_output(payload: &PopupPayload) -> String {
    format!(
        "<strong>Title:</strong> {}<br/>\n\
         <strong>Difficulty:</strong> {}<br/>\n\
         <strong>Topics:</strong> {}<br/>\n\
         <strong>Code:</strong>\n<pre>{}</pre>",
        payload.title,
        payload.difficulty,
        payload.topics.join(", "),
        payload.code,
    )
}

/// 启动展示面监听任务
///
/// 消费通道里的 JSON 消息直到发送端全部关闭
pub fn spawn_listener(mut rx: UnboundedReceiver<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(raw) = rx.recv().await {
            match ExtensionMessage::from_json(&raw) {
                Some(ExtensionMessage::LeetcodeData { payload }) => {
                    info!("📥 展示面收到抓取数据:\n{}", render_output(&payload));
                }
                Some(ExtensionMessage::ExtractionSuccess) => {
                    info!("📥 展示面确认: 抓取成功");
                }
                None => {
                    debug!("忽略无法识别的消息: {}", raw);
                }
            }
        }
        debug!("展示面通道已关闭");
    })
}
