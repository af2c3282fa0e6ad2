//! 应用编排
//!
//! 连接浏览器 → 启动展示面监听 → 布防提交监控，
//! 监控回调驱动抓取流程

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::JsExecutor;
use crate::popup;
use crate::watcher::SubmissionWatcher;
use crate::workflow::ExtractionFlow;

/// 应用主结构
pub struct App {
    config: Config,
    // Browser 句柄必须存活到程序结束，否则 CDP 连接被关闭
    _browser: Browser,
    executor: JsExecutor,
}

impl App {
    /// 初始化应用：连接（或启动）浏览器并定位 LeetCode 页面
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let (browser, page) = match browser::connect_to_browser_and_page(
            config.browser_debug_port,
            &config.target_url,
            &config.page_title_hint,
        )
        .await
        {
            Ok(pair) => pair,
            Err(e) => {
                warn!("连接调试端口失败: {}，改为启动自有浏览器实例", e);
                browser::launch_browser(&config.target_url, config.chrome_executable.as_deref())
                    .await
                    .context("浏览器兜底启动也失败了")?
            }
        };

        Ok(Self {
            config,
            _browser: browser,
            executor: JsExecutor::new(page),
        })
    }

    /// 运行应用主逻辑（监控循环不会自行结束）
    pub async fn run(&self) -> Result<()> {
        // 展示面监听
        let (popup_tx, popup_rx) = mpsc::unbounded_channel();
        let popup_handle = popup::spawn_listener(popup_rx);

        let flow = ExtractionFlow::new(&self.config, popup_tx);

        // 页面加载后等一会儿再布防，让首屏渲染先落定
        sleep(Duration::from_millis(self.config.rearm_delay_ms)).await;

        let watch_result = {
            let mut watcher = SubmissionWatcher::new(&self.executor, &self.config);
            watcher
                .watch(|| async {
                    let record = flow.run(&self.executor).await;
                    info!(
                        "📋 本次记录: {} [{}] {} 个标签",
                        record.full_title,
                        record.difficulty,
                        record.topics.len()
                    );
                })
                .await
        };

        // 关闭通道让展示面任务收尾
        drop(flow);
        let _ = popup_handle.await;

        watch_result
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - LeetCode 提交抓取模式");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 调试端口: {}", config.browser_debug_port);
    info!("💾 存储文件: {}", config.storage_file);
    if config.gemini_api_key.is_empty() {
        info!("🔇 未配置 GEMINI_API_KEY，讲解功能关闭");
    } else {
        info!("🤖 讲解模型: {}", config.gemini_model);
    }
    info!("{}", "=".repeat(60));
}
