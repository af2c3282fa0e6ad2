use std::path::Path;

use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 启动自有浏览器实例并导航到指定 URL
///
/// 连接调试端口失败时的兜底路径。注意：自有实例没有用户的
/// LeetCode 登录态，提交监控仍然可用，但部分页面字段可能缺失
pub async fn launch_browser(url: &str, executable: Option<&str>) -> Result<(Browser, Page)> {
    info!("🚀 启动浏览器实例...");
    debug!("目标 URL: {}", url);

    let mut builder = BrowserConfig::builder()
        .with_head()
        .args(vec!["--no-sandbox", "--disable-dev-shm-usage"]);

    if let Some(exe) = executable {
        debug!("使用自定义浏览器路径: {}", exe);
        builder = builder.chrome_executable(Path::new(exe));
    }

    let config = builder.build().map_err(|e| {
        error!("配置浏览器失败: {}", e);
        anyhow::anyhow!("配置浏览器失败: {}", e)
    })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动浏览器失败: {}", e);
        anyhow::anyhow!("启动浏览器失败: {}", e)
    })?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page(url).await.map_err(|e| {
        error!("创建页面失败: {}", e);
        anyhow::anyhow!("创建页面失败: {}", e)
    })?;

    info!("✅ 浏览器已导航到: {}", url);

    Ok((browser, page))
}
