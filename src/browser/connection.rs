use anyhow::Result;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到已运行的浏览器并定位 LeetCode 页面
///
/// 优先按标题关键字查找已打开的标签页；找不到时打开目标 URL
pub async fn connect_to_browser_and_page(
    port: u16,
    target_url: &str,
    title_hint: &str,
) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        e
    })?;
    debug!("浏览器连接成功");

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

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 查找标题匹配的标签页
    debug!("正在查找标题包含 '{}' 的页面", title_hint);
    for p in pages.iter() {
        if let Ok(Some(page_title)) = p.get_title().await {
            debug!("检查页面标题: {}", page_title);
            if page_title.contains(title_hint) {
                info!("✓ 找到目标页面: {}", page_title);
                return Ok((browser, p.clone()));
            }
        }
    }
    debug!("未找到匹配的页面，将创建新页面");

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建新页面失败: {}", e);
        e
    })?;
    page.goto(target_url).await.map_err(|e| {
        error!("导航到 {} 失败: {}", target_url, e);
        e
    })?;
    info!("已导航到: {}", target_url);

    Ok((browser, page))
}
