//! 提交结果监控 - 监控层
//!
//! 在页面里安装一个 MutationObserver 探针，盯住判题状态指示器；
//! Rust 侧按固定间隔轮询探针标志和 location.href。
//! 检测到 "Accepted" 后等待一个稳定延迟再回调，每次页面加载
//! 最多回调一次；页内导航和整页刷新都会重置状态并重新布防

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::infrastructure::JsExecutor;
use crate::watcher::session::{SessionState, Tick};

/// 连续失败（探针读取或布防）达到该次数视为标签页已失联
const MAX_PROBE_FAILURES: usize = 10;

/// 安装探针：观察 body 子树变更，状态指示器文本等于 "Accepted"
/// 时置位并断开观察。重复安装会先拆掉旧探针
const JS_INSTALL_PROBE: &str = r#"
(() => {
    const prev = window.__lcExtractorProbe;
    if (prev && prev.observer) prev.observer.disconnect();

    const probe = { accepted: false, observer: null };
    window.__lcExtractorProbe = probe;

    const check = () => {
        const el = document.querySelector('span[data-e2e-locator="submission-result"]');
        if (el && el.innerText.trim() === "Accepted") {
            probe.accepted = true;
            if (probe.observer) probe.observer.disconnect();
        }
    };

    probe.observer = new MutationObserver(check);
    probe.observer.observe(document.body, { childList: true, subtree: true });
    check();
    return true;
})()
"#;

/// 读取探针标志与当前 URL
///
/// installed 用于发现整页刷新：刷新会连 window 上的探针
/// 一起清掉，而 URL 可能完全不变
const JS_READ_PROBE: &str = r#"
(() => ({
    accepted: !!(window.__lcExtractorProbe && window.__lcExtractorProbe.accepted),
    installed: !!window.__lcExtractorProbe,
    url: location.href
}))()
"#;

#[derive(Debug, Deserialize)]
struct ProbeReading {
    accepted: bool,
    installed: bool,
    url: String,
}

/// 每次页面加载的监控状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Watching,
    Triggered,
    Extracted,
}

/// 一次轮询对应的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollAction {
    /// 无事发生，继续轮询
    Continue,
    /// 需要（重新）布防：页内导航，或探针随整页刷新消失
    Rearm,
    /// 触发抓取回调
    Trigger,
}

/// 由会话结论和探针存活状态决定本轮动作
///
/// 探针消失说明发生了整页刷新（window 被清空），即使 URL
/// 没变也要当作新的页面加载重新布防
fn classify(tick: Tick, installed: bool) -> PollAction {
    match tick {
        Tick::Trigger => PollAction::Trigger,
        Tick::Navigated => PollAction::Rearm,
        Tick::None if !installed => PollAction::Rearm,
        Tick::None => PollAction::Continue,
    }
}

/// 提交结果监控器
pub struct SubmissionWatcher<'a> {
    executor: &'a JsExecutor,
    session: SessionState,
    state: WatchState,
    poll_interval: Duration,
    settle_delay: Duration,
    rearm_delay: Duration,
}

impl<'a> SubmissionWatcher<'a> {
    pub fn new(executor: &'a JsExecutor, config: &Config) -> Self {
        Self {
            executor,
            session: SessionState::new(String::new()),
            state: WatchState::Idle,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            rearm_delay: Duration::from_millis(config.rearm_delay_ms),
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// 注册回调并开始监控，循环不会自行退出
    ///
    /// 回调只在 Accepted 首次出现且稳定延迟过后被调用；
    /// 页内导航和整页刷新都会重置守卫，使新页面可以再次触发
    pub async fn watch<F, Fut>(&mut self, mut on_accepted: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        // 记下起始 URL 再布防
        let initial: ProbeReading = self
            .executor
            .eval_as(JS_READ_PROBE)
            .await
            .context("无法读取页面状态，标签页可能已关闭")?;
        self.session = SessionState::new(initial.url);

        self.arm().await?;
        info!("👀 开始监控提交结果: {}", self.session.last_url());

        let mut failures = 0usize;
        // 布防失败后置位：在探针重装成功前不消费（可能过期的）读数
        let mut pending_rearm = false;

        loop {
            sleep(self.poll_interval).await;

            if pending_rearm {
                match self.arm().await {
                    Ok(()) => {
                        pending_rearm = false;
                        failures = 0;
                    }
                    Err(e) => self.note_failure(&mut failures, "重新布防", &e)?,
                }
                continue;
            }

            let reading: ProbeReading = match self.executor.eval_as(JS_READ_PROBE).await {
                Ok(r) => {
                    failures = 0;
                    r
                }
                Err(e) => {
                    self.note_failure(&mut failures, "探针读取", &e)?;
                    continue;
                }
            };

            let tick = self.session.observe(&reading.url, reading.accepted);

            match classify(tick, reading.installed) {
                PollAction::Continue => {}
                PollAction::Rearm => {
                    if tick == Tick::Navigated {
                        info!("🔁 检测到页面导航: {}", reading.url);
                    } else {
                        info!("🔄 检测到整页刷新，重新布防: {}", reading.url);
                        // 同 URL 刷新也是新的页面加载，守卫要重置
                        self.session.reset();
                    }
                    self.state = WatchState::Idle;
                    // 等新页面渲染一会儿再重新布防
                    sleep(self.rearm_delay).await;
                    // 布防失败不立即放弃：挂起读数，下一轮先重试布防
                    if let Err(e) = self.arm().await {
                        self.note_failure(&mut failures, "重新布防", &e)?;
                        pending_rearm = true;
                    }
                }
                PollAction::Trigger => {
                    self.state = WatchState::Triggered;
                    info!("✅ 检测到提交通过");
                    // 等尾随的 DOM 更新落定
                    sleep(self.settle_delay).await;
                    on_accepted().await;
                    self.state = WatchState::Extracted;
                }
            }
        }
    }

    /// 安装（或重装）页面探针
    async fn arm(&mut self) -> Result<()> {
        self.executor
            .eval(JS_INSTALL_PROBE)
            .await
            .context("安装页面探针失败")?;
        self.state = WatchState::Watching;
        debug!("探针已布防");
        Ok(())
    }

    /// 记一次失败，连续超出预算才终止监控
    fn note_failure(&self, failures: &mut usize, what: &str, e: &anyhow::Error) -> Result<()> {
        *failures += 1;
        warn!("{}失败 ({}/{}): {}", what, failures, MAX_PROBE_FAILURES, e);
        if *failures >= MAX_PROBE_FAILURES {
            anyhow::bail!("连续 {} 次{}失败，停止监控", MAX_PROBE_FAILURES, what);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://leetcode.com/problems/two-sum/";

    /// 模拟监控循环对一次探针读数的处理
    fn step(session: &mut SessionState, url: &str, accepted: bool, installed: bool) -> PollAction {
        let tick = session.observe(url, accepted);
        let action = classify(tick, installed);
        if action == PollAction::Rearm && tick != Tick::Navigated {
            session.reset();
        }
        action
    }

    #[test]
    fn test_steady_page_keeps_polling() {
        let mut session = SessionState::new(URL);
        for _ in 0..5 {
            assert_eq!(step(&mut session, URL, false, true), PollAction::Continue);
        }
    }

    #[test]
    fn test_reload_of_same_url_rearms_and_allows_retrigger() {
        let mut session = SessionState::new(URL);

        // 第一次提交通过并抓取
        assert_eq!(step(&mut session, URL, true, true), PollAction::Trigger);
        assert_eq!(step(&mut session, URL, true, true), PollAction::Continue);

        // 整页刷新：URL 不变，但 window 上的探针消失了
        assert_eq!(step(&mut session, URL, false, false), PollAction::Rearm);

        // 重新布防后，同一题再次提交通过必须能再触发
        assert_eq!(step(&mut session, URL, true, true), PollAction::Trigger);
    }

    #[test]
    fn test_failed_rearm_keeps_retrying() {
        let mut session = SessionState::new(URL);

        // 刷新后第一次布防失败：下一轮探针仍然缺失，继续要求布防
        assert_eq!(step(&mut session, URL, false, false), PollAction::Rearm);
        assert_eq!(step(&mut session, URL, false, false), PollAction::Rearm);
        assert_eq!(step(&mut session, URL, false, false), PollAction::Rearm);

        // 布防成功后恢复正常轮询
        assert_eq!(step(&mut session, URL, false, true), PollAction::Continue);
    }

    #[test]
    fn test_navigation_still_rearms() {
        let mut session = SessionState::new(URL);
        let other = "https://leetcode.com/problems/add-two-numbers/";

        // 页内导航时 window 未被清空，探针还在
        assert_eq!(step(&mut session, other, false, true), PollAction::Rearm);
        assert_eq!(step(&mut session, other, true, true), PollAction::Trigger);
    }
}
