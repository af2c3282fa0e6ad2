//! 每页会话状态
//!
//! 已抓取标志和上次观测 URL 由 Watcher 独占持有，
//! 保证每次页面加载最多触发一次抓取

/// 单次观测的结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// 无事发生，继续观察
    None,
    /// URL 变化，已重置抓取标志，需要重新布防
    Navigated,
    /// 首次检测到 Accepted，应触发抓取（之后不再触发）
    Trigger,
}

/// 会话状态：已抓取标志 + 上次观测到的 URL
#[derive(Debug, Clone)]
pub struct SessionState {
    already_extracted: bool,
    last_url: String,
}

impl SessionState {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            already_extracted: false,
            last_url: initial_url.into(),
        }
    }

    pub fn last_url(&self) -> &str {
        &self.last_url
    }

    pub fn already_extracted(&self) -> bool {
        self.already_extracted
    }

    /// 重置抓取标志（同 URL 整页刷新算新的页面加载）
    pub fn reset(&mut self) {
        self.already_extracted = false;
    }

    /// 处理一次观测
    ///
    /// 导航优先于 Accepted 判定：URL 变化意味着旧页面的
    /// 状态指示已失效
    pub fn observe(&mut self, url: &str, accepted: bool) -> Tick {
        if url != self.last_url {
            self.last_url = url.to_string();
            self.already_extracted = false;
            return Tick::Navigated;
        }

        if accepted && !self.already_extracted {
            self.already_extracted = true;
            return Tick::Trigger;
        }

        Tick::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://leetcode.com/problems/two-sum/";
    const OTHER_URL: &str = "https://leetcode.com/problems/add-two-numbers/";

    #[test]
    fn test_no_trigger_without_accepted() {
        let mut session = SessionState::new(URL);
        for _ in 0..5 {
            assert_eq!(session.observe(URL, false), Tick::None);
        }
        assert!(!session.already_extracted());
    }

    #[test]
    fn test_trigger_fires_exactly_once() {
        let mut session = SessionState::new(URL);

        assert_eq!(session.observe(URL, true), Tick::Trigger);
        // 后续的变更风暴不会再触发
        for _ in 0..10 {
            assert_eq!(session.observe(URL, true), Tick::None);
        }
    }

    #[test]
    fn test_navigation_resets_the_guard() {
        let mut session = SessionState::new(URL);

        assert_eq!(session.observe(URL, true), Tick::Trigger);
        assert_eq!(session.observe(OTHER_URL, false), Tick::Navigated);
        assert_eq!(session.last_url(), OTHER_URL);
        // 新页面可以再触发一次
        assert_eq!(session.observe(OTHER_URL, true), Tick::Trigger);
    }

    #[test]
    fn test_reset_allows_retrigger_on_same_url() {
        let mut session = SessionState::new(URL);

        assert_eq!(session.observe(URL, true), Tick::Trigger);
        assert_eq!(session.observe(URL, true), Tick::None);

        // 同 URL 整页刷新：重置后同一页面可以再触发
        session.reset();
        assert_eq!(session.last_url(), URL);
        assert_eq!(session.observe(URL, true), Tick::Trigger);
    }

    #[test]
    fn test_navigation_wins_over_accepted() {
        let mut session = SessionState::new(URL);
        // 导航瞬间旧探针可能还带着 accepted=true，必须先当导航处理
        assert_eq!(session.observe(OTHER_URL, true), Tick::Navigated);
        assert!(!session.already_extracted());
    }
}
