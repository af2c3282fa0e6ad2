/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 目标URL（未找到 LeetCode 标签页时打开）
    pub target_url: String,
    /// 按标题查找已打开标签页的关键字
    pub page_title_hint: String,
    /// 自定义浏览器可执行文件路径（fallback 启动时使用）
    pub chrome_executable: Option<String>,
    /// 轮询探针的间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 检测到 Accepted 后等待 DOM 稳定的延迟（毫秒）
    pub settle_delay_ms: u64,
    /// 导航后重新布防的延迟（毫秒）
    pub rearm_delay_ms: u64,
    /// 页面内提示的显示时长（毫秒）
    pub notice_duration_ms: u64,
    /// 抓取成功后是否弹出阻塞式确认框
    pub confirm_on_success: bool,
    /// 持久化文件路径（单槽位，始终覆盖）
    pub storage_file: String,
    // --- Gemini 配置 ---
    /// API 密钥，只从环境变量注入；为空时跳过讲解步骤
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            target_url: "https://leetcode.com/problemset/".to_string(),
            page_title_hint: "LeetCode".to_string(),
            chrome_executable: None,
            poll_interval_ms: 500,
            settle_delay_ms: 1000,
            rearm_delay_ms: 1000,
            notice_duration_ms: 3000,
            confirm_on_success: false,
            storage_file: "last_accepted_submission.json".to_string(),
            gemini_api_key: String::new(),
            gemini_api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            page_title_hint: std::env::var("PAGE_TITLE_HINT").unwrap_or(default.page_title_hint),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_ms),
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_delay_ms),
            rearm_delay_ms: std::env::var("REARM_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.rearm_delay_ms),
            notice_duration_ms: std::env::var("NOTICE_DURATION_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.notice_duration_ms),
            confirm_on_success: std::env::var("CONFIRM_ON_SUCCESS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.confirm_on_success),
            storage_file: std::env::var("STORAGE_FILE").unwrap_or(default.storage_file),
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or(default.gemini_api_key),
            gemini_api_base: std::env::var("GEMINI_API_BASE").unwrap_or(default.gemini_api_base),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(default.gemini_model),
        }
    }
}
