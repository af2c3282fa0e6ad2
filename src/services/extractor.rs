//! 页面字段抓取器 - 业务能力层
//!
//! 七个相互独立的抓取器，每个负责一个语义字段。
//! 所有抓取器都不会失败：DOM 节点缺失时降级为哨兵值或空集合。
//! DOM 查询通过注入 JS 完成，文本后处理全部走纯函数，
//! 便于脱离浏览器做单元测试

use tracing::debug;

use crate::infrastructure::JsExecutor;
use crate::models::{Example, SubmissionRecord};
use crate::services::parse;

/// 标题找不到时的哨兵
pub const TITLE_NOT_FOUND: &str = "Not found";
/// 代码找不到时的哨兵
pub const CODE_NOT_FOUND: &str = "Code not found.";
/// 难度找不到时的哨兵
pub const DIFFICULTY_UNKNOWN: &str = "Unknown";

// ========== 注入的 DOM 查询脚本 ==========
// 选择器针对 LeetCode 当前页面结构，属于易碎的站点耦合，集中放在这里

const JS_TITLE: &str = r#"
(() => {
    const el = document.querySelector('div.text-title-large a[href^="/problems/"]');
    return el ? el.innerText : null;
})()
"#;

const JS_CODE_LINES: &str = r#"
(() => {
    const container = document.querySelector('div.view-lines');
    if (!container) return null;
    return Array.from(container.querySelectorAll('div.view-line')).map(line => line.innerText);
})()
"#;

const JS_DIFFICULTY: &str = r#"
(() => {
    const el = document.querySelector('div.text-difficulty-easy, div.text-difficulty-medium, div.text-difficulty-hard');
    return el ? el.innerText : null;
})()
"#;

const JS_TOPICS: &str = r#"
(() => Array.from(document.querySelectorAll('a[href^="/tag/"]')).map(el => el.innerText.trim()))()
"#;

const JS_CONSTRAINT_LINES: &str = r#"
(() => Array.from(document.querySelectorAll('li code')).map(el => el.innerText.trim()))()
"#;

const JS_PRE_BLOCKS: &str = r#"
(() => Array.from(document.querySelectorAll('pre')).map(el => el.innerText))()
"#;

const JS_RUNTIMES: &str = r#"
(() => Array.from(document.querySelectorAll('.text-sd-foreground.text-lg.font-semibold')).map(el => el.innerText.trim()))()
"#;

// ========== 抓取器 ==========

/// 标题/题号/题名
pub async fn extract_title(executor: &JsExecutor) -> (String, String, String) {
    let raw: Option<String> = executor.try_eval_as(JS_TITLE).await.flatten();
    title_parts(raw)
}

/// 编辑器中的提交代码，按行拼接
pub async fn extract_code(executor: &JsExecutor) -> String {
    let lines: Option<Vec<String>> = executor.try_eval_as(JS_CODE_LINES).await.flatten();
    code_from_lines(lines)
}

/// 难度标签（页面原文）
pub async fn extract_difficulty(executor: &JsExecutor) -> String {
    let raw: Option<String> = executor.try_eval_as(JS_DIFFICULTY).await.flatten();
    raw.filter(|s| !s.is_empty())
        .unwrap_or_else(|| DIFFICULTY_UNKNOWN.to_string())
}

/// 题目标签，按 DOM 顺序
pub async fn extract_topics(executor: &JsExecutor) -> Vec<String> {
    executor.try_eval_as(JS_TOPICS).await.unwrap_or_default()
}

/// 复杂度约束：列表项内联代码中命中复杂度模式的行
pub async fn extract_constraints(executor: &JsExecutor) -> Vec<String> {
    let lines: Vec<String> = executor
        .try_eval_as(JS_CONSTRAINT_LINES)
        .await
        .unwrap_or_default();
    constraints_from(lines)
}

/// 示例块：Input/Output 均非空的 pre 块
pub async fn extract_examples(executor: &JsExecutor) -> Vec<Example> {
    let blocks: Vec<String> = executor.try_eval_as(JS_PRE_BLOCKS).await.unwrap_or_default();
    examples_from_blocks(&blocks)
}

/// 运行表现读数（耗时/内存击败比），按 DOM 顺序
pub async fn extract_runtimes(executor: &JsExecutor) -> Vec<String> {
    executor.try_eval_as(JS_RUNTIMES).await.unwrap_or_default()
}

/// 聚合：调用全部七个抓取器并组装一条 SubmissionRecord
///
/// 各抓取器之间没有依赖，顺序无关紧要
pub async fn extract_submission(executor: &JsExecutor) -> SubmissionRecord {
    let (full_title, problem_number, problem_name) = extract_title(executor).await;
    let submitted_code = extract_code(executor).await;
    let difficulty = extract_difficulty(executor).await;
    let topics = extract_topics(executor).await;
    let constraints = extract_constraints(executor).await;
    let examples = extract_examples(executor).await;
    let runtimes = extract_runtimes(executor).await;

    debug!(
        "抓取完成: 标题='{}' 代码 {} 字符, {} 个标签, {} 个示例",
        full_title,
        submitted_code.len(),
        topics.len(),
        examples.len()
    );

    SubmissionRecord {
        full_title,
        problem_number,
        problem_name,
        submitted_code,
        difficulty,
        topics,
        constraints,
        examples,
        runtimes,
    }
}

// ========== 纯后处理函数 ==========

fn title_parts(raw: Option<String>) -> (String, String, String) {
    let full_title = raw
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());
    let (number, name) = parse::split_title(&full_title);
    (full_title, number, name)
}

fn code_from_lines(lines: Option<Vec<String>>) -> String {
    match lines {
        Some(lines) => lines.join("\n"),
        None => CODE_NOT_FOUND.to_string(),
    }
}

fn constraints_from(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| parse::is_complexity_line(line))
        .collect()
}

/// 编号取 pre 块在 DOM 中的位置（1 起始），被过滤的块也占号
fn examples_from_blocks(blocks: &[String]) -> Vec<Example> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, text)| {
            parse::parse_example_block(text).map(|parsed| Example {
                example_number: i + 1,
                input: parsed.input,
                output: parsed.output,
                explanation: parsed.explanation,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_parts_normal() {
        let (full, number, name) = title_parts(Some("1. Two Sum".to_string()));
        assert_eq!(full, "1. Two Sum");
        assert_eq!(number, "1");
        assert_eq!(name, "Two Sum");
    }

    #[test]
    fn test_title_parts_missing() {
        let (full, number, name) = title_parts(None);
        assert_eq!(full, TITLE_NOT_FOUND);
        assert_eq!(number, "N/A");
        assert_eq!(name, "N/A");
    }

    #[test]
    fn test_title_parts_blank_is_missing() {
        let (full, ..) = title_parts(Some("   ".to_string()));
        assert_eq!(full, TITLE_NOT_FOUND);
    }

    #[test]
    fn test_code_from_lines() {
        let lines = vec!["fn main() {".to_string(), "}".to_string()];
        assert_eq!(code_from_lines(Some(lines)), "fn main() {\n}");
        assert_eq!(code_from_lines(None), CODE_NOT_FOUND);
    }

    #[test]
    fn test_constraints_filter() {
        let lines = vec![
            "1 <= nums.length <= 10^5".to_string(),
            "O(n) time complexity required".to_string(),
            "O(1)".to_string(),
        ];
        let kept = constraints_from(lines);
        assert_eq!(kept, vec!["O(n) time complexity required", "O(1)"]);
    }

    #[test]
    fn test_examples_keep_dom_numbering() {
        let blocks = vec![
            "Follow up: solve it faster".to_string(),
            "Input: [1,2]\nOutput: 3\nExplanation: sum".to_string(),
            "Input: [5]".to_string(),
            "Input: a\nOutput: b".to_string(),
        ];

        let examples = examples_from_blocks(&blocks);
        assert_eq!(examples.len(), 2);
        // 第一个有效示例在 DOM 里是第 2 个 pre 块
        assert_eq!(examples[0].example_number, 2);
        assert_eq!(examples[0].input, "[1,2]");
        assert_eq!(examples[0].output, "3");
        assert_eq!(examples[0].explanation, "sum");
        assert_eq!(examples[1].example_number, 4);
        assert_eq!(examples[1].explanation, "");
    }

    #[test]
    fn test_examples_without_output_are_dropped() {
        let blocks = vec!["Input: [1,2]".to_string()];
        assert!(examples_from_blocks(&blocks).is_empty());
    }
}
