//! 纯文本解析层
//!
//! 所有基于正则的自由文本解析都集中在这里，与 DOM 遍历完全解耦，
//! 可以直接用字符串夹具做单元测试

use regex::Regex;

/// 示例块解析结果（input/output 均非空才算有效示例）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExample {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// 按第一个 "." 把 "N. 题名" 拆成（题号, 题名）
///
/// 没有 "." 时两项都是 "N/A"（包括哨兵 "Not found"）
pub fn split_title(full_title: &str) -> (String, String) {
    match full_title.split_once('.') {
        Some((number, name)) => (number.trim().to_string(), name.trim().to_string()),
        None => ("N/A".to_string(), "N/A".to_string()),
    }
}

/// 从一个 pre 块的文本中解析 Input / Output / Explanation
///
/// Input / Output 只取所在行的剩余部分；Explanation 取到块尾。
/// 缺少 Input 或 Output 时返回 None
pub fn parse_example_block(text: &str) -> Option<ParsedExample> {
    let input = capture_first(r"Input:\s*(.+)", text)?;
    let output = capture_first(r"Output:\s*(.+)", text)?;
    let explanation = capture_first(r"(?s)Explanation:\s*(.*)", text).unwrap_or_default();

    if input.is_empty() || output.is_empty() {
        return None;
    }

    Some(ParsedExample {
        input,
        output,
        explanation,
    })
}

/// 判断一行内联代码是否是复杂度约束
///
/// 命中 "time/space complexity"（不区分大小写）或大 O 记号
pub fn is_complexity_line(line: &str) -> bool {
    let complexity = Regex::new(r"(?i)(time|space)\s*complexity");
    let big_o = Regex::new(r"O\([^)]*\)");

    matches!(&complexity, Ok(re) if re.is_match(line))
        || matches!(&big_o, Ok(re) if re.is_match(line))
}

/// 提取第一个捕获组并去除首尾空白
fn capture_first(pattern: &str, text: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let caps = re.captures(text)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_title_normal() {
        let (number, name) = split_title("1. Two Sum");
        assert_eq!(number, "1");
        assert_eq!(name, "Two Sum");
    }

    #[test]
    fn test_split_title_keeps_dots_in_name() {
        // 只按第一个 "." 拆分
        let (number, name) = split_title("38. Count and Say. Hard ver.");
        assert_eq!(number, "38");
        assert_eq!(name, "Count and Say. Hard ver.");
    }

    #[test]
    fn test_split_title_sentinel() {
        let (number, name) = split_title("Not found");
        assert_eq!(number, "N/A");
        assert_eq!(name, "N/A");
    }

    #[test]
    fn test_parse_example_block_full() {
        let text = "Input: [1,2]\nOutput: 3\nExplanation: sum";
        let parsed = parse_example_block(text).unwrap();
        assert_eq!(parsed.input, "[1,2]");
        assert_eq!(parsed.output, "3");
        assert_eq!(parsed.explanation, "sum");
    }

    #[test]
    fn test_parse_example_block_multiline_explanation() {
        let text = "Input: nums = [2,7], target = 9\nOutput: [0,1]\nExplanation: Because nums[0] + nums[1] == 9,\nwe return [0, 1].";
        let parsed = parse_example_block(text).unwrap();
        assert_eq!(parsed.input, "nums = [2,7], target = 9");
        assert!(parsed.explanation.contains("we return [0, 1]."));
    }

    #[test]
    fn test_parse_example_block_missing_output() {
        assert_eq!(parse_example_block("Input: [1,2]"), None);
    }

    #[test]
    fn test_parse_example_block_missing_explanation() {
        let parsed = parse_example_block("Input: a\nOutput: b").unwrap();
        assert_eq!(parsed.explanation, "");
    }

    #[test]
    fn test_parse_example_block_plain_text() {
        assert_eq!(parse_example_block("Follow up: can you do it in O(n)?"), None);
    }

    #[test]
    fn test_is_complexity_line() {
        assert!(is_complexity_line("Time Complexity: linear"));
        assert!(is_complexity_line("space complexity must be constant"));
        assert!(is_complexity_line("1 <= n <= 10^4, O(n log n) expected"));
        assert!(!is_complexity_line("1 <= nums.length <= 100"));
        assert!(!is_complexity_line("-10^9 <= target <= 10^9"));
    }
}
