//! 提交记录数据模型
//!
//! 一次通过的提交对应一条 SubmissionRecord，创建后不再变更

use serde::{Deserialize, Serialize};

/// 题目描述中的一个示例块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// 1 起始，按 DOM 中 pre 块的顺序编号
    pub example_number: usize,
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// 一次通过提交的完整抓取结果
///
/// 所有字段都有值：抓取失败的字段填哨兵值或空集合，
/// 序列化后不存在缺失的键
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// 原始 "N. 题名" 文本，找不到时为 "Not found"
    pub full_title: String,
    /// 从 full_title 按第一个 "." 拆出，没有 "." 时为 "N/A"
    pub problem_number: String,
    pub problem_name: String,
    /// 按行拼接的代码，找不到时为 "Code not found."
    pub submitted_code: String,
    /// 页面原文，通常为 Easy/Medium/Hard，找不到时为 "Unknown"
    pub difficulty: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    /// 运行耗时/内存击败百分比等自由文本，按 DOM 顺序
    #[serde(default)]
    pub runtimes: Vec<String>,
}

impl SubmissionRecord {
    /// 转为发给 popup 展示面的 payload
    pub fn to_popup_payload(&self) -> crate::models::PopupPayload {
        crate::models::PopupPayload {
            title: self.full_title.clone(),
            difficulty: self.difficulty.clone(),
            topics: self.topics.clone(),
            code: self.submitted_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = SubmissionRecord {
            full_title: "1. Two Sum".to_string(),
            problem_number: "1".to_string(),
            problem_name: "Two Sum".to_string(),
            submitted_code: "class Solution {};".to_string(),
            difficulty: "Easy".to_string(),
            topics: vec!["Array".to_string()],
            constraints: vec![],
            examples: vec![],
            runtimes: vec![],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fullTitle"], "1. Two Sum");
        assert_eq!(json["problemNumber"], "1");
        assert_eq!(json["submittedCode"], "class Solution {};");
        // 空集合也要序列化出键，不允许缺失
        assert!(json["examples"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_example_number_round_trip() {
        let example = Example {
            example_number: 2,
            input: "[1,2]".to_string(),
            output: "3".to_string(),
            explanation: String::new(),
        };

        let json = serde_json::to_string(&example).unwrap();
        assert!(json.contains("\"exampleNumber\":2"));

        let back: Example = serde_json::from_str(&json).unwrap();
        assert_eq!(back, example);
    }
}
