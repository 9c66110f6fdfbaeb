//! 行规范化与对白行分类
//!
//! 把原始文本切成非空行，并对每一行做三分类：
//! 具名对白（`Name (hint): "text"`）、匿名引号对白、旁白

use regex::Regex;
use std::sync::OnceLock;

/// 具名对白行的形状: `Name (hint): "utterance"`
///
/// - Name: 单个连续词 token
/// - hint: 括号内任意文本
/// - utterance: 引号可选，内容在首个引号字符处截断
fn dialogue_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(\w+)\s*\(([^)]+)\):\s*["']?([^"']*)["']?"#)
            .expect("dialogue pattern is a valid regex")
    })
}

/// 行分类结果
///
/// 每行恰好产生一个分类，分类只依赖行内容本身
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 具名对白: `Tom (angry): "Stop right now"`
    Structured {
        name: String,
        hint: String,
        text: String,
    },
    /// 匿名引号对白，说话人未具名
    Generic { text: String },
    /// 旁白
    Narration { text: String },
}

/// 把原始文本切成去除首尾空白的非空行
///
/// 保持原始相对顺序，不拆分也不合并任何行；空输入返回空序列
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect()
}

/// 对单行做三分类
///
/// 匹配顺序：具名对白 → 引号对白 → 旁白
pub fn classify_line(line: &str) -> LineClass {
    if let Some(caps) = dialogue_pattern().captures(line) {
        return LineClass::Structured {
            name: caps[1].to_string(),
            hint: caps[2].trim().to_lowercase(),
            text: caps[3].trim().to_string(),
        };
    }

    if line.contains('"') || line.contains('\'') {
        return LineClass::Generic {
            text: line.to_string(),
        };
    }

    LineClass::Narration {
        text: line.to_string(),
    }
}
