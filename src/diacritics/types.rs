//! Diacritics 类型定义

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diacritics::error::DiacriticsError;

/// 映射表条目：基础字母 + 全部带变音符号的变体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// 基础字母（恰好一个码点）
    pub base: Cow<'static, str>,
    /// 变体字符序列（每个码点一个变体，按声明顺序）
    pub variants: Cow<'static, str>,
}

impl MappingEntry {
    /// 用于静态表的常量构造
    pub const fn new(base: &'static str, variants: &'static str) -> Self {
        Self {
            base: Cow::Borrowed(base),
            variants: Cow::Borrowed(variants),
        }
    }

    /// 运行时构造（测试数据、外部提供的表）
    pub fn owned(base: impl Into<String>, variants: impl Into<String>) -> Self {
        Self {
            base: Cow::Owned(base.into()),
            variants: Cow::Owned(variants.into()),
        }
    }

    /// 基础字母；base 不是单个码点时返回 None
    pub fn base_char(&self) -> Option<char> {
        single_char(&self.base)
    }

    /// 按声明顺序遍历变体
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.variants.chars()
    }

    /// 条目是否满足表约束：base 为单个码点，variants 非空
    pub fn is_well_formed(&self) -> bool {
        self.base_char().is_some() && !self.variants.is_empty()
    }
}

/// 移除选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveOptions {
    /// true：保留原有大小写；false：被改动的位置强制小写
    pub preserve_case: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            preserve_case: true,
        }
    }
}

/// 单个 Unicode 码点
///
/// 按码点计数而非 UTF-8 字节/UTF-16 单元，emoji 等辅助平面字符同样算一个字符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleChar(char);

impl SingleChar {
    pub fn get(self) -> char {
        self.0
    }
}

impl From<char> for SingleChar {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl TryFrom<&str> for SingleChar {
    type Error = DiacriticsError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        single_char(s)
            .map(SingleChar)
            .ok_or(DiacriticsError::InvalidSingleChar)
    }
}

impl fmt::Display for SingleChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 判断字符串是否恰好包含一个码点
pub fn is_single_char(s: &str) -> bool {
    single_char(s).is_some()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
