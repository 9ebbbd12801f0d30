//! 反向索引：带变音字符 → 基础字母

use std::collections::HashMap;

use crate::diacritics::error::DiacriticsError;
use crate::diacritics::types::MappingEntry;

/// 反向索引（构建后只读）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    map: HashMap<char, char>,
}

impl ReverseIndex {
    /// 由映射表构建
    ///
    /// 按表顺序展开每个条目的变体；重复键后写覆盖先写。
    /// 任一条目 base 不是单个码点或 variants 为空时整体失败，不返回部分结果。
    pub fn build(entries: &[MappingEntry]) -> Result<Self, DiacriticsError> {
        let mut map = HashMap::with_capacity(entries.iter().map(|e| e.variants.len()).sum());

        for entry in entries {
            let base = match entry.base_char() {
                Some(base) if !entry.variants.is_empty() => base,
                _ => return Err(DiacriticsError::InvalidMapping),
            };
            for ch in entry.chars() {
                map.insert(ch, base);
            }
        }

        Ok(Self { map })
    }

    /// 查询基础字母
    pub fn get(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 遍历（变体, 基础字母），顺序不保证
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(&k, &v)| (k, v))
    }
}
