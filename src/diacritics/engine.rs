//! Diacritics 主引擎
//!
//! 组合映射表、反向索引与文本操作

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::OnceCell;
use unicode_normalization::UnicodeNormalization;

use crate::diacritics::error::DiacriticsError;
use crate::diacritics::index::ReverseIndex;
use crate::diacritics::mappings::DIACRITIC_MAPPINGS;
use crate::diacritics::types::{MappingEntry, RemoveOptions, SingleChar};

/// 映射表来源
///
/// 返回错误视为构建期的意外失败，对外统一为 `Initialization`。
pub trait MappingSource: Send + Sync {
    fn entries(&self) -> anyhow::Result<Cow<'_, [MappingEntry]>>;
}

/// 内置映射表
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMappings;

impl MappingSource for BuiltinMappings {
    fn entries(&self) -> anyhow::Result<Cow<'_, [MappingEntry]>> {
        Ok(Cow::Borrowed(DIACRITIC_MAPPINGS))
    }
}

impl MappingSource for Vec<MappingEntry> {
    fn entries(&self) -> anyhow::Result<Cow<'_, [MappingEntry]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl MappingSource for &'static [MappingEntry] {
    fn entries(&self) -> anyhow::Result<Cow<'_, [MappingEntry]>> {
        Ok(Cow::Borrowed(*self))
    }
}

/// 变音符号引擎（可复用，反向索引惰性构建）
///
/// 索引最多构建一次：并发的首次调用者只有一个执行构建，其余等待结果；
/// 构建失败时索引保持未构建状态，下一次调用会重新尝试。
pub struct DiacriticsEngine {
    source: Box<dyn MappingSource>,
    index: OnceCell<ReverseIndex>,
}

impl DiacriticsEngine {
    /// 使用内置映射表创建引擎
    pub fn new() -> Self {
        Self::with_source(BuiltinMappings)
    }

    /// 使用自定义映射表创建引擎
    pub fn with_source(source: impl MappingSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            index: OnceCell::new(),
        }
    }

    /// 预先构建反向索引
    ///
    /// 可重复调用，已构建时直接返回。
    pub fn init_map(&self) -> Result<(), DiacriticsError> {
        self.ensure_built().map(|_| ())
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// 已构建的反向索引；未构建时返回 None，不触发构建
    pub fn reverse_index(&self) -> Option<&ReverseIndex> {
        self.index.get()
    }

    /// 丢弃已构建的索引，回到未构建状态
    pub fn reset(&mut self) {
        self.index.take();
    }

    fn ensure_built(&self) -> Result<&ReverseIndex, DiacriticsError> {
        self.index.get_or_try_init(|| {
            let entries = self.source.entries().map_err(|e| {
                tracing::warn!("Failed to read diacritics mapping table: {:#}", e);
                DiacriticsError::initialization(e)
            })?;

            let index = ReverseIndex::build(&entries).map_err(|e| {
                tracing::warn!("Rejected diacritics mapping table: {}", e);
                e
            })?;

            tracing::debug!(
                "Diacritics map initialized: {} entries, {} variants",
                entries.len(),
                index.len()
            );
            Ok(index)
        })
    }

    /// 去除变音符号
    ///
    /// # Arguments
    /// * `text` - 输入文本
    /// * `preserve_case` - true 时保留原大小写；false 时被改动的字符转为小写，
    ///   未改动的字符（ASCII、数字、标点、非拉丁文字）保持原样
    ///
    /// # Example
    /// ```
    /// use diacritics::DiacriticsEngine;
    ///
    /// let engine = DiacriticsEngine::new();
    /// assert_eq!(engine.remove("CAFÉ café", true).unwrap(), "CAFE cafe");
    /// assert_eq!(engine.remove("CAFÉ café", false).unwrap(), "CAFe cafe");
    /// ```
    pub fn remove(&self, text: &str, preserve_case: bool) -> Result<String, DiacriticsError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let index = self.ensure_built()?;

        let mut stripped = String::with_capacity(text.len());
        for ch in text.chars() {
            let start = stripped.len();
            push_stripped(ch, index, &mut stripped);

            if !preserve_case && is_changed(ch, &stripped[start..]) {
                let lowered = stripped[start..].to_lowercase();
                stripped.truncate(start);
                stripped.push_str(&lowered);
            }
        }

        Ok(stripped.nfc().collect())
    }

    pub fn remove_with(&self, text: &str, options: RemoveOptions) -> Result<String, DiacriticsError> {
        self.remove(text, options.preserve_case)
    }

    /// 判断文本是否含有变音符号
    ///
    /// 全部为可打印 ASCII 时直接返回 false；否则以去除结果是否与原文不同为准，
    /// 因此 `©`、`²`、日文等非 ASCII 但无变音符号的字符返回 false。
    pub fn has_diacritics(&self, text: &str) -> Result<bool, DiacriticsError> {
        self.ensure_built()?;

        if text.chars().all(|c| matches!(c, ' '..='~')) {
            return Ok(false);
        }

        Ok(self.remove(text, true)? != text)
    }

    /// 获取字符的全部变音变体
    ///
    /// 直接查映射表（区分大小写，取第一个匹配条目），无匹配时返回空列表。
    pub fn get_diacritic_variations(&self, ch: &str) -> Result<Vec<char>, DiacriticsError> {
        let ch = SingleChar::try_from(ch)?;
        self.variations_of(ch)
    }

    pub fn variations_of(&self, ch: SingleChar) -> Result<Vec<char>, DiacriticsError> {
        let entries = self
            .source
            .entries()
            .map_err(DiacriticsError::initialization)?;

        Ok(entries
            .iter()
            .find(|entry| entry.base_char() == Some(ch.get()))
            .map(|entry| entry.chars().collect())
            .unwrap_or_default())
    }

    /// 反查基础字母
    pub fn base_of(&self, ch: char) -> Result<Option<char>, DiacriticsError> {
        Ok(self.ensure_built()?.get(ch))
    }
}

impl Default for DiacriticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DiacriticsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiacriticsEngine")
            .field("built", &self.is_built())
            .field("variants", &self.index.get().map(ReverseIndex::len))
            .finish()
    }
}

/// Combining Diacritical Marks 区块
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// 单个码点去除变音符号后追加到 out
///
/// 无规范分解的变体（`ø`、`ł` 等）经反向索引折叠。
fn push_stripped(ch: char, index: &ReverseIndex, out: &mut String) {
    if ch.is_ascii() {
        out.push(ch);
        return;
    }

    for c in std::iter::once(ch).nfd() {
        if is_combining_mark(c) {
            continue;
        }
        out.push(index.get(c).unwrap_or(c));
    }
}

/// 去除后的片段与原码点在 NFC 下是否不同
fn is_changed(original: char, stripped: &str) -> bool {
    if original.is_ascii() {
        return false;
    }
    !stripped.nfc().eq(std::iter::once(original).nfc())
}
