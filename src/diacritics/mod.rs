//! Diacritics - 变音符号处理
//!
//! 去除拉丁字母上的变音符号（重音、分音、抑扬、软音等），可选保留大小写。
//!
//! ## 处理流程
//! 1. 映射表（基础字母 → 带变音符号的预组合字符）
//! 2. 反向索引（带变音字符 → 基础字母），首次使用时构建且只构建一次
//! 3. 文本操作：NFD 分解 → 去除 U+0300..U+036F 组合符号 → 反向索引折叠 → NFC 重组
//!
//! 非拉丁文字（如日文假名）原样保留。

mod engine;
mod error;
mod index;
mod mappings;
mod types;

pub use engine::{BuiltinMappings, DiacriticsEngine, MappingSource};
pub use error::{DiacriticsError, ErrorKind};
pub use index::ReverseIndex;
pub use mappings::DIACRITIC_MAPPINGS;
pub use types::{is_single_char, MappingEntry, RemoveOptions, SingleChar};
