//! 变音符号去除库
//!
//! 首选用法是持有一个 [`DiacriticsEngine`]；简单场景可直接调用本模块的自由函数，
//! 它们共享一个进程级引擎。

pub mod config;
pub mod diacritics;
pub mod value;

pub use diacritics::{
    is_single_char, BuiltinMappings, DiacriticsEngine, DiacriticsError, ErrorKind, MappingEntry,
    MappingSource, RemoveOptions, ReverseIndex, SingleChar, DIACRITIC_MAPPINGS,
};

lazy_static::lazy_static! {
    /// 进程级共享引擎（内置映射表）
    pub static ref SHARED_ENGINE: DiacriticsEngine = DiacriticsEngine::new();
}

/// 预先构建共享引擎的反向索引
pub fn init_map() -> Result<(), DiacriticsError> {
    SHARED_ENGINE.init_map()
}

/// 去除变音符号，保留大小写
///
/// ```
/// assert_eq!(diacritics::remove("Café naïve résumé").unwrap(), "Cafe naive resume");
/// ```
pub fn remove(text: &str) -> Result<String, DiacriticsError> {
    SHARED_ENGINE.remove(text, true)
}

pub fn remove_with(text: &str, options: RemoveOptions) -> Result<String, DiacriticsError> {
    SHARED_ENGINE.remove_with(text, options)
}

pub fn has_diacritics(text: &str) -> Result<bool, DiacriticsError> {
    SHARED_ENGINE.has_diacritics(text)
}

pub fn get_diacritic_variations(ch: &str) -> Result<Vec<char>, DiacriticsError> {
    SHARED_ENGINE.get_diacritic_variations(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_engine() {
        init_map().unwrap();
        init_map().unwrap();
        assert!(SHARED_ENGINE.is_built());

        assert_eq!(remove("CAFÉ café").unwrap(), "CAFE cafe");
        assert_eq!(
            remove_with("CAFÉ café", RemoveOptions { preserve_case: false }).unwrap(),
            "CAFe cafe"
        );
        assert!(has_diacritics("café").unwrap());
        assert!(!has_diacritics("hello").unwrap());
        assert!(get_diacritic_variations("a").unwrap().contains(&'á'));
    }
}
