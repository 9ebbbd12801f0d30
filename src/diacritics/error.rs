//! Diacritics 错误类型

use thiserror::Error;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入类型错误（非字符串）
    Type,
    /// 映射数据或单字符输入不合法
    Validation,
    /// 构建反向索引时的其他失败
    Initialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Type => "TypeError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Initialization => "InitializationError",
        }
    }
}

#[derive(Debug, Error)]
pub enum DiacriticsError {
    #[error("Input must be a string")]
    NotAString,

    #[error("Invalid mapping data: base and chars must be non-empty")]
    InvalidMapping,

    #[error("Input must be a single character")]
    InvalidSingleChar,

    /// 对外只暴露固定文案，原始错误保留在 `source()` 链中
    #[error("Failed to initialize diacritics map: Unknown error")]
    Initialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl DiacriticsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiacriticsError::NotAString => ErrorKind::Type,
            DiacriticsError::InvalidMapping | DiacriticsError::InvalidSingleChar => {
                ErrorKind::Validation
            }
            DiacriticsError::Initialization { .. } => ErrorKind::Initialization,
        }
    }

    pub(crate) fn initialization(cause: anyhow::Error) -> Self {
        DiacriticsError::Initialization {
            source: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_initialization_hides_cause_in_message() {
        let err = DiacriticsError::initialization(anyhow::anyhow!("String error"));
        assert_eq!(
            err.to_string(),
            "Failed to initialize diacritics map: Unknown error"
        );
        assert_eq!(err.kind(), ErrorKind::Initialization);

        let source = err.source().expect("cause should be retained");
        assert_eq!(source.to_string(), "String error");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(DiacriticsError::NotAString.kind(), ErrorKind::Type);
        assert_eq!(DiacriticsError::InvalidMapping.kind(), ErrorKind::Validation);
        assert_eq!(
            DiacriticsError::InvalidSingleChar.kind(),
            ErrorKind::Validation
        );
    }
}
