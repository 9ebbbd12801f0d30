//! 动态类型入口
//!
//! 参数以 JSON 值传入，非字符串值在此报 `NotAString`。
//! 另含 `serve` 模式使用的逐行 JSON 请求/响应协议。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diacritics::{DiacriticsEngine, DiacriticsError};

/// 去除变音符号；`text` 必须是 JSON 字符串
pub fn remove_value(
    engine: &DiacriticsEngine,
    text: &Value,
    preserve_case: bool,
) -> Result<String, DiacriticsError> {
    let text = text.as_str().ok_or(DiacriticsError::NotAString)?;
    engine.remove(text, preserve_case)
}

pub fn has_diacritics_value(engine: &DiacriticsEngine, text: &Value) -> Result<bool, DiacriticsError> {
    let text = text.as_str().ok_or(DiacriticsError::NotAString)?;
    engine.has_diacritics(text)
}

/// 获取变体；非字符串或非单字符均视为单字符校验失败
pub fn variations_value(engine: &DiacriticsEngine, ch: &Value) -> Result<Vec<String>, DiacriticsError> {
    let ch = ch.as_str().ok_or(DiacriticsError::InvalidSingleChar)?;
    Ok(engine
        .get_diacritic_variations(ch)?
        .into_iter()
        .map(String::from)
        .collect())
}

/// 请求
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    InitMap,
    Remove {
        #[serde(default)]
        text: Value,
        /// 缺省时使用配置中的默认值
        preserve_case: Option<bool>,
    },
    HasDiacritics {
        #[serde(default)]
        text: Value,
    },
    Variations {
        #[serde(rename = "char", default)]
        ch: Value,
    },
}

/// 错误详情
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// TypeError / ValidationError / InitializationError / RequestError
    pub kind: String,
    pub message: String,
}

/// 响应（每个请求一行）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(ErrorBody {
                kind: kind.into(),
                message: message.into(),
            }),
        }
    }
}

impl From<DiacriticsError> for Response {
    fn from(err: DiacriticsError) -> Self {
        Response::failure(err.kind().as_str(), err.to_string())
    }
}

/// 执行一个请求
pub fn handle_request(engine: &DiacriticsEngine, request: Request, default_preserve_case: bool) -> Response {
    let result = match request {
        Request::InitMap => engine.init_map().map(|_| Value::Null),
        Request::Remove {
            text,
            preserve_case,
        } => remove_value(engine, &text, preserve_case.unwrap_or(default_preserve_case))
            .map(Value::String),
        Request::HasDiacritics { text } => has_diacritics_value(engine, &text).map(Value::Bool),
        Request::Variations { ch } => {
            variations_value(engine, &ch).map(|v| Value::Array(v.into_iter().map(Value::String).collect()))
        }
    };

    match result {
        Ok(value) => Response::success(value),
        Err(e) => e.into(),
    }
}

/// 解析并执行一行 JSON 请求
pub fn handle_line(engine: &DiacriticsEngine, line: &str, default_preserve_case: bool) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(engine, request, default_preserve_case),
        Err(e) => {
            tracing::debug!("Rejected request line: {}", e);
            Response::failure("RequestError", e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_value_rejects_non_strings() {
        let engine = DiacriticsEngine::new();
        for value in [Value::Null, json!(42), json!(true), json!(["a"]), json!({"a": 1})] {
            let err = remove_value(&engine, &value, true).unwrap_err();
            assert_eq!(err.to_string(), "Input must be a string");
            assert!(has_diacritics_value(&engine, &value).is_err());
        }
        // 类型校验先于构建
        assert!(!engine.is_built());
    }

    #[test]
    fn test_remove_value_strings() {
        let engine = DiacriticsEngine::new();
        assert_eq!(remove_value(&engine, &json!("CAFÉ café"), false).unwrap(), "CAFe cafe");
        assert_eq!(remove_value(&engine, &json!(""), true).unwrap(), "");
        assert!(has_diacritics_value(&engine, &json!("café")).unwrap());
    }

    #[test]
    fn test_variations_value() {
        let engine = DiacriticsEngine::new();
        let variants = variations_value(&engine, &json!("a")).unwrap();
        assert!(variants.contains(&"á".to_string()));
        assert!(variations_value(&engine, &json!("ab")).is_err());
        assert!(variations_value(&engine, &json!(1)).is_err());
    }

    #[test]
    fn test_handle_line_remove() {
        let engine = DiacriticsEngine::new();

        let response = handle_line(&engine, r#"{"op":"remove","text":"Café"}"#, true);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"ok": true, "result": "Cafe"})
        );

        let response = handle_line(
            &engine,
            r#"{"op":"remove","text":"CAFÉ","preserve_case":false}"#,
            true,
        );
        assert_eq!(response.result, Some(json!("CAFe")));

        // 缺省使用传入的默认值
        let response = handle_line(&engine, r#"{"op":"remove","text":"CAFÉ"}"#, false);
        assert_eq!(response.result, Some(json!("CAFe")));
    }

    #[test]
    fn test_handle_line_errors() {
        let engine = DiacriticsEngine::new();

        let response = handle_line(&engine, r#"{"op":"remove","text":42}"#, true);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": false,
                "error": {"kind": "TypeError", "message": "Input must be a string"}
            })
        );

        let response = handle_line(&engine, r#"{"op":"has_diacritics"}"#, true);
        assert_eq!(response.error.unwrap().kind, "TypeError");

        let response = handle_line(&engine, r#"{"op":"variations","char":"ab"}"#, true);
        let error = response.error.unwrap();
        assert_eq!(error.kind, "ValidationError");
        assert_eq!(error.message, "Input must be a single character");

        let response = handle_line(&engine, "not json", true);
        assert!(!response.ok);
        assert_eq!(response.error.unwrap().kind, "RequestError");

        let response = handle_line(&engine, r#"{"op":"explode"}"#, true);
        assert_eq!(response.error.unwrap().kind, "RequestError");
    }

    #[test]
    fn test_handle_line_other_ops() {
        let engine = DiacriticsEngine::new();

        let response = handle_line(&engine, r#"{"op":"init_map"}"#, true);
        assert!(response.ok);
        assert!(engine.is_built());

        let response = handle_line(&engine, r#"{"op":"has_diacritics","text":"hello"}"#, true);
        assert_eq!(response.result, Some(json!(false)));

        let response = handle_line(&engine, r#"{"op":"variations","char":"$"}"#, true);
        assert_eq!(response.result, Some(json!([])));
    }

    #[test]
    fn test_init_map_failure_response() {
        let engine = DiacriticsEngine::with_source(vec![crate::MappingEntry::new("", "x")]);
        let response = handle_line(&engine, r#"{"op":"init_map"}"#, true);
        let error = response.error.unwrap();
        assert_eq!(error.kind, "ValidationError");
        assert_eq!(
            error.message,
            "Invalid mapping data: base and chars must be non-empty"
        );
    }
}
