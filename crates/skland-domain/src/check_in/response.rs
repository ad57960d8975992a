use serde::Deserialize;
use serde_json::Value;

pub const ALREADY_CHECKED_IN: &str = "今日已签到，请勿重复签到";
pub const UNKNOWN_ERROR: &str = "未知错误";
pub const MISSING_ROLE_PARAMS: &str = "缺少角色参数，无法签到";

const REPEAT_CHECKIN_MARKER: &str = "请勿重复签到";

/// Envelope returned by the attendance endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendanceResponse {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl AttendanceResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            code: 0,
            message: None,
            data: Some(data),
        }
    }

    pub fn failed(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinVerdict {
    /// Zero code, rewards can be extracted from `data`
    Ok,
    /// Display text for a rejected check-in
    Failed(String),
}

pub fn parse_checkin_response(resp: &AttendanceResponse) -> CheckinVerdict {
    if resp.code == 0 {
        return CheckinVerdict::Ok;
    }

    let message = resp.message.as_deref().unwrap_or(UNKNOWN_ERROR);
    if message.contains(REPEAT_CHECKIN_MARKER) {
        return CheckinVerdict::Failed(ALREADY_CHECKED_IN.to_string());
    }
    CheckinVerdict::Failed(format!("签到失败：{}", message))
}
