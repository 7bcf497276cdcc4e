use thiserror::Error;

// =========================================================
// 核心错误类型
// =========================================================

/// Club Spot 的错误类型
///
/// 会话控制器的导航操作都是全函数，不会产生错误；
/// 这里只覆盖外围环节：表单必填校验、提交取消与过期、配置解析。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClubSpotError {
    /// 必填字段为空
    #[error("{0} is required")]
    MissingField(&'static str),

    /// 模拟认证在完成前被取消
    #[error("authentication was cancelled before it completed")]
    Cancelled,

    /// 提交期间会话已迁移，结果被丢弃
    #[error("sign-in was interrupted, please submit again")]
    Superseded,

    /// 配置值无法解析
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl ClubSpotError {
    /// 稳定的错误码，用于日志
    pub fn code(&self) -> &'static str {
        match self {
            ClubSpotError::MissingField(_) => "MISSING_FIELD",
            ClubSpotError::Cancelled => "CANCELLED",
            ClubSpotError::Superseded => "SUPERSEDED",
            ClubSpotError::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClubSpotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_code() {
        let err = ClubSpotError::MissingField("Email Address");
        assert_eq!(err.to_string(), "Email Address is required");
        assert_eq!(err.code(), "MISSING_FIELD");

        let err = ClubSpotError::InvalidConfig {
            key: "CLUBSPOT_AUTH_LATENCY_MS",
            value: "soon".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"soon\" for CLUBSPOT_AUTH_LATENCY_MS"
        );

        let err = ClubSpotError::Superseded;
        assert_eq!(err.to_string(), "sign-in was interrupted, please submit again");
        assert_eq!(err.code(), "SUPERSEDED");
    }
}
