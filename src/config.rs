//! 运行时配置
//!
//! 通过键值查找函数读取配置，未提供的键使用默认值。
//! 浏览器端的查找函数由构建期环境变量提供。

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClubSpotError, Result};
use crate::session::NavigationPolicy;

pub const AUTH_LATENCY_KEY: &str = "CLUBSPOT_AUTH_LATENCY_MS";
pub const NAVIGATION_POLICY_KEY: &str = "CLUBSPOT_NAVIGATION_POLICY";

/// 模拟认证的默认延迟
const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSpotConfig {
    /// 模拟认证的等待时长
    pub auth_latency: Duration,
    pub navigation_policy: NavigationPolicy,
}

impl Default for ClubSpotConfig {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            navigation_policy: NavigationPolicy::default(),
        }
    }
}

impl ClubSpotConfig {
    /// 从键值查找函数构建配置
    ///
    /// 缺失或空白的键使用默认值，无法解析的值返回 `InvalidConfig`。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = read(AUTH_LATENCY_KEY) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ClubSpotError::InvalidConfig {
                    key: AUTH_LATENCY_KEY,
                    value: raw.clone(),
                })?;
            config.auth_latency = Duration::from_millis(ms);
        }

        if let Some(raw) = read(NAVIGATION_POLICY_KEY) {
            config.navigation_policy = raw.parse()?;
        }

        Ok(config)
    }
}

/// 日志用的毫秒数，超出 `u64` 时饱和
pub fn as_millis_saturating(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClubSpotConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClubSpotConfig::default());
        assert_eq!(config.auth_latency, Duration::from_millis(1000));
        assert_eq!(config.navigation_policy, NavigationPolicy::Guarded);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ClubSpotConfig::from_lookup(lookup_from(&[
            (AUTH_LATENCY_KEY, "250"),
            (NAVIGATION_POLICY_KEY, "Permissive"),
        ]))
        .unwrap();
        assert_eq!(config.auth_latency, Duration::from_millis(250));
        assert_eq!(config.navigation_policy, NavigationPolicy::Permissive);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            ClubSpotConfig::from_lookup(lookup_from(&[(AUTH_LATENCY_KEY, "  ")])).unwrap();
        assert_eq!(config.auth_latency, Duration::from_millis(1000));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ClubSpotConfig::from_lookup(lookup_from(&[(AUTH_LATENCY_KEY, "soon")]))
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_CONFIG");

        let err = ClubSpotConfig::from_lookup(lookup_from(&[(NAVIGATION_POLICY_KEY, "open")]))
            .unwrap_err();
        assert_eq!(
            err,
            ClubSpotError::InvalidConfig {
                key: NAVIGATION_POLICY_KEY,
                value: "open".into()
            }
        );
    }

    #[test]
    fn test_millis_saturate_instead_of_wrapping() {
        assert_eq!(as_millis_saturating(Duration::from_millis(250)), 250);
        assert_eq!(as_millis_saturating(Duration::from_secs(u64::MAX)), u64::MAX);
        assert_eq!(as_millis_saturating(Duration::MAX), u64::MAX);
    }
}
