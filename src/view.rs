//! 视图定义 - 领域模型
//!
//! 纯粹的状态定义，不依赖 DOM。
//! 应用在任一时刻只显示一个视图。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 应用视图枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// 落地页 (初始视图)
    #[default]
    Landing,
    /// 登录 / 注册
    Auth,
    /// 学生面板 (需要认证)
    UserDashboard,
    /// 俱乐部目录 (需要认证)
    Clubs,
    /// 活动目录 (需要认证)
    Events,
    /// 管理员面板 (需要认证)
    AdminDashboard,
}

impl ViewId {
    /// 规范名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Auth => "auth",
            Self::UserDashboard => "user-dashboard",
            Self::Clubs => "clubs",
            Self::Events => "events",
            Self::AdminDashboard => "admin-dashboard",
        }
    }

    /// 将 URL path 解析为视图，未知路径回到落地页
    pub fn from_path(path: &str) -> Self {
        match path {
            "/auth" => Self::Auth,
            "/dashboard" => Self::UserDashboard,
            "/clubs" => Self::Clubs,
            "/events" => Self::Events,
            "/admin" => Self::AdminDashboard,
            _ => Self::Landing,
        }
    }

    /// 获取视图对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::UserDashboard => "/dashboard",
            Self::Clubs => "/clubs",
            Self::Events => "/events",
            Self::AdminDashboard => "/admin",
        }
    }

    /// 只对已登录用户有意义的视图
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::UserDashboard | Self::Clubs | Self::Events | Self::AdminDashboard
        )
    }

    /// 守卫拒绝时的回退目标
    pub fn auth_failure_redirect() -> Self {
        Self::Landing
    }
}

impl Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ViewId; 6] = [
        ViewId::Landing,
        ViewId::Auth,
        ViewId::UserDashboard,
        ViewId::Clubs,
        ViewId::Events,
        ViewId::AdminDashboard,
    ];

    #[test]
    fn test_path_round_trip() {
        for view in ALL {
            assert_eq!(ViewId::from_path(view.to_path()), view);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_landing() {
        assert_eq!(ViewId::from_path("/nowhere"), ViewId::Landing);
        assert_eq!(ViewId::from_path(""), ViewId::Landing);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for view in ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{view}\""));
        }
        assert_eq!(ViewId::AdminDashboard.to_string(), "admin-dashboard");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ViewId::AdminDashboard).unwrap();
        assert_eq!(json, "\"admin-dashboard\"");
        let back: ViewId = serde_json::from_str("\"user-dashboard\"").unwrap();
        assert_eq!(back, ViewId::UserDashboard);
    }

    #[test]
    fn test_requires_auth() {
        assert!(!ViewId::Landing.requires_auth());
        assert!(!ViewId::Auth.requires_auth());
        assert!(ViewId::Clubs.requires_auth());
        assert!(ViewId::AdminDashboard.requires_auth());
    }
}
