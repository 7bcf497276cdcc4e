//! 会话与导航控制器 - 核心状态机
//!
//! 会话记录认证状态、当前用户与当前视图。
//! 所有变更都经由 [`SessionController`] 的操作完成，视图组件只读。
//!
//! 状态 = [`ViewId`]，初始状态为 `Landing`，没有终止状态，
//! 所有迁移都由外部事件（点击、表单提交）触发。

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ClubSpotError, Result};
use crate::user::{AuthMode, Role, User};
use crate::view::ViewId;

#[cfg(test)]
mod tests;

// =========================================================
// 会话记录
// =========================================================

/// 会话状态
///
/// `is_authenticated` 由 `current_user` 派生，两者不可能不一致。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    current_user: Option<User>,
    current_view: ViewId,
    /// 仅在 `current_view == Auth` 时有意义
    auth_mode: AuthMode,
    /// 仅在 `current_view == Auth` 时有意义
    requested_role: Role,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn requested_role(&self) -> Role {
        self.requested_role
    }
}

// =========================================================
// 导航策略
// =========================================================

/// 未认证会话请求受保护视图时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// 不做任何检查，最后一次请求的视图生效
    Permissive,
    /// 受保护视图回退到落地页
    #[default]
    Guarded,
}

impl Display for NavigationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationPolicy::Permissive => f.write_str("permissive"),
            NavigationPolicy::Guarded => f.write_str("guarded"),
        }
    }
}

impl FromStr for NavigationPolicy {
    type Err = ClubSpotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(NavigationPolicy::Permissive),
            "guarded" => Ok(NavigationPolicy::Guarded),
            _ => Err(ClubSpotError::InvalidConfig {
                key: "CLUBSPOT_NAVIGATION_POLICY",
                value: s.to_string(),
            }),
        }
    }
}

/// `request_view` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Granted(ViewId),
    Redirected { requested: ViewId, to: ViewId },
}

impl Navigation {
    /// 最终生效的视图
    pub fn view(&self) -> ViewId {
        match self {
            Navigation::Granted(v) => *v,
            Navigation::Redirected { to, .. } => *to,
        }
    }
}

/// 一次认证提交的凭据
///
/// 控制器每次状态迁移都会推进代数，过期凭据的完成结果会被丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTicket {
    generation: u64,
}

// =========================================================
// 控制器
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionController {
    session: Session,
    policy: NavigationPolicy,
    generation: u64,
}

impl SessionController {
    /// 创建初始会话：未认证，位于落地页
    pub fn new(policy: NavigationPolicy) -> Self {
        Self {
            session: Session::default(),
            policy,
            generation: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_view(&self) -> ViewId {
        self.session.current_view
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn advance(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// **导航请求**
    ///
    /// 宽松策略下无条件切换；守卫策略下未认证访问受保护视图回退到落地页。
    pub fn request_view(&mut self, target: ViewId) -> Navigation {
        self.advance();

        if self.policy == NavigationPolicy::Guarded
            && target.requires_auth()
            && !self.session.is_authenticated()
        {
            let to = ViewId::auth_failure_redirect();
            tracing::warn!(requested = %target, redirect = %to, "access denied, redirecting");
            self.session.current_view = to;
            return Navigation::Redirected {
                requested: target,
                to,
            };
        }

        tracing::debug!(view = %target, "view changed");
        self.session.current_view = target;
        Navigation::Granted(target)
    }

    /// 进入认证页
    pub fn begin_auth(&mut self, mode: AuthMode, role: Role) {
        self.advance();
        self.session.current_view = ViewId::Auth;
        self.session.auth_mode = mode;
        self.session.requested_role = role;
        tracing::debug!(?mode, ?role, "auth requested");
    }

    /// 切换登录 / 注册
    pub fn switch_auth_mode(&mut self, mode: AuthMode) {
        self.session.auth_mode = mode;
    }

    /// 切换学生 / 管理员
    pub fn switch_role(&mut self, role: Role) {
        self.session.requested_role = role;
    }

    /// 认证完成：保存用户并按角色进入对应面板
    pub fn complete_auth(&mut self, user: User) {
        self.advance();
        let target = Self::dashboard_for(user.role());
        tracing::info!(user = user.name(), role = ?user.role(), view = %target, "signed in");
        self.session.current_user = Some(user);
        self.session.current_view = target;
    }

    /// 注销并回到落地页
    pub fn logout(&mut self) {
        self.advance();
        if let Some(user) = self.session.current_user.take() {
            tracing::info!(user = user.name(), "signed out");
        }
        self.session.current_view = ViewId::Landing;
    }

    /// 导航栏 "Dashboard" 的目标视图
    pub fn dashboard_view(&self) -> ViewId {
        let role = self
            .session
            .current_user
            .as_ref()
            .map(User::role)
            .unwrap_or_default();
        Self::dashboard_for(role)
    }

    fn dashboard_for(role: Role) -> ViewId {
        match role {
            Role::Admin => ViewId::AdminDashboard,
            Role::Student => ViewId::UserDashboard,
        }
    }

    // --- 异步提交 ---

    /// 为即将发起的认证提交签发凭据
    pub fn begin_submission(&self) -> AuthTicket {
        AuthTicket {
            generation: self.generation,
        }
    }

    /// 凭据仍有效时完成认证
    ///
    /// 提交期间发生过任何迁移（离开认证页、重新进入认证页、注销等）时
    /// 丢弃结果并返回 [`ClubSpotError::Superseded`]，由调用方提示重新提交。
    pub fn complete_submission(&mut self, ticket: AuthTicket, user: User) -> Result<()> {
        if ticket.generation != self.generation || self.session.current_view != ViewId::Auth {
            tracing::warn!(user = user.name(), "discarding stale authentication result");
            return Err(ClubSpotError::Superseded);
        }
        self.complete_auth(user);
        Ok(())
    }
}
