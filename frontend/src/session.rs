//! 会话上下文
//!
//! 持有 [`SessionController`] 的读写信号，通过 Context 在组件间共享。
//! 组件只读取会话，所有变更都通过这里转发到控制器的操作。

use clubspot::config::{AUTH_LATENCY_KEY, NAVIGATION_POLICY_KEY, as_millis_saturating};
use clubspot::{
    AuthForm, AuthMode, ClubSpotConfig, ClubSpotError, MockAuthenticator, Role,
    SessionController, SubmissionHandle, User, ViewId,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web::BrowserDelay;

/// 构建期环境变量提供的配置
///
/// 解析失败时记录错误并使用默认配置。
pub fn load_config() -> ClubSpotConfig {
    let lookup = |key: &str| -> Option<String> {
        match key {
            AUTH_LATENCY_KEY => option_env!("CLUBSPOT_AUTH_LATENCY_MS"),
            NAVIGATION_POLICY_KEY => option_env!("CLUBSPOT_NAVIGATION_POLICY"),
            _ => None,
        }
        .map(str::to_string)
    };

    ClubSpotConfig::from_lookup(lookup).unwrap_or_else(|e| {
        tracing::error!(code = e.code(), error = %e, "invalid configuration, using defaults");
        ClubSpotConfig::default()
    })
}

/// 会话上下文
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 控制器（只读）
    pub state: ReadSignal<SessionController>,
    /// 控制器（写入）
    set_state: WriteSignal<SessionController>,
    config: ClubSpotConfig,
}

impl SessionContext {
    pub fn new(config: ClubSpotConfig) -> Self {
        tracing::info!(
            policy = %config.navigation_policy,
            latency_ms = as_millis_saturating(config.auth_latency),
            "session created"
        );
        let (state, set_state) = signal(SessionController::new(config.navigation_policy));
        Self {
            state,
            set_state,
            config,
        }
    }

    /// 当前视图
    ///
    /// 使用 Memo，只有视图真正变化时才通知订阅者。
    pub fn view(&self) -> Memo<ViewId> {
        let state = self.state;
        Memo::new(move |_| state.with(|c| c.current_view()))
    }

    pub fn user(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.session().current_user().cloned()))
    }

    pub fn auth_mode(&self) -> Signal<AuthMode> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.session().auth_mode()))
    }

    pub fn requested_role(&self) -> Signal<Role> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.session().requested_role()))
    }

    // --- 控制器操作 ---

    /// 请求切换视图，返回最终生效的视图
    pub fn request_view(&self, target: ViewId) -> ViewId {
        let mut granted = target;
        self.set_state
            .update(|c| granted = c.request_view(target).view());
        granted
    }

    pub fn begin_auth(&self, mode: AuthMode, role: Role) {
        self.set_state.update(|c| c.begin_auth(mode, role));
    }

    pub fn switch_auth_mode(&self, mode: AuthMode) {
        self.set_state.update(|c| c.switch_auth_mode(mode));
    }

    pub fn switch_role(&self, role: Role) {
        self.set_state.update(|c| c.switch_role(role));
    }

    pub fn logout(&self) {
        self.set_state.update(|c| c.logout());
    }

    /// 导航栏 "Dashboard" 按钮
    pub fn open_dashboard(&self) {
        let target = self.state.with_untracked(|c| c.dashboard_view());
        self.request_view(target);
    }

    /// 以当前模式和角色提交认证表单
    ///
    /// 模拟延迟结束后，只有凭据仍有效时才完成认证。
    /// `on_settled` 在提交结束时调用；会话在等待期间已迁移时收到
    /// [`ClubSpotError::Superseded`]。
    /// 返回的句柄被 drop 时提交取消，`on_settled` 不再调用。
    pub fn submit<F>(&self, form: AuthForm, on_settled: F) -> SubmissionHandle
    where
        F: FnOnce(clubspot::Result<()>) + 'static,
    {
        let (mode, role, ticket) = self.state.with_untracked(|c| {
            (
                c.session().auth_mode(),
                c.session().requested_role(),
                c.begin_submission(),
            )
        });

        let authenticator = MockAuthenticator::new(BrowserDelay, self.config.auth_latency);
        let (handle, task) = authenticator.submit_with_handle(form, mode, role);
        let set_state = self.set_state;

        spawn_local(async move {
            match task.await {
                Ok(user) => {
                    let outcome = set_state
                        .try_update(|c| c.complete_submission(ticket, user))
                        .unwrap_or(Err(ClubSpotError::Superseded));
                    on_settled(outcome);
                }
                Err(e) => tracing::debug!(code = e.code(), "submission dropped"),
            }
        });

        handle
    }
}

/// 创建会话上下文并提供到 Context
pub fn provide_session(config: ClubSpotConfig) -> SessionContext {
    let session = SessionContext::new(config);
    provide_context(session);
    session
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
