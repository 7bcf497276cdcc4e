//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 视图状态由会话控制器持有，路由服务只负责 URL 与视图之间的同步：
//! - 视图变化 -> pushState
//! - 后退/前进 (popstate) -> `request_view`

use clubspot::ViewId;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::session::SessionContext;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入的会话上下文驱动视图切换，守卫逻辑由控制器的导航策略决定。
#[derive(Clone, Copy)]
pub struct RouterService {
    session: SessionContext,
    current_view: Memo<ViewId>,
}

impl RouterService {
    fn new(session: SessionContext) -> Self {
        // 1. 从 URL 恢复初始视图（守卫同样生效）
        let path = current_path();
        let requested = ViewId::from_path(&path);
        let granted = session.request_view(requested);
        if granted.to_path() != path {
            replace_history_state(granted.to_path());
        }

        Self {
            session,
            current_view: session.view(),
        }
    }

    /// 获取当前视图信号
    pub fn current_view(&self) -> Memo<ViewId> {
        self.current_view
    }

    /// 视图变化时写入浏览器历史
    fn sync_history(&self) {
        let current_view = self.current_view;

        Effect::new(move |_| {
            let view = current_view.get();
            let path = view.to_path();
            if current_path() != path {
                tracing::debug!(%view, path, "history push");
                push_history_state(path);
            }
        });
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let granted = session.request_view(ViewId::from_path(&path));

            // 被重定向时修正地址栏，避免留下受保护页面的记录
            if granted.to_path() != path {
                replace_history_state(granted.to_path());
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: SessionContext) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.sync_history();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话上下文
    session: SessionContext,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据当前视图渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 视图匹配函数：接收当前视图，返回对应组件
    matcher: fn(ViewId) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_view().get();
        matcher(current)
    }
}
