//! Club Spot 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `session`: 会话上下文，转发到核心的会话控制器
//! - `web::router`: 路由服务，同步视图与浏览器历史
//! - `components`: UI 组件层

mod components {
    pub mod admin_dashboard;
    pub mod auth_page;
    pub mod clubs;
    pub mod events;
    mod icons;
    pub mod landing;
    pub mod navigation;
    pub mod user_dashboard;
}
mod session;

use crate::components::admin_dashboard::AdminDashboard;
use crate::components::auth_page::AuthPage;
use crate::components::clubs::ClubsPage;
use crate::components::events::EventsPage;
use crate::components::landing::LandingPage;
use crate::components::navigation::Navigation;
use crate::components::user_dashboard::UserDashboard;
use crate::session::{load_config, provide_session};

use clubspot::ViewId;
use leptos::prelude::*;

// 浏览器 API 封装模块
pub(crate) mod web {
    mod console;
    pub mod router;
    mod timer;

    pub use console::init_logging;
    pub use timer::BrowserDelay;
}

pub use web::init_logging;

use web::router::{Router, RouterOutlet};

/// 视图匹配函数
///
/// 根据 ViewId 返回对应的视图组件。
fn view_matcher(view: ViewId) -> AnyView {
    match view {
        ViewId::Landing => view! { <LandingPage /> }.into_any(),
        ViewId::Auth => view! { <AuthPage /> }.into_any(),
        ViewId::UserDashboard => view! { <UserDashboard /> }.into_any(),
        ViewId::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        ViewId::Clubs => view! { <ClubsPage /> }.into_any(),
        ViewId::Events => view! { <EventsPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取构建期配置并创建会话上下文
    let session = provide_session(load_config());

    view! {
        // 2. 路由器组件：注入会话，视图由控制器决定
        <Router session=session>
            <div class="min-h-screen bg-base-200">
                <Navigation />
                <RouterOutlet matcher=view_matcher />
            </div>
        </Router>
    }
}
