//! 顶部导航栏
//!
//! 已登录：面板/俱乐部/活动入口、问候语与角色徽章、注销；
//! 未登录：登录与注册按钮。窄屏时折叠为下拉菜单。

use clubspot::{AuthMode, Role, ViewId};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::use_session;
use crate::web::router::use_router;

fn link_class(active: bool) -> &'static str {
    if active {
        "btn btn-sm btn-primary gap-2"
    } else {
        "btn btn-sm btn-ghost gap-2"
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let current_view = use_router().current_view();
    let user = session.user();
    let is_authenticated = move || user.with(Option::is_some);
    let (menu_open, set_menu_open) = signal(false);

    let greeting = move || {
        user.with(|u| {
            u.as_ref()
                .map(|u| format!("Hi, {}!", u.name()))
                .unwrap_or_default()
        })
    };
    let role_noun = move || {
        user.with(|u| u.as_ref().map(|u| u.role()).unwrap_or_default())
            .account_noun()
    };
    let role_badge = move || {
        if user.with(|u| u.as_ref().map(|u| u.role())) == Some(Role::Admin) {
            "badge badge-error"
        } else {
            "badge badge-secondary"
        }
    };

    let on_dashboard = move |_: MouseEvent| {
        session.open_dashboard();
        set_menu_open.set(false);
    };
    let go = move |view: ViewId| {
        move |_: MouseEvent| {
            session.request_view(view);
            set_menu_open.set(false);
        }
    };
    let start_auth = move |mode: AuthMode| {
        move |_: MouseEvent| {
            session.begin_auth(mode, Role::Student);
            set_menu_open.set(false);
        }
    };
    let on_logout = move |_: MouseEvent| {
        session.logout();
        set_menu_open.set(false);
    };

    let on_dashboard_view = move || {
        matches!(
            current_view.get(),
            ViewId::UserDashboard | ViewId::AdminDashboard
        )
    };

    view! {
        <nav class="bg-base-100 shadow-sm border-b border-base-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <button class="flex items-center cursor-pointer" on:click=go(ViewId::Landing)>
                            <div class="w-8 h-8 bg-blue-600 rounded-lg flex items-center justify-center mr-3">
                                <span class="text-white font-bold">"CS"</span>
                            </div>
                            <span class="text-xl">"Club Spot"</span>
                        </button>

                        <Show when=is_authenticated>
                            <div class="hidden md:ml-8 md:flex md:gap-2">
                                <button class=move || link_class(on_dashboard_view()) on:click=on_dashboard>
                                    <BookOpen attr:class="h-4 w-4" /> "Dashboard"
                                </button>
                                <button
                                    class=move || link_class(current_view.get() == ViewId::Clubs)
                                    on:click=go(ViewId::Clubs)
                                >
                                    <Users attr:class="h-4 w-4" /> "Clubs"
                                </button>
                                <button
                                    class=move || link_class(current_view.get() == ViewId::Events)
                                    on:click=go(ViewId::Events)
                                >
                                    <CalendarIcon attr:class="h-4 w-4" /> "Events"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <div class="flex items-center">
                        <Show
                            when=is_authenticated
                            fallback=move || view! {
                                <div class="hidden md:flex gap-2">
                                    <button class="btn btn-sm btn-ghost" on:click=start_auth(AuthMode::Login)>
                                        "Login"
                                    </button>
                                    <button class="btn btn-sm btn-primary" on:click=start_auth(AuthMode::Signup)>
                                        "Sign Up"
                                    </button>
                                </div>
                            }
                        >
                            <div class="flex items-center gap-4">
                                <div class="hidden md:flex items-center gap-2">
                                    <span class="text-sm">{greeting}</span>
                                    <span class=role_badge>{role_noun}</span>
                                </div>
                                <button class="btn btn-sm btn-outline gap-2" on:click=on_logout>
                                    <LogOut attr:class="h-4 w-4" /> "Logout"
                                </button>
                            </div>
                        </Show>

                        <div class="md:hidden ml-2">
                            <button
                                class="btn btn-sm btn-ghost"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || if menu_open.get() {
                                    view! { <Close attr:class="h-5 w-5" /> }.into_any()
                                } else {
                                    view! { <Menu attr:class="h-5 w-5" /> }.into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </div>

                // 窄屏菜单
                <Show when=move || menu_open.get()>
                    <div class="md:hidden border-t border-base-300 py-2 flex flex-col gap-1">
                        <Show
                            when=is_authenticated
                            fallback=move || view! {
                                <button class="btn btn-ghost justify-start" on:click=start_auth(AuthMode::Login)>
                                    "Login"
                                </button>
                                <button class="btn btn-ghost justify-start" on:click=start_auth(AuthMode::Signup)>
                                    "Sign Up"
                                </button>
                            }
                        >
                            <div class="px-4 py-2 text-sm border-b border-base-300">
                                {greeting} " (" {role_noun} ")"
                            </div>
                            <button class="btn btn-ghost justify-start" on:click=on_dashboard>
                                "Dashboard"
                            </button>
                            <button class="btn btn-ghost justify-start" on:click=go(ViewId::Clubs)>
                                "Clubs"
                            </button>
                            <button class="btn btn-ghost justify-start" on:click=go(ViewId::Events)>
                                "Events"
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
