//! 认证页
//!
//! 登录与注册共用一个表单，字段随模式和角色变化。
//! 提交后等待模拟认证完成，期间按钮禁用；离开页面时取消未完成的提交。

mod form_state;

use clubspot::{AuthForm, AuthMode, Role, SubmissionHandle, ViewId};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::use_session;
use form_state::AuthFormState;

/// 可切换明文显示的密码输入框
#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    visible: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <div class="relative">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=move || value.get()
                    class="input input-bordered w-full pr-12"
                    required
                />
                <button
                    type="button"
                    class="btn btn-ghost btn-sm absolute right-1 top-1/2 -translate-y-1/2"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() {
                        view! { <EyeOff attr:class="h-4 w-4 opacity-60" /> }.into_any()
                    } else {
                        view! { <Eye attr:class="h-4 w-4 opacity-60" /> }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session();
    let mode = session.auth_mode();
    let role = session.requested_role();

    let state = AuthFormState::new();
    let (pending, set_pending) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let submission = StoredValue::new(Option::<SubmissionHandle>::None);

    // 页面销毁时取消未完成的提交
    on_cleanup(move || {
        let _ = submission.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.cancel();
            }
        });
    });

    let is_signup = move || mode.get() == AuthMode::Signup;
    let is_admin = move || role.get() == Role::Admin;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let form: AuthForm = state.to_form();
        if let Err(e) = form.validate(mode.get_untracked(), role.get_untracked()) {
            tracing::debug!(code = e.code(), "auth form rejected");
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_error_msg.set(None);
        set_pending.set(true);
        let handle = session.submit(form, move |outcome| {
            // 成功时页面已切走
            let _ = set_pending.try_set(false);
            if let Err(e) = outcome {
                tracing::debug!(code = e.code(), "auth result discarded");
                let _ = set_error_msg.try_set(Some(e.to_string()));
            }
        });
        submission.set_value(Some(handle));
    };

    let role_button = move |target: Role| {
        view! {
            <button
                type="button"
                class=move || if role.get() == target {
                    "btn btn-sm btn-primary flex-1"
                } else {
                    "btn btn-sm btn-ghost flex-1"
                }
                on:click=move |_| session.switch_role(target)
            >
                {match target {
                    Role::Student => "Student",
                    Role::Admin => "Admin",
                }}
            </button>
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <button
                    class="btn btn-ghost mb-6 gap-2"
                    on:click=move |_| {
                        session.request_view(ViewId::Landing);
                    }
                >
                    <ArrowLeft attr:class="h-4 w-4" /> "Back to Home"
                </button>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <div class="text-center">
                            <div class="w-16 h-16 bg-blue-600 rounded-full flex items-center justify-center mx-auto mb-4">
                                {move || if is_admin() {
                                    view! { <Shield attr:class="w-8 h-8 text-white" /> }.into_any()
                                } else {
                                    view! { <UserIcon attr:class="w-8 h-8 text-white" /> }.into_any()
                                }}
                            </div>
                            <h2 class="text-2xl font-bold">
                                {move || if is_signup() { "Create Account" } else { "Welcome Back" }}
                            </h2>
                            <p class="text-base-content/70">
                                {move || {
                                    let noun = role.get().account_noun();
                                    if is_signup() {
                                        format!("Create a new {noun} account")
                                    } else {
                                        format!("Sign in to your {noun} account")
                                    }
                                }}
                            </p>
                            <div class="flex justify-center mt-2">
                                <span class=move || if is_admin() { "badge badge-error" } else { "badge badge-secondary" }>
                                    {move || role.get().label()}
                                </span>
                            </div>
                        </div>

                        <div class="flex gap-2 p-1 bg-base-200 rounded-lg">
                            {role_button(Role::Student)}
                            {role_button(Role::Admin)}
                        </div>

                        <form class="space-y-4" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <Show when=is_signup>
                                <div class="form-control">
                                    <label class="label" for="name">
                                        <span class="label-text">"Full Name"</span>
                                    </label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder="Enter your full name"
                                        on:input=move |ev| state.name.set(event_target_value(&ev))
                                        prop:value=move || state.name.get()
                                        class="input input-bordered w-full"
                                        required
                                    />
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email Address"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="Enter your email"
                                    on:input=move |ev| state.email.set(event_target_value(&ev))
                                    prop:value=move || state.email.get()
                                    class="input input-bordered w-full"
                                    required
                                />
                            </div>

                            <Show when=move || is_signup() && !is_admin()>
                                <div class="form-control">
                                    <label class="label" for="studentId">
                                        <span class="label-text">"Student ID"</span>
                                    </label>
                                    <input
                                        id="studentId"
                                        type="text"
                                        placeholder="Enter your student ID"
                                        on:input=move |ev| state.student_id.set(event_target_value(&ev))
                                        prop:value=move || state.student_id.get()
                                        class="input input-bordered w-full"
                                        required
                                    />
                                </div>
                            </Show>

                            <PasswordField
                                id="password"
                                label="Password"
                                placeholder="Enter your password"
                                value=state.password
                                visible=state.show_password
                            />

                            <Show when=is_signup>
                                <PasswordField
                                    id="confirmPassword"
                                    label="Confirm Password"
                                    placeholder="Confirm your password"
                                    value=state.confirm_password
                                    visible=state.show_confirm_password
                                />
                            </Show>

                            <button type="submit" class="btn btn-primary w-full" disabled=move || pending.get()>
                                {move || if pending.get() {
                                    view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                } else if is_signup() {
                                    "Create Account".into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </form>

                        <div class="text-center pt-4 border-t border-base-300">
                            <p class="text-sm text-base-content/70">
                                {move || if is_signup() { "Already have an account?" } else { "Don't have an account?" }}
                                <button
                                    class="btn btn-link btn-sm p-0 ml-1"
                                    on:click=move |_| session.switch_auth_mode(mode.get_untracked().toggled())
                                >
                                    {move || if is_signup() { "Sign in" } else { "Sign up" }}
                                </button>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
