//! 认证表单状态
//!
//! 将各输入框的 signal 整合为 `AuthFormState`，负责数据的持有、重置
//! 以及到 [`AuthForm`] 的转换。

use clubspot::AuthForm;
use leptos::prelude::*;

/// 使用 `RwSignal` 因为它实现了 `Copy`，可以直接作为 Props 传递
#[derive(Clone, Copy)]
pub struct AuthFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub student_id: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,

    // 密码可见性
    pub show_password: RwSignal<bool>,
    pub show_confirm_password: RwSignal<bool>,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            student_id: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            show_password: RwSignal::new(false),
            show_confirm_password: RwSignal::new(false),
        }
    }

    /// 当前输入的快照
    pub fn to_form(&self) -> AuthForm {
        AuthForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            student_id: self.student_id.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::new()
    }
}
