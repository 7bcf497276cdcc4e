//! 模拟认证模块
//!
//! 代替真实的凭据校验服务：固定延迟后必定成功，
//! 根据表单内容或固定模板生成用户。密码从不参与判断。

use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use uuid::Uuid;

use crate::config::as_millis_saturating;
use crate::error::{ClubSpotError, Result};
use crate::user::{AdminProfile, AuthMode, Role, StudentProfile, User};

// =========================================================
// 表单
// =========================================================

/// 认证页表单内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    /// 当前模式下必须填写的字段（与认证页的 `required` 输入框一致）
    pub fn required_fields(mode: AuthMode, role: Role) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if mode == AuthMode::Signup {
            fields.push("Full Name");
        }
        fields.push("Email Address");
        if mode == AuthMode::Signup && role == Role::Student {
            fields.push("Student ID");
        }
        fields.push("Password");
        if mode == AuthMode::Signup {
            fields.push("Confirm Password");
        }
        fields
    }

    fn field(&self, label: &str) -> &str {
        match label {
            "Full Name" => &self.name,
            "Email Address" => &self.email,
            "Student ID" => &self.student_id,
            "Password" => &self.password,
            _ => &self.confirm_password,
        }
    }

    /// 必填校验，不做其他任何检查（两次密码不比较）
    pub fn validate(&self, mode: AuthMode, role: Role) -> Result<()> {
        for label in Self::required_fields(mode, role) {
            if self.field(label).trim().is_empty() {
                return Err(ClubSpotError::MissingField(label));
            }
        }
        Ok(())
    }
}

// =========================================================
// 用户生成
// =========================================================

const ADMIN_TEMPLATE_NAME: &str = "Admin User";
const STUDENT_TEMPLATE_NAME: &str = "John Doe";
const STUDENT_TEMPLATE_ID: &str = "ST2023001";

/// 根据表单生成用户
///
/// - 注册：使用提交的姓名/邮箱/学号，所有统计为 0
/// - 登录：按用户类型选择固定模板，只替换邮箱
pub fn fabricate_user(form: &AuthForm, mode: AuthMode, role: Role) -> User {
    let id = Uuid::new_v4();
    match (mode, role) {
        (AuthMode::Signup, Role::Student) => User::Student(StudentProfile {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            student_id: form.student_id.clone(),
            aicte_hours: 0,
            events_attended: 0,
            events_registered: 0,
            clubs_joined: 0,
        }),
        (AuthMode::Signup, Role::Admin) => User::Admin(AdminProfile {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            clubs_managed: 0,
            total_members: 0,
            events_created: 0,
        }),
        (AuthMode::Login, Role::Admin) => User::Admin(AdminProfile {
            id,
            name: ADMIN_TEMPLATE_NAME.to_string(),
            email: form.email.clone(),
            clubs_managed: 3,
            total_members: 150,
            events_created: 25,
        }),
        (AuthMode::Login, Role::Student) => User::Student(StudentProfile {
            id,
            name: STUDENT_TEMPLATE_NAME.to_string(),
            email: form.email.clone(),
            student_id: STUDENT_TEMPLATE_ID.to_string(),
            aicte_hours: 45,
            events_attended: 12,
            events_registered: 5,
            clubs_joined: 3,
        }),
    }
}

// =========================================================
// 延迟抽象
// =========================================================

/// 模拟网络往返的等待
///
/// 浏览器中由定时器实现，测试中由 tokio 实现。
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// 取消句柄
///
/// 句柄被 drop 时同样会取消提交，
/// 因此持有者（视图或控制器）销毁后结果不会再回写。
#[derive(Debug)]
pub struct SubmissionHandle {
    abort: AbortHandle,
}

impl SubmissionHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

impl Drop for SubmissionHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// 模拟认证服务
#[derive(Debug, Clone)]
pub struct MockAuthenticator<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> MockAuthenticator<D> {
    pub fn new(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }

    /// 提交表单，等待固定延迟后必定成功
    pub async fn submit(&self, form: AuthForm, mode: AuthMode, role: Role) -> User {
        tracing::debug!(
            ?mode,
            ?role,
            latency_ms = as_millis_saturating(self.latency),
            "mock auth submitted"
        );
        self.delay.sleep(self.latency).await;
        fabricate_user(&form, mode, role)
    }

    /// 可取消的提交
    ///
    /// 返回的 future 在取消后以 [`ClubSpotError::Cancelled`] 结束，不生成用户。
    pub fn submit_with_handle(
        self,
        form: AuthForm,
        mode: AuthMode,
        role: Role,
    ) -> (SubmissionHandle, impl Future<Output = Result<User>>) {
        let (abort, registration) = AbortHandle::new_pair();
        let task = async move {
            Abortable::new(self.submit(form, mode, role), registration)
                .await
                .map_err(|_| {
                    tracing::debug!("mock auth cancelled");
                    ClubSpotError::Cancelled
                })
        };
        (SubmissionHandle { abort }, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct TokioDelay;

    #[async_trait(?Send)]
    impl Delay for TokioDelay {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    /// 不真正等待，只记录请求的时长
    #[derive(Default)]
    struct RecordingDelay {
        last: Cell<Option<Duration>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.last.set(Some(duration));
        }
    }

    fn signup_form() -> AuthForm {
        AuthForm {
            name: "Ann".into(),
            email: "a@x.edu".into(),
            student_id: "S1".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
        }
    }

    #[test]
    fn test_signup_student_zeroes_counters() {
        let user = fabricate_user(&signup_form(), AuthMode::Signup, Role::Student);
        let profile = user.as_student().expect("student");
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.email, "a@x.edu");
        assert_eq!(profile.student_id, "S1");
        assert_eq!(profile.aicte_hours, 0);
        assert_eq!(profile.events_attended, 0);
        assert_eq!(profile.events_registered, 0);
        assert_eq!(profile.clubs_joined, 0);
    }

    #[test]
    fn test_signup_admin_keeps_submitted_identity() {
        let user = fabricate_user(&signup_form(), AuthMode::Signup, Role::Admin);
        let profile = user.as_admin().expect("admin");
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.email, "a@x.edu");
        assert_eq!(profile.clubs_managed, 0);
    }

    #[test]
    fn test_admin_login_ignores_password() {
        for password in ["", "wrong", "hunter2"] {
            let form = AuthForm {
                email: "boss@x.edu".into(),
                password: password.into(),
                ..Default::default()
            };
            let user = fabricate_user(&form, AuthMode::Login, Role::Admin);
            assert_eq!(user.role(), Role::Admin);
            assert_eq!(user.email(), "boss@x.edu");
            assert_eq!(user.name(), "Admin User");
            let profile = user.as_admin().unwrap();
            assert_eq!(
                (profile.clubs_managed, profile.total_members, profile.events_created),
                (3, 150, 25)
            );
        }
    }

    #[test]
    fn test_student_login_uses_template() {
        let form = AuthForm {
            name: "Ignored".into(),
            email: "s@x.edu".into(),
            ..Default::default()
        };
        let user = fabricate_user(&form, AuthMode::Login, Role::Student);
        let profile = user.as_student().unwrap();
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "s@x.edu");
        assert_eq!(profile.student_id, "ST2023001");
        assert_eq!(profile.aicte_hours, 45);
        assert_eq!(profile.events_attended, 12);
        assert_eq!(profile.events_registered, 5);
        assert_eq!(profile.clubs_joined, 3);
    }

    #[test]
    fn test_validate_required_fields() {
        let login = AuthForm {
            email: "a@x.edu".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert_eq!(login.validate(AuthMode::Login, Role::Student), Ok(()));
        assert_eq!(
            login.validate(AuthMode::Signup, Role::Student),
            Err(ClubSpotError::MissingField("Full Name"))
        );

        let mut admin_signup = signup_form();
        admin_signup.student_id.clear();
        assert_eq!(admin_signup.validate(AuthMode::Signup, Role::Admin), Ok(()));
        assert_eq!(
            admin_signup.validate(AuthMode::Signup, Role::Student),
            Err(ClubSpotError::MissingField("Student ID"))
        );

        let blank = AuthForm {
            email: "   ".into(),
            password: "pw".into(),
            ..Default::default()
        };
        assert_eq!(
            blank.validate(AuthMode::Login, Role::Admin),
            Err(ClubSpotError::MissingField("Email Address"))
        );
    }

    #[test]
    fn test_mismatched_passwords_are_not_checked() {
        let mut form = signup_form();
        form.confirm_password = "different".into();
        assert!(form.validate(AuthMode::Signup, Role::Student).is_ok());
    }

    #[tokio::test]
    async fn test_submit_waits_configured_latency() {
        let auth = MockAuthenticator::new(RecordingDelay::default(), Duration::from_millis(1000));
        let user = auth.submit(signup_form(), AuthMode::Signup, Role::Student).await;
        assert_eq!(user.name(), "Ann");
        assert_eq!(auth.delay.last.get(), Some(Duration::from_millis(1000)));
    }

    #[tokio::test]
    async fn test_submit_with_huge_latency_logs_without_overflow() {
        let auth = MockAuthenticator::new(RecordingDelay::default(), Duration::MAX);
        let user = auth.submit(signup_form(), AuthMode::Signup, Role::Admin).await;
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(auth.delay.last.get(), Some(Duration::MAX));
    }

    #[tokio::test]
    async fn test_submit_with_handle_completes() {
        let auth = MockAuthenticator::new(TokioDelay, Duration::from_millis(5));
        let (_handle, task) = auth.submit_with_handle(signup_form(), AuthMode::Login, Role::Admin);
        let user = task.await.unwrap();
        assert_eq!(user.role(), Role::Admin);
    }

    #[tokio::test]
    async fn test_cancel_resolves_to_cancelled() {
        let auth = MockAuthenticator::new(TokioDelay, Duration::from_millis(200));
        let (handle, task) = auth.submit_with_handle(signup_form(), AuthMode::Signup, Role::Student);
        handle.cancel();
        assert_eq!(task.await, Err(ClubSpotError::Cancelled));
    }

    #[tokio::test]
    async fn test_dropping_handle_cancels() {
        let auth = MockAuthenticator::new(TokioDelay, Duration::from_millis(200));
        let (handle, task) = auth.submit_with_handle(signup_form(), AuthMode::Signup, Role::Student);
        drop(handle);
        assert_eq!(task.await, Err(ClubSpotError::Cancelled));
    }
}
