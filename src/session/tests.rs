use super::*;
use crate::auth::{AuthForm, Delay, MockAuthenticator, fabricate_user};
use async_trait::async_trait;
use std::time::Duration;

// =========================================================
// 辅助函数
// =========================================================

struct TokioDelay;

#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

fn student() -> User {
    let form = AuthForm {
        name: "Ann".into(),
        email: "a@x.edu".into(),
        student_id: "S1".into(),
        ..Default::default()
    };
    fabricate_user(&form, AuthMode::Signup, Role::Student)
}

fn admin() -> User {
    let form = AuthForm {
        email: "boss@x.edu".into(),
        ..Default::default()
    };
    fabricate_user(&form, AuthMode::Login, Role::Admin)
}

fn signed_in(user: User) -> SessionController {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Login, user.role());
    controller.complete_auth(user);
    controller
}

// =========================================================
// 初始状态
// =========================================================

#[test]
fn test_initial_session() {
    let controller = SessionController::new(NavigationPolicy::Permissive);
    let session = controller.session();
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
    assert_eq!(session.current_view(), ViewId::Landing);
    assert_eq!(session.auth_mode(), AuthMode::Login);
    assert_eq!(session.requested_role(), Role::Student);
}

// =========================================================
// request_view
// =========================================================

#[test]
fn test_permissive_last_request_wins() {
    let mut controller = SessionController::new(NavigationPolicy::Permissive);
    let sequence = [
        ViewId::Events,
        ViewId::Auth,
        ViewId::AdminDashboard,
        ViewId::Landing,
        ViewId::Clubs,
        ViewId::UserDashboard,
    ];
    for view in sequence {
        let nav = controller.request_view(view);
        assert_eq!(nav, Navigation::Granted(view));
        assert_eq!(controller.current_view(), view);
    }
    // 宽松策略下未认证也能进入面板
    assert!(!controller.is_authenticated());
    assert_eq!(controller.current_view(), ViewId::UserDashboard);
}

#[test]
fn test_guarded_redirects_unauthenticated() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    for view in [
        ViewId::UserDashboard,
        ViewId::AdminDashboard,
        ViewId::Clubs,
        ViewId::Events,
    ] {
        let nav = controller.request_view(view);
        assert_eq!(
            nav,
            Navigation::Redirected {
                requested: view,
                to: ViewId::Landing
            }
        );
        assert_eq!(nav.view(), ViewId::Landing);
        assert_eq!(controller.current_view(), ViewId::Landing);
    }

    assert_eq!(controller.request_view(ViewId::Auth), Navigation::Granted(ViewId::Auth));
}

#[test]
fn test_guarded_allows_authenticated() {
    let mut controller = signed_in(student());
    assert_eq!(controller.request_view(ViewId::Clubs), Navigation::Granted(ViewId::Clubs));
    assert_eq!(controller.request_view(ViewId::Events), Navigation::Granted(ViewId::Events));
    assert_eq!(controller.current_view(), ViewId::Events);
}

// =========================================================
// begin_auth / complete_auth / logout
// =========================================================

#[test]
fn test_begin_auth_sets_mode_and_role() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Signup, Role::Admin);
    let session = controller.session();
    assert_eq!(session.current_view(), ViewId::Auth);
    assert_eq!(session.auth_mode(), AuthMode::Signup);
    assert_eq!(session.requested_role(), Role::Admin);

    controller.switch_auth_mode(AuthMode::Login);
    controller.switch_role(Role::Student);
    assert_eq!(controller.session().auth_mode(), AuthMode::Login);
    assert_eq!(controller.session().requested_role(), Role::Student);
    assert_eq!(controller.current_view(), ViewId::Auth);
}

#[test]
fn test_complete_auth_routes_student_to_user_dashboard() {
    let controller = signed_in(student());
    assert!(controller.is_authenticated());
    assert_eq!(controller.current_view(), ViewId::UserDashboard);
    assert_eq!(controller.dashboard_view(), ViewId::UserDashboard);
}

#[test]
fn test_complete_auth_routes_admin_to_admin_dashboard() {
    let controller = signed_in(admin());
    assert!(controller.is_authenticated());
    assert_eq!(controller.current_view(), ViewId::AdminDashboard);
    assert_eq!(controller.dashboard_view(), ViewId::AdminDashboard);
}

#[test]
fn test_complete_auth_routes_by_user_not_requested_role() {
    let mut controller = SessionController::new(NavigationPolicy::Permissive);
    controller.begin_auth(AuthMode::Login, Role::Student);
    controller.complete_auth(admin());
    assert_eq!(controller.current_view(), ViewId::AdminDashboard);
}

#[test]
fn test_logout_resets_session() {
    for user in [student(), admin()] {
        let mut controller = signed_in(user);
        controller.request_view(ViewId::Clubs);
        controller.logout();

        let session = controller.session();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert_eq!(session.current_view(), ViewId::Landing);
    }
}

#[test]
fn test_logout_when_anonymous_is_harmless() {
    let mut controller = SessionController::new(NavigationPolicy::Permissive);
    controller.request_view(ViewId::Events);
    controller.logout();
    assert_eq!(controller.current_view(), ViewId::Landing);
}

#[test]
fn test_authenticated_iff_user_present() {
    let mut controller = SessionController::new(NavigationPolicy::Permissive);
    let check = |c: &SessionController| {
        assert_eq!(c.session().is_authenticated(), c.session().current_user().is_some());
    };
    check(&controller);
    controller.begin_auth(AuthMode::Signup, Role::Student);
    check(&controller);
    controller.complete_auth(student());
    check(&controller);
    controller.logout();
    check(&controller);
}

// =========================================================
// 提交凭据
// =========================================================

#[test]
fn test_ticket_completes_while_on_auth() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Signup, Role::Student);
    let ticket = controller.begin_submission();
    controller.switch_role(Role::Student);
    assert_eq!(controller.complete_submission(ticket, student()), Ok(()));
    assert_eq!(controller.current_view(), ViewId::UserDashboard);
}

#[test]
fn test_ticket_is_stale_after_navigating_away() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Login, Role::Admin);
    let ticket = controller.begin_submission();
    controller.request_view(ViewId::Landing);

    assert_eq!(
        controller.complete_submission(ticket, admin()),
        Err(ClubSpotError::Superseded)
    );
    assert!(!controller.is_authenticated());
    assert_eq!(controller.current_view(), ViewId::Landing);
}

#[test]
fn test_ticket_is_stale_after_reentering_auth() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Login, Role::Admin);
    let ticket = controller.begin_submission();
    controller.request_view(ViewId::Landing);
    controller.begin_auth(AuthMode::Login, Role::Student);

    // 仍在认证页，但已经是另一次进入
    assert_eq!(
        controller.complete_submission(ticket, admin()),
        Err(ClubSpotError::Superseded)
    );
    assert_eq!(controller.current_view(), ViewId::Auth);
}

#[test]
fn test_navbar_auth_during_submission_reports_interruption() {
    let mut controller = SessionController::new(NavigationPolicy::Guarded);
    controller.begin_auth(AuthMode::Login, Role::Admin);
    let ticket = controller.begin_submission();
    // 提交未完成时从导航栏再次点击 Sign Up
    controller.begin_auth(AuthMode::Signup, Role::Student);

    let err = controller
        .complete_submission(ticket, admin())
        .unwrap_err();
    assert_eq!(err.code(), "SUPERSEDED");
    assert!(!controller.is_authenticated());
    assert_eq!(controller.current_view(), ViewId::Auth);
    assert_eq!(controller.session().auth_mode(), AuthMode::Signup);

    // 重新提交即可完成
    let ticket = controller.begin_submission();
    assert_eq!(controller.complete_submission(ticket, student()), Ok(()));
    assert_eq!(controller.current_view(), ViewId::UserDashboard);
}

#[tokio::test]
async fn test_mock_auth_flow_end_to_end() {
    let auth = MockAuthenticator::new(TokioDelay, Duration::from_millis(5));
    let mut controller = SessionController::new(NavigationPolicy::Guarded);

    controller.begin_auth(AuthMode::Login, Role::Admin);
    let form = AuthForm {
        email: "boss@x.edu".into(),
        password: "anything".into(),
        ..Default::default()
    };
    form.validate(controller.session().auth_mode(), controller.session().requested_role())
        .unwrap();

    let ticket = controller.begin_submission();
    let (_handle, task) = auth.submit_with_handle(
        form,
        controller.session().auth_mode(),
        controller.session().requested_role(),
    );
    let user = task.await.unwrap();

    assert_eq!(controller.complete_submission(ticket, user), Ok(()));
    assert_eq!(controller.current_view(), ViewId::AdminDashboard);
    assert_eq!(
        controller.session().current_user().map(User::email),
        Some("boss@x.edu")
    );
}
