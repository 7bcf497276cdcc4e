//! Club Spot 核心
//!
//! - `view`: 视图定义
//! - `user`: 用户与角色
//! - `session`: 会话与导航状态机
//! - `auth`: 模拟认证
//! - `config`: 运行时配置
//!
//! 与平台无关，浏览器端通过 `Delay` 注入定时器。

pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod user;
pub mod view;

pub use auth::{AuthForm, Delay, MockAuthenticator, SubmissionHandle, fabricate_user};
pub use config::ClubSpotConfig;
pub use error::{ClubSpotError, Result};
pub use session::{AuthTicket, Navigation, NavigationPolicy, Session, SessionController};
pub use user::{AdminProfile, AuthMode, Role, StudentProfile, User};
pub use view::ViewId;
