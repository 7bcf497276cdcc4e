//! 用户模型
//!
//! 学生与管理员拥有不同的统计字段，用带标签的枚举区分，
//! 避免运行时检查字段是否存在。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户角色，同时也是认证页请求的用户类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    Student,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Administrator",
        }
    }

    /// 认证页副标题中使用的名称
    pub fn account_noun(&self) -> &'static str {
        match self {
            Role::Student => "user",
            Role::Admin => "admin",
        }
    }
}

/// 认证页模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub aicte_hours: u32,
    pub events_attended: u32,
    pub events_registered: u32,
    pub clubs_joined: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub clubs_managed: u32,
    pub total_members: u32,
    pub events_created: u32,
}

/// 已认证用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum User {
    #[serde(rename = "user")]
    Student(StudentProfile),
    #[serde(rename = "admin")]
    Admin(AdminProfile),
}

impl User {
    pub fn id(&self) -> Uuid {
        match self {
            User::Student(p) => p.id,
            User::Admin(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            User::Student(p) => &p.name,
            User::Admin(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            User::Student(p) => &p.email,
            User::Admin(p) => &p.email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Student(_) => Role::Student,
            User::Admin(_) => Role::Admin,
        }
    }

    pub fn as_student(&self) -> Option<&StudentProfile> {
        match self {
            User::Student(p) => Some(p),
            User::Admin(_) => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminProfile> {
        match self {
            User::Admin(p) => Some(p),
            User::Student(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> User {
        User::Student(StudentProfile {
            id: Uuid::nil(),
            name: "Ann".into(),
            email: "a@x.edu".into(),
            student_id: "S1".into(),
            aicte_hours: 0,
            events_attended: 0,
            events_registered: 0,
            clubs_joined: 0,
        })
    }

    #[test]
    fn test_accessors() {
        let user = student();
        assert_eq!(user.name(), "Ann");
        assert_eq!(user.email(), "a@x.edu");
        assert_eq!(user.role(), Role::Student);
        assert!(user.as_admin().is_none());
        assert_eq!(user.as_student().map(|s| s.student_id.as_str()), Some("S1"));
    }

    #[test]
    fn test_role_wire_names() {
        let json = serde_json::to_value(student()).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["student_id"], "S1");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&AuthMode::Signup).unwrap(), "\"signup\"");
    }

    #[test]
    fn test_auth_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Signup.toggled(), AuthMode::Login);
    }
}
