//! Club Spot 共享数据模型
//!
//! - `fixtures`: 静态演示数据（俱乐部、活动、成员、统计）
//! - `date`: 活动日期与时间的展示格式
//! - `search`: 大小写不敏感的列表过滤

use serde::{Deserialize, Serialize};

pub mod date;
pub mod fixtures;
pub mod search;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 学生需要完成的 AICTE 活动学时
pub const AICTE_REQUIRED_HOURS: u32 = 75;

// =========================================================
// 分类与状态 (Tags)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Cultural,
    Sports,
    Social,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Cultural,
        Category::Sports,
        Category::Social,
    ];

    /// 机器可读的名称（与表单 `<select>` 的 value 一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Cultural => "cultural",
            Category::Sports => "sports",
            Category::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Cultural => "Cultural",
            Category::Sports => "Sports",
            Category::Social => "Social Service",
        }
    }

    /// 分类徽章的配色
    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::Technical => "badge bg-blue-100 text-blue-700",
            Category::Cultural => "badge bg-purple-100 text-purple-700",
            Category::Social => "badge bg-green-100 text-green-700",
            Category::Sports => "badge bg-orange-100 text-orange-700",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// 俱乐部目录的分类筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Clubs",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// 筛选栏按钮顺序
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Past,
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 活动目录中的活动
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// ISO 日期，如 `2024-12-15`
    pub date: &'static str,
    /// 24 小时制时间，如 `14:00`
    pub time: &'static str,
    pub duration: &'static str,
    pub venue: &'static str,
    pub club: &'static str,
    pub organizer: &'static str,
    pub participants: u32,
    pub max_participants: u32,
    pub registered: bool,
    pub category: Category,
    pub aicte_hours: u32,
    pub tags: &'static [&'static str],
    pub status: EventStatus,
}

impl Event {
    /// 仅即将开始且尚未报名的活动提供报名入口
    pub fn can_register(&self) -> bool {
        !self.registered && self.status == EventStatus::Upcoming
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubHighlight {
    pub name: &'static str,
    pub date: &'static str,
}

/// 俱乐部目录中的俱乐部
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Club {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub members: u32,
    pub rating: f32,
    /// 已加入时为担任的职位
    pub position: Option<&'static str>,
    pub upcoming_events: &'static [ClubHighlight],
    pub achievements: &'static [&'static str],
    pub president: &'static str,
    pub established: &'static str,
}

impl Club {
    pub fn is_joined(&self) -> bool {
        self.position.is_some()
    }
}

/// 管理员视角的俱乐部成员
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub student_id: &'static str,
    pub join_date: &'static str,
    pub role: &'static str,
    pub events_attended: u32,
    pub club: &'static str,
}

/// 统计卡片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

/// 学生面板上的活动摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub club: &'static str,
    pub registered: bool,
}

/// 学生已加入的俱乐部
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Membership {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub join_date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

/// 管理员管理的俱乐部
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedClub {
    pub id: u32,
    pub name: &'static str,
    pub members: u32,
    pub status: &'static str,
    pub last_event: &'static str,
    pub upcoming_events: u32,
}

/// 管理员活动列表中的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedEvent {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub participants: u32,
    pub max_participants: u32,
    pub completed: bool,
    pub club: &'static str,
}

impl ManagedEvent {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Upcoming" }
    }
}

/// 落地页的功能介绍
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("music"), None);
    }

    #[test]
    fn test_category_filter_options_start_with_all() {
        let options: Vec<_> = CategoryFilter::options().collect();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert!(CategoryFilter::All.matches(Category::Sports));
        assert!(!CategoryFilter::Only(Category::Technical).matches(Category::Sports));
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Technical).unwrap();
        assert_eq!(json, "\"technical\"");
    }
}
