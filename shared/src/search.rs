//! 列表过滤
//!
//! 俱乐部与活动目录的搜索框使用大小写不敏感的子串匹配。
//! 所有函数都是纯函数，对同一输入重复调用结果相同。

use crate::{CategoryFilter, Club, Event, EventStatus};

/// 任一字段包含查询串（忽略大小写）即命中
///
/// 查询串按原样匹配，不去除空白；空串是任何字段的子串，因此命中所有。
fn matches_any(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

pub fn club_matches(club: &Club, query: &str) -> bool {
    matches_any(query, &[club.name, club.description])
}

pub fn event_matches(event: &Event, query: &str) -> bool {
    matches_any(query, &[event.title, event.description, event.club])
}

/// 按名称/简介与分类过滤俱乐部
pub fn filter_clubs<'a>(
    clubs: &'a [Club],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Club> {
    clubs
        .iter()
        .filter(|c| filter.matches(c.category) && club_matches(c, query))
        .collect()
}

/// 按标题/简介/主办俱乐部过滤活动，只保留指定状态
pub fn filter_events<'a>(events: &'a [Event], query: &str, status: EventStatus) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| e.status == status && event_matches(e, query))
        .collect()
}

/// 每个筛选项下的俱乐部数量（与筛选栏按钮顺序一致）
pub fn category_counts(clubs: &[Club]) -> Vec<(CategoryFilter, usize)> {
    CategoryFilter::options()
        .map(|f| (f, clubs.iter().filter(|c| f.matches(c.category)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use crate::fixtures::{clubs, events};

    fn all_events_matching(query: &str) -> Vec<&'static str> {
        events()
            .iter()
            .filter(|e| event_matches(e, query))
            .map(|e| e.title)
            .collect()
    }

    #[test]
    fn test_robot_query_matches_robotics_only() {
        let found: Vec<_> = filter_clubs(clubs(), "robot", CategoryFilter::All)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(found, vec!["Robotics Club"]);

        assert_eq!(all_events_matching("robot"), vec!["Robotics Showcase"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = filter_clubs(clubs(), "photo", CategoryFilter::All);
        let upper = filter_clubs(clubs(), "PHOTO", CategoryFilter::All);
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_event_search_covers_club_name() {
        // 只有 club 字段包含 "programming club"
        assert_eq!(all_events_matching("programming club"), vec!["Coding Competition 2024"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_clubs(clubs(), "", CategoryFilter::All).len(), clubs().len());
        assert_eq!(filter_events(events(), "", EventStatus::Past).len(), 1);
    }

    #[test]
    fn test_whitespace_query_is_matched_literally() {
        assert!(filter_clubs(clubs(), "   ", CategoryFilter::All).is_empty());
        assert!(all_events_matching("   ").is_empty());

        // 前导空格参与匹配
        let found: Vec<_> = filter_clubs(clubs(), " club", CategoryFilter::All)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert!(found.contains(&"Robotics Club"));
        assert_eq!(filter_clubs(clubs(), "robotics", CategoryFilter::All).len(), 1);
        assert!(filter_clubs(clubs(), "robotics  ", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_filter_combines_with_query() {
        let technical = filter_clubs(clubs(), "", CategoryFilter::Only(Category::Technical));
        assert_eq!(technical.len(), 2);

        let none = filter_clubs(clubs(), "robot", CategoryFilter::Only(Category::Cultural));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_events_splits_by_status() {
        let upcoming = filter_events(events(), "", EventStatus::Upcoming);
        let past = filter_events(events(), "", EventStatus::Past);
        assert_eq!(upcoming.len(), 5);
        assert_eq!(past.len(), 1);
        assert!(filter_events(events(), "robot", EventStatus::Upcoming).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let first = filter_events(events(), "tech", EventStatus::Upcoming);
        let second = filter_events(events(), "tech", EventStatus::Upcoming);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_counts() {
        let counts = category_counts(clubs());
        assert_eq!(counts[0], (CategoryFilter::All, 6));
        assert!(counts.contains(&(CategoryFilter::Only(Category::Technical), 2)));
        assert!(counts.contains(&(CategoryFilter::Only(Category::Sports), 1)));
    }
}
