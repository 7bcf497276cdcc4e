//! 静态演示数据
//!
//! 所有视图只读这些数据。报名、加入等操作不会修改这里的任何记录。

use crate::{
    Achievement, Category, Club, ClubHighlight, Event, EventStatus, EventSummary, Feature,
    ManagedClub, ManagedEvent, Member, Membership, Stat,
};

const IMG_TECH: &str = "https://images.unsplash.com/photo-1748366416622-8bd7b3530dd5?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMG_PHOTO: &str = "https://images.unsplash.com/photo-1656134291125-2eea7954a295?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMG_NATURE: &str = "https://images.unsplash.com/photo-1638267351732-1b7f2707bb3b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const IMG_GENERIC: &str = "https://images.unsplash.com/photo-1663162550938-60f70fab5d31?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// =========================================================
// 俱乐部目录
// =========================================================

static CLUBS: [Club; 6] = [
    Club {
        id: 1,
        name: "Computer Science Club",
        category: Category::Technical,
        description: "Explore the latest in technology, programming, and computer science. Join us for coding competitions, tech talks, and innovative projects.",
        image: IMG_TECH,
        members: 150,
        rating: 4.8,
        position: Some("Member"),
        upcoming_events: &[
            ClubHighlight { name: "AI Workshop", date: "Dec 15" },
            ClubHighlight { name: "Coding Contest", date: "Dec 22" },
        ],
        achievements: &["Best Technical Club 2023", "Most Active Club"],
        president: "Alice Johnson",
        established: "2018",
    },
    Club {
        id: 2,
        name: "Photography Club",
        category: Category::Cultural,
        description: "Capture moments, create memories. Learn photography techniques, participate in photo walks, and showcase your artistic vision.",
        image: IMG_PHOTO,
        members: 85,
        rating: 4.6,
        position: Some("Vice President"),
        upcoming_events: &[
            ClubHighlight { name: "Nature Photography", date: "Dec 18" },
            ClubHighlight { name: "Portfolio Review", date: "Dec 25" },
        ],
        achievements: &["Best Cultural Club 2023"],
        president: "Bob Smith",
        established: "2019",
    },
    Club {
        id: 3,
        name: "Environmental Club",
        category: Category::Social,
        description: "Make a difference for our planet. Join environmental initiatives, sustainability projects, and awareness campaigns.",
        image: IMG_NATURE,
        members: 120,
        rating: 4.7,
        position: Some("Member"),
        upcoming_events: &[
            ClubHighlight { name: "Tree Plantation", date: "Dec 20" },
            ClubHighlight { name: "Clean Campus Drive", date: "Dec 28" },
        ],
        achievements: &["Green Campus Award 2023"],
        president: "Emma Davis",
        established: "2017",
    },
    Club {
        id: 4,
        name: "Robotics Club",
        category: Category::Technical,
        description: "Build the future with robotics and automation. Design, program, and compete with cutting-edge robotic systems.",
        image: IMG_GENERIC,
        members: 95,
        rating: 4.9,
        position: None,
        upcoming_events: &[
            ClubHighlight { name: "Robot Competition", date: "Dec 16" },
            ClubHighlight { name: "Arduino Workshop", date: "Dec 23" },
        ],
        achievements: &["National Robotics Winner 2023"],
        president: "John Wilson",
        established: "2020",
    },
    Club {
        id: 5,
        name: "Drama Club",
        category: Category::Cultural,
        description: "Express yourself through theater and performance. Join our productions, improve acting skills, and entertain audiences.",
        image: IMG_GENERIC,
        members: 70,
        rating: 4.5,
        position: None,
        upcoming_events: &[
            ClubHighlight { name: "Annual Play", date: "Dec 21" },
            ClubHighlight { name: "Acting Workshop", date: "Dec 27" },
        ],
        achievements: &["Best Performance 2023"],
        president: "Sarah Brown",
        established: "2016",
    },
    Club {
        id: 6,
        name: "Cricket Club",
        category: Category::Sports,
        description: "Play the gentleman's game. Practice regularly, compete in tournaments, and represent your college with pride.",
        image: IMG_GENERIC,
        members: 45,
        rating: 4.4,
        position: None,
        upcoming_events: &[
            ClubHighlight { name: "Inter-College Match", date: "Dec 19" },
            ClubHighlight { name: "Practice Session", date: "Dec 24" },
        ],
        achievements: &["District Champions 2023"],
        president: "Mike Johnson",
        established: "2015",
    },
];

// =========================================================
// 活动目录
// =========================================================

static EVENTS: [Event; 6] = [
    Event {
        id: 1,
        title: "Tech Talk: AI in Education",
        description: "Explore how artificial intelligence is transforming the education sector. Learn about the latest tools, applications, and future possibilities.",
        date: "2024-12-15",
        time: "14:00",
        duration: "2 hours",
        venue: "Auditorium A",
        club: "Computer Science Club",
        organizer: "Dr. Sarah Johnson",
        participants: 85,
        max_participants: 100,
        registered: true,
        category: Category::Technical,
        aicte_hours: 2,
        tags: &["AI", "Technology", "Education"],
        status: EventStatus::Upcoming,
    },
    Event {
        id: 2,
        title: "Annual Cultural Fest",
        description: "Celebrate diversity and talent at our annual cultural festival. Featuring performances, competitions, and cultural exhibitions.",
        date: "2024-12-20",
        time: "10:00",
        duration: "6 hours",
        venue: "Main Campus Ground",
        club: "Cultural Committee",
        organizer: "Cultural Team",
        participants: 250,
        max_participants: 300,
        registered: false,
        category: Category::Cultural,
        aicte_hours: 4,
        tags: &["Culture", "Performance", "Competition"],
        status: EventStatus::Upcoming,
    },
    Event {
        id: 3,
        title: "Coding Competition 2024",
        description: "Test your programming skills in our annual coding competition. Prizes for top performers and recognition for creative solutions.",
        date: "2024-12-22",
        time: "09:00",
        duration: "4 hours",
        venue: "Computer Lab 1",
        club: "Programming Club",
        organizer: "Alice Wilson",
        participants: 45,
        max_participants: 60,
        registered: true,
        category: Category::Technical,
        aicte_hours: 3,
        tags: &["Programming", "Competition", "Coding"],
        status: EventStatus::Upcoming,
    },
    Event {
        id: 4,
        title: "Photography Workshop",
        description: "Learn professional photography techniques from industry experts. Hands-on session with camera equipment and editing software.",
        date: "2024-12-18",
        time: "15:30",
        duration: "3 hours",
        venue: "Art Studio",
        club: "Photography Club",
        organizer: "Mike Davis",
        participants: 20,
        max_participants: 25,
        registered: false,
        category: Category::Cultural,
        aicte_hours: 2,
        tags: &["Photography", "Art", "Workshop"],
        status: EventStatus::Upcoming,
    },
    Event {
        id: 5,
        title: "Environment Awareness Drive",
        description: "Join our campus-wide environmental awareness campaign. Tree plantation, waste management, and sustainability workshops.",
        date: "2024-12-25",
        time: "08:00",
        duration: "5 hours",
        venue: "Campus Wide",
        club: "Environmental Club",
        organizer: "Emma Green",
        participants: 120,
        max_participants: 150,
        registered: false,
        category: Category::Social,
        aicte_hours: 3,
        tags: &["Environment", "Sustainability", "Community"],
        status: EventStatus::Upcoming,
    },
    Event {
        id: 6,
        title: "Robotics Showcase",
        description: "Past event: Display of innovative robotics projects by students. Interactive demonstrations and technical presentations.",
        date: "2024-11-15",
        time: "14:00",
        duration: "3 hours",
        venue: "Engineering Lab",
        club: "Robotics Club",
        organizer: "John Tech",
        participants: 95,
        max_participants: 100,
        registered: true,
        category: Category::Technical,
        aicte_hours: 2,
        tags: &["Robotics", "Technology", "Showcase"],
        status: EventStatus::Past,
    },
];

// =========================================================
// 学生面板
// =========================================================

static UPCOMING_FOR_STUDENT: [EventSummary; 3] = [
    EventSummary {
        id: 1,
        title: "Tech Talk: AI in Education",
        date: "Dec 15, 2024",
        time: "2:00 PM",
        club: "Computer Science Club",
        registered: true,
    },
    EventSummary {
        id: 2,
        title: "Annual Cultural Fest",
        date: "Dec 20, 2024",
        time: "10:00 AM",
        club: "Cultural Committee",
        registered: false,
    },
    EventSummary {
        id: 3,
        title: "Coding Competition",
        date: "Dec 22, 2024",
        time: "9:00 AM",
        club: "Programming Club",
        registered: true,
    },
];

static MEMBERSHIPS: [Membership; 3] = [
    Membership {
        id: 1,
        name: "Computer Science Club",
        position: "Member",
        join_date: "Sept 2024",
        status: "Active",
    },
    Membership {
        id: 2,
        name: "Photography Club",
        position: "Vice President",
        join_date: "Aug 2024",
        status: "Active",
    },
    Membership {
        id: 3,
        name: "Environmental Club",
        position: "Member",
        join_date: "Oct 2024",
        status: "Active",
    },
];

static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "Event Enthusiast",
        description: "Attended 10+ events",
        icon: "🏆",
        earned: true,
    },
    Achievement {
        title: "Club Leader",
        description: "Hold leadership position",
        icon: "👑",
        earned: true,
    },
    Achievement {
        title: "AICTE Champion",
        description: "Complete 50 AICTE hours",
        icon: "⭐",
        earned: false,
    },
];

// =========================================================
// 管理员面板
// =========================================================

static ADMIN_STATS: [Stat; 5] = [
    Stat { label: "Total Members", value: "150", caption: "Across all clubs" },
    Stat { label: "Active Clubs", value: "3", caption: "Under management" },
    Stat { label: "Events This Month", value: "8", caption: "December 2024" },
    Stat { label: "Total Events", value: "25", caption: "All time" },
    Stat { label: "AICTE Hours", value: "420", caption: "Hours awarded" },
];

static MANAGED_CLUBS: [ManagedClub; 3] = [
    ManagedClub {
        id: 1,
        name: "Computer Science Club",
        members: 85,
        status: "Active",
        last_event: "Dec 10, 2024",
        upcoming_events: 3,
    },
    ManagedClub {
        id: 2,
        name: "Robotics Club",
        members: 45,
        status: "Active",
        last_event: "Nov 28, 2024",
        upcoming_events: 2,
    },
    ManagedClub {
        id: 3,
        name: "AI Research Group",
        members: 20,
        status: "Active",
        last_event: "Dec 5, 2024",
        upcoming_events: 1,
    },
];

static MANAGED_EVENTS: [ManagedEvent; 3] = [
    ManagedEvent {
        id: 1,
        title: "Tech Talk: AI in Education",
        date: "Dec 15, 2024",
        participants: 85,
        max_participants: 100,
        completed: false,
        club: "Computer Science Club",
    },
    ManagedEvent {
        id: 2,
        title: "Robotics Workshop",
        date: "Dec 12, 2024",
        participants: 45,
        max_participants: 50,
        completed: false,
        club: "Robotics Club",
    },
    ManagedEvent {
        id: 3,
        title: "Machine Learning Seminar",
        date: "Dec 8, 2024",
        participants: 60,
        max_participants: 60,
        completed: true,
        club: "AI Research Group",
    },
];

static MEMBERS: [Member; 3] = [
    Member {
        id: 1,
        name: "John Doe",
        email: "john.doe@student.edu",
        student_id: "ST2023001",
        join_date: "Sept 2024",
        role: "Member",
        events_attended: 8,
        club: "Computer Science Club",
    },
    Member {
        id: 2,
        name: "Jane Smith",
        email: "jane.smith@student.edu",
        student_id: "ST2023002",
        join_date: "Aug 2024",
        role: "Secretary",
        events_attended: 12,
        club: "Computer Science Club",
    },
    Member {
        id: 3,
        name: "Mike Johnson",
        email: "mike.j@student.edu",
        student_id: "ST2023003",
        join_date: "Oct 2024",
        role: "Member",
        events_attended: 5,
        club: "Robotics Club",
    },
];

// =========================================================
// 落地页
// =========================================================

static FEATURES: [Feature; 3] = [
    Feature {
        title: "Club Management",
        description: "Join and manage multiple clubs with ease. Track your participation and contributions.",
    },
    Feature {
        title: "Event Planning",
        description: "Discover upcoming events, register instantly, and never miss important activities.",
    },
    Feature {
        title: "AICTE Hours Tracking",
        description: "Automatically track your AICTE activity hours and generate certificates.",
    },
];

static BENEFITS: [&str; 6] = [
    "Real-time event notifications",
    "Digital certificates and badges",
    "Progress tracking dashboard",
    "Easy club discovery",
    "Seamless registration process",
    "Mobile-friendly interface",
];

static PLATFORM_STATS: [Stat; 3] = [
    Stat { label: "Students", value: "500+", caption: "" },
    Stat { label: "Clubs", value: "50+", caption: "" },
    Stat { label: "Events", value: "200+", caption: "" },
];

pub fn clubs() -> &'static [Club] {
    &CLUBS
}

pub fn events() -> &'static [Event] {
    &EVENTS
}

pub fn student_upcoming_events() -> &'static [EventSummary] {
    &UPCOMING_FOR_STUDENT
}

pub fn student_memberships() -> &'static [Membership] {
    &MEMBERSHIPS
}

pub fn achievements() -> &'static [Achievement] {
    &ACHIEVEMENTS
}

pub fn admin_stats() -> &'static [Stat] {
    &ADMIN_STATS
}

pub fn managed_clubs() -> &'static [ManagedClub] {
    &MANAGED_CLUBS
}

pub fn managed_events() -> &'static [ManagedEvent] {
    &MANAGED_EVENTS
}

pub fn members() -> &'static [Member] {
    &MEMBERS
}

pub fn features() -> &'static [Feature] {
    &FEATURES
}

pub fn benefits() -> &'static [&'static str] {
    &BENEFITS
}

pub fn platform_stats() -> &'static [Stat] {
    &PLATFORM_STATS
}

pub fn find_club(id: u32) -> Option<&'static Club> {
    CLUBS.iter().find(|c| c.id == id)
}

pub fn find_event(id: u32) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let club_ids: HashSet<_> = clubs().iter().map(|c| c.id).collect();
        assert_eq!(club_ids.len(), clubs().len());

        let event_ids: HashSet<_> = events().iter().map(|e| e.id).collect();
        assert_eq!(event_ids.len(), events().len());
    }

    #[test]
    fn test_event_dates_parse() {
        for event in events() {
            assert!(
                crate::date::parse_event_date(event.date).is_some(),
                "bad date on {}",
                event.title
            );
            assert!(crate::date::parse_event_time(event.time).is_some());
        }
    }

    #[test]
    fn test_only_upcoming_unregistered_events_accept_registration() {
        let open: Vec<_> = events().iter().filter(|e| e.can_register()).map(|e| e.id).collect();
        assert_eq!(open, vec![2, 4, 5]);
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_club(4).map(|c| c.name), Some("Robotics Club"));
        assert!(find_event(99).is_none());
    }
}
