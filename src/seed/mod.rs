//! Fixed sample data the store is seeded with at startup.
//!
//! Three teams and six retrospectives. Seed ids are short numeric strings,
//! disjoint from the UUIDs handed out to entities created at runtime.

use crate::models::{ItemType, Retro, RetroItem, RetroStatus, Team};

fn item(id: &str, content: &str, item_type: ItemType, votes: u32, author: &str, created_at: &str) -> RetroItem {
    RetroItem {
        id: id.to_string(),
        content: content.to_string(),
        item_type,
        votes,
        author: author.to_string(),
        created_at: created_at.to_string(),
    }
}

/// The three seed teams.
pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: "1".to_string(),
            name: "Frontend Team".to_string(),
            members: vec![
                "John Doe".to_string(),
                "Jane Smith".to_string(),
                "Alex Johnson".to_string(),
            ],
        },
        Team {
            id: "2".to_string(),
            name: "Backend Team".to_string(),
            members: vec![
                "Michael Brown".to_string(),
                "Emily Davis".to_string(),
                "Robert Wilson".to_string(),
            ],
        },
        Team {
            id: "3".to_string(),
            name: "Design Team".to_string(),
            members: vec![
                "Sarah Lee".to_string(),
                "Chris Martinez".to_string(),
                "Taylor Kim".to_string(),
            ],
        },
    ]
}

/// The six seed retros: three for team 1, two for team 2, one for team 3.
/// Retro 3 is upcoming with no items yet; the rest are completed.
pub fn retros() -> Vec<Retro> {
    vec![
        Retro {
            id: "1".to_string(),
            title: "Sprint 23 Retrospective".to_string(),
            description: "Review of our latest feature launch".to_string(),
            date: "2023-05-15".to_string(),
            team_id: "1".to_string(),
            status: RetroStatus::Completed,
            items: vec![
                item(
                    "101",
                    "Successfully launched new user dashboard on time",
                    ItemType::Positive,
                    3,
                    "John Doe",
                    "2023-05-15T10:00:00Z",
                ),
                item(
                    "102",
                    "QA process took longer than expected",
                    ItemType::Negative,
                    2,
                    "Jane Smith",
                    "2023-05-15T10:05:00Z",
                ),
                item(
                    "103",
                    "Implement automated testing for critical paths",
                    ItemType::Action,
                    4,
                    "Alex Johnson",
                    "2023-05-15T10:10:00Z",
                ),
            ],
        },
        Retro {
            id: "2".to_string(),
            title: "API Integration Review".to_string(),
            description: "Discussing challenges with third-party services".to_string(),
            date: "2023-05-22".to_string(),
            team_id: "2".to_string(),
            status: RetroStatus::Completed,
            items: vec![
                item(
                    "201",
                    "Payment API integration completed ahead of schedule",
                    ItemType::Positive,
                    2,
                    "Michael Brown",
                    "2023-05-22T14:00:00Z",
                ),
                item(
                    "202",
                    "Documentation for shipping API was outdated",
                    ItemType::Negative,
                    3,
                    "Emily Davis",
                    "2023-05-22T14:15:00Z",
                ),
                item(
                    "203",
                    "Create internal documentation for all API integrations",
                    ItemType::Action,
                    5,
                    "Robert Wilson",
                    "2023-05-22T14:30:00Z",
                ),
            ],
        },
        Retro {
            id: "3".to_string(),
            title: "Q2 Planning Session".to_string(),
            description: "Planning our objectives for the next quarter".to_string(),
            date: "2023-06-01".to_string(),
            team_id: "1".to_string(),
            status: RetroStatus::Upcoming,
            items: vec![],
        },
        Retro {
            id: "4".to_string(),
            title: "UI/UX Design Review".to_string(),
            description: "Evaluating our latest design system implementation".to_string(),
            date: "2023-04-18".to_string(),
            team_id: "3".to_string(),
            status: RetroStatus::Completed,
            items: vec![
                item(
                    "401",
                    "New component library improved development speed by 30%",
                    ItemType::Positive,
                    5,
                    "Sarah Lee",
                    "2023-04-18T09:30:00Z",
                ),
                item(
                    "402",
                    "Mobile responsiveness issues on key landing pages",
                    ItemType::Negative,
                    3,
                    "Chris Martinez",
                    "2023-04-18T09:45:00Z",
                ),
                item(
                    "403",
                    "Create comprehensive responsive design guidelines",
                    ItemType::Action,
                    4,
                    "Taylor Kim",
                    "2023-04-18T10:00:00Z",
                ),
            ],
        },
        Retro {
            id: "5".to_string(),
            title: "Performance Optimization Sprint".to_string(),
            description: "Review of site performance improvements".to_string(),
            date: "2023-04-05".to_string(),
            team_id: "1".to_string(),
            status: RetroStatus::Completed,
            items: vec![
                item(
                    "501",
                    "Reduced page load time by 45%",
                    ItemType::Positive,
                    6,
                    "John Doe",
                    "2023-04-05T11:00:00Z",
                ),
                item(
                    "502",
                    "Legacy code refactoring took longer than estimated",
                    ItemType::Negative,
                    2,
                    "Jane Smith",
                    "2023-04-05T11:10:00Z",
                ),
                item(
                    "503",
                    "Implement performance monitoring system",
                    ItemType::Action,
                    5,
                    "Alex Johnson",
                    "2023-04-05T11:20:00Z",
                ),
                item(
                    "504",
                    "Bundle optimization reduced JavaScript size by 30%",
                    ItemType::Positive,
                    4,
                    "John Doe",
                    "2023-04-05T11:30:00Z",
                ),
            ],
        },
        Retro {
            id: "6".to_string(),
            title: "Database Migration Post-Mortem".to_string(),
            description: "Analysis of our recent database migration process".to_string(),
            date: "2023-03-15".to_string(),
            team_id: "2".to_string(),
            status: RetroStatus::Completed,
            items: vec![
                item(
                    "601",
                    "Zero downtime achieved during migration",
                    ItemType::Positive,
                    7,
                    "Michael Brown",
                    "2023-03-15T15:00:00Z",
                ),
                item(
                    "602",
                    "Data validation scripts caught 15 critical issues before launch",
                    ItemType::Positive,
                    5,
                    "Emily Davis",
                    "2023-03-15T15:10:00Z",
                ),
                item(
                    "603",
                    "Some query performance degradation post-migration",
                    ItemType::Negative,
                    4,
                    "Robert Wilson",
                    "2023-03-15T15:20:00Z",
                ),
                item(
                    "604",
                    "Optimize high-traffic queries and add performance monitoring",
                    ItemType::Action,
                    6,
                    "Michael Brown",
                    "2023-03-15T15:30:00Z",
                ),
            ],
        },
    ]
}
