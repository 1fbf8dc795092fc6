use crate::{Badge, IdentityRecord, LearningGoal, UserProfile};

use chrono::Utc;

fn badge(id: i64) -> Badge {
    Badge {
        id,
        user_id: 7,
        name: format!("Badge {id}"),
        description: "desc".into(),
        icon_url: "http://example.com/icon.png".into(),
        date_achieved: Utc::now(),
    }
}

fn identity() -> IdentityRecord {
    IdentityRecord {
        id: 7,
        username: "alice".into(),
        email: Some("a@x.com".into()),
    }
}

#[test]
fn test_assemble_merges_identity_and_counts() {
    let goals = vec![LearningGoal {
        id: 1,
        user_id: 7,
        title: "Goal".into(),
        description: None,
        status: "new".into(),
        streak_count: 0,
    }];

    let profile = UserProfile::assemble(identity(), vec![badge(1), badge(2)], goals);

    assert_eq!(profile.id, 7);
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.email.as_deref(), Some("a@x.com"));
    assert_eq!(profile.statistics.total_badges, 2);
    assert_eq!(profile.statistics.total_goals, 1);
    assert_eq!(profile.statistics.level, 1);
}

#[test]
fn test_level_increases_every_five_badges() {
    let badges = (1..=10).map(badge).collect();
    let profile = UserProfile::assemble(identity(), badges, Vec::new());

    assert_eq!(profile.statistics.level, 3);
}
