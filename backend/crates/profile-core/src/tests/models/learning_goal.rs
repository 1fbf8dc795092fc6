use crate::{LearningGoal, LearningGoalChanges, NewLearningGoal};

use googletest::prelude::*;

fn valid_goal() -> NewLearningGoal {
    NewLearningGoal {
        title: "Learn Rust".into(),
        description: Some("Finish the book".into()),
        status: "in-progress".into(),
        streak_count: 5,
    }
}

#[test]
fn test_valid_goal_passes_validation() {
    assert_that!(valid_goal().validate(), ok(anything()));
}

#[test]
fn test_goal_field_limits() {
    let empty_title = NewLearningGoal {
        title: String::new(),
        ..valid_goal()
    };
    assert_that!(empty_title.validate(), err(anything()));

    let long_title = NewLearningGoal {
        title: "A".repeat(201),
        ..valid_goal()
    };
    assert_that!(long_title.validate(), err(anything()));

    let long_description = NewLearningGoal {
        description: Some("A".repeat(1001)),
        ..valid_goal()
    };
    assert_that!(long_description.validate(), err(anything()));

    let long_status = NewLearningGoal {
        status: "A".repeat(51),
        ..valid_goal()
    };
    assert_that!(long_status.validate(), err(anything()));

    let negative_streak = NewLearningGoal {
        streak_count: -1,
        ..valid_goal()
    };
    assert_that!(negative_streak.validate(), err(anything()));
}

#[test]
fn test_goal_description_is_optional() {
    let goal = NewLearningGoal {
        description: None,
        ..valid_goal()
    };
    assert_that!(goal.validate(), ok(anything()));
}

#[test]
fn test_streak_count_defaults_to_zero_when_omitted() {
    let goal: NewLearningGoal =
        serde_json::from_str(r#"{"title": "Learn Rust", "status": "new"}"#).unwrap();

    assert_that!(goal.streak_count, eq(0));
    assert_that!(goal.description, none());
}

#[test]
fn test_changes_validate_only_present_fields() {
    assert_that!(LearningGoalChanges::default().validate(), ok(anything()));

    let empty_title = LearningGoalChanges {
        title: Some(String::new()),
        ..Default::default()
    };
    assert_that!(empty_title.validate(), err(anything()));

    let negative_streak = LearningGoalChanges {
        streak_count: Some(-1),
        ..Default::default()
    };
    assert_that!(negative_streak.validate(), err(anything()));
}

#[test]
fn test_apply_changes_keeps_absent_fields() {
    let mut goal = LearningGoal {
        id: 1,
        user_id: 42,
        title: "Learn Rust".into(),
        description: None,
        status: "new".into(),
        streak_count: 0,
    };

    goal.apply(LearningGoalChanges {
        status: Some("done".into()),
        streak_count: Some(3),
        ..Default::default()
    });

    assert_that!(goal.title, eq("Learn Rust"));
    assert_that!(goal.status, eq("done"));
    assert_that!(goal.streak_count, eq(3));
    assert_that!(goal.description, none());
}
