use crate::{CoreError, NewBadge};

fn valid_badge() -> NewBadge {
    NewBadge {
        name: "Test Badge".into(),
        description: "Test Description".into(),
        icon_url: "http://example.com/icon.png".into(),
    }
}

#[test]
fn test_valid_badge_passes_validation() {
    assert!(valid_badge().validate().is_ok());
}

#[test]
fn test_empty_badge_name_is_rejected() {
    let badge = NewBadge {
        name: String::new(),
        ..valid_badge()
    };

    match badge.validate() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_badge_length_limits() {
    let long_name = NewBadge {
        name: "A".repeat(101),
        ..valid_badge()
    };
    assert!(long_name.validate().is_err());

    let max_name = NewBadge {
        name: "A".repeat(100),
        ..valid_badge()
    };
    assert!(max_name.validate().is_ok());

    let long_description = NewBadge {
        description: "A".repeat(501),
        ..valid_badge()
    };
    assert!(long_description.validate().is_err());

    let long_icon = NewBadge {
        icon_url: format!("http://example.com/{}", "A".repeat(490)),
        ..valid_badge()
    };
    assert!(long_icon.validate().is_err());
}

#[test]
fn test_badge_length_counts_characters_not_bytes() {
    let badge = NewBadge {
        name: "é".repeat(100),
        ..valid_badge()
    };
    assert!(badge.validate().is_ok());
}
