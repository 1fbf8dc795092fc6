use crate::ListQuery;

#[test]
fn test_default_query_bounds() {
    assert_eq!(ListQuery::default().bounds(), (0, 100));
}

#[test]
fn test_negative_skip_is_clamped() {
    let query = ListQuery { skip: -5, limit: 10 };
    assert_eq!(query.bounds(), (0, 10));
}

#[test]
fn test_non_positive_limit_uses_default() {
    let query = ListQuery { skip: 3, limit: 0 };
    assert_eq!(query.bounds(), (3, 100));
}

#[test]
fn test_limit_is_capped() {
    let query = ListQuery {
        skip: 0,
        limit: 5000,
    };
    assert_eq!(query.bounds(), (0, 100));
}
