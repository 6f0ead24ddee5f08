use crate::{AuthError, Claims};

use serde_json::{Map, Value, json};

fn claims_from(value: Value) -> Claims {
    match value {
        Value::Object(map) => Claims::new(map),
        _ => Claims::new(Map::new()),
    }
}

#[test]
fn given_admin_role_when_required_then_ok() {
    let claims = claims_from(json!({ "role": "admin" }));

    assert!(claims.require_admin().is_ok());
}

#[test]
fn given_other_role_when_admin_required_then_insufficient_role() {
    let claims = claims_from(json!({ "role": "Admin" }));

    let result = claims.require_admin();

    assert!(matches!(result, Err(AuthError::InsufficientRole { .. })));
    let err = result.unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(err.client_message(), "Admin privileges required");
}

#[test]
fn given_missing_or_non_string_role_when_admin_required_then_rejected() {
    assert!(claims_from(json!({})).require_admin().is_err());
    assert!(claims_from(json!({ "role": 1 })).require_admin().is_err());
    assert!(claims_from(json!({ "role": ["admin"] })).require_admin().is_err());
}

#[test]
fn given_extra_claims_when_read_then_preserved() {
    let claims = claims_from(json!({ "role": "admin", "tenant": "acme" }));

    assert_eq!(claims.get("tenant"), Some(&json!("acme")));
    assert_eq!(claims.into_inner().len(), 2);
}
