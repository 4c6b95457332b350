use crate::validate::{validate_create, validate_delete, validate_update};
use crate::{CoreError, MAX_FIELD_LEN};

use googletest::prelude::*;
use serde_json::{Value, json};

fn create_payload() -> Value {
    json!({
        "id": "user_1",
        "first_name": "John",
        "last_name": "Doe",
        "email_addresses": [
            {"email_address": "john@example.com", "primary": true}
        ],
        "image_url": "https://img.example.com/a.png"
    })
}

fn failing_field(error: CoreError) -> Option<String> {
    match error {
        CoreError::Validation { field, .. } => field,
        CoreError::Normalization { .. } => None,
    }
}

#[test]
fn given_complete_payload_when_validating_create_then_typed_payload_returned() {
    let payload = validate_create(&create_payload()).unwrap();

    assert_that!(payload.external_id, eq("user_1"));
    assert_that!(payload.first_name, some(eq("John")));
    assert_that!(payload.emails.len(), eq(1));
    assert_that!(payload.emails[0].primary, eq(true));
    assert_that!(payload.emails[0].verified, eq(false));
    assert_that!(payload.image_url, some(eq("https://img.example.com/a.png")));
}

#[test]
fn given_missing_id_when_validating_create_then_id_field_reported() {
    let mut data = create_payload();
    data.as_object_mut().unwrap().remove("id");

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("id")));
}

#[test]
fn given_non_string_id_when_validating_create_then_rejected() {
    let mut data = create_payload();
    data["id"] = json!(42);

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("id")));
}

#[test]
fn given_oversized_id_when_validating_create_then_rejected() {
    let mut data = create_payload();
    data["id"] = json!("x".repeat(MAX_FIELD_LEN + 1));

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("id")));
}

#[test]
fn given_empty_email_list_when_validating_create_then_rejected() {
    let mut data = create_payload();
    data["email_addresses"] = json!([]);

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("email_addresses")));
}

#[test]
fn given_malformed_address_when_validating_create_then_entry_path_reported() {
    let mut data = create_payload();
    data["email_addresses"] = json!([
        {"email_address": "ok@example.com"},
        {"email_address": "not-an-email"}
    ]);

    let error = validate_create(&data).unwrap_err();

    assert_that!(
        failing_field(error),
        some(eq("email_addresses[1].email_address"))
    );
}

#[test]
fn given_non_boolean_flag_when_validating_create_then_flag_path_reported() {
    let mut data = create_payload();
    data["email_addresses"] = json!([
        {"email_address": "ok@example.com", "primary": "yes"}
    ]);

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("email_addresses[0].primary")));
}

#[test]
fn given_invalid_image_url_when_validating_create_then_rejected() {
    let mut data = create_payload();
    data["image_url"] = json!("ftp://img.example.com/a.png");

    let error = validate_create(&data).unwrap_err();

    assert_that!(failing_field(error), some(eq("image_url")));
}

#[test]
fn given_null_image_url_when_validating_create_then_treated_as_absent() {
    let mut data = create_payload();
    data["image_url"] = Value::Null;

    let payload = validate_create(&data).unwrap();

    assert_that!(payload.image_url, none());
}

#[test]
fn given_null_names_when_validating_create_then_treated_as_absent() {
    let mut data = create_payload();
    data["first_name"] = Value::Null;
    data["last_name"] = Value::Null;

    let payload = validate_create(&data).unwrap();

    assert_that!(payload.first_name, none());
    assert_that!(payload.last_name, none());
}

#[test]
fn given_only_id_when_validating_update_then_accepted() {
    let payload = validate_update(&json!({"id": "user_1"})).unwrap();

    assert_that!(payload.external_id, eq("user_1"));
    assert_that!(payload.emails, is_empty());
    assert_that!(payload.image_url, none());
}

#[test]
fn given_invalid_address_when_validating_update_then_rejected() {
    let data = json!({
        "id": "user_1",
        "email_addresses": [{"email_address": "bad@@example.com"}]
    });

    let error = validate_update(&data).unwrap_err();

    assert_that!(
        failing_field(error),
        some(eq("email_addresses[0].email_address"))
    );
}

#[test]
fn given_missing_id_when_validating_update_then_rejected() {
    let error = validate_update(&json!({"first_name": "John"})).unwrap_err();

    assert_that!(failing_field(error), some(eq("id")));
}

#[test]
fn given_only_id_when_validating_delete_then_accepted() {
    let payload = validate_delete(&json!({"id": "user_1"})).unwrap();

    assert_that!(payload.external_id, eq("user_1"));
}

#[test]
fn given_non_object_payload_when_validating_delete_then_rejected() {
    let error = validate_delete(&json!("user_1")).unwrap_err();

    assert_that!(failing_field(error), none());
}

#[test]
fn given_address_with_whitespace_when_validating_then_rejected() {
    let data = json!({
        "id": "user_1",
        "email_addresses": [{"email_address": "a b@example.com"}]
    });

    let error = validate_create(&data).unwrap_err();

    assert_that!(
        failing_field(error),
        some(eq("email_addresses[0].email_address"))
    );
}

#[test]
fn given_dotless_domain_when_validating_then_rejected() {
    let data = json!({
        "id": "user_1",
        "email_addresses": [{"email_address": "a@localhost"}]
    });

    let error = validate_create(&data).unwrap_err();

    assert_that!(
        failing_field(error),
        some(eq("email_addresses[0].email_address"))
    );
}
