use crate::CreateProjectRequest;
use crate::api::error::NAME_REQUIRED;

use axum::Json;
use googletest::assert_that;
use googletest::prelude::{anything, err};

fn request(name: Option<&str>, description: Option<&str>) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.map(String::from),
        description: description.map(String::from),
    }
}

#[test]
fn given_name_and_no_description_when_converted_then_empty_description_and_slug() {
    // When
    let project =
        CreateProjectRequest::into_new_project(Ok(Json(request(Some("Alpha Team"), None))))
            .unwrap();

    // Then
    assert_eq!(project.name, "Alpha Team");
    assert_eq!(project.description, "");
    assert_eq!(project.slug, "alpha-team");
}

#[test]
fn given_missing_name_when_converted_then_name_required() {
    // When
    let result = CreateProjectRequest::into_new_project(Ok(Json(request(None, Some("x")))));

    // Then
    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().to_string().contains(NAME_REQUIRED));
}

#[test]
fn given_empty_name_when_converted_then_name_required() {
    // When
    let result = CreateProjectRequest::into_new_project(Ok(Json(request(Some(""), None))));

    // Then
    assert_that!(result, err(anything()));
}
