use super::*;

// =============================================================
// Endpoint table
// =============================================================

#[test]
fn auth_endpoints_match_djoser_routes() {
    assert_eq!((Endpoint::Login.method(), Endpoint::Login.path()), (Method::Post, "/auth/token/login/".to_owned()));
    assert_eq!(
        (Endpoint::Logout.method(), Endpoint::Logout.path()),
        (Method::Post, "/auth/token/logout/".to_owned())
    );
    assert_eq!(
        (Endpoint::Register.method(), Endpoint::Register.path()),
        (Method::Post, "/auth/users/".to_owned())
    );
    assert_eq!((Endpoint::Me.method(), Endpoint::Me.path()), (Method::Get, "/auth/users/me/".to_owned()));
}

#[test]
fn task_endpoints_cover_crud() {
    assert_eq!((Endpoint::ListTasks.method(), Endpoint::ListTasks.path()), (Method::Get, "/task/".to_owned()));
    assert_eq!((Endpoint::GetTask(42).method(), Endpoint::GetTask(42).path()), (Method::Get, "/task/42/".to_owned()));
    assert_eq!((Endpoint::CreateTask.method(), Endpoint::CreateTask.path()), (Method::Post, "/task/".to_owned()));
    assert_eq!(
        (Endpoint::UpdateTask(42).method(), Endpoint::UpdateTask(42).path()),
        (Method::Put, "/task/42/".to_owned())
    );
    assert_eq!(
        (Endpoint::DeleteTask(42).method(), Endpoint::DeleteTask(42).path()),
        (Method::Delete, "/task/42/".to_owned())
    );
}

#[test]
fn lookup_and_status_endpoints() {
    assert_eq!((Endpoint::ListUsers.method(), Endpoint::ListUsers.path()), (Method::Get, "/custom-user/".to_owned()));
    assert_eq!(
        (Endpoint::ListEquipments.method(), Endpoint::ListEquipments.path()),
        (Method::Get, "/equipment/".to_owned())
    );
    assert_eq!(
        (Endpoint::CreateTaskStatus.method(), Endpoint::CreateTaskStatus.path()),
        (Method::Post, "/task-status/".to_owned())
    );
    assert_eq!(
        (Endpoint::UploadTaskStatusImage.method(), Endpoint::UploadTaskStatusImage.path()),
        (Method::Post, "/task-status-image/".to_owned())
    );
}

#[test]
fn every_path_is_slash_delimited() {
    let all = [
        Endpoint::Login,
        Endpoint::Logout,
        Endpoint::Register,
        Endpoint::Me,
        Endpoint::ListTasks,
        Endpoint::GetTask(1),
        Endpoint::CreateTask,
        Endpoint::UpdateTask(1),
        Endpoint::DeleteTask(1),
        Endpoint::ListUsers,
        Endpoint::ListEquipments,
        Endpoint::CreateTaskStatus,
        Endpoint::UploadTaskStatusImage,
    ];
    for endpoint in all {
        let path = endpoint.path();
        assert!(path.starts_with('/') && path.ends_with('/'), "{endpoint:?} -> {path}");
    }
}

#[test]
fn method_names_are_uppercase_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// URL + header helpers
// =============================================================

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(
        endpoint_url("http://localhost:8000/api", Endpoint::GetTask(3)),
        "http://localhost:8000/api/task/3/"
    );
    assert_eq!(
        endpoint_url("http://localhost:8000/api/", Endpoint::ListTasks),
        "http://localhost:8000/api/task/"
    );
}

#[test]
fn authorization_header_uses_token_scheme() {
    assert_eq!(authorization_header(Some("abc123")), Some("Token abc123".to_owned()));
}

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(authorization_header(None), None);
    assert_eq!(authorization_header(Some("  ")), None);
}

#[test]
fn status_failed_message_names_method_and_path() {
    assert_eq!(status_failed_message(Endpoint::DeleteTask(9), 403), "DELETE /task/9/ failed: 403");
}

#[test]
fn multipart_field_names_match_image_serializer() {
    assert_eq!(IMAGE_FIELD, "image");
    assert_eq!(IMAGE_STATUS_FIELD, "task_status_FK");
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn calls_are_unavailable_without_browser() {
    assert_eq!(get_tasks().await, Err(ApiError::Unavailable));
    assert_eq!(delete_task(3).await, Err(ApiError::Unavailable));
}
