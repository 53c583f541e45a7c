mod common;

use axum::http::StatusCode;

use common::{message, spawn_app};

#[tokio::test]
async fn pet_count_reports_total_pets() {
    let app = spawn_app().await;
    let owner = app.signup("aquino", "pw", 30).await;
    app.add_pet(&owner.id, "Bantay", "dog").await;
    app.add_pet(&owner.id, "Muning", "cat").await;

    let (status, body) = app.get("/stats/pets/count").await;

    assert_eq!(status, StatusCode::OK);
    let text = message(&body);
    assert!(text.starts_with("ITMC{11. pet_count:2_date:"), "{text}");
    assert!(text.contains("_time:"));
}

#[tokio::test]
async fn user_count_reports_total_users() {
    let app = spawn_app().await;
    app.signup("a", "pw", 20).await;
    app.signup("b", "pw", 21).await;
    app.signup("c", "pw", 22).await;

    let (status, body) = app.get("/stats/users/count").await;

    assert_eq!(status, StatusCode::OK);
    assert!(message(&body).starts_with("ITMC{14. users:3_date:"));
}

#[tokio::test]
async fn ages_group_every_oldest_and_youngest_user() {
    let app = spawn_app().await;
    app.signup("A", "pw", 20).await;
    app.signup("B", "pw", 20).await;
    app.signup("C", "pw", 30).await;

    let (status, body) = app.get("/stats/users/ages").await;

    assert_eq!(status, StatusCode::OK);
    let text = message(&body);
    assert!(
        text.starts_with("ITMC{13. oldest:[C]_30_youngest:[A,B]_20}")
            || text.starts_with("ITMC{13. oldest:[C]_30_youngest:[B,A]_20}"),
        "{text}"
    );
}

#[tokio::test]
async fn ages_with_single_user_lists_them_twice() {
    let app = spawn_app().await;
    app.signup("solo", "pw", 42).await;

    let (_, body) = app.get("/stats/users/ages").await;

    assert!(message(&body).starts_with("ITMC{13. oldest:[solo]_42_youngest:[solo]_42}"));
}

#[tokio::test]
async fn ages_without_users_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = app.get("/stats/users/ages").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "No users found");
}
