//! HTTP-level integration tests for `/projects/sort/*` and `/projects/filter/*`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_task, get, ids};
use serde_json::json;
use sqlx::PgPool;

/// Ids of the seeded projects, in creation order.
struct Seeded {
    a: i64,
    b: i64,
    c: i64,
}

/// Three projects:
///
/// | id | start      | completion | status     | priority | tasks |
/// |----|------------|------------|------------|----------|-------|
/// | a  | 2024-01-10 | 2024-03-01 | Active     | 5        | 2     |
/// | b  | 2024-02-01 | 2024-02-15 | NotStarted | 9        | 0     |
/// | c  | 2024-01-10 | 2024-02-20 | Completed  | 5        | 5     |
async fn seed(pool: &PgPool) -> Seeded {
    let a = create_project(
        pool,
        json!({
            "name": "a",
            "startDate": "2024-01-10T00:00:00Z",
            "completionDate": "2024-03-01T00:00:00Z",
            "status": "Active",
            "priority": 5,
        }),
    )
    .await;
    let b = create_project(
        pool,
        json!({
            "name": "b",
            "startDate": "2024-02-01T00:00:00Z",
            "completionDate": "2024-02-15T00:00:00Z",
            "priority": 9,
        }),
    )
    .await;
    let c = create_project(
        pool,
        json!({
            "name": "c",
            "startDate": "2024-01-10T00:00:00Z",
            "completionDate": "2024-02-20T00:00:00Z",
            "status": "Completed",
            "priority": 5,
        }),
    )
    .await;

    for i in 0..2 {
        create_task(pool, a, &format!("a{i}")).await;
    }
    for i in 0..5 {
        create_task(pool, c, &format!("c{i}")).await;
    }

    Seeded { a, b, c }
}

async fn fetch_ids(pool: &PgPool, uri: &str) -> Vec<i64> {
    let response = get(common::build_test_app(pool.clone()), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    ids(&body_json(response).await)
}

async fn status_of(pool: &PgPool, uri: &str) -> StatusCode {
    get(common::build_test_app(pool.clone()), uri).await.status()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_start_date_is_descending_and_stable(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/sort/startDate").await,
        vec![s.b, s.a, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_end_date_is_ascending(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/sort/endDate").await,
        vec![s.b, s.c, s.a]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_priority_is_descending_and_stable(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/sort/priority").await,
        vec![s.b, s.a, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_status_follows_lifecycle_order(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/sort/status").await,
        vec![s.b, s.a, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sorted_projects_carry_their_tasks(pool: PgPool) {
    let s = seed(&pool).await;
    let response = get(
        common::build_test_app(pool.clone()),
        "/projects/sort/priority",
    )
    .await;
    let json = body_json(response).await;

    let by_id = |id: i64| {
        json.as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == id)
            .unwrap()["tasks"]
            .as_array()
            .unwrap()
            .len()
    };
    assert_eq!(by_id(s.a), 2);
    assert_eq!(by_id(s.b), 0);
    assert_eq!(by_id(s.c), 5);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_start_date_excludes_the_boundary(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/startDate?dateAfter=2024-01-10T00:00:00Z").await,
        vec![s.b]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/startDate?dateAfter=2024-01-09").await,
        vec![s.a, s.b, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_end_date_excludes_the_boundary(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/endDate?dateBefore=2024-02-20").await,
        vec![s.b]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/endDate?dateBefore=2024-02-21").await,
        vec![s.b, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_task_count_is_inclusive(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/countOfTasks?start=1&end=4").await,
        vec![s.a]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/countOfTasks?start=0&end=2").await,
        vec![s.a, s.b]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/countOfTasks?start=2&end=5").await,
        vec![s.a, s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_status(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/status?status=Active").await,
        vec![s.a]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/status?status=Completed").await,
        vec![s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_status_accepts_numeric_rank(pool: PgPool) {
    let s = seed(&pool).await;
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/status?status=0").await,
        vec![s.b]
    );
    assert_eq!(
        fetch_ids(&pool, "/projects/filter/status?status=2").await,
        vec![s.c]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_by_start_date_accepts_offset_with_unencoded_plus(pool: PgPool) {
    let s = seed(&pool).await;
    // 2024-01-10T02:00:00+02:00 is midnight UTC, so a and c sit on the boundary.
    let unencoded = "/projects/filter/startDate?dateAfter=2024-01-10T02:00:00+02:00";
    let encoded = "/projects/filter/startDate?dateAfter=2024-01-10T02:00:00%2B02:00";
    assert_eq!(fetch_ids(&pool, unencoded).await, vec![s.b]);
    assert_eq!(fetch_ids(&pool, encoded).await, vec![s.b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_filter_with_no_matches_returns_empty_array(pool: PgPool) {
    seed(&pool).await;
    assert!(fetch_ids(&pool, "/projects/filter/startDate?dateAfter=2030-01-01")
        .await
        .is_empty());
    assert!(fetch_ids(&pool, "/projects/filter/countOfTasks?start=4&end=1")
        .await
        .is_empty());
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_every_query_endpoint_returns_404_without_projects(pool: PgPool) {
    let uris = [
        "/projects/sort/startDate",
        "/projects/sort/endDate",
        "/projects/sort/priority",
        "/projects/sort/status",
        "/projects/filter/startDate?dateAfter=2024-01-01",
        "/projects/filter/endDate?dateBefore=2024-01-01",
        "/projects/filter/countOfTasks?start=0&end=10",
        "/projects/filter/status?status=Active",
    ];
    for uri in uris {
        assert_eq!(status_of(&pool, uri).await, StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_query_parameters_return_400(pool: PgPool) {
    seed(&pool).await;
    let uris = [
        "/projects/filter/startDate",
        "/projects/filter/startDate?dateAfter=yesterday",
        "/projects/filter/endDate?dateBefore=",
        "/projects/filter/countOfTasks?start=1",
        "/projects/filter/countOfTasks?start=one&end=2",
        "/projects/filter/status?status=Bogus",
        "/projects/filter/status?status=7",
    ];
    for uri in uris {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST", "GET {uri}");
        assert!(json["error"].is_string(), "GET {uri}");
    }
}
