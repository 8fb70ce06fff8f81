use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use survey_service::{
    app,
    config::Config,
    database::pool::{create_pool, run_migrations},
    AppState,
};
use tower::ServiceExt;

async fn setup_app() -> (Router, AppState) {
    let config = Config::in_memory("test_secret_key");
    let pool = create_pool(&config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    let state = AppState::new(pool, config);
    (app(state.clone()), state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn register_and_login(app: &Router, username: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/register",
        None,
        Some(json!({
            "username": username,
            "password": password,
            "email": format!("{}@x.com", username),
            "role": "user"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().expect("token").to_string()
}

async fn user_id(state: &AppState, username: &str) -> i64 {
    state
        .auth_service
        .find_by_username(username)
        .await
        .unwrap()
        .expect("user")
        .id
}

async fn count(state: &AppState, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&state.pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn register_login_submit_and_list_end_to_end() {
    let (app, state) = setup_app().await;
    send(&app, "POST", "/create-surveys", None, None).await;

    let token = register_and_login(&app, "ana", "pw1").await;
    let (status, body) = send(
        &app,
        "POST",
        "/responses",
        Some(token.as_str()),
        Some(json!({
            "survey_id": 1,
            "answers": [{ "question_id": 1, "selected_option_id": 2 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Response submitted successfully");
    let response_id = body["id"].as_i64().unwrap();

    let ana_id = user_id(&state, "ana").await;
    let (status, body) = send(
        &app,
        "GET",
        &format!("/responses?user_id={}", ana_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let responses = body.as_array().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], response_id);
    assert_eq!(responses[0]["user_id"], ana_id);
    assert_eq!(responses[0]["survey_id"], 1);
    assert!(responses[0]["submitted_at"].is_string());
}

#[tokio::test]
async fn three_answers_create_one_response_and_three_answer_rows() {
    let (app, state) = setup_app().await;
    send(&app, "POST", "/create-surveys", None, None).await;
    let token = register_and_login(&app, "beto", "pw2").await;

    let (status, body) = send(
        &app,
        "POST",
        "/responses",
        Some(token.as_str()),
        Some(json!({
            "survey_id": 1,
            "answers": [
                { "question_id": 1, "selected_option_id": 1 },
                { "question_id": 2, "selected_option_id": 6 },
                { "question_id": 3, "selected_option_id": 9 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let response_id = body["id"].as_i64().unwrap();

    assert_eq!(count(&state, "responses").await, 1);
    assert_eq!(count(&state, "answers").await, 3);

    let answers = state.response_service.answers_for(response_id).await.unwrap();
    assert_eq!(answers.len(), 3);
    assert!(answers.iter().all(|a| a.response_id == response_id));
    let selected: Vec<i64> = answers.iter().map(|a| a.selected_option_id).collect();
    assert_eq!(selected, [1, 6, 9]);
}

#[tokio::test]
async fn failed_answer_rolls_back_the_whole_submission() {
    let (app, state) = setup_app().await;
    send(&app, "POST", "/create-surveys", None, None).await;
    let token = register_and_login(&app, "carla", "pw3").await;

    let (status, _) = send(
        &app,
        "POST",
        "/responses",
        Some(token.as_str()),
        Some(json!({
            "survey_id": 1,
            "answers": [
                { "question_id": 1, "selected_option_id": 1 },
                { "question_id": 2, "selected_option_id": 99999 }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(count(&state, "responses").await, 0);
    assert_eq!(count(&state, "answers").await, 0);
}

#[tokio::test]
async fn submission_needs_answers_and_a_known_user() {
    let (app, state) = setup_app().await;
    send(&app, "POST", "/create-surveys", None, None).await;
    let token = register_and_login(&app, "dani", "pw4").await;

    let (status, _) = send(
        &app,
        "POST",
        "/responses",
        Some(token.as_str()),
        Some(json!({ "survey_id": 1, "answers": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    sqlx::query("DELETE FROM users WHERE username = 'dani'")
        .execute(&state.pool)
        .await
        .unwrap();
    let (status, _) = send(
        &app,
        "POST",
        "/responses",
        Some(token.as_str()),
        Some(json!({
            "survey_id": 1,
            "answers": [{ "question_id": 1, "selected_option_id": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(count(&state, "responses").await, 0);
}

#[tokio::test]
async fn response_filters_by_survey_user_and_time() {
    let (app, state) = setup_app().await;
    send(&app, "POST", "/create-surveys", None, None).await;
    let ana = register_and_login(&app, "ana", "pw1").await;
    let beto = register_and_login(&app, "beto", "pw2").await;

    for (token, survey_id, question_id) in [(&ana, 1, 1), (&ana, 2, 11), (&beto, 2, 11)] {
        let (status, _) = send(
            &app,
            "POST",
            "/responses",
            Some(token.as_str()),
            Some(json!({
                "survey_id": survey_id,
                "answers": [{ "question_id": question_id, "selected_option_id": 1 }]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, all) = send(&app, "GET", "/responses", None, None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, blank) = send(&app, "GET", "/responses?survey_id=&user_id=", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blank.as_array().unwrap().len(), 3);

    let (_, by_survey) = send(&app, "GET", "/responses?survey_id=2", None, None).await;
    assert_eq!(by_survey.as_array().unwrap().len(), 2);

    let ana_id = user_id(&state, "ana").await;
    let (_, combined) = send(
        &app,
        "GET",
        &format!("/responses?survey_id=2&user_id={}", ana_id),
        None,
        None,
    )
    .await;
    assert_eq!(combined.as_array().unwrap().len(), 1);

    let submitted_at = all[0]["submitted_at"].as_str().unwrap();
    let day = &submitted_at[..10];
    let (_, same_day) = send(
        &app,
        "GET",
        &format!("/responses?submitted_at={}", day),
        None,
        None,
    )
    .await;
    assert!(!same_day.as_array().unwrap().is_empty());

    let (_, none) = send(&app, "GET", "/responses?submitted_at=1999-01-01", None, None).await;
    assert_eq!(none, json!([]));

    let (_, since_2000) = send(
        &app,
        "GET",
        "/responses?submitted_from=2000-01-01T00:00:00Z",
        None,
        None,
    )
    .await;
    assert_eq!(since_2000.as_array().unwrap().len(), 3);

    let (_, before_2000) = send(
        &app,
        "GET",
        "/responses?submitted_to=2000-01-01T00:00:00Z",
        None,
        None,
    )
    .await;
    assert_eq!(before_2000, json!([]));

    let (status, body) = send(&app, "GET", "/responses?submitted_from=yesterday", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("submitted_from"));
}
