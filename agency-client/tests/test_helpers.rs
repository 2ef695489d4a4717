/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Shared helpers for agency-client integration tests: a throwaway catalog
//! backend served by axum on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Value};

/// Bind `app` to `127.0.0.1:0` and return its root URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

pub fn blog_json(id: &str, title: &str, tags: &[&str]) -> Value {
    json!({
        "_id": id,
        "title": title,
        "writer": "Staff",
        "readingTime": "3 min",
        "details": format!("{title} in depth"),
        "tags": tags,
        "image": format!("https://cdn.example.com/{id}.png"),
        "createdAt": "2024-05-01T09:00:00.000Z"
    })
}

pub fn ok_envelope(data: Value) -> Json<Value> {
    Json(json!({
        "success": true,
        "statusCode": 200,
        "message": "Retrieved successfully",
        "data": data
    }))
}

/// A backend with a small blog collection plus a few deliberately broken
/// routes.
pub fn catalog_app() -> Router {
    Router::new()
        .route(
            "/api/v1/blogs",
            get(|| async {
                ok_envelope(json!([
                    blog_json("b1", "Intro to Go", &["Tech"]),
                    blog_json("b2", "Rust Basics", &["Tech", "Rust"]),
                    blog_json("b3", "Go Concurrency", &["Design"]),
                ]))
            }),
        )
        .route(
            "/api/v1/blogs/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "b1" {
                    (StatusCode::OK, ok_envelope(blog_json("b1", "Intro to Go", &["Tech"])))
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({
                            "success": false,
                            "statusCode": 404,
                            "message": "Blog not found",
                            "data": null
                        })),
                    )
                }
            }),
        )
        .route(
            "/api/v1/products",
            get(|| async {
                Json(json!({
                    "success": false,
                    "statusCode": 200,
                    "message": "Not found",
                    "data": null
                }))
            }),
        )
        .route(
            "/api/v1/services",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route(
            "/api/v1/careers",
            get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
        )
        .route(
            "/api/v1/case-studies",
            get(|| async { Json(json!({ "success": false, "data": null })) }),
        )
}

/// Forms endpoint that records every submission and reports duplicates.
#[derive(Clone, Default)]
pub struct FormsLog {
    pub submissions: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub fn forms_app(log: FormsLog) -> Router {
    Router::new()
        .route(
            "/exec",
            post(
                |State(log): State<FormsLog>, Form(fields): Form<HashMap<String, String>>| async move {
                    let mut submissions = log.submissions.lock().unwrap();
                    let duplicate = submissions.iter().any(|s| {
                        s.get("formType") == fields.get("formType")
                            && s.get("email") == fields.get("email")
                    });
                    submissions.push(fields);
                    if duplicate {
                        "already_subscribed"
                    } else {
                        "ok"
                    }
                },
            ),
        )
        .route(
            "/broken",
            post(|| async { (StatusCode::BAD_GATEWAY, "script error") }),
        )
        .with_state(log)
}
