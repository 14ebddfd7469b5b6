use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let app = Router::new().route("/messages", get(messages));

    let addr = SocketAddr::from(([127, 0, 0, 1], 9100));
    println!("Mock message source listening on http://{}/messages", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn messages() -> Json<Value> {
    Json(json!({
        "items": [
            { "id": 1, "message": "Hello from Paris", "author": "amelie" },
            { "id": 2, "message": "Testing in London", "author": "jack" },
            { "id": 3, "message": "PARIS is beautiful", "author": "lea" },
            { "id": 4, "message": "Night train to Berlin", "author": "jonas" },
            { "id": 5, "message": "Final test", "author": "sam" }
        ]
    }))
}
