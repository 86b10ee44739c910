use std::{io::Cursor, sync::Arc};

use axum_test::TestServer;
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{Value, json};
use test_context::AsyncTestContext;

use crate::{
    application::http::server::http_server::{routes, state},
    args::Args,
};

pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self::with_args(Args::default())
    }
}

impl ApiContext {
    pub fn with_args(args: Args) -> Self {
        let router = routes(state(Arc::new(args))).expect("router builds");
        let server = TestServer::new(router).expect("test server starts");

        Self { server }
    }

    /// Creates a session and returns its id.
    pub async fn create_session(&self, body: Value) -> String {
        let response = self.server.post("/sessions").json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let session: Value = response.json();
        session["data"]["id"]
            .as_str()
            .expect("session id")
            .to_string()
    }

    pub async fn create_default_session(&self) -> String {
        self.create_session(json!({})).await
    }
}

pub fn png_bytes() -> Vec<u8> {
    let image = RgbImage::from_pixel(8, 6, Rgb([200, 120, 40]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("png encodes");

    buffer.into_inner()
}
