#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockLlmClient;

use post_drafter::posts::{PostForm, PostGenerator};
use std::sync::Arc;

/// Build a generator around a shared mock so tests can inspect it afterwards
pub fn create_generator(mock: MockLlmClient) -> (PostGenerator, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    (PostGenerator::new(mock.clone()), mock)
}

pub fn form(topic: &str, tone: &str, audience: &str) -> PostForm {
    PostForm {
        topic: topic.to_string(),
        tone: tone.to_string(),
        audience: audience.to_string(),
    }
}

pub const SAMPLE_JSON_POSTS: &str =
    r#"["Rust makes systems fun.", "Ownership is a superpower.", "Ship it with cargo."]"#;
