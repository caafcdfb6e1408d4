use super::page::{PageView, render};
use crate::posts::{PostForm, PostGenerator};
use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::Method,
    response::Html,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PostGenerator>,
}

impl AppState {
    pub fn new(generator: PostGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let form = PostForm::default();
    let result = state.generator.handle(&Method::GET, &form).await;

    Html(render(&PageView::new(form, result)))
}

pub async fn submit_form(
    State(state): State<AppState>,
    fields: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    info!("Received post generation request");

    // An unreadable body counts as a submission with every field missing
    let form = match fields {
        Ok(Form(fields)) => fields.into_iter().collect(),
        Err(rejection) => {
            warn!("Unreadable form body: {}", rejection);
            PostForm::default()
        }
    };

    let result = state.generator.handle(&Method::POST, &form).await;

    Html(render(&PageView::new(form, result)))
}
