use super::{
    parser::parse_posts,
    request::{GenerationRequest, PostForm},
};
use crate::{Error, Result, llm::LlmClient};
use axum::http::Method;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Outcome of one form invocation: drafts or a message to show instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Posts(Vec<String>),
    Error(String),
}

impl GenerationResult {
    pub fn into_parts(self) -> (Vec<String>, Option<String>) {
        match self {
            Self::Posts(posts) => (posts, None),
            Self::Error(message) => (Vec::new(), Some(message)),
        }
    }

    fn from_error(err: Error) -> Self {
        if err.is_validation() {
            Self::Error(err.to_string())
        } else {
            Self::Error(format!("Error generating content: {}", err))
        }
    }
}

pub struct PostGenerator {
    llm_client: Arc<dyn LlmClient>,
}

impl PostGenerator {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Handles one invocation of the form. Anything other than `POST` shows
    /// the blank form. Never fails; errors become `GenerationResult::Error`.
    pub async fn handle(&self, method: &Method, form: &PostForm) -> GenerationResult {
        if *method != Method::POST {
            return GenerationResult::Posts(Vec::new());
        }

        match self.generate(form).await {
            Ok(posts) => {
                info!("Generated {} post drafts", posts.len());
                GenerationResult::Posts(posts)
            }
            Err(e) if e.is_validation() => {
                warn!("Rejected submission: {}", e);
                GenerationResult::from_error(e)
            }
            Err(e) => {
                error!("Failed to generate posts: {}", e);
                GenerationResult::from_error(e)
            }
        }
    }

    async fn generate(&self, form: &PostForm) -> Result<Vec<String>> {
        let request = GenerationRequest::try_from(form)?;

        info!(
            "Generating posts about '{}' in a {} tone for {}",
            request.topic(),
            request.tone(),
            request.audience()
        );

        let raw = self.llm_client.generate(&request.prompt()).await?;
        debug!("Model returned {} bytes", raw.len());

        parse_posts(&raw)
    }
}
