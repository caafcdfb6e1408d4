mod generator;
mod parser;
mod request;

pub use generator::{GenerationResult, PostGenerator};
pub use parser::parse_posts;
pub use request::{
    DEFAULT_AUDIENCE, GenerationRequest, MISSING_FIELDS_MESSAGE, POSTS_PER_REQUEST, PostForm,
};
