use crate::{Error, Result};

pub const DEFAULT_AUDIENCE: &str = "general professionals";

/// Number of drafts requested from the model. Not enforced on the reply.
pub const POSTS_PER_REQUEST: usize = 3;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide both topic and tone.";

/// Raw form fields as submitted. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub topic: String,
    pub tone: String,
    pub audience: String,
}

/// Collects decoded `key=value` pairs. The first value of a repeated key
/// wins and unknown keys are ignored.
impl FromIterator<(String, String)> for PostForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut topic = None;
        let mut tone = None;
        let mut audience = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "topic" => &mut topic,
                "tone" => &mut tone,
                "audience" => &mut audience,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            topic: topic.unwrap_or_default(),
            tone: tone.unwrap_or_default(),
            audience: audience.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    tone: String,
    audience: String,
}

impl GenerationRequest {
    pub fn new(topic: &str, tone: &str, audience: &str) -> Result<Self> {
        let topic = topic.trim();
        let tone = tone.trim();
        let audience = match audience.trim() {
            "" => DEFAULT_AUDIENCE,
            audience => audience,
        };

        if topic.is_empty() || tone.is_empty() {
            return Err(Error::validation(MISSING_FIELDS_MESSAGE));
        }

        Ok(Self {
            topic: topic.to_string(),
            tone: tone.to_string(),
            audience: audience.to_string(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn prompt(&self) -> String {
        format!(
            "Generate {count} LinkedIn posts about \"{topic}\".\n\
             Use a {tone} tone for {audience}.\n\
             Return the result as a JSON list, where each element is a post string.",
            count = POSTS_PER_REQUEST,
            topic = self.topic,
            tone = self.tone,
            audience = self.audience,
        )
    }
}

impl TryFrom<&PostForm> for GenerationRequest {
    type Error = Error;

    fn try_from(form: &PostForm) -> Result<Self> {
        Self::new(&form.topic, &form.tone, &form.audience)
    }
}
