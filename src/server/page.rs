use crate::posts::{GenerationResult, PostForm};

/// Everything the page template needs for one response.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub form: PostForm,
    pub posts: Vec<String>,
    pub error: Option<String>,
}

impl PageView {
    pub fn new(form: PostForm, result: GenerationResult) -> Self {
        let (posts, error) = result.into_parts();
        Self { form, posts, error }
    }
}

pub fn render(view: &PageView) -> String {
    let mut body = String::new();

    if let Some(error) = &view.error {
        body.push_str(&format!(
            "<div class=\"error\" role=\"alert\">{}</div>\n",
            escape(error)
        ));
    }

    if !view.posts.is_empty() {
        body.push_str("<section class=\"posts\">\n<h2>Generated posts</h2>\n<ol>\n");
        for post in &view.posts {
            body.push_str(&format!("<li class=\"post\">{}</li>\n", escape(post)));
        }
        body.push_str("</ol>\n</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LinkedIn Post Generator</title>
<style>
body {{ font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }}
label {{ display: block; margin-top: 1rem; }}
input {{ width: 100%; padding: 0.4rem; }}
button {{ margin-top: 1rem; padding: 0.5rem 1rem; }}
.error {{ background: #fde2e1; border: 1px solid #e0a3a0; padding: 0.75rem; margin: 1rem 0; }}
.post {{ white-space: pre-wrap; margin-bottom: 1rem; }}
</style>
</head>
<body>
<h1>LinkedIn Post Generator</h1>
<form method="post" action="/">
<label for="topic">Topic</label>
<input id="topic" name="topic" value="{topic}" required>
<label for="tone">Tone</label>
<input id="tone" name="tone" value="{tone}" required>
<label for="audience">Audience (optional)</label>
<input id="audience" name="audience" value="{audience}" placeholder="general professionals">
<button type="submit">Generate</button>
</form>
{body}</body>
</html>
"#,
        topic = escape(&view.form.topic),
        tone = escape(&view.form.tone),
        audience = escape(&view.form.audience),
        body = body,
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_blank_form() {
        let html = render(&PageView::default());

        assert!(html.contains("<form method=\"post\" action=\"/\">"));
        assert!(html.contains("name=\"topic\""));
        assert!(html.contains("name=\"tone\""));
        assert!(html.contains("name=\"audience\""));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"posts\""));
    }

    #[test]
    fn test_posts_are_listed_and_escaped() {
        let view = PageView::new(
            PostForm::default(),
            GenerationResult::Posts(vec!["First".to_string(), "<script>".to_string()]),
        );
        let html = render(&view);

        assert!(html.contains("<li class=\"post\">First</li>"));
        assert!(html.contains("<li class=\"post\">&lt;script&gt;</li>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_error_banner_and_form_values() {
        let form = PostForm {
            topic: "Rust \"2024\"".to_string(),
            tone: String::new(),
            audience: String::new(),
        };
        let view = PageView::new(form, GenerationResult::Error("Boom".to_string()));
        let html = render(&view);

        assert!(html.contains("<div class=\"error\" role=\"alert\">Boom</div>"));
        assert!(html.contains("value=\"Rust &quot;2024&quot;\""));
        assert!(view.posts.is_empty());
    }
}
