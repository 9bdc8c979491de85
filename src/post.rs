/// A piece of text to paginate, along with its optional title
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Post {
    /// The title drawn in the first page's header, if any. Only its presence affects layout.
    pub title: Option<String>,
    /// The body text. Paragraphs are separated by blank lines.
    pub body: String,
}

impl Post {
    /// Create a new post with the given body and no title
    pub fn new<S: ToString>(body: S) -> Post {
        Post {
            title: None,
            body: body.to_string(),
        }
    }

    /// Set the title of the post, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the body of the post, modifying `self`
    pub fn body<S: ToString>(&mut self, body: S) -> &mut Self {
        self.body = body.to_string();
        self
    }

    /// True when the title has visible content
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty())
    }

    /// True when the body has nothing to lay out
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
