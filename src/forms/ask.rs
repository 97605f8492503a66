use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: Option<String>,
}

impl AskRequest {
    /// The question text, or None when the field is missing or empty.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.is_empty())
    }
}
