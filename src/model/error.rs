use std::fmt;

#[derive(Debug, Clone)]
pub struct ThumbError {
    pub message: String,
}

impl fmt::Display for ThumbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ThumbError {}
