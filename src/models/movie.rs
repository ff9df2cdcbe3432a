use std::ops::Deref;

/// Maximum number of spoken languages kept per movie.
pub const MAX_LANGUAGES: usize = 5;

/// Spoken languages of a movie, in input order, never more than [`MAX_LANGUAGES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages(Vec<String>);

impl Languages {
    /// Build from tokens, keeping the first [`MAX_LANGUAGES`] and dropping the rest.
    /// Returns the list and whether anything was dropped.
    pub fn truncating<I, S>(tokens: I) -> (Self, bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter();
        let kept: Vec<String> = tokens.by_ref().take(MAX_LANGUAGES).map(Into::into).collect();
        let truncated = tokens.next().is_some();
        (Self(kept), truncated)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.0.iter().any(|l| l == language)
    }
}

impl Deref for Languages {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub languages: Languages,
    pub rating: f64,
}
