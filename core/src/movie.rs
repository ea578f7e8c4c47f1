use std::fmt;

/// A film, identified by title and release year.
///
/// Two releases sharing a title in different years are distinct movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Movie {
    pub title: String,
    pub year: i32,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#@{}", self.title, self.year)
    }
}
