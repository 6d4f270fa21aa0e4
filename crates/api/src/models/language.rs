use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Source dialect of an open document. Decides which grammar the parser loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const TYPESCRIPT: Language = Language(Cow::Borrowed("typescript"));
    pub const TSX: Language = Language(Cow::Borrowed("typescriptreact"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Map a file extension to a Language.
    /// Plain `.ts` is the only extension without markup support; every other
    /// input is treated as TSX so `render()` bodies parse.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Self::TYPESCRIPT,
            _ => Self::TSX,
        }
    }

    /// Detect the language from a document URI or path.
    pub fn from_uri(uri: &str) -> Self {
        let path = uri.split(['?', '#']).next().unwrap_or(uri);
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => Self::TSX,
        }
    }

    pub fn supports_markup(&self) -> bool {
        *self != Self::TYPESCRIPT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
