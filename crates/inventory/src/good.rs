use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// A distinct product type, identified by its title.
///
/// Two goods with the same title are the same good.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Good {
    title: String,
}

impl Good {
    pub fn new(title: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::invalid_argument("good title cannot be empty"));
        }
        Ok(Self { title })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl ValueObject for Good {}

impl core::fmt::Display for Good {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.title)
    }
}

impl TryFrom<String> for Good {
    type Error = DomainError;

    fn try_from(title: String) -> Result<Self, Self::Error> {
        Self::new(title)
    }
}

impl From<Good> for String {
    fn from(good: Good) -> Self {
        good.title
    }
}
