use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Uniqueness is checked at creation time, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}
