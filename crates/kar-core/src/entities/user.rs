use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::roles::Role;

/// Back-office user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Raw role name as stored by the backend.
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl User {
    /// Parsed role.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownRole`] when the stored role is not recognized.
    pub fn role(&self) -> Result<Role, CoreError> {
        self.role.parse()
    }
}
