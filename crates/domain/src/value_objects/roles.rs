//! Normalized role list.
//!
//! Catalog entries give `role` either as a single string or as an array of
//! strings. Both shapes load into the same ordered sequence so matching never
//! has to care which one the catalog used.

use serde::{Deserialize, Deserializer, Serialize};

/// Ordered, trimmed role names. Empty only when the catalog has no role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Roles(Vec<String>);

impl Roles {
    /// Build from any sequence of role names, trimming and dropping blanks.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            roles
                .into_iter()
                .map(Into::into)
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
        )
    }

    pub fn single(role: impl Into<String>) -> Self {
        let role: String = role.into();
        Self::new([role])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> IntoIterator for &'a Roles {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RolesWire {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for Roles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = Option::<RolesWire>::deserialize(deserializer)?;
        Ok(match wire {
            Some(RolesWire::One(role)) => Roles::single(role),
            Some(RolesWire::Many(roles)) => Roles::new(roles),
            None => Roles::default(),
        })
    }
}
