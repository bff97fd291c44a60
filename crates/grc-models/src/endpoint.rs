//! REST endpoint descriptions.
//!
//! Endpoints are data handed to the generic HTTP client; nothing here
//! performs a request. The textual form matches what the client expects:
//! `"POST /api/programs"`, or a bare path for `GET`.

use crate::ModelError;
use grc_types::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Placeholder substituted with the object id.
pub const ID_PLACEHOLDER: &str = "{id}";

/// HTTP verbs used by resource endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method plus a path template.
///
/// # Example
///
/// ```
/// use grc_models::{Endpoint, HttpMethod};
/// use grc_types::ObjectId;
///
/// let update: Endpoint = "PUT /api/programs/{id}".parse().unwrap();
/// assert_eq!(update.method, HttpMethod::Put);
/// assert_eq!(update.path_for(ObjectId::new(12)), "/api/programs/12");
///
/// let find_all: Endpoint = "/api/programs".parse().unwrap();
/// assert_eq!(find_all.method, HttpMethod::Get);
/// assert_eq!(find_all.to_string(), "/api/programs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Returns `true` if the path contains an `{id}` placeholder.
    #[must_use]
    pub fn is_member(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }

    /// Returns the path with `{id}` replaced.
    #[must_use]
    pub fn path_for(&self, id: ObjectId) -> String {
        self.path.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

impl FromStr for Endpoint {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (method, path) = match s.split_once(char::is_whitespace) {
            Some((verb, rest)) => {
                let method =
                    HttpMethod::parse(verb).ok_or_else(|| ModelError::InvalidEndpoint(s.to_string()))?;
                (method, rest.trim())
            }
            None => (HttpMethod::Get, s),
        };

        if !path.starts_with('/') {
            return Err(ModelError::InvalidEndpoint(s.to_string()));
        }

        Ok(Self::new(method, path))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.method {
            HttpMethod::Get => f.write_str(&self.path),
            method => write!(f, "{method} {}", self.path),
        }
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The five CRUD endpoints of a REST collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestEndpoints {
    #[serde(rename = "findAll")]
    pub find_all: Endpoint,
    #[serde(rename = "findOne")]
    pub find_one: Endpoint,
    pub create: Endpoint,
    pub update: Endpoint,
    pub destroy: Endpoint,
}

impl RestEndpoints {
    /// Builds the conventional endpoints for `collection` under `prefix`.
    ///
    /// # Example
    ///
    /// ```
    /// use grc_models::RestEndpoints;
    ///
    /// let endpoints = RestEndpoints::for_collection("/api/", "programs");
    /// assert_eq!(endpoints.find_all.to_string(), "/api/programs");
    /// assert_eq!(endpoints.destroy.to_string(), "DELETE /api/programs/{id}");
    /// ```
    #[must_use]
    pub fn for_collection(prefix: &str, collection: &str) -> Self {
        let base = format!("{}/{}", prefix.trim_end_matches('/'), collection);
        let member = format!("{base}/{ID_PLACEHOLDER}");

        Self {
            find_all: Endpoint::new(HttpMethod::Get, base.clone()),
            find_one: Endpoint::new(HttpMethod::Get, member.clone()),
            create: Endpoint::new(HttpMethod::Post, base),
            update: Endpoint::new(HttpMethod::Put, member.clone()),
            destroy: Endpoint::new(HttpMethod::Delete, member),
        }
    }
}
