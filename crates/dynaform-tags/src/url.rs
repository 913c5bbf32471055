//! Form target URL generation.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, TagError};

/// Builds the URL a form submits to from an action name and an optional
/// record identity.
pub trait UrlFor {
    /// Returns the URL for `action`, scoped to `id` when given.
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String>;
}

impl<F> UrlFor for F
where
    F: Fn(&str, Option<&str>) -> Result<String>,
{
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String> {
        self(action, id)
    }
}

/// Joins an optional prefix, the action and the identity with `/`.
///
/// ```
/// use dynaform_tags::{ActionPath, UrlFor};
///
/// let urls = ActionPath::new();
/// assert_eq!(urls.url_for("create", None).unwrap(), "create");
/// assert_eq!(urls.url_for("update", Some("1")).unwrap(), "update/1");
///
/// let urls = ActionPath::with_prefix("/posts");
/// assert_eq!(urls.url_for("update", Some("1")).unwrap(), "/posts/update/1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPath {
    prefix: Option<String>,
}

impl ActionPath {
    /// Creates a path builder without prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path builder that puts `prefix` in front of every action.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim_end_matches('/').to_string();
        Self {
            prefix: Some(prefix),
        }
    }
}

impl UrlFor for ActionPath {
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String> {
        if action.is_empty() {
            return Err(TagError::UnknownAction(String::new()));
        }

        let parts: Vec<&str> = self
            .prefix
            .as_deref()
            .into_iter()
            .chain(std::iter::once(action))
            .chain(id)
            .collect();

        Ok(parts.join("/"))
    }
}

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A parameter segment (e.g., {id}).
    Param(String),
}

/// A parsed path pattern such as `/posts/{id}/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    /// The pattern as written.
    pattern: String,
    /// Parsed segments.
    segments: Vec<PathSegment>,
}

impl PathPattern {
    /// Parses a path pattern string.
    ///
    /// Pattern syntax:
    /// - `/posts` - Literal path
    /// - `/posts/{id}` - Path with parameter
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use dynaform_tags::PathPattern;
    ///
    /// let pattern = PathPattern::new("/posts/{id}").unwrap();
    /// let params: HashMap<String, String> =
    ///     [("id".to_string(), "123".to_string())].into_iter().collect();
    /// assert_eq!(pattern.reverse(&params), Some("/posts/123".to_string()));
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let mut segments = Vec::new();

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(param) = part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if param.is_empty() || param.contains(['{', '}']) {
                    return Err(TagError::InvalidPattern(pattern.to_string()));
                }
                segments.push(PathSegment::Param(param.to_string()));
            } else if part.contains(['{', '}']) {
                return Err(TagError::InvalidPattern(pattern.to_string()));
            } else {
                segments.push(PathSegment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// Returns the pattern as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parameter names in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::Param(name) => Some(name.as_str()),
                PathSegment::Literal(_) => None,
            })
            .collect()
    }

    /// Generates a path from parameters, or `None` when one is missing.
    pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Param(name) => path.push_str(params.get(name)?),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }
}

/// Named routes from action names to path patterns.
///
/// The record identity is supplied as the `id` parameter.
///
/// ```
/// use dynaform_tags::{RouteMap, UrlFor};
///
/// let routes = RouteMap::new()
///     .route("create", "/posts")?
///     .route("update", "/posts/{id}")?;
///
/// assert_eq!(routes.url_for("create", None)?, "/posts");
/// assert_eq!(routes.url_for("update", Some("7"))?, "/posts/7");
/// assert!(routes.url_for("update", None).is_err());
/// # Ok::<(), dynaform_tags::TagError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: BTreeMap<String, PathPattern>,
}

impl RouteMap {
    /// Creates an empty route map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the pattern for an action.
    pub fn route(mut self, action: &str, pattern: &str) -> Result<Self> {
        self.routes
            .insert(action.to_string(), PathPattern::new(pattern)?);
        Ok(self)
    }

    /// Returns the pattern registered for an action.
    pub fn get(&self, action: &str) -> Option<&PathPattern> {
        self.routes.get(action)
    }
}

impl UrlFor for RouteMap {
    fn url_for(&self, action: &str, id: Option<&str>) -> Result<String> {
        let pattern = self
            .routes
            .get(action)
            .ok_or_else(|| TagError::UnknownAction(action.to_string()))?;

        let params: HashMap<String, String> = id
            .map(|id| ("id".to_string(), id.to_string()))
            .into_iter()
            .collect();

        pattern.reverse(&params).ok_or_else(|| {
            let missing = pattern
                .param_names()
                .into_iter()
                .find(|name| !params.contains_key(*name))
                .unwrap_or("id");
            TagError::MissingParam {
                action: action.to_string(),
                param: missing.to_string(),
            }
        })
    }
}
