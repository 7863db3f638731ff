//! Typed Keys

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    products::Product,
    publications::{Article, BlogPost},
};

/// A string key tagged with the record type it identifies.
///
/// Products are keyed by id, blog posts and articles by slug. Keeping the
/// record type in the key stops a post slug from being passed where a product
/// id is expected.
pub struct TypedKey<T>(String, PhantomData<T>);

/// Product identifier.
pub type ProductId = TypedKey<Product>;

/// Blog post slug.
pub type PostSlug = TypedKey<BlogPost>;

/// Article slug.
pub type ArticleSlug = TypedKey<Article>;

impl<T> TypedKey<T> {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into(), PhantomData)
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw key.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<T> Debug for TypedKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedKey<T> {}

impl<T> PartialEq<str> for TypedKey<T> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<T> PartialEq<&str> for TypedKey<T> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<T> Hash for TypedKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Borrow<str> for TypedKey<T> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<T> AsRef<str> for TypedKey<T> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<String> for TypedKey<T> {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl<T> From<&str> for TypedKey<T> {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl<T> Serialize for TypedKey<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedKey<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
