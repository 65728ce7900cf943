//! Test utilities for Toroid development.
//!
//! Provides [`TestObject`], a minimal [`Identified`] value with a payload
//! for telling instances apart, plus seeded placement fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use toroid_core::{Identified, ObjectId};

/// An identified value with a numeric tag.
///
/// Two test objects with the same id but different tags are "the same
/// identity, different instance", which is what replace and conflict
/// tests need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestObject {
    pub id: ObjectId,
    pub tag: u32,
}

impl TestObject {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self::tagged(id, 0)
    }

    pub fn tagged(id: impl AsRef<str>, tag: u32) -> Self {
        Self {
            id: ObjectId::new(id),
            tag,
        }
    }
}

impl Identified for TestObject {
    fn object_id(&self) -> &ObjectId {
        &self.id
    }
}

impl fmt::Display for TestObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.id, self.tag)
    }
}

/// `count` objects named `{prefix}{i}`.
pub fn objects(prefix: &str, count: usize) -> Vec<TestObject> {
    (0..count)
        .map(|i| TestObject::tagged(format!("{prefix}{i}"), i as u32))
        .collect()
}
