//! Canonical member handles: singleton identity, ordering, formatting.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct MemberInner {
    pub(crate) type_id: u64,
    pub(crate) type_name: Arc<str>,
    pub(crate) name: Box<str>,
    pub(crate) ordinal: u32,
    pub(crate) aliases: Vec<String>,
}

/// A canonical enumeration constant.
///
/// `Member` is a cheap handle (`Arc` clone) to a singleton allocation owned by
/// its [`EnumType`](crate::EnumType): every successful resolution that denotes
/// the same logical constant yields a handle to the identical allocation, so
/// equality is pointer identity and costs a single comparison. Hashing and
/// ordering (type id, then ordinal) agree with equality, making `Member` a
/// valid key in both hashed and ordered containers.
#[derive(Clone)]
pub struct Member {
    pub(crate) inner: Arc<MemberInner>,
}

impl Member {
    pub(crate) fn new(
        type_id: u64,
        type_name: Arc<str>,
        name: String,
        ordinal: u32,
        aliases: Vec<String>,
    ) -> Self {
        Self {
            inner: Arc::new(MemberInner {
                type_id,
                type_name,
                name: name.into_boxed_str(),
                ordinal,
                aliases,
            }),
        }
    }

    /// The canonical declared name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The ordinal, explicit or auto-assigned (auto starts at 0).
    pub fn ordinal(&self) -> u32 {
        self.inner.ordinal
    }

    /// Alias strings declared for this member, in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.inner.aliases
    }

    /// Name of the owning enumeration type, for diagnostics.
    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Human-readable form of the canonical name: words split on `'_'`,
    /// capitalized except for the connectives `of`, `in`, and `the`, joined
    /// with `sep`.
    ///
    /// ```
    /// # use autoenum::EnumType;
    /// let places = EnumType::builder("Place").member("Bay_of_Bengal").build().unwrap();
    /// let m = places.get("Bay_of_Bengal").unwrap();
    /// assert_eq!(m.display_name(" "), "Bay of Bengal");
    /// ```
    pub fn display_name(&self, sep: &str) -> String {
        self.inner
            .name
            .split('_')
            .map(|word| {
                let lower = word.to_ascii_lowercase();
                if matches!(lower.as_str(), "of" | "in" | "the") {
                    lower
                } else {
                    capitalize(word)
                }
            })
            .collect::<Vec<_>>()
            .join(sep)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Member {}

// Ordinals are unique within a type and type ids are process-unique, so
// (type_id, ordinal) distinguishes any two non-identical members; hashing and
// ordering on that pair stays consistent with pointer equality.
impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.type_id.hash(state);
        self.inner.ordinal.hash(state);
    }
}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.inner.type_id, self.inner.ordinal)
            .cmp(&(other.inner.type_id, other.inner.ordinal))
    }
}

// Both forms print the bare canonical name: the owning type is normally clear
// from context, so no qualifier and no ordinal.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.name)
    }
}
