//! Registry construction and resolution.
//!
//! An [`EnumType`] is built once from an ordered list of [`MemberDecl`]s,
//! validated eagerly (duplicate names, duplicate ordinals, normalized-key
//! collisions all abort the build), then frozen. Queries after that point are
//! lock-free reads over immutable maps.

use crate::error::AutoEnumError;
use crate::member::Member;
use crate::normalize::{NormalizeFn, default_normalizer};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

// Process-unique id per built EnumType; members carry it so identity checks
// and cross-type misuse detection are a single integer compare.
static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(0);

/// One declaration consumed by the builder: a required unique name, an
/// optional explicit ordinal, and zero or more aliases.
///
/// `&str` converts directly for the common no-frills case:
///
/// ```
/// use autoenum::{EnumType, MemberDecl};
/// let animals = EnumType::builder("Animal")
///     .member("Antelope")
///     .member(MemberDecl::new("Bandicoot").ordinal(10).alias("bandit"))
///     .build()
///     .unwrap();
/// assert_eq!(animals.resolve("bandit").unwrap().ordinal(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct MemberDecl {
    name: String,
    ordinal: Option<u32>,
    aliases: Vec<String>,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ordinal: None,
            aliases: Vec::new(),
        }
    }

    /// Pin an explicit ordinal; auto-assignment continues after it.
    pub fn ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Bind one additional string to this member.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Bind several additional strings to this member.
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

impl From<&str> for MemberDecl {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MemberDecl {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Accumulates declarations, then [`build`](Self::build)s the frozen registry.
pub struct EnumTypeBuilder {
    name: String,
    decls: Vec<MemberDecl>,
    normalizer: NormalizeFn,
}

impl EnumTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
            normalizer: default_normalizer(),
        }
    }

    /// Append a declaration; declaration order is preserved for iteration,
    /// auto-ordinals, and diagnostics.
    pub fn member(mut self, decl: impl Into<MemberDecl>) -> Self {
        self.decls.push(decl.into());
        self
    }

    /// Replace the default normalizer. The override must be a pure function;
    /// it is applied to every registered name and alias during this build and
    /// to every string passed to [`EnumType::resolve`] afterwards. Pass
    /// [`identity`](crate::identity) for exact-match semantics.
    pub fn normalize_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.normalizer = Arc::new(f);
        self
    }

    /// Validate and freeze. Any ambiguity is a configuration error: the
    /// program must not start with an enumeration that could resolve one
    /// string to two members.
    pub fn build(self) -> Result<EnumType, AutoEnumError> {
        let type_id = NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed);
        let type_name: Arc<str> = Arc::from(self.name.as_str());

        let mut members: Vec<Member> = Vec::with_capacity(self.decls.len());
        let mut by_name: FxHashMap<Box<str>, Member> = FxHashMap::default();
        let mut by_key: FxHashMap<Box<str>, Member> = FxHashMap::default();
        let mut by_ordinal: FxHashMap<u32, Member> = FxHashMap::default();

        let mut next_auto: u32 = 0;
        for decl in self.decls {
            let ordinal = decl.ordinal.unwrap_or(next_auto);
            next_auto = ordinal.saturating_add(1);

            let member = Member::new(
                type_id,
                Arc::clone(&type_name),
                decl.name,
                ordinal,
                decl.aliases,
            );

            if let Some(existing) = by_name.get(member.name()) {
                return Err(AutoEnumError::DuplicateName {
                    enum_name: self.name,
                    name: existing.name().to_string(),
                });
            }
            if let Some(existing) = by_ordinal.get(&ordinal) {
                return Err(AutoEnumError::DuplicateOrdinal {
                    enum_name: self.name,
                    ordinal,
                    first: existing.name().to_string(),
                    second: member.name().to_string(),
                });
            }

            let name_key = (*self.normalizer)(member.name());
            insert_key(&mut by_key, &self.name, name_key, &member)?;
            for alias in member.aliases() {
                let alias_key = (*self.normalizer)(alias);
                insert_key(&mut by_key, &self.name, alias_key, &member)?;
            }

            by_name.insert(Box::from(member.name()), member.clone());
            by_ordinal.insert(ordinal, member.clone());
            members.push(member);
        }

        Ok(EnumType {
            inner: Arc::new(TypeInner {
                id: type_id,
                name: type_name,
                members,
                by_name,
                by_key,
                by_ordinal,
                normalizer: self.normalizer,
            }),
        })
    }
}

/// Insert a normalized key, rejecting bindings to a different member. A key
/// re-derived from the same member (an alias spelling its own name) is not a
/// conflict and is kept as-is.
fn insert_key(
    by_key: &mut FxHashMap<Box<str>, Member>,
    enum_name: &str,
    key: String,
    member: &Member,
) -> Result<(), AutoEnumError> {
    match by_key.get(key.as_str()) {
        Some(existing) if existing == member => Ok(()),
        Some(existing) => Err(AutoEnumError::KeyCollision {
            enum_name: enum_name.to_string(),
            key,
            first: existing.name().to_string(),
            second: member.name().to_string(),
        }),
        None => {
            by_key.insert(key.into_boxed_str(), member.clone());
            Ok(())
        }
    }
}

struct TypeInner {
    id: u64,
    name: Arc<str>,
    members: Vec<Member>,
    by_name: FxHashMap<Box<str>, Member>,
    by_key: FxHashMap<Box<str>, Member>,
    by_ordinal: FxHashMap<u32, Member>,
    normalizer: NormalizeFn,
}

/// An immutable enumeration registry.
///
/// Built once via [`EnumType::builder`], then read-only for the life of the
/// process. The handle is reference-counted: clone it freely and resolve from
/// any number of threads without synchronization.
#[derive(Clone)]
pub struct EnumType {
    inner: Arc<TypeInner>,
}

/// What [`EnumType::resolve`] accepts: an already-canonical [`Member`]
/// (identity passthrough, no string work) or arbitrary text.
pub enum LookupKey<'a> {
    Member(&'a Member),
    Text(&'a str),
}

impl<'a> From<&'a Member> for LookupKey<'a> {
    fn from(member: &'a Member) -> Self {
        LookupKey::Member(member)
    }
}

impl<'a> From<&'a str> for LookupKey<'a> {
    fn from(text: &'a str) -> Self {
        LookupKey::Text(text)
    }
}

impl<'a> From<&'a String> for LookupKey<'a> {
    fn from(text: &'a String) -> Self {
        LookupKey::Text(text)
    }
}

impl EnumType {
    /// Start declaring a new enumeration type.
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder::new(name)
    }

    /// The type's name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Exact lookup by declared name; no normalization is applied.
    pub fn get(&self, name: &str) -> Option<Member> {
        self.inner.by_name.get(name).cloned()
    }

    /// Lookup by ordinal.
    pub fn by_ordinal(&self, ordinal: u32) -> Option<Member> {
        self.inner.by_ordinal.get(&ordinal).cloned()
    }

    /// Resolve a value to its canonical member.
    ///
    /// A [`Member`] of this type passes through untouched. Text is normalized
    /// with the type's normalizer and looked up in the fuzzy-key map; an alias
    /// hit returns the canonical member, never the alias. A miss is
    /// [`AutoEnumError::NotFound`] listing the canonical names in declaration
    /// order; a member of a different type is
    /// [`AutoEnumError::ForeignMember`].
    ///
    /// ```
    /// use autoenum::{EnumType, MemberDecl};
    /// let cities = EnumType::builder("City")
    ///     .member(MemberDecl::new("New_York_City").aliases(["New York", "NYC"]))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(cities.resolve("nyc").unwrap().name(), "New_York_City");
    /// ```
    pub fn resolve<'a>(&self, value: impl Into<LookupKey<'a>>) -> Result<Member, AutoEnumError> {
        match value.into() {
            LookupKey::Member(member) => {
                if member.inner.type_id == self.inner.id {
                    Ok(member.clone())
                } else {
                    Err(AutoEnumError::ForeignMember {
                        member: member.name().to_string(),
                        actual: member.type_name().to_string(),
                        expected: self.inner.name.to_string(),
                    })
                }
            }
            LookupKey::Text(text) => {
                let key = (*self.inner.normalizer)(text);
                match self.inner.by_key.get(key.as_str()) {
                    Some(member) => Ok(member.clone()),
                    None => Err(AutoEnumError::NotFound {
                        value: text.to_string(),
                        available: self
                            .inner
                            .members
                            .iter()
                            .map(Member::name)
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    }

    /// Non-raising resolution: `None` is the miss sentinel, covering both
    /// absent keys and members of a foreign type.
    pub fn try_resolve<'a>(&self, value: impl Into<LookupKey<'a>>) -> Option<Member> {
        match value.into() {
            LookupKey::Member(member) => {
                (member.inner.type_id == self.inner.id).then(|| member.clone())
            }
            LookupKey::Text(text) => {
                let key = (*self.inner.normalizer)(text);
                self.inner.by_key.get(key.as_str()).cloned()
            }
        }
    }

    /// True iff `value` resolves to some member of this type.
    pub fn matches(&self, value: &str) -> bool {
        self.try_resolve(value).is_some()
    }

    /// Resolve a batch of strings, failing on the first miss.
    pub fn resolve_all<'a, I>(&self, values: I) -> Result<Vec<Member>, AutoEnumError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values.into_iter().map(|v| self.resolve(v)).collect()
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.inner.members.iter()
    }

    /// Canonical names in declaration order; aliases are not enumerated.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.members.iter().map(|m| m.name())
    }

    pub fn len(&self) -> usize {
        self.inner.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.members.is_empty()
    }
}

impl std::fmt::Debug for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.inner.name)
            .field("members", &self.inner.members)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> EnumType {
        EnumType::builder("Animal")
            .member("Antelope")
            .member("Bandicoot")
            .member("Cat")
            .member("Dog")
            .build()
            .expect("unambiguous declarations")
    }

    #[test]
    fn auto_ordinals_start_at_zero_and_continue_after_explicit() {
        let e = EnumType::builder("E")
            .member("A")
            .member(MemberDecl::new("B").ordinal(10))
            .member("C")
            .build()
            .unwrap();
        assert_eq!(e.get("A").unwrap().ordinal(), 0);
        assert_eq!(e.get("B").unwrap().ordinal(), 10);
        assert_eq!(e.get("C").unwrap().ordinal(), 11);
        assert_eq!(e.by_ordinal(11).unwrap().name(), "C");
    }

    #[test]
    fn duplicate_name_aborts_build() {
        let err = EnumType::builder("E")
            .member("Cat")
            .member(MemberDecl::new("Cat").ordinal(5))
            .build()
            .unwrap_err();
        assert!(matches!(err, AutoEnumError::DuplicateName { .. }));
    }

    #[test]
    fn duplicate_ordinal_aborts_build() {
        let err = EnumType::builder("E")
            .member(MemberDecl::new("Cat").ordinal(1))
            .member(MemberDecl::new("Dog").ordinal(1))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AutoEnumError::DuplicateOrdinal { ordinal: 1, .. }
        ));
    }

    #[test]
    fn colliding_normalized_keys_abort_build() {
        // Distinct literal names, identical keys after folding.
        let err = EnumType::builder("E")
            .member("Cat_Dog")
            .member("CATDOG")
            .build()
            .unwrap_err();
        match err {
            AutoEnumError::KeyCollision { key, first, second, .. } => {
                assert_eq!(key, "catdog");
                assert_eq!(first, "Cat_Dog");
                assert_eq!(second, "CATDOG");
            }
            other => panic!("expected KeyCollision, got {other:?}"),
        }
    }

    #[test]
    fn alias_colliding_with_another_members_name_aborts_build() {
        let err = EnumType::builder("E")
            .member("Cat")
            .member(MemberDecl::new("Dog").alias("C-A-T"))
            .build()
            .unwrap_err();
        assert!(matches!(err, AutoEnumError::KeyCollision { .. }));
    }

    #[test]
    fn alias_spelling_its_own_name_is_tolerated() {
        let e = EnumType::builder("E")
            .member(MemberDecl::new("Cat").alias("CAT").alias("c_a_t"))
            .build()
            .unwrap();
        assert_eq!(e.resolve("cat").unwrap().name(), "Cat");
    }

    #[test]
    fn member_passthrough_is_identity() {
        let e = animals();
        let cat = e.get("Cat").unwrap();
        let resolved = e.resolve(&cat).unwrap();
        assert_eq!(resolved, cat);
    }

    #[test]
    fn foreign_member_is_rejected_with_its_own_error() {
        let animals = animals();
        let plants = EnumType::builder("Plant").member("Fern").build().unwrap();
        let fern = plants.get("Fern").unwrap();
        let err = animals.resolve(&fern).unwrap_err();
        assert!(matches!(err, AutoEnumError::ForeignMember { .. }));
        assert!(animals.try_resolve(&fern).is_none());
    }

    #[test]
    fn identity_normalizer_makes_lookups_exact() {
        let e = EnumType::builder("E")
            .normalize_with(crate::normalize::identity)
            .member("Cat")
            .build()
            .unwrap();
        assert!(e.matches("Cat"));
        assert!(!e.matches("cat"));
        assert!(!e.matches(" Cat "));
    }

    #[test]
    fn resolve_all_stops_at_first_miss() {
        let e = animals();
        let ok = e.resolve_all(["cat", "DOG"]).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(e.resolve_all(["cat", "Jaguar"]).is_err());
    }
}
