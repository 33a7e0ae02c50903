//! autoenum: a fuzzy-resolving enumeration registry.
//!
//! Declare a set of named constants, each with an optional explicit ordinal
//! and zero or more aliases, and get back an immutable registry that resolves
//! arbitrary strings to the single canonical member they denote. Resolution
//! tolerates letter case, surrounding whitespace, and separator convention
//! (PascalCase, snake_case, camelCase, SCREAMING_SNAKE) but never tolerates
//! insertion, deletion, or substitution of meaningful characters: there is no
//! edit-distance matching and no typo correction, so similarly spelled but
//! distinct values can never silently cross-resolve.
//!
//! # Core Principles
//!
//! - **Build once, query forever**: all validation happens eagerly at build
//!   time; an ambiguous declaration set is a hard error, never a runtime
//!   surprise.
//! - **Singleton members**: every successful resolution of the same logical
//!   constant yields the identical allocation, so equality is a pointer
//!   compare.
//! - **Lock-free queries**: a built [`EnumType`] is immutable and `Send +
//!   Sync`; resolve from any number of threads.
//!
//! # Example
//!
//! ```
//! use autoenum::{EnumType, MemberDecl};
//!
//! let cities = EnumType::builder("City")
//!     .member(MemberDecl::new("New_York_City").aliases(["New York", "NYC"]))
//!     .member("Los_Angeles")
//!     .build()
//!     .unwrap();
//!
//! let nyc = cities.resolve("nyc").unwrap();
//! assert_eq!(nyc.name(), "New_York_City");
//! assert_eq!(cities.resolve(" LOS-angeles ").unwrap(), cities.get("Los_Angeles").unwrap());
//! assert!(cities.try_resolve("Jaguar").is_none());
//! ```
//!
//! # Crate Structure
//!
//! - [`normalize`]: key normalization policy (default and pluggable)
//! - [`registry`]: declaration builder, frozen registry, resolver
//! - [`member`]: canonical member handles
//! - [`error`]: the build/query error taxonomy

pub mod error;
pub mod member;
pub mod normalize;
pub mod registry;

pub use error::AutoEnumError;
pub use member::Member;
pub use normalize::{IGNORABLE_CHARS, NormalizeFn, identity, normalize};
pub use registry::{EnumType, EnumTypeBuilder, LookupKey, MemberDecl};
