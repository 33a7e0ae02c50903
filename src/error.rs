use thiserror::Error;

/// All failure modes of the crate, split along the build/query boundary.
///
/// Build-time variants (`DuplicateName`, `DuplicateOrdinal`, `KeyCollision`)
/// are configuration errors: the enumeration is ambiguous and must not be
/// constructed. Query-time variants (`NotFound`, `ForeignMember`) are ordinary
/// control flow for callers that expect misses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutoEnumError {
    #[error("duplicate member name \"{name}\" in enum {enum_name}")]
    DuplicateName { enum_name: String, name: String },
    #[error("duplicate ordinal {ordinal} in enum {enum_name} (members \"{first}\" and \"{second}\")")]
    DuplicateOrdinal {
        enum_name: String,
        ordinal: u32,
        first: String,
        second: String,
    },
    #[error(
        "cannot register \"{second}\" in enum {enum_name}; \"{first}\" already maps to normalized key \"{key}\""
    )]
    KeyCollision {
        enum_name: String,
        key: String,
        first: String,
        second: String,
    },
    /// Stable message format, relied on by downstream snapshot tests:
    /// `Could not find enum with value <input>; available values are: [<names>]`.
    #[error("Could not find enum with value {value}; available values are: [{available}]")]
    NotFound { value: String, available: String },
    #[error("member \"{member}\" belongs to enum {actual}, not {expected}")]
    ForeignMember {
        member: String,
        actual: String,
        expected: String,
    },
}
