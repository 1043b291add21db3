//! Contains traits shared by vecta types that are configured from text

/// Trait to look up an enum variant by its (case-insensitive) name
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}
