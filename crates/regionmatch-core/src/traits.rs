// crates/regionmatch-core/src/traits.rs
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get an accent- and case-insensitive
/// comparison built on [`fold_key`].
///
/// # Examples
/// ```rust
/// use regionmatch_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Zürich").is_named("zurich"));
/// assert!(!Place("North Dakota").is_named("north"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }
}

impl NameMatch for str {
    fn name_str(&self) -> &str {
        self
    }
}

impl NameMatch for String {
    fn name_str(&self) -> &str {
        self.as_str()
    }
}
