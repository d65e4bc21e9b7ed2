// crates/regionmatch-core/src/autocomplete.rs
//! Combobox model for picking a region by name.
use crate::dataset::Dataset;

/// Maximum number of suggestions offered at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// Options starting with `input` (case-insensitive), minus an option equal to
/// `input` itself, capped at `limit`.
pub fn suggest<'a, S: AsRef<str>>(options: &'a [S], input: &str, limit: usize) -> Vec<&'a str> {
    let prefix = input.to_lowercase();
    options
        .iter()
        .map(AsRef::as_ref)
        .filter(|o| *o != input && o.to_lowercase().starts_with(&prefix))
        .take(limit)
        .collect()
}

/// Text input plus a fixed option list.
///
/// ```
/// use regionmatch_core::Autocomplete;
///
/// let mut combo = Autocomplete::new(["Texas", "Tennessee", "Turkey"]);
/// combo.input("te");
/// assert_eq!(combo.suggestions(), ["Texas", "Tennessee"]);
/// assert_eq!(combo.enter(), Some("Texas"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    options: Vec<String>,
    text: String,
}

impl Autocomplete {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Autocomplete {
            options: options.into_iter().map(Into::into).collect(),
            text: String::new(),
        }
    }

    /// Options are the combined, sorted region names of `dataset`.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.names())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replaces the current text (a keystroke or paste).
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn suggestions(&self) -> Vec<&str> {
        suggest(&self.options, &self.text, MAX_SUGGESTIONS)
    }

    /// Enter key: commits the first suggestion, if there is one.
    pub fn enter(&mut self) -> Option<&str> {
        self.choose(0)
    }

    /// Commits suggestion `index` as the new text.
    pub fn choose(&mut self, index: usize) -> Option<&str> {
        let picked = self.suggestions().get(index).map(|s| s.to_string())?;
        self.text = picked;
        Some(&self.text)
    }
}
