// ── Spell domain type ──

/// A spell. The description may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spell {
    pub name: String,
    pub description: Option<String>,
}

impl Spell {
    /// Case-insensitive substring match on name OR description. `needle`
    /// must already be lowercase.
    pub(crate) fn text_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}
