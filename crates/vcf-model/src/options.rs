/// How the positional label assigner treats labels that were already set
/// during redistribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Positional defaults overwrite any existing label, including the
    /// `Mobile` label assigned when a `:::`-joined value was redistributed.
    /// This matches the observed legacy behavior.
    #[default]
    PositionalWins,
    /// Positional defaults only fill empty labels; redistribution-assigned
    /// labels survive.
    KeepRedistributed,
}

/// Knobs for the normalization pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingOptions {
    pub label_policy: LabelPolicy,
}

impl ProcessingOptions {
    /// Options matching the legacy behavior exactly.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            label_policy: LabelPolicy::PositionalWins,
        }
    }
}
