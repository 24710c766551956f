//! Conflict policy for untranslatable input

/// What a cipher does when input contains something it cannot translate:
/// a character outside every class, or a symbol missing from the alphabet
/// or substitution map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Stop and report the offending symbol and its position.
    #[default]
    Fail,
    /// Drop the offending symbol and keep translating. Position-dependent
    /// offsets are not advanced by dropped symbols.
    Ignore,
}

impl ConflictPolicy {
    /// Policy name as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ConflictPolicy::Fail => "fail",
            ConflictPolicy::Ignore => "ignore",
        }
    }
}
