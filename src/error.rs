use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Both variants describe user-correctable input problems. The numeric
/// recurrence itself is total over validated parameters, so the solver has
/// no other failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A motion or grid parameter is out of range or non-finite.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The potential field selector does not name a known force kind.
    #[error("unknown force kind: '{0}' (expected elastic, gravity, or custom)")]
    UnknownForceKind(String),
}
