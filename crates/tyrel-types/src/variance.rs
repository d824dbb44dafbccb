//! Declaration-site and use-site variance.

/// Variance of a type parameter or a use-site projection.
///
/// | Variance | Declaration site | Use site |
/// |----------|------------------|----------|
/// | `Invariant` | `class Cell<T>` | `Cell<Dog>` |
/// | `In` | `class Sink<in T>` | `Cell<in Dog>` |
/// | `Out` | `class Source<out T>` | `Cell<out Dog>` |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variance {
    /// No subtyping between applications with different arguments.
    Invariant,
    /// Contravariant: consumer position only.
    In,
    /// Covariant: producer position only.
    Out,
}

impl Variance {
    /// Source-level keyword, empty for invariant.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Invariant => "",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Whether this is a directional (`in`/`out`) variance.
    pub const fn is_projection(self) -> bool {
        !matches!(self, Self::Invariant)
    }

    /// The opposite directional variance; invariant is its own opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Invariant => Self::Invariant,
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

impl std::fmt::Display for Variance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
