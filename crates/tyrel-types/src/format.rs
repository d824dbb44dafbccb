//! Source-like rendering of types.
//!
//! Used by panic messages, tracing output, and test assertions. Rigid types
//! render as `Cell<in Dog>?`, stars as `*`, flexible types as
//! `Lower..Upper`.

use crate::ty::{RigidTy, Ty, TyKind, TypeProjection};

impl std::fmt::Display for RigidTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.constructor().name())?;
        if !self.arguments().is_empty() {
            write!(f, "<")?;
            for (i, argument) in self.arguments().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{argument}")?;
            }
            write!(f, ">")?;
        }
        if self.is_nullable() {
            write!(f, "?")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for TypeProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Star => write!(f, "*"),
            Self::Argument { variance, ty } => {
                if variance.is_projection() {
                    write!(f, "{variance} {ty}")
                } else {
                    write!(f, "{ty}")
                }
            }
        }
    }
}

impl std::fmt::Display for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            TyKind::Rigid(rigid) => write!(f, "{rigid}"),
            TyKind::Flexible { lower, upper } => write!(f, "{lower}..{upper}"),
        }
    }
}

impl std::fmt::Debug for Ty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ty({self})")
    }
}

impl std::fmt::Debug for RigidTy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RigidTy({self})")
    }
}

impl std::fmt::Debug for TypeProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeProjection({self})")
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
