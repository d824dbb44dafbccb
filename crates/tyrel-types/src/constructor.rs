//! Nominal type constructors and their formal parameters.
//!
//! A [`TypeConstructor`] is the identity of a class-like declaration: its
//! name, its ordered [`TypeParameter`]s, and its declared supertypes (the
//! inheritance edges the supertype locator walks). Identity is a `u32` id
//! allocated from a process-wide counter; handles are cheap `Arc` clones
//! that compare and hash by id.

use crate::ty::Ty;
use crate::variance::Variance;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;
use tyrel_common::interner::{Atom, intern};

static NEXT_CONSTRUCTOR_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_PARAM_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a [`TypeConstructor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstructorId(pub u32);

/// Identity of a [`TypeParameter`], the key substitutions are built over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// A formal type parameter of a constructor.
///
/// Belongs to exactly one constructor; its `index` matches the position of
/// the corresponding argument in every application of that constructor.
pub struct TypeParameter {
    id: ParamId,
    name: Atom,
    variance: Variance,
    index: usize,
    /// Constructor representing this parameter when it is used as a type
    /// inside declared supertypes. Set once at creation.
    as_constructor: OnceCell<TypeConstructor>,
}

impl TypeParameter {
    fn new(name: &str, variance: Variance, index: usize) -> Arc<Self> {
        let parameter = Arc::new(Self {
            id: ParamId(NEXT_PARAM_ID.fetch_add(1, Ordering::SeqCst)),
            name: intern(name),
            variance,
            index,
            as_constructor: OnceCell::new(),
        });
        let constructor = TypeConstructor(Arc::new(ConstructorData {
            id: ConstructorId(NEXT_CONSTRUCTOR_ID.fetch_add(1, Ordering::SeqCst)),
            kind: ConstructorKind::Parameter(parameter.clone()),
            name: parameter.name,
            parameters: Vec::new(),
            supertypes: Vec::new(),
        }));
        parameter
            .as_constructor
            .set(constructor)
            .unwrap_or_else(|_| unreachable!("parameter constructor set once at creation"));
        parameter
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    pub fn name(&self) -> Atom {
        self.name
    }

    /// Declaration-site variance.
    pub fn variance(&self) -> Variance {
        self.variance
    }

    /// Ordinal position in the owning constructor's parameter list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The constructor identifying this parameter when it appears as a type.
    pub fn type_constructor(&self) -> TypeConstructor {
        self.as_constructor
            .get()
            .expect("parameter constructor is set at creation")
            .clone()
    }
}

impl PartialEq for TypeParameter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeParameter {}

impl std::hash::Hash for TypeParameter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for TypeParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.variance.is_projection() {
            write!(f, "TypeParameter({} {} {})", self.id.0, self.variance.label(), self.name)
        } else {
            write!(f, "TypeParameter({} {})", self.id.0, self.name)
        }
    }
}

/// Kind of declaration a constructor identifies.
#[derive(Clone, Debug)]
pub enum ConstructorKind {
    /// Ordinary class/interface declaration.
    Class,
    /// A type parameter used in type position (inside declared supertypes).
    Parameter(Arc<TypeParameter>),
    /// The implicit top type, supertype of every class.
    Top,
    /// The bottom type, subtype of everything.
    Bottom,
    /// Unresolved/unknown type; by policy compatible with anything.
    Error,
}

struct ConstructorData {
    id: ConstructorId,
    kind: ConstructorKind,
    name: Atom,
    parameters: Vec<Arc<TypeParameter>>,
    supertypes: Vec<Ty>,
}

/// Cheap handle to a nominal constructor. Equality and hashing are by id.
#[derive(Clone)]
pub struct TypeConstructor(Arc<ConstructorData>);

impl TypeConstructor {
    /// Start building a class-like constructor.
    pub fn class(name: &str) -> ClassBuilder {
        ClassBuilder {
            name: intern(name),
            parameters: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Fresh error constructor carrying a human-readable reason.
    pub fn error(reason: &str) -> Self {
        Self(Arc::new(ConstructorData {
            id: ConstructorId(NEXT_CONSTRUCTOR_ID.fetch_add(1, Ordering::SeqCst)),
            kind: ConstructorKind::Error,
            name: intern(reason),
            parameters: Vec::new(),
            supertypes: Vec::new(),
        }))
    }

    pub(crate) fn builtin(kind: ConstructorKind, name: &str) -> Self {
        Self(Arc::new(ConstructorData {
            id: ConstructorId(NEXT_CONSTRUCTOR_ID.fetch_add(1, Ordering::SeqCst)),
            kind,
            name: intern(name),
            parameters: Vec::new(),
            supertypes: Vec::new(),
        }))
    }

    pub fn id(&self) -> ConstructorId {
        self.0.id
    }

    pub fn name(&self) -> Atom {
        self.0.name
    }

    pub fn kind(&self) -> &ConstructorKind {
        &self.0.kind
    }

    /// Formal parameters, in declaration order.
    pub fn parameters(&self) -> &[Arc<TypeParameter>] {
        &self.0.parameters
    }

    /// Number of type arguments every application must supply.
    pub fn arity(&self) -> usize {
        self.0.parameters.len()
    }

    /// Direct declared supertypes, expressed over this constructor's own
    /// parameters.
    pub fn declared_supertypes(&self) -> &[Ty] {
        &self.0.supertypes
    }

    pub fn is_error(&self) -> bool {
        matches!(self.0.kind, ConstructorKind::Error)
    }

    pub fn is_top(&self) -> bool {
        matches!(self.0.kind, ConstructorKind::Top)
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self.0.kind, ConstructorKind::Bottom)
    }

    /// The parameter this constructor stands for, if any.
    pub fn as_parameter(&self) -> Option<&Arc<TypeParameter>> {
        match &self.0.kind {
            ConstructorKind::Parameter(parameter) => Some(parameter),
            _ => None,
        }
    }
}

impl PartialEq for TypeConstructor {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for TypeConstructor {}

impl std::hash::Hash for TypeConstructor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl std::fmt::Debug for TypeConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeConstructor({} {})", self.0.id.0, self.0.name)
    }
}

/// Builder for class-like constructors.
///
/// Parameters are declared first so that declared supertypes can reference
/// them (via [`Ty::parameter`]); a class with no declared supertype
/// implicitly extends the top type.
pub struct ClassBuilder {
    name: Atom,
    parameters: Vec<Arc<TypeParameter>>,
    supertypes: Vec<Ty>,
}

impl ClassBuilder {
    /// Declare the next formal type parameter.
    pub fn parameter(&mut self, name: &str, variance: Variance) -> Arc<TypeParameter> {
        let parameter = TypeParameter::new(name, variance, self.parameters.len());
        self.parameters.push(parameter.clone());
        parameter
    }

    /// Declare a direct supertype.
    pub fn supertype(&mut self, supertype: Ty) -> &mut Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn build(self) -> TypeConstructor {
        let supertypes = if self.supertypes.is_empty() {
            vec![Ty::top()]
        } else {
            self.supertypes
        };
        let id = ConstructorId(NEXT_CONSTRUCTOR_ID.fetch_add(1, Ordering::SeqCst));
        trace!(id = id.0, name = %self.name, arity = self.parameters.len(), "TypeConstructor::build");
        TypeConstructor(Arc::new(ConstructorData {
            id,
            kind: ConstructorKind::Class,
            name: self.name,
            parameters: self.parameters,
            supertypes,
        }))
    }
}

#[cfg(test)]
#[path = "../tests/constructor_tests.rs"]
mod tests;
