//! Declarations: variables, signals, ports and component forward declarations.

use crate::entity::Entity;
use crate::ids::TypeId;
use std::fmt;

/// Direction of an entity port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortMode {
    /// `in`.
    In,
    /// `out`.
    Out,
    /// `inout`.
    InOut,
}

impl fmt::Display for PortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PortMode::In => "in",
            PortMode::Out => "out",
            PortMode::InOut => "inout",
        })
    }
}

/// The port clause of a component, copied from the entity it stands for.
///
/// There is no public constructor; the only way to obtain one is
/// [`Decl::component_for`], so every component declaration matches a
/// generated entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSig {
    ports: Vec<Decl>,
}

impl ComponentSig {
    /// The component's ports in order.
    pub fn ports(&self) -> &[Decl] {
        &self.ports
    }
}

/// What a declaration declares.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// A process variable.
    Variable,
    /// An architecture signal.
    Signal,
    /// An entity or component port.
    Port(PortMode),
    /// A component forward declaration.
    Component(ComponentSig),
}

/// A named declaration in a declarative region.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    name: String,
    ty: Option<TypeId>,
    kind: DeclKind,
}

impl Decl {
    /// `variable name : ty;`
    pub fn variable(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            kind: DeclKind::Variable,
        }
    }

    /// `signal name : ty;`
    pub fn signal(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            kind: DeclKind::Signal,
        }
    }

    /// `name : mode ty` inside a port clause.
    pub fn port(name: impl Into<String>, ty: TypeId, mode: PortMode) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            kind: DeclKind::Port(mode),
        }
    }

    /// A component forward declaration for an already generated entity.
    pub fn component_for(entity: &Entity) -> Self {
        Self {
            name: entity.name().to_string(),
            ty: None,
            kind: DeclKind::Component(ComponentSig {
                ports: entity.ports().to_vec(),
            }),
        }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type; `None` for components.
    pub fn ty(&self) -> Option<TypeId> {
        self.ty
    }

    /// What is declared.
    pub fn kind(&self) -> &DeclKind {
        &self.kind
    }

    /// Returns `true` for component forward declarations.
    pub fn is_component(&self) -> bool {
        matches!(self.kind, DeclKind::Component(_))
    }

    /// VHDL identifiers are case-insensitive.
    pub(crate) fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
