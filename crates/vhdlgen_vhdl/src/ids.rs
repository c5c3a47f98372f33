//! Opaque IDs for VHDL design units and types.

use vhdlgen_common::define_id;

define_id!(
    /// ID of an entity in a [`VhdlDesign`](crate::VhdlDesign).
    EntityId
);

define_id!(
    /// ID of an architecture in a [`VhdlDesign`](crate::VhdlDesign).
    ArchId
);

define_id!(
    /// ID of an interned type in a [`TypeDb`](crate::TypeDb).
    TypeId
);
