//! Opaque IDs for source IR entities.

use vhdlgen_common::define_id;

define_id!(
    /// ID of a scope (module instance, task, function, named block).
    ScopeId
);

define_id!(
    /// ID of a signal, local to the scope that declares it.
    SignalId
);

define_id!(
    /// ID of a process in the design.
    ProcessId
);
