//! Structural elaboration: one entity per module definition.
//!
//! Module scopes are visited depth-first, parents before children. The
//! first instance of each module definition becomes that definition's
//! entity; its hierarchical path is recorded as the entity's derived-from
//! key. Instances below a definitional instance become component instances
//! in the parent's architecture.
//!
//! Every emitted name goes through a [`NameSet`]: entity names are unique
//! across the design, and ports, signals, components and instance labels
//! are unique within their entity.

use std::collections::HashMap;

use log::{debug, trace};
use vhdlgen_common::{GenResult, Interner, InternalError};
use vhdlgen_config::CodegenConfig;
use vhdlgen_ir::{Design, PortDirection, ScopeId};
use vhdlgen_vhdl::{ConcStmt, Decl, EntityId, NameSet, PortMode, VhdlDesign};

use crate::registry::EntityRegistry;
use crate::stmt::DISPLAY_LINE;
use crate::IEEE_STD_LOGIC;

/// Library names no entity may take.
const LIBRARY_NAMES: &[&str] = &["ieee", "std", "work"];

/// Names the generated architectures refer to, which a signal must not hide.
const GENERATED_NAMES: &[&str] = &[
    DISPLAY_LINE,
    "output",
    "line",
    "text",
    "write",
    "writeline",
    "rising_edge",
    "falling_edge",
    "std_logic",
    "std_logic_vector",
    "string",
    "boolean",
    "integer",
    "time",
    "ieee",
    "std",
    "work",
];

/// Name bookkeeping for one elaboration run.
struct Names {
    entities: NameSet,
    regions: HashMap<EntityId, NameSet>,
}

/// Creates entities, ports, signals and component instances for every
/// module scope in `ir`, registering each new entity in `registry`.
pub fn elaborate(
    ir: &Design,
    interner: &Interner,
    config: &CodegenConfig,
    vhdl: &mut VhdlDesign,
    registry: &mut EntityRegistry,
) -> GenResult<()> {
    let mut names = Names {
        entities: NameSet::with_reserved(LIBRARY_NAMES),
        regions: HashMap::new(),
    };
    for scope_id in ir.module_scopes() {
        let def_name = interner.resolve(ir.scope(scope_id).def_name);
        let entity = match registry.lookup(def_name) {
            Some(id) => id,
            None => {
                let id = create_entity(ir, interner, config, vhdl, registry, &mut names, scope_id)?;
                registry.register(def_name, id)?;
                id
            }
        };
        instantiate_in_parent(ir, interner, vhdl, registry, &mut names, scope_id, entity)?;
    }
    debug!("elaborated {} entities", registry.len());
    Ok(())
}

fn create_entity(
    ir: &Design,
    interner: &Interner,
    config: &CodegenConfig,
    vhdl: &mut VhdlDesign,
    registry: &mut EntityRegistry,
    names: &mut Names,
    scope_id: ScopeId,
) -> GenResult<EntityId> {
    let scope = ir.scope(scope_id);
    let def_name = interner.resolve(scope.def_name);
    let path = ir.qualified_name(scope_id, interner);
    let name = names.entities.claim(def_name);
    let id = vhdl.new_entity(&name, &path, &config.architecture);
    debug!("created entity `{name}` from `{path}`");

    let mut region = NameSet::with_reserved(GENERATED_NAMES);
    region.insert(&name);
    let mut signal_names = Vec::with_capacity(scope.signals.len());
    vhdl.entities[id].requires_package(IEEE_STD_LOGIC);
    for signal in scope.signals.values() {
        let verilog_name = interner.resolve(signal.name);
        let vhdl_name = region.claim(verilog_name);
        if vhdl_name != verilog_name {
            debug!("renamed `{path}.{verilog_name}` to `{vhdl_name}`");
        }
        let ty = vhdl.types.bits(signal.width);
        let (entity, arch) = vhdl.unit_mut(id);
        match signal.port {
            Some(dir) => {
                trace!("port `{name}.{vhdl_name}`");
                entity.add_port(Decl::port(vhdl_name.as_str(), ty, port_mode(dir)));
            }
            None => arch.add_decl(Decl::signal(vhdl_name.as_str(), ty)),
        }
        signal_names.push(vhdl_name);
    }
    registry.set_signal_names(id, signal_names)?;
    names.regions.insert(id, region);
    Ok(id)
}

/// Adds `scope_id` as a component instance of its parent module, if the
/// parent is the instance its entity was derived from.
fn instantiate_in_parent(
    ir: &Design,
    interner: &Interner,
    vhdl: &mut VhdlDesign,
    registry: &EntityRegistry,
    names: &mut Names,
    scope_id: ScopeId,
    entity: EntityId,
) -> GenResult<()> {
    let scope = ir.scope(scope_id);
    let Some(parent_id) = scope.parent.and_then(|p| ir.enclosing_module(p)) else {
        return Ok(());
    };
    let parent_def = interner.resolve(ir.scope(parent_id).def_name);
    let parent = registry.lookup(parent_def).ok_or_else(|| {
        InternalError::new(format!("no entity for parent module `{parent_def}`"))
    })?;
    if vhdl.entity(parent).derived_from() != ir.qualified_name(parent_id, interner) {
        return Ok(());
    }
    let region = names.regions.get_mut(&parent).ok_or_else(|| {
        InternalError::new(format!("no name region for module `{parent_def}`"))
    })?;

    let comp_name = vhdl.entity(entity).name().to_string();
    let component = Decl::component_for(vhdl.entity(entity));
    let (_, arch) = vhdl.unit_mut(parent);
    if !arch.has_declared_component(&comp_name) {
        if !region.insert(&comp_name) {
            return Err(InternalError::new(format!(
                "component `{comp_name}` clashes with another declaration in `{parent_def}`"
            )));
        }
        arch.add_decl(component);
    }
    let label = region.claim(interner.resolve(scope.name));
    arch.add_stmt(ConcStmt::instance(label.as_str(), comp_name.as_str()))
        .map_err(|e| InternalError::new(e.to_string()))?;
    debug!("instantiated `{comp_name}` as `{label}` in `{parent_def}`");
    Ok(())
}

fn port_mode(dir: PortDirection) -> PortMode {
    match dir {
        PortDirection::Input => PortMode::In,
        PortDirection::Output => PortMode::Out,
        PortDirection::InOut => PortMode::InOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhdlgen_ir::{DesignBuilder, ScopeKind};
    use vhdlgen_vhdl::DeclKind;

    fn run(ir: &Design, interner: &Interner) -> (VhdlDesign, EntityRegistry) {
        let mut vhdl = VhdlDesign::new();
        let mut registry = EntityRegistry::new();
        elaborate(ir, interner, &CodegenConfig::default(), &mut vhdl, &mut registry).unwrap();
        (vhdl, registry)
    }

    #[test]
    fn one_entity_per_definition() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.module(top, "u0", "sub");
        b.module(top, "u1", "sub");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        assert_eq!(vhdl.entities.len(), 2);
        let sub = registry.lookup("sub").unwrap();
        assert_eq!(vhdl.entity(sub).derived_from(), "top.u0");
        assert_eq!(vhdl.arch_of(sub).name(), "Behavioural");
    }

    #[test]
    fn ports_and_signals() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "counter");
        b.port(top, "clk", 1, PortDirection::Input);
        b.port(top, "q", 4, PortDirection::Output);
        b.signal(top, "tmp", 4);
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let id = registry.lookup("counter").unwrap();
        let ent = vhdl.entity(id);
        let ports: Vec<_> = ent.ports().iter().map(|p| p.name()).collect();
        assert_eq!(ports, ["clk", "q"]);
        assert_eq!(*ent.ports()[1].kind(), DeclKind::Port(PortMode::Out));
        assert!(vhdl.arch_of(id).has_declaration("tmp"));
        assert_eq!(ent.packages(), [IEEE_STD_LOGIC]);
    }

    #[test]
    fn repeated_instances_share_one_component_decl() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.module(top, "u0", "sub");
        b.module(top, "u1", "sub");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let arch = vhdl.arch_of(registry.lookup("top").unwrap());
        assert!(arch.has_declared_component("sub"));
        assert_eq!(arch.decls().len(), 1);
        assert_eq!(arch.stmts().len(), 2);
    }

    #[test]
    fn instances_below_copies_are_not_repeated() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        let u0 = b.module(top, "u0", "mid");
        let u1 = b.module(top, "u1", "mid");
        b.module(u0, "leaf0", "leaf");
        b.module(u1, "leaf0", "leaf");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let mid = vhdl.arch_of(registry.lookup("mid").unwrap());
        assert_eq!(mid.stmts().len(), 1);
        let leaf = registry.lookup("leaf").unwrap();
        assert_eq!(vhdl.entity(leaf).derived_from(), "top.u0.leaf0");
    }

    #[test]
    fn modules_inside_named_blocks_attach_to_enclosing_module() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        let blk = b.child_scope(top, ScopeKind::Begin, "gen", "gen");
        b.module(blk, "u0", "sub");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let arch = vhdl.arch_of(registry.lookup("top").unwrap());
        assert_eq!(arch.stmts().len(), 1);
        assert_eq!(
            vhdl.entity(registry.lookup("sub").unwrap()).derived_from(),
            "top.gen.u0"
        );
    }

    #[test]
    fn modules_differing_in_case_get_distinct_entities() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.module(top, "u0", "Sub");
        b.module(top, "u1", "sub");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let upper = registry.lookup("Sub").unwrap();
        let lower = registry.lookup("sub").unwrap();
        assert_ne!(upper, lower);
        assert_eq!(vhdl.entity(upper).name(), "Sub");
        assert_eq!(vhdl.entity(lower).name(), "sub_1");

        let arch = vhdl.arch_of(registry.lookup("top").unwrap());
        assert!(arch.has_declared_component("Sub"));
        assert!(arch.has_declared_component("sub_1"));
        assert_eq!(arch.decls().len(), 2);
    }

    #[test]
    fn illegal_names_are_legalized() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.port(top, "in", 1, PortDirection::Input);
        b.signal(top, "signal", 1);
        b.signal(top, "Signal", 1);
        b.signal(top, "_tmp", 1);
        b.signal(top, "output", 1);
        b.module(top, "process", "leaf");
        let ir = b.finish();
        let (vhdl, registry) = run(&ir, &interner);

        let id = registry.lookup("top").unwrap();
        assert_eq!(vhdl.entity(id).ports()[0].name(), "VL_in");
        assert_eq!(
            registry.signal_names(id),
            ["VL_in", "VL_signal", "VL_Signal_1", "VL_tmp", "output_1"]
        );
        let arch = vhdl.arch_of(id);
        assert!(arch.has_declaration("VL_Signal_1"));
        assert!(arch.has_declaration("output_1"));
        assert!(!arch.has_declaration("signal"));
    }

    #[test]
    fn component_name_clash_is_internal_error() {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.signal(top, "sub", 1);
        b.module(top, "u0", "sub");
        let ir = b.finish();
        let mut vhdl = VhdlDesign::new();
        let mut registry = EntityRegistry::new();
        let err = elaborate(&ir, &interner, &CodegenConfig::default(), &mut vhdl, &mut registry)
            .unwrap_err();
        assert!(err.message.contains("clashes"));
    }
}
