//! On-disk (JSON) form of a design.
//!
//! Identifiers inside a [`Design`] are interner keys, which only mean
//! something together with the strings they were interned from. A
//! [`DesignFile`] therefore stores the name table next to the design; the
//! `n`-th string is the identifier with raw index `n`.

use crate::design::Design;
use serde::{Deserialize, Serialize};
use vhdlgen_common::{GenResult, Ident, Interner, InternalError};

/// A design together with the name table its identifiers index into.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignFile {
    /// Interned names in key order.
    pub names: Vec<String>,
    /// The design.
    pub design: Design,
}

impl DesignFile {
    /// Snapshots a design built against `interner`.
    pub fn from_design(design: Design, interner: &Interner) -> Self {
        let names = (0..interner.len() as u32)
            .map(|raw| interner.resolve(Ident::from_raw(raw)).to_string())
            .collect();
        Self { names, design }
    }

    /// Interns the name table into a fresh `interner` and returns the
    /// checked design.
    ///
    /// The interner must be empty so that the keys line up; duplicate names
    /// in the table are rejected for the same reason.
    pub fn into_design(self, interner: &Interner) -> GenResult<Design> {
        if !interner.is_empty() {
            return Err(InternalError::new(
                "design file must be loaded into an empty interner",
            ));
        }
        for (index, name) in self.names.iter().enumerate() {
            let ident = interner.get_or_intern(name);
            if ident.as_raw() as usize != index {
                return Err(InternalError::new(format!(
                    "duplicate name `{name}` in design file name table"
                )));
            }
        }
        self.check_names()?;
        self.design.check_links()?;
        Ok(self.design)
    }

    fn check_names(&self) -> GenResult<()> {
        let count = self.names.len() as u32;
        for scope in self.design.scopes.values() {
            let idents = [scope.name, scope.def_name]
                .into_iter()
                .chain(scope.signals.values().map(|s| s.name));
            for ident in idents {
                if ident.as_raw() >= count {
                    return Err(InternalError::new(format!(
                        "name #{} is outside the name table",
                        ident.as_raw()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DesignBuilder;
    use crate::process::ProcessKind;
    use crate::stmt::Statement;

    fn make_file() -> DesignFile {
        let interner = Interner::new();
        let mut b = DesignBuilder::new(&interner);
        let top = b.root_module("top", "top");
        b.signal(top, "q", 1);
        b.process(top, ProcessKind::Initial, Statement::Nop);
        DesignFile::from_design(b.finish(), &interner)
    }

    #[test]
    fn reload_through_json() {
        let json = serde_json::to_string(&make_file()).unwrap();
        let file: DesignFile = serde_json::from_str(&json).unwrap();
        let interner = Interner::new();
        let design = file.into_design(&interner).unwrap();
        assert_eq!(design.processes.len(), 1);
        let top = design.roots[0];
        assert_eq!(design.qualified_name(top, &interner), "top");
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut file = make_file();
        file.names.push("top".into());
        let err = file.into_design(&Interner::new()).unwrap_err();
        assert!(err.message.contains("duplicate name"));
    }

    #[test]
    fn rejects_name_outside_table() {
        let mut file = make_file();
        file.names.truncate(1);
        let err = file.into_design(&Interner::new()).unwrap_err();
        assert!(err.message.contains("outside the name table"));
    }

    #[test]
    fn rejects_cyclic_scopes_from_json() {
        let json = r#"{
            "names": ["a", "b"],
            "design": {
                "scopes": [
                    {"id": 0, "kind": "Module", "name": 0, "def_name": 0, "parent": 1, "children": [1]},
                    {"id": 1, "kind": "Module", "name": 1, "def_name": 1, "parent": 0, "children": [0]}
                ],
                "processes": [],
                "roots": []
            }
        }"#;
        let file: DesignFile = serde_json::from_str(json).unwrap();
        assert!(file.into_design(&Interner::new()).is_err());
    }

    #[test]
    fn rejects_zero_width_signal_from_json() {
        let json = r#"{
            "names": ["top", "w"],
            "design": {
                "scopes": [
                    {"id": 0, "kind": "Module", "name": 0, "def_name": 0, "parent": null,
                     "signals": [{"name": 1, "width": 0}]}
                ],
                "processes": [],
                "roots": [0]
            }
        }"#;
        let file: DesignFile = serde_json::from_str(json).unwrap();
        let err = file.into_design(&Interner::new()).unwrap_err();
        assert!(err.message.contains("zero width"));
    }

    #[test]
    fn rejects_used_interner() {
        let interner = Interner::new();
        interner.get_or_intern("stale");
        assert!(make_file().into_design(&interner).is_err());
    }
}
