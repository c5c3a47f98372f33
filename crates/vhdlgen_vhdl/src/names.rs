//! Legal, unique VHDL identifiers.
//!
//! Verilog names may be reserved words in VHDL, may contain `$`, and may
//! differ only in case. [`legalize`] maps a name onto a basic identifier and
//! [`NameSet`] hands out names that are unique within one declarative
//! region under VHDL's case-insensitive comparison.

use std::collections::HashSet;

/// VHDL-2008 reserved words, lower case.
const RESERVED: &[&str] = &[
    "abs", "access", "after", "alias", "all", "and", "architecture", "array", "assert", "assume",
    "assume_guarantee", "attribute", "begin", "block", "body", "buffer", "bus", "case",
    "component", "configuration", "constant", "context", "cover", "default", "disconnect",
    "downto", "else", "elsif", "end", "entity", "exit", "fairness", "file", "for", "force",
    "function", "generate", "generic", "group", "guarded", "if", "impure", "in", "inertial",
    "inout", "is", "label", "library", "linkage", "loop", "map", "mod", "nand", "new",
    "next", "nor", "not", "null", "of", "on", "open", "or", "others", "out", "package",
    "parameter", "port", "postponed", "procedure", "process", "property", "protected", "pure",
    "range", "record", "register", "reject", "release", "rem", "report", "restrict",
    "restrict_guarantee", "return", "rol", "ror", "select", "sequence", "severity", "shared",
    "signal", "sla", "sll", "sra", "srl", "strong", "subtype", "then", "to", "transport", "type",
    "unaffected", "units", "until", "use", "variable", "vmode", "vprop", "vunit", "wait", "when",
    "while", "with", "xnor", "xor",
];

/// Prefix given to names that cannot start a basic identifier as they are.
const PREFIX: &str = "VL";

/// Returns `true` if `word` is a VHDL reserved word, in any case.
pub fn is_reserved(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    RESERVED.contains(&lower.as_str())
}

/// Maps `name` onto a VHDL basic identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, runs of `_` collapse and
/// trailing `_` are dropped. A name that starts with a digit or `_`, or is a
/// reserved word, gets a `VL` prefix. Legal names come back unchanged.
pub fn legalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() { c } else { '_' };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('_') {
        out.pop();
    }
    match out.chars().next() {
        None => PREFIX.to_string(),
        Some('_') => format!("{PREFIX}{out}"),
        Some(c) if c.is_ascii_digit() => format!("{PREFIX}_{out}"),
        Some(_) if is_reserved(&out) => format!("{PREFIX}_{out}"),
        Some(_) => out,
    }
}

/// Names already taken in one declarative region.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    used: HashSet<String>,
}

impl NameSet {
    /// Creates a set in which `reserved` are already taken.
    pub fn with_reserved(reserved: &[&str]) -> Self {
        let mut set = Self::default();
        for name in reserved {
            set.insert(name);
        }
        set
    }

    /// Returns `true` if `name` is taken, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(&name.to_ascii_lowercase())
    }

    /// Takes `name` exactly; returns `false` if it was already taken.
    pub fn insert(&mut self, name: &str) -> bool {
        self.used.insert(name.to_ascii_lowercase())
    }

    /// Takes the legal form of `name`, adding `_1`, `_2`, … until it is
    /// unique, and returns it.
    pub fn claim(&mut self, name: &str) -> String {
        let base = legalize(name);
        if self.insert(&base) {
            return base;
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{base}_{n}");
            if self.insert(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_names_are_kept() {
        for name in ["clk", "Data_In", "q2", "Verilog_Display_Line"] {
            assert_eq!(legalize(name), name);
        }
    }

    #[test]
    fn reserved_words_get_prefix() {
        assert_eq!(legalize("signal"), "VL_signal");
        assert_eq!(legalize("IN"), "VL_IN");
        assert_eq!(legalize("process"), "VL_process");
        assert!(is_reserved("Entity"));
        assert!(!is_reserved("counter"));
    }

    #[test]
    fn illegal_characters_and_underscores() {
        assert_eq!(legalize("_tmp"), "VL_tmp");
        assert_eq!(legalize("a__b"), "a_b");
        assert_eq!(legalize("x_"), "x");
        assert_eq!(legalize("cnt$next"), "cnt_next");
        assert_eq!(legalize("3state"), "VL_3state");
        assert_eq!(legalize("__"), "VL");
        assert_eq!(legalize(""), "VL");
    }

    #[test]
    fn claim_is_case_insensitive() {
        let mut set = NameSet::default();
        assert_eq!(set.claim("Sub"), "Sub");
        assert_eq!(set.claim("sub"), "sub_1");
        assert_eq!(set.claim("SUB"), "SUB_2");
        assert!(set.contains("SUB_1"));
    }

    #[test]
    fn claim_avoids_reserved_names_in_set() {
        let mut set = NameSet::with_reserved(&["output"]);
        assert_eq!(set.claim("Output"), "Output_1");
        assert!(!set.insert("OUTPUT"));
    }

    #[test]
    fn legalized_clash_is_renamed() {
        let mut set = NameSet::default();
        assert_eq!(set.claim("a$b"), "a_b");
        assert_eq!(set.claim("a_b"), "a_b_1");
    }
}
