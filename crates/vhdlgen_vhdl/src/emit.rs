//! Renders a [`VhdlDesign`] as VHDL source text.
//!
//! Every unit is written as its context clause, its entity declaration and
//! then its architecture body, in creation order. Nodes are rendered by a
//! match over their kind, one statement per line, indented by nesting level.

use crate::arch::Architecture;
use crate::decl::{Decl, DeclKind};
use crate::design::VhdlDesign;
use crate::entity::Entity;
use crate::stmt::{ConcStmt, ConcStmtKind, Process, SeqStmt, WaitKind};
use std::io::{self, Write};

/// Layout knobs for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Whether process provenance comments are written.
    pub comments: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            comments: true,
        }
    }
}

/// Writes a design to any [`Write`] sink.
pub struct Emitter<'d, W: Write> {
    writer: W,
    design: &'d VhdlDesign,
    options: EmitOptions,
}

/// Renders `design` into `writer`.
pub fn emit_design<W: Write>(
    design: &VhdlDesign,
    writer: &mut W,
    options: &EmitOptions,
) -> io::Result<()> {
    Emitter::new(writer, design, options.clone()).emit()
}

impl<'d, W: Write> Emitter<'d, W> {
    /// Creates an emitter for `design`.
    pub fn new(writer: W, design: &'d VhdlDesign, options: EmitOptions) -> Self {
        Self {
            writer,
            design,
            options,
        }
    }

    /// Writes every design unit.
    pub fn emit(&mut self) -> io::Result<()> {
        let design = self.design;
        for (i, entity) in design.entities.values().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            self.emit_context(entity)?;
            self.emit_entity(entity)?;
            writeln!(self.writer)?;
            self.emit_arch(&design.archs[entity.arch()])?;
        }
        self.writer.flush()
    }

    fn line(&mut self, level: usize, text: &str) -> io::Result<()> {
        let width = level * self.options.indent;
        writeln!(self.writer, "{:width$}{text}", "")
    }

    fn emit_context(&mut self, entity: &Entity) -> io::Result<()> {
        let mut libraries: Vec<&str> = Vec::new();
        for package in entity.packages() {
            let lib = package.split('.').next().unwrap_or(package);
            // `std` and `work` are always visible.
            if lib != "std" && lib != "work" && !libraries.contains(&lib) {
                libraries.push(lib);
            }
        }
        for lib in libraries {
            self.line(0, &format!("library {lib};"))?;
        }
        for package in entity.packages() {
            self.line(0, &format!("use {package};"))?;
        }
        if !entity.packages().is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn emit_entity(&mut self, entity: &Entity) -> io::Result<()> {
        self.line(0, &format!("entity {} is", entity.name()))?;
        self.emit_ports(1, entity.ports())?;
        self.line(0, "end entity;")
    }

    fn emit_ports(&mut self, level: usize, ports: &[Decl]) -> io::Result<()> {
        if ports.is_empty() {
            return Ok(());
        }
        self.line(level, "port (")?;
        for (i, port) in ports.iter().enumerate() {
            let sep = if i + 1 < ports.len() { ";" } else { "" };
            let text = format!("{}{sep}", self.decl_body(port));
            self.line(level + 1, &text)?;
        }
        self.line(level, ");")
    }

    fn emit_arch(&mut self, arch: &Architecture) -> io::Result<()> {
        let design = self.design;
        let entity = design.entity(arch.entity()).name();
        self.line(0, &format!("architecture {} of {entity} is", arch.name()))?;
        for decl in arch.decls() {
            self.emit_decl(1, decl)?;
        }
        self.line(0, "begin")?;
        for stmt in arch.stmts() {
            self.emit_conc_stmt(1, stmt)?;
        }
        self.line(0, "end architecture;")
    }

    fn decl_body(&self, decl: &Decl) -> String {
        let ty = decl
            .ty()
            .map(|t| self.design.types.name(t))
            .unwrap_or_default();
        match decl.kind() {
            DeclKind::Port(mode) => format!("{} : {mode} {ty}", decl.name()),
            _ => format!("{} : {ty}", decl.name()),
        }
    }

    fn emit_decl(&mut self, level: usize, decl: &Decl) -> io::Result<()> {
        match decl.kind() {
            DeclKind::Variable => {
                let text = format!("variable {};", self.decl_body(decl));
                self.line(level, &text)
            }
            DeclKind::Signal => {
                let text = format!("signal {};", self.decl_body(decl));
                self.line(level, &text)
            }
            DeclKind::Port(_) => {
                let text = format!("{};", self.decl_body(decl));
                self.line(level, &text)
            }
            DeclKind::Component(sig) => {
                self.line(level, &format!("component {} is", decl.name()))?;
                self.emit_ports(level + 1, sig.ports())?;
                self.line(level, "end component;")
            }
        }
    }

    fn emit_conc_stmt(&mut self, level: usize, stmt: &ConcStmt) -> io::Result<()> {
        match stmt.kind() {
            ConcStmtKind::Process(process) => self.emit_process(level, process),
            ConcStmtKind::Instance {
                inst_name,
                comp_name,
            } => self.line(level, &format!("{inst_name}: {comp_name};")),
        }
    }

    fn emit_process(&mut self, level: usize, process: &Process) -> io::Result<()> {
        if self.options.comments {
            if let Some(comment) = process.comment() {
                self.line(level, &format!("-- {comment}"))?;
            }
        }
        let mut header = String::new();
        if !process.name().is_empty() {
            header.push_str(process.name());
            header.push_str(": ");
        }
        header.push_str("process");
        if !process.sensitivity().is_empty() {
            header.push_str(&format!(" ({})", process.sensitivity().join(", ")));
        }
        header.push_str(" is");
        self.line(level, &header)?;
        for decl in process.decls() {
            self.emit_decl(level + 1, decl)?;
        }
        self.line(level, "begin")?;
        self.emit_seq_stmts(level + 1, process.stmts())?;
        self.line(level, "end process;")
    }

    fn emit_seq_stmts(&mut self, level: usize, stmts: &[SeqStmt]) -> io::Result<()> {
        for stmt in stmts {
            self.emit_seq_stmt(level, stmt)?;
        }
        Ok(())
    }

    fn emit_seq_stmt(&mut self, level: usize, stmt: &SeqStmt) -> io::Result<()> {
        match stmt {
            SeqStmt::SignalAssign { target, value } => {
                self.line(level, &format!("{} <= {value};", target.name))
            }
            SeqStmt::Wait(kind) => {
                let text = match kind {
                    WaitKind::Indefinite => "wait;".to_string(),
                    WaitKind::For(time) => format!("wait for {time};"),
                    WaitKind::Until(cond) => format!("wait until {cond};"),
                    WaitKind::On(signals) => format!("wait on {};", signals.join(", ")),
                };
                self.line(level, &text)
            }
            SeqStmt::Null => self.line(level, "null;"),
            SeqStmt::ProcedureCall { name, args } => {
                let text = if args.is_empty() {
                    format!("{name};")
                } else {
                    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                    format!("{name}({});", args.join(", "))
                };
                self.line(level, &text)
            }
            SeqStmt::If {
                condition,
                then_stmts,
                else_stmts,
            } => {
                self.line(level, &format!("if {condition} then"))?;
                self.emit_seq_stmts(level + 1, then_stmts)?;
                if !else_stmts.is_empty() {
                    self.line(level, "else")?;
                    self.emit_seq_stmts(level + 1, else_stmts)?;
                }
                self.line(level, "end if;")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::PortMode;
    use crate::expr::{Expr, VarRef};

    fn render(design: &VhdlDesign, options: &EmitOptions) -> String {
        let mut out = Vec::new();
        emit_design(design, &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_design_emits_nothing() {
        assert_eq!(render(&VhdlDesign::new(), &EmitOptions::default()), "");
    }

    #[test]
    fn entity_with_ports_and_process() {
        let mut design = VhdlDesign::new();
        let sl = design.types.std_logic();
        let id = design.new_entity("dff", "top", "Behavioural");
        let (ent, arch) = design.unit_mut(id);
        ent.requires_package("ieee.std_logic_1164.all");
        ent.add_port(Decl::port("clk", sl, PortMode::In));
        ent.add_port(Decl::port("q", sl, PortMode::Out));
        let mut p = Process::new("");
        p.add_sensitivity("clk");
        p.add_stmt(SeqStmt::SignalAssign {
            target: VarRef::new("q", sl),
            value: Expr::var("clk", sl),
        });
        p.set_comment("Generated from always process in top");
        arch.add_stmt(ConcStmt::process(p)).unwrap();

        let expected = "\
library ieee;
use ieee.std_logic_1164.all;

entity dff is
  port (
    clk : in std_logic;
    q : out std_logic
  );
end entity;

architecture Behavioural of dff is
begin
  -- Generated from always process in top
  process (clk) is
  begin
    q <= clk;
  end process;
end architecture;
";
        assert_eq!(render(&design, &EmitOptions::default()), expected);
    }

    #[test]
    fn declarations_components_and_instances() {
        let mut design = VhdlDesign::new();
        let sl = design.types.std_logic();
        let v4 = design.types.vector(4);
        let sub = design.new_entity("sub", "top.u0", "Behavioural");
        design.entities[sub].add_port(Decl::port("a", sl, PortMode::In));
        let top = design.new_entity("top", "top", "Behavioural");
        let comp = Decl::component_for(design.entity(sub));
        let (_, arch) = design.unit_mut(top);
        arch.add_decl(Decl::signal("cnt", v4));
        arch.add_decl(comp);
        arch.add_stmt(ConcStmt::instance("u0", "sub")).unwrap();

        let text = render(&design, &EmitOptions::default());
        assert!(text.contains(
            "architecture Behavioural of top is
  signal cnt : std_logic_vector(3 downto 0);
  component sub is
    port (
      a : in std_logic
    );
  end component;
begin
  u0: sub;
end architecture;"
        ));
        assert!(text.contains("entity sub is\n  port (\n    a : in std_logic\n  );\nend entity;"));
    }

    #[test]
    fn sequential_statements_and_options() {
        let mut design = VhdlDesign::new();
        let sl = design.types.std_logic();
        let b = design.types.boolean();
        let line = design.types.line();
        let ten = Expr::time_ns(10, &mut design.types);
        let id = design.new_entity("t", "t", "Behavioural");
        let mut p = Process::new("stim");
        p.add_decl(Decl::variable("L", line));
        p.add_stmt(SeqStmt::Wait(WaitKind::For(ten)));
        p.add_stmt(SeqStmt::If {
            condition: Expr::call("rising_edge", vec![Expr::var("clk", sl)], b),
            then_stmts: vec![SeqStmt::Null],
            else_stmts: vec![SeqStmt::ProcedureCall {
                name: "writeline".into(),
                args: vec![Expr::var("Output", line), Expr::var("L", line)],
            }],
        });
        p.add_stmt(SeqStmt::Wait(WaitKind::On(vec!["a".into(), "b".into()])));
        p.add_stmt(SeqStmt::Wait(WaitKind::Indefinite));
        p.set_comment("hidden");
        let arch = design.entity(id).arch();
        design.archs[arch].add_stmt(ConcStmt::process(p)).unwrap();

        let options = EmitOptions {
            indent: 4,
            comments: false,
        };
        let text = render(&design, &options);
        let expected = "\
    stim: process is
        variable L : Line;
    begin
        wait for 10 ns;
        if rising_edge(clk) then
            null;
        else
            writeline(Output, L);
        end if;
        wait on a, b;
        wait;
    end process;
";
        assert!(text.contains(expected), "{text}");
        assert!(!text.contains("hidden"));
        assert!(text.starts_with("entity t is\nend entity;\n"));
    }

    #[test]
    fn std_library_is_implicit() {
        let mut design = VhdlDesign::new();
        let id = design.new_entity("t", "t", "Behavioural");
        let ent = &mut design.entities[id];
        ent.requires_package("ieee.std_logic_1164.all");
        ent.requires_package("std.textio.all");
        ent.requires_package("ieee.std_logic_textio.all");
        let text = render(&design, &EmitOptions::default());
        assert!(text.starts_with(
            "library ieee;\nuse ieee.std_logic_1164.all;\nuse std.textio.all;\nuse ieee.std_logic_textio.all;\n\n"
        ));
    }
}
