//! End-to-end translation scenarios, from built IR to emitted VHDL text.

use vhdlgen_common::Interner;
use vhdlgen_config::CodegenConfig;
use vhdlgen_ir::{
    Design, DesignBuilder, DesignFile, Edge, Event, PortDirection, ProcessKind, Statement,
};
use vhdlgen_translate::{translate_design, TranslateError};
use vhdlgen_vhdl::{emit_design, EmitOptions, SeqStmt, VhdlDesign, WaitKind};

fn emit(design: &VhdlDesign) -> String {
    let mut out = Vec::new();
    emit_design(design, &mut out, &EmitOptions::default()).unwrap();
    String::from_utf8(out).unwrap()
}

/// `top` instantiates module `m` twice; `m` has one initial process.
fn twice_instantiated(interner: &Interner) -> Design {
    let mut b = DesignBuilder::new(interner);
    let top = b.root_module("top", "top");
    for inst in ["u0", "u1"] {
        let m = b.module(top, inst, "m");
        let x = b.signal(m, "x", 1);
        b.process(
            m,
            ProcessKind::Initial,
            Statement::Assign {
                target: x,
                value: vhdlgen_ir::Expr::Number("1".into()),
                nonblocking: false,
            },
        );
    }
    b.finish()
}

/// A flip-flop: `always @(posedge clk) q <= d;`
fn flip_flop(interner: &Interner) -> Design {
    let mut b = DesignBuilder::new(interner);
    let top = b.root_module("dff", "dff");
    let clk = b.port(top, "clk", 1, PortDirection::Input);
    let d = b.port(top, "d", 1, PortDirection::Input);
    let q = b.port(top, "q", 1, PortDirection::Output);
    b.process(
        top,
        ProcessKind::Always,
        Statement::Wait {
            events: vec![Event {
                signal: clk,
                edge: Some(Edge::Posedge),
            }],
            body: Box::new(Statement::Assign {
                target: q,
                value: vhdlgen_ir::Expr::Signal(d),
                nonblocking: true,
            }),
        },
    );
    b.finish()
}

#[test]
fn module_instantiated_twice_yields_one_process() {
    let interner = Interner::new();
    let ir = twice_instantiated(&interner);
    let vhdl = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap();

    assert_eq!(vhdl.entities.len(), 2);
    let m = vhdl
        .entities
        .values()
        .find(|e| e.name() == "m")
        .map(|e| e.id())
        .unwrap();
    let processes: Vec<_> = vhdl.arch_of(m).processes().collect();
    assert_eq!(processes.len(), 1);
    let body = processes[0].stmts();
    assert_eq!(body.len(), 2);
    assert_eq!(body[1], SeqStmt::Wait(WaitKind::Indefinite));
    assert_eq!(
        processes[0].comment(),
        Some("Generated from initial process in top.u0")
    );
}

#[test]
fn triggered_process_has_sensitivity_and_no_wait() {
    let interner = Interner::new();
    let ir = flip_flop(&interner);
    let vhdl = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap();

    let id = vhdl.entities.ids().next().unwrap();
    let process = vhdl.arch_of(id).processes().next().unwrap();
    assert_eq!(process.sensitivity(), ["clk"]);
    let assigns = match &process.stmts()[..] {
        [SeqStmt::If { then_stmts, .. }] => then_stmts,
        other => panic!("unexpected body {other:?}"),
    };
    assert_eq!(assigns.len(), 1);
    assert!(matches!(assigns[0], SeqStmt::SignalAssign { .. }));
    assert!(!process
        .stmts()
        .iter()
        .any(|s| matches!(s, SeqStmt::Wait(_))));
}

#[test]
fn flip_flop_emits_expected_text() {
    let interner = Interner::new();
    let ir = flip_flop(&interner);
    let vhdl = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap();

    let expected = "\
library ieee;
use ieee.std_logic_1164.all;

entity dff is
  port (
    clk : in std_logic;
    d : in std_logic;
    q : out std_logic
  );
end entity;

architecture Behavioural of dff is
begin
  -- Generated from always process in dff
  process (clk) is
  begin
    if rising_edge(clk) then
      q <= d;
    end if;
  end process;
end architecture;
";
    assert_eq!(emit(&vhdl), expected);
}

#[test]
fn hierarchy_emits_component_once() {
    let interner = Interner::new();
    let ir = twice_instantiated(&interner);
    let vhdl = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap();
    let text = emit(&vhdl);

    assert_eq!(text.matches("component m is").count(), 1);
    assert!(text.contains("  u0: m;\n  u1: m;\n"));
    assert_eq!(text.matches("process is").count(), 1);
    assert!(text.contains("    x <= '1';\n    wait;\n"));
}

#[test]
fn first_failure_aborts_translation() {
    let interner = Interner::new();
    let mut b = DesignBuilder::new(&interner);
    let top = b.root_module("top", "top");
    b.process(top, ProcessKind::Initial, Statement::Nop);
    b.process(
        top,
        ProcessKind::Initial,
        Statement::Block(vec![Statement::Nop, Statement::Finish]),
    );
    let ir = b.finish();

    let err = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap_err();
    assert!(matches!(err, TranslateError::UnsupportedStatement(_)));
    assert!(!err.is_internal());
}

#[test]
fn architecture_name_comes_from_config() {
    let interner = Interner::new();
    let ir = flip_flop(&interner);
    let config = CodegenConfig {
        architecture: "rtl".into(),
        ..CodegenConfig::default()
    };
    let vhdl = translate_design(&ir, &interner, &config).unwrap();
    assert!(emit(&vhdl).contains("architecture rtl of dff is"));
}

#[test]
fn display_in_initial_block() {
    let json = r#"{
        "names": ["top", "count"],
        "design": {
            "scopes": [{
                "id": 0, "kind": "Module", "name": 0, "def_name": 0, "parent": null,
                "signals": [{ "name": 1, "width": 8 }]
            }],
            "processes": [{
                "id": 0, "kind": "Initial", "scope": 0,
                "body": { "Display": { "format": "count = ", "args": [{ "Signal": 0 }] } }
            }],
            "roots": [0]
        }
    }"#;
    let file: DesignFile = serde_json::from_str(json).unwrap();
    let interner = Interner::new();
    let ir = file.into_design(&interner).unwrap();
    let vhdl = translate_design(&ir, &interner, &CodegenConfig::default()).unwrap();
    let text = emit(&vhdl);

    assert!(text.contains("use std.textio.all;\nuse ieee.std_logic_textio.all;\n"));
    assert!(text.contains("    variable Verilog_Display_Line : Line;\n"));
    assert!(text.contains("    write(Verilog_Display_Line, String'(\"count = \"));\n"));
    assert!(text.contains("    write(Verilog_Display_Line, count);\n"));
    assert!(text.contains("    writeline(Output, Verilog_Display_Line);\n    wait;\n"));
}

#[test]
fn double_inversion_keeps_parentheses() {
    let interner = Interner::new();
    let mut b = DesignBuilder::new(&interner);
    let top = b.root_module("top", "top");
    let a = b.port(top, "a", 1, PortDirection::Input);
    let q = b.port(top, "q", 1, PortDirection::Output);
    let not = |operand| vhdlgen_ir::Expr::Unary {
        op: vhdlgen_ir::UnaryOp::Not,
        operand: Box::new(operand),
    };
    b.process(
        top,
        ProcessKind::Initial,
        Statement::Assign {
            target: q,
            value: not(not(vhdlgen_ir::Expr::Signal(a))),
            nonblocking: false,
        },
    );
    let ir = b.finish();
    let text = emit(&translate_design(&ir, &interner, &CodegenConfig::default()).unwrap());

    assert!(text.contains("    q <= not (not a);\n"));
    assert!(!text.contains("not not"));
}

#[test]
fn display_newline_becomes_lf() {
    let interner = Interner::new();
    let mut b = DesignBuilder::new(&interner);
    let top = b.root_module("top", "top");
    b.process(
        top,
        ProcessKind::Initial,
        Statement::Display {
            format: "done\n".into(),
            args: Vec::new(),
        },
    );
    let ir = b.finish();
    let text = emit(&translate_design(&ir, &interner, &CodegenConfig::default()).unwrap());

    assert!(text.contains("    write(Verilog_Display_Line, String'(\"done\" & LF));\n"));
    assert!(!text.contains("done\n\""));
}

#[test]
fn modules_differing_only_in_case_are_kept_apart() {
    let interner = Interner::new();
    let mut b = DesignBuilder::new(&interner);
    let top = b.root_module("top", "top");
    b.module(top, "u0", "Sub");
    b.module(top, "u1", "sub");
    let ir = b.finish();
    let text = emit(&translate_design(&ir, &interner, &CodegenConfig::default()).unwrap());

    assert!(text.contains("entity Sub is"));
    assert!(text.contains("entity sub_1 is"));
    assert_eq!(text.matches("component Sub is").count(), 1);
    assert_eq!(text.matches("component sub_1 is").count(), 1);
    assert!(text.contains("  u0: Sub;\n  u1: sub_1;\n"));
}

#[test]
fn reserved_word_names_are_prefixed() {
    let interner = Interner::new();
    let mut b = DesignBuilder::new(&interner);
    let top = b.root_module("top", "top");
    let din = b.port(top, "in", 1, PortDirection::Input);
    let sig = b.signal(top, "signal", 1);
    b.module(top, "process", "leaf");
    b.process(
        top,
        ProcessKind::Initial,
        Statement::Assign {
            target: sig,
            value: vhdlgen_ir::Expr::Signal(din),
            nonblocking: false,
        },
    );
    let ir = b.finish();
    let text = emit(&translate_design(&ir, &interner, &CodegenConfig::default()).unwrap());

    assert!(text.contains("VL_in : in std_logic"));
    assert!(text.contains("signal VL_signal : std_logic;"));
    assert!(text.contains("    VL_signal <= VL_in;\n"));
    assert!(text.contains("  VL_process: leaf;\n"));
}
