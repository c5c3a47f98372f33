//! Sequential and concurrent statements.
//!
//! The two families are disjoint types: [`SeqStmt`] only appears inside a
//! [`Process`] body, [`ConcStmt`] only in an architecture body.

use crate::decl::Decl;
use crate::error::AstError;
use crate::expr::{Expr, VarRef};
use crate::ids::ArchId;

/// What a `wait` statement waits for.
#[derive(Debug, Clone, PartialEq)]
pub enum WaitKind {
    /// `wait;` suspends the process for good.
    Indefinite,
    /// `wait for <time>;`
    For(Expr),
    /// `wait until <condition>;`
    Until(Expr),
    /// `wait on <signals>;`
    On(Vec<String>),
}

/// A statement inside a process.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqStmt {
    /// `target <= value;`
    SignalAssign {
        /// The assigned signal.
        target: VarRef,
        /// The new value, already of the target's type.
        value: Expr,
    },
    /// A `wait` statement.
    Wait(WaitKind),
    /// `null;`
    Null,
    /// `name(args);`
    ProcedureCall {
        /// The procedure name.
        name: String,
        /// Arguments in order. Not checked.
        args: Vec<Expr>,
    },
    /// `if condition then ... else ... end if;`
    If {
        /// A `Boolean` condition.
        condition: Expr,
        /// Statements run when the condition holds.
        then_stmts: Vec<SeqStmt>,
        /// Statements run otherwise; no `else` branch when empty.
        else_stmts: Vec<SeqStmt>,
    },
}

/// A process: a concurrent statement holding a sequential body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Process {
    name: String,
    decls: Vec<Decl>,
    stmts: Vec<SeqStmt>,
    sensitivity: Vec<String>,
    comment: Option<String>,
}

impl Process {
    /// Creates an empty process; an empty name means an unlabelled process.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The process label, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local declarations in order.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// The body in order.
    pub fn stmts(&self) -> &[SeqStmt] {
        &self.stmts
    }

    /// Signals the process is sensitive to, in insertion order.
    pub fn sensitivity(&self) -> &[String] {
        &self.sensitivity
    }

    /// The provenance comment, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets the provenance comment, replacing any previous one.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    /// Appends a statement to the body.
    pub fn add_stmt(&mut self, stmt: SeqStmt) {
        self.stmts.push(stmt);
    }

    /// Appends a local declaration.
    ///
    /// Duplicates are not rejected; callers check [`has_declared_var`]
    /// first when a name may already exist.
    ///
    /// [`has_declared_var`]: Process::has_declared_var
    pub fn add_decl(&mut self, decl: Decl) {
        self.block().add_decl(decl);
    }

    /// Returns `true` if a local declaration named `name` exists.
    pub fn has_declared_var(&self, name: &str) -> bool {
        self.decls.iter().any(|d| d.is_named(name))
    }

    /// Adds a signal to the sensitivity list; repeated names are ignored.
    pub fn add_sensitivity(&mut self, name: impl Into<String>) {
        self.block().add_sensitivity(name);
    }

    /// Returns a handle for appending to the body while still being able to
    /// declare locals and extend the sensitivity list.
    pub fn block(&mut self) -> SeqBlock<'_> {
        SeqBlock {
            stmts: &mut self.stmts,
            decls: &mut self.decls,
            sensitivity: &mut self.sensitivity,
        }
    }
}

/// A mutable handle to a statement list inside a process.
///
/// At the top level the list is the process body; [`SeqBlock::nested`]
/// redirects statements into a branch of an `if` while declarations and
/// sensitivity still land on the enclosing process.
pub struct SeqBlock<'p> {
    stmts: &'p mut Vec<SeqStmt>,
    decls: &'p mut Vec<Decl>,
    sensitivity: &'p mut Vec<String>,
}

impl<'p> SeqBlock<'p> {
    /// Appends a statement to this block.
    pub fn add_stmt(&mut self, stmt: SeqStmt) {
        self.stmts.push(stmt);
    }

    /// Appends a declaration to the owning process.
    pub fn add_decl(&mut self, decl: Decl) {
        debug_assert!(
            !self.has_declared_var(decl.name()),
            "duplicate process declaration `{}`",
            decl.name()
        );
        self.decls.push(decl);
    }

    /// Returns `true` if the owning process declares `name`.
    pub fn has_declared_var(&self, name: &str) -> bool {
        self.decls.iter().any(|d| d.is_named(name))
    }

    /// Adds a signal to the owning process's sensitivity list.
    pub fn add_sensitivity(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.sensitivity.iter().any(|s| s.eq_ignore_ascii_case(&name)) {
            self.sensitivity.push(name);
        }
    }

    /// Returns `true` if the owning process has a sensitivity list.
    pub fn is_sensitive(&self) -> bool {
        !self.sensitivity.is_empty()
    }

    /// Returns `true` if nothing has been added to this block.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// A block that appends to `stmts` but shares this block's process.
    pub fn nested<'b>(&'b mut self, stmts: &'b mut Vec<SeqStmt>) -> SeqBlock<'b> {
        SeqBlock {
            stmts,
            decls: &mut *self.decls,
            sensitivity: &mut *self.sensitivity,
        }
    }
}

/// The two kinds of concurrent statement.
#[derive(Debug, Clone, PartialEq)]
pub enum ConcStmtKind {
    /// A process.
    Process(Process),
    /// `inst_name: comp_name;`
    Instance {
        /// The instance label.
        inst_name: String,
        /// The instantiated component.
        comp_name: String,
    },
}

/// A statement in an architecture body.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcStmt {
    parent: Option<ArchId>,
    kind: ConcStmtKind,
}

impl ConcStmt {
    /// A detached process statement.
    pub fn process(process: Process) -> Self {
        Self {
            parent: None,
            kind: ConcStmtKind::Process(process),
        }
    }

    /// A detached component instance.
    pub fn instance(inst_name: impl Into<String>, comp_name: impl Into<String>) -> Self {
        Self {
            parent: None,
            kind: ConcStmtKind::Instance {
                inst_name: inst_name.into(),
                comp_name: comp_name.into(),
            },
        }
    }

    /// The architecture this statement was attached to, if any.
    pub fn parent(&self) -> Option<ArchId> {
        self.parent
    }

    /// What kind of statement this is.
    pub fn kind(&self) -> &ConcStmtKind {
        &self.kind
    }

    /// The process, if this is one.
    pub fn as_process(&self) -> Option<&Process> {
        match &self.kind {
            ConcStmtKind::Process(p) => Some(p),
            ConcStmtKind::Instance { .. } => None,
        }
    }

    /// The process, mutably, if this is one.
    pub fn as_process_mut(&mut self) -> Option<&mut Process> {
        match &mut self.kind {
            ConcStmtKind::Process(p) => Some(p),
            ConcStmtKind::Instance { .. } => None,
        }
    }

    pub(crate) fn set_parent(&mut self, arch: ArchId) -> Result<(), AstError> {
        if self.parent.is_some() {
            return Err(AstError::ParentAlreadySet);
        }
        self.parent = Some(arch);
        Ok(())
    }
}
