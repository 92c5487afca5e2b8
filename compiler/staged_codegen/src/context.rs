//! Code generation context and output sink.
//!
//! The `CodegenContext` accumulates emitted text and remembers which
//! include guards it has already opened, so composite generators can request
//! the same instantiation twice without duplicating the block.

use rustc_hash::FxHashSet;

/// Text sink shared by every generator in one emission session.
#[derive(Debug, Default)]
pub struct CodegenContext {
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
    /// Include guards emitted so far.
    emitted_guards: FxHashSet<String>,
}

impl CodegenContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(4096),
            emitted_guards: FxHashSet::default(),
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Open an include-guarded block.
    ///
    /// Returns `false`, writing nothing, when `guard` was already opened in
    /// this context; the caller should then skip the block body.
    pub fn open_guard(&mut self, guard: &str) -> bool {
        if !self.emitted_guards.insert(guard.to_owned()) {
            tracing::trace!(guard, "guard already emitted, skipping block");
            return false;
        }
        tracing::debug!(guard, "opening guarded block");
        self.writeln(&format!("#ifndef {guard}"));
        self.writeln(&format!("#define {guard}"));
        self.newline();
        true
    }

    /// Close a block opened with [`CodegenContext::open_guard`].
    pub fn close_guard(&mut self, guard: &str) {
        self.writeln(&format!("#endif /*{guard}*/"));
        self.newline();
    }

    /// Check if a guard has been emitted.
    pub fn has_guard(&self, guard: &str) -> bool {
        self.emitted_guards.contains(guard)
    }

    /// Borrow the generated output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
