//! Source emission for one family.
//!
//! The artifact is laid out as: header, imports, variant enum, one record per
//! variant, the `Visitor<T>` trait, the dispatch `impl`, and for the
//! identity-bearing family the identity-based comparison impls. Output is a
//! pure function of the `GrammarFamily`: same model in, same bytes out.
pub mod variant;
pub mod dispatch;
pub mod identity;

use crate::ir::GrammarFamily;

const INDENT: &str = "    ";

pub struct Codegen {
    out: String,
    indent: usize,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new(), indent: 0 }
    }

    pub fn emit(&mut self, family: &GrammarFamily) {
        self.emit_header(family);
        self.emit_variant_enum(family);
        self.emit_records(family);
        self.emit_visitor_trait(family);
        self.emit_dispatch_impl(family);
        if let Some(spec) = &family.identity {
            self.emit_identity_impls(family, spec);
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn emit_header(&mut self, family: &GrammarFamily) {
        self.line(&format!(
            "// @generated by ast-gen from the `{}` grammar. Do not edit.",
            family.name
        ));
        let siblings = family.sibling_families();
        if family.imports.is_empty() && siblings.is_empty() {
            return;
        }
        self.blank();
        for path in &family.imports {
            self.line(&format!("use {path};"));
        }
        for sibling in siblings {
            self.line(&format!("use crate::{}::{sibling};", crate::ir::snake_case(sibling)));
        }
    }

    // ------------------------------- Writers -------------------------------- //

    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self, text: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    fn derive_attr(&mut self, derives: &[&str]) {
        if !derives.is_empty() {
            self.line(&format!("#[derive({})]", derives.join(", ")));
        }
    }
}

/// Emit the complete artifact text for one family.
pub fn generate(family: &GrammarFamily) -> String {
    let mut cg = Codegen::new();
    cg.emit(family);
    cg.into_string()
}
