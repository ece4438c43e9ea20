use super::Codegen;
use crate::ir::{snake_case, GrammarFamily};

/// `visit_binary` for `Binary`, `visit_class_decl` for `ClassDecl`.
pub fn visit_method(variant: &str) -> String {
    format!("visit_{}", snake_case(variant))
}

impl Codegen {
    /// One method per variant. Parameters are named `node` because lower-cased
    /// variant names (`if`, `while`, `return`) are often keywords.
    pub(super) fn emit_visitor_trait(&mut self, family: &GrammarFamily) {
        self.blank();
        if family.variants.is_empty() {
            self.line("pub trait Visitor<T> {}");
            return;
        }
        self.open("pub trait Visitor<T> {");
        for variant in &family.variants {
            self.line(&format!(
                "fn {}(&mut self, node: &{}) -> T;",
                visit_method(&variant.name),
                variant.name
            ));
        }
        self.close("}");
    }

    /// `accept` (double dispatch) plus, for the identity family, the identity accessor.
    pub(super) fn emit_dispatch_impl(&mut self, family: &GrammarFamily) {
        self.blank();
        self.open(&format!("impl {} {{", family.name));

        self.open("pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {");
        self.emit_match(family, |variant| {
            format!("visitor.{}(node)", visit_method(variant))
        });
        self.close("}");

        if let Some(spec) = &family.identity {
            self.blank();
            self.open(&format!("pub fn {}(&self) -> {} {{", spec.field, spec.ty));
            self.emit_match(family, |_| format!("node.{}", spec.field));
            self.close("}");
        }

        self.close("}");
    }

    fn emit_match(&mut self, family: &GrammarFamily, arm: impl Fn(&str) -> String) {
        if family.variants.is_empty() {
            self.line("match *self {}");
            return;
        }
        self.open("match self {");
        for variant in &family.variants {
            self.line(&format!(
                "{}::{}(node) => {},",
                family.name,
                variant.name,
                arm(&variant.name)
            ));
        }
        self.close("}");
    }
}
