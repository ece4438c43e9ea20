use super::Codegen;
use crate::ir::{GrammarFamily, VariantSpec};

/// Implemented by identity on the identity-bearing enum, so never derived there.
const IDENTITY_TRAITS: [&str; 5] = ["PartialEq", "Eq", "Hash", "PartialOrd", "Ord"];

impl Codegen {
    /// `pub enum Family { Variant(Variant), ... }`, one case per variant.
    pub(super) fn emit_variant_enum(&mut self, family: &GrammarFamily) {
        let derives: Vec<&str> = family
            .derives
            .iter()
            .map(String::as_str)
            .filter(|d| !(family.is_identity_bearing() && IDENTITY_TRAITS.contains(d)))
            .collect();

        self.blank();
        self.derive_attr(&derives);
        if family.variants.is_empty() {
            self.line(&format!("pub enum {} {{}}", family.name));
            return;
        }
        self.open(&format!("pub enum {} {{", family.name));
        for variant in &family.variants {
            self.line(&format!("{0}({0}),", variant.name));
        }
        self.close("}");
    }

    pub(super) fn emit_records(&mut self, family: &GrammarFamily) {
        for variant in &family.variants {
            self.emit_record(family, variant);
        }
    }

    fn emit_record(&mut self, family: &GrammarFamily, variant: &VariantSpec) {
        let derives: Vec<&str> = family.derives.iter().map(String::as_str).collect();

        self.blank();
        self.derive_attr(&derives);
        if variant.fields.is_empty() && family.identity.is_none() {
            self.line(&format!("pub struct {} {{}}", variant.name));
            return;
        }
        self.open(&format!("pub struct {} {{", variant.name));
        for field in &variant.fields {
            self.line(&format!("pub {}: {},", field.name, field.type_ref.rust_type()));
        }
        if let Some(spec) = &family.identity {
            self.line(&format!("pub {}: {},", spec.field, spec.ty));
        }
        self.close("}");
    }
}
