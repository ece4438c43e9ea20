use super::Codegen;
use crate::grammar::IdentitySpec;
use crate::ir::GrammarFamily;

impl Codegen {
    /// Equality, hashing and ordering that consult only the identity accessor.
    /// Two structurally identical nodes from different source positions stay distinct keys.
    pub(super) fn emit_identity_impls(&mut self, family: &GrammarFamily, spec: &IdentitySpec) {
        let name = &family.name;
        let id = &spec.field;

        self.blank();
        self.open(&format!("impl PartialEq for {name} {{"));
        self.open("fn eq(&self, other: &Self) -> bool {");
        self.line(&format!("self.{id}() == other.{id}()"));
        self.close("}");
        self.close("}");

        self.blank();
        self.line(&format!("impl Eq for {name} {{}}"));

        self.blank();
        self.open(&format!("impl std::hash::Hash for {name} {{"));
        self.open("fn hash<H: std::hash::Hasher>(&self, state: &mut H) {");
        self.line(&format!("std::hash::Hash::hash(&self.{id}(), state);"));
        self.close("}");
        self.close("}");

        self.blank();
        self.open(&format!("impl PartialOrd for {name} {{"));
        self.open("fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {");
        self.line("Some(self.cmp(other))");
        self.close("}");
        self.close("}");

        self.blank();
        self.open(&format!("impl Ord for {name} {{"));
        self.open("fn cmp(&self, other: &Self) -> std::cmp::Ordering {");
        self.line(&format!("self.{id}().cmp(&other.{id}())"));
        self.close("}");
        self.close("}");
    }
}
