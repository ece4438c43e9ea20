//! Field type resolution: grammar text → `TypeRef`.
//!
//! Cross-family references are always treated as potentially recursive; the
//! reachability closure between families is not analyzed.
use indexmap::IndexSet;

use crate::error::GenError;
use crate::grammar::{parse_rule, FamilyDecl};
use crate::ir::{FieldSpec, GrammarFamily, TypeRef, VariantSpec};

/// Resolve one declared type. `Option<..>` and `Vec<..>` nest freely.
pub fn resolve_type(text: &str, family: &str, known: &IndexSet<String>) -> TypeRef {
    let text = text.trim();
    if let Some(inner) = unwrap_generic(text, "Option") {
        return TypeRef::Optional(Box::new(resolve_type(inner, family, known)));
    }
    if let Some(inner) = unwrap_generic(text, "Vec") {
        return TypeRef::Sequence(Box::new(resolve_type(inner, family, known)));
    }
    if text == family {
        TypeRef::SelfFamily(text.to_string())
    } else if known.contains(text) {
        TypeRef::Sibling(text.to_string())
    } else {
        TypeRef::Primitive(text.to_string())
    }
}

fn unwrap_generic<'a>(text: &'a str, head: &str) -> Option<&'a str> {
    text.strip_prefix(head)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Parse and resolve every rule of a family. Any malformed rule aborts the family.
pub fn resolve_family(decl: &FamilyDecl, known: &IndexSet<String>) -> Result<GrammarFamily, GenError> {
    let mut variants = Vec::with_capacity(decl.rules.len());
    for line in &decl.rules {
        let raw = parse_rule(&decl.name, line)?;
        let fields = raw
            .fields
            .into_iter()
            .map(|f| FieldSpec {
                type_ref: resolve_type(&f.ty, &decl.name, known),
                name: f.name,
            })
            .collect::<Vec<_>>();
        tracing::debug!(family = %decl.name, variant = %raw.name, fields = fields.len(), "resolved variant");
        variants.push(VariantSpec { name: raw.name, fields });
    }
    Ok(GrammarFamily {
        name: decl.name.clone(),
        identity: decl.identity.clone(),
        imports: decl.imports.clone(),
        derives: decl.derives.clone(),
        variants,
    })
}

/// Resolve all families of a run against each other.
pub fn resolve_grammar(decls: &[FamilyDecl]) -> Result<Vec<GrammarFamily>, GenError> {
    let known: IndexSet<String> = decls.iter().map(|d| d.name.clone()).collect();
    decls.iter().map(|decl| resolve_family(decl, &known)).collect()
}
