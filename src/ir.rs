// Resolved grammar model consumed by the emitters. Built once per run, read-only after.

use indexmap::IndexSet;
use serde::Serialize;

use crate::grammar::IdentitySpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarFamily {
    pub name: String,
    pub identity: Option<IdentitySpec>,
    pub imports: Vec<String>,
    pub derives: Vec<String>,
    pub variants: Vec<VariantSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,  // declaration order, emitted verbatim
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub type_ref: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(String),       // opaque, passed through verbatim
    SelfFamily(String),      // the family being generated
    Sibling(String),         // another family of the same run
    Optional(Box<TypeRef>),
    Sequence(Box<TypeRef>),
}

impl GrammarFamily {
    pub fn is_identity_bearing(&self) -> bool {
        self.identity.is_some()
    }

    pub fn module_name(&self) -> String {
        snake_case(&self.name)
    }

    pub fn artifact_name(&self) -> String {
        format!("{}.rs", self.module_name())
    }

    /// Other families referenced by any field, in first-seen order.
    pub fn sibling_families(&self) -> IndexSet<&str> {
        let mut out = IndexSet::new();
        for field in self.variants.iter().flat_map(|v| &v.fields) {
            field.type_ref.collect_siblings(&mut out);
        }
        out
    }
}

impl TypeRef {
    /// Family references are stored behind a `Box`, never embedded by value.
    pub fn is_owning_indirection(&self) -> bool {
        matches!(self, TypeRef::SelfFamily(_) | TypeRef::Sibling(_))
    }

    pub fn rust_type(&self) -> String {
        match self {
            TypeRef::Primitive(name) => name.clone(),
            TypeRef::SelfFamily(name) | TypeRef::Sibling(name) => format!("Box<{name}>"),
            TypeRef::Optional(inner) => format!("Option<{}>", inner.rust_type()),
            TypeRef::Sequence(inner) => format!("Vec<{}>", inner.element_type()),
        }
    }

    // `Vec` already owns its elements on the heap, so family elements go in unboxed.
    fn element_type(&self) -> String {
        match self {
            TypeRef::SelfFamily(name) | TypeRef::Sibling(name) => name.clone(),
            other => other.rust_type(),
        }
    }

    fn collect_siblings<'a>(&'a self, out: &mut IndexSet<&'a str>) {
        match self {
            TypeRef::Sibling(name) => {
                out.insert(name.as_str());
            }
            TypeRef::Optional(inner) | TypeRef::Sequence(inner) => inner.collect_siblings(out),
            TypeRef::Primitive(_) | TypeRef::SelfFamily(_) => {}
        }
    }
}

/// `ClassDecl` → `class_decl`, `Expr` → `expr`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
