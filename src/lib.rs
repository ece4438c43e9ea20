//! Schema-driven AST source generator.
//!
//! Reads the compiled-in node-family grammar and emits, per family, a Rust
//! module with a closed variant enum, one record per variant, a `Visitor<T>`
//! trait with double dispatch through `accept`, and for the identity-bearing
//! family an identity accessor with identity-only equality, hashing and order.
pub mod error;
pub mod grammar;
pub mod ir;
pub mod resolve;
pub mod codegen;
pub mod writer;
pub mod cli;

use std::path::{Path, PathBuf};

pub use error::GenError;
pub use grammar::{FamilyDecl, IdentitySpec};
pub use ir::{FieldSpec, GrammarFamily, TypeRef, VariantSpec};

/// Resolve the whole run, then emit and write one artifact per family.
///
/// Nothing is written unless every family resolves. Stops at the first I/O error;
/// artifacts of earlier families stay in place.
pub fn generate_all(decls: &[FamilyDecl], out_dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let families = resolve::resolve_grammar(decls)?;
    let mut written = Vec::with_capacity(families.len());
    for family in &families {
        let source = codegen::generate(family);
        let path = writer::write_artifact(out_dir, &family.artifact_name(), &source)?;
        tracing::info!(
            family = %family.name,
            variants = family.variants.len(),
            path = %path.display(),
            "wrote artifact"
        );
        written.push(path);
    }
    Ok(written)
}
