//! Zod validator generation from Prisma data models.
//!
//! `zod-prisma` turns the models of a Prisma datamodel into one TypeScript
//! module of Zod validators per model, plus an `index.ts` re-exporting them.
//!
//! # Architecture
//!
//! ```text
//! Options ──> GenerationConfig ─┐
//!                               │
//! Models ─────────────────────> graph::generate ──> Output ──> UnitWriter
//!           per model: naming, docs, types, emit     (units)     (fs, memory)
//! ```
//!
//! # Example
//!
//! ```
//! use zod_prisma::{Field, GenerationConfig, GeneratorPaths, Model, ScalarType, generate};
//! use zod_prisma::output::TypeScriptWriter;
//!
//! let models = vec![Model::new(
//!     "User",
//!     vec![
//!         Field::scalar("id", ScalarType::Int),
//!         Field::scalar("email", ScalarType::String).with_docs("@zod.email()"),
//!     ],
//! )];
//! let paths = GeneratorPaths {
//!     output: "prisma/zod".into(),
//!     client: "node_modules/@prisma/client".into(),
//! };
//!
//! let output = generate(&models, &GenerationConfig::default(), &paths);
//! let user = TypeScriptWriter::emit(&output.models[0]);
//! assert!(user.contains("email: z.string().email(),"));
//! ```
//!
//! # Relation modes
//!
//! `relationModel` decides whether a second, relation-aware validator is
//! emitted and how the two are named; see [`naming`].

pub mod config;
pub mod dmmf;
pub mod docs;
pub mod emit;
pub mod graph;
pub mod naming;
pub mod output;
pub mod traits;
pub mod types;
pub mod unit;

pub use config::{ConfigError, GenerationConfig, ModelCase, RelationModel};
pub use dmmf::{Datamodel, Field, FieldKind, Model, ScalarType};
pub use docs::{Directive, DocBlock};
pub use graph::{Error, GeneratorPaths, generate, run};
pub use naming::Naming;
pub use output::{FsWriter, MemoryWriter, TypeScriptWriter};
pub use traits::{UnitWriter, WriteError};
pub use types::{ZodExpr, zod_constructor};
pub use unit::{Declaration, Output, OutputUnit};

/// Host-facing generator metadata.
#[derive(Debug, Clone, Copy)]
pub struct Manifest {
    pub pretty_name: &'static str,
    /// Output directory used when the schema does not name one.
    pub default_output: &'static str,
    pub version: &'static str,
}

pub const MANIFEST: Manifest = Manifest {
    pretty_name: "Zod Schemas",
    default_output: "zod",
    version: env!("CARGO_PKG_VERSION"),
};
