//! Structured output: units of declarations.
//!
//! The generator produces these instead of raw text; a
//! [`UnitWriter`](crate::traits::UnitWriter) decides how to serialize them.

use crate::types::ZodExpr;
use std::path::PathBuf;

/// One generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Location relative to the output directory (e.g., `user.ts`).
    pub path: PathBuf,
    pub declarations: Vec<Declaration>,
}

/// A top-level statement in a generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Import(Import),
    /// Comment lines emitted as-is (already carrying their delimiters).
    Comment(Vec<String>),
    Const(ConstDecl),
    Interface(InterfaceDecl),
    /// `export * from "<module>"`.
    ExportAll(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub module: String,
    pub kind: ImportKind,
    /// `import type { ... }`.
    pub type_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportKind {
    /// `import * as alias from ...`
    Namespace(String),
    /// `import { a, b } from ...`
    Named(Vec<String>),
}

/// `export const name: annotation = initializer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    pub name: String,
    pub annotation: Option<String>,
    pub init: Initializer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// `z.object({ ... })`
    Object(Vec<ObjectEntry>),
    /// `z.lazy(() => base.extend({ ... }))`
    LazyExtend {
        base: String,
        entries: Vec<ObjectEntry>,
    },
}

/// One `key: validator` entry, with its doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub comment: Vec<String>,
    pub name: String,
    pub expr: ZodExpr,
}

/// `export interface name extends extends { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub extends: String,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// `index.ts`, re-exporting every model unit.
    pub index: OutputUnit,
    /// One unit per model, in schema order.
    pub models: Vec<OutputUnit>,
}

impl Output {
    /// All units, index first.
    pub fn units(&self) -> impl Iterator<Item = &OutputUnit> {
        std::iter::once(&self.index).chain(self.models.iter())
    }

    /// Find a unit by its relative path.
    pub fn unit(&self, path: &str) -> Option<&OutputUnit> {
        self.units().find(|u| u.path.as_os_str() == path)
    }
}

impl OutputUnit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            declarations: Vec::new(),
        }
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Import(import) => Some(import),
            _ => None,
        })
    }

    pub fn consts(&self) -> impl Iterator<Item = &ConstDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Const(decl) => Some(decl),
            _ => None,
        })
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Interface(decl) => Some(decl),
            _ => None,
        })
    }

    /// The import from `module`, if any.
    pub fn import_from(&self, module: &str) -> Option<&Import> {
        self.imports().find(|i| i.module == module)
    }
}

impl Import {
    pub fn namespace(module: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            kind: ImportKind::Namespace(alias.into()),
            type_only: false,
        }
    }

    pub fn named(module: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            module: module.into(),
            kind: ImportKind::Named(names),
            type_only: false,
        }
    }

    pub fn type_only(mut self, type_only: bool) -> Self {
        self.type_only = type_only;
        self
    }

    /// Imported names; empty for namespace imports.
    pub fn names(&self) -> &[String] {
        match &self.kind {
            ImportKind::Named(names) => names,
            ImportKind::Namespace(_) => &[],
        }
    }
}
