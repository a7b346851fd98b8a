//! TypeScript rendering for output units.
//!
//! Emits 2-space indentation, no semicolons and double-quoted module
//! specifiers.

use crate::unit::*;
use std::fmt::Write;

/// Renders an [`OutputUnit`] as TypeScript source.
pub struct TypeScriptWriter {
    output: String,
    indent: usize,
}

impl Default for TypeScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    /// Render a unit to TypeScript source.
    pub fn emit(unit: &OutputUnit) -> String {
        let mut writer = Self::new();
        writer.write_unit(unit);
        writer.output
    }

    fn write_unit(&mut self, unit: &OutputUnit) {
        let mut previous: Option<&Declaration> = None;
        for decl in &unit.declarations {
            if let Some(prev) = previous {
                if needs_blank_line(prev, decl) {
                    self.output.push('\n');
                }
            }
            self.write_declaration(decl);
            previous = Some(decl);
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
    }

    fn write_line(&mut self, line: &str) {
        self.write_indent();
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn write_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Import(import) => self.write_import(import),

            Declaration::Comment(lines) => {
                for line in lines {
                    self.write_line(line);
                }
            }

            Declaration::Const(decl) => self.write_const(decl),

            Declaration::Interface(decl) => {
                writeln!(
                    self.output,
                    "export interface {} extends {} {{",
                    decl.name, decl.extends
                )
                .unwrap();
                self.indent += 1;
                for prop in &decl.properties {
                    self.write_line(&format!("{}: {}", prop.name, prop.ty));
                }
                self.indent -= 1;
                self.output.push_str("}\n");
            }

            Declaration::ExportAll(module) => {
                writeln!(self.output, "export * from \"{}\"", module).unwrap();
            }
        }
    }

    fn write_import(&mut self, import: &Import) {
        self.output.push_str("import ");
        if import.type_only {
            self.output.push_str("type ");
        }
        match &import.kind {
            ImportKind::Namespace(alias) => {
                write!(self.output, "* as {}", alias).unwrap();
            }
            ImportKind::Named(names) => {
                write!(self.output, "{{ {} }}", names.join(", ")).unwrap();
            }
        }
        writeln!(self.output, " from \"{}\"", import.module).unwrap();
    }

    fn write_const(&mut self, decl: &ConstDecl) {
        write!(self.output, "export const {}", decl.name).unwrap();
        if let Some(annotation) = &decl.annotation {
            write!(self.output, ": {}", annotation).unwrap();
        }
        self.output.push_str(" = ");

        match &decl.init {
            Initializer::Object(entries) => {
                self.output.push_str("z.object(");
                self.write_entries(entries);
                self.output.push_str(")\n");
            }
            Initializer::LazyExtend { base, entries } => {
                write!(self.output, "z.lazy(() => {}.extend(", base).unwrap();
                self.write_entries(entries);
                self.output.push_str("))\n");
            }
        }
    }

    fn write_entries(&mut self, entries: &[ObjectEntry]) {
        if entries.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{\n");
        self.indent += 1;
        for entry in entries {
            for line in &entry.comment {
                self.write_line(line);
            }
            self.write_line(&format!("{}: {},", entry.name, entry.expr));
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push('}');
    }
}

/// Imports and index re-exports stay grouped; a comment sticks to what follows it.
fn needs_blank_line(prev: &Declaration, next: &Declaration) -> bool {
    match (prev, next) {
        (Declaration::Import(_), Declaration::Import(_)) => false,
        (Declaration::ExportAll(_), Declaration::ExportAll(_)) => false,
        (Declaration::Comment(_), _) => false,
        _ => true,
    }
}
