//! Module graph: imports, cross-unit references and the index.
//!
//! Every model becomes `<lowercased name>.ts`. Units reference each other only
//! through `./index`, which re-exports all of them, so a relation cycle between
//! two models never turns into an import-order dependency.

use crate::config::{ConfigError, GenerationConfig};
use crate::dmmf::Model;
use crate::emit::{emit_model, is_relation_aware};
use crate::naming::Naming;
use crate::traits::{UnitWriter, WriteError};
use crate::unit::{Declaration, Import, Output, OutputUnit};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Module specifier used when the client lives in the standard install location.
pub const CLIENT_ALIAS: &str = "@prisma/client";

const INDEX_MODULE: &str = "./index";

/// Where generated units go and where the client module lives.
#[derive(Debug, Clone)]
pub struct GeneratorPaths {
    /// Output directory for generated units.
    pub output: PathBuf,
    /// Declared output location of the client (model types and enums).
    pub client: PathBuf,
}

/// Failure of a complete generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("incorrect config provided: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Resolve options, generate every unit, and hand the set to `writer`.
///
/// A configuration error aborts before anything reaches the writer.
pub fn run(
    models: &[Model],
    options: &BTreeMap<String, String>,
    paths: &GeneratorPaths,
    writer: &mut dyn UnitWriter,
) -> Result<Output, Error> {
    let config = GenerationConfig::resolve(options)?;
    let output = generate(models, &config, paths);
    writer.write(&paths.output, &output)?;
    Ok(output)
}

/// Generate the index and one unit per model, in schema order.
pub fn generate(models: &[Model], config: &GenerationConfig, paths: &GeneratorPaths) -> Output {
    let client = client_module_specifier(&paths.output, &paths.client);
    let mut index = OutputUnit::new("index.ts");
    let mut units = Vec::with_capacity(models.len());

    for model in models {
        let module = model.name.to_lowercase();
        index.push(Declaration::ExportAll(format!("./{}", module)));

        let mut unit = OutputUnit::new(format!("{}.ts", module));
        for import in model_imports(model, config, &client) {
            unit.push(Declaration::Import(import));
        }
        unit.declarations.extend(emit_model(model, config));

        tracing::debug!(
            model = %model.name,
            path = %unit.path.display(),
            declarations = unit.declarations.len(),
            "emitted unit"
        );
        units.push(unit);
    }

    tracing::info!(models = units.len(), "generated zod schemas");
    Output {
        index,
        models: units,
    }
}

/// Imports for one model unit, in emission order.
pub fn model_imports(model: &Model, config: &GenerationConfig, client: &str) -> Vec<Import> {
    let naming = Naming::new(config);
    let relation_aware = is_relation_aware(model, config);
    let enums = dedup(model.enum_names().map(String::from));

    let mut imports = vec![Import::namespace("zod", "z")];

    if relation_aware || !enums.is_empty() {
        let mut names = Vec::new();
        if relation_aware {
            names.push(model.name.clone());
        }
        // Enum values are used at runtime by z.nativeEnum, the model type is not.
        let type_only = enums.is_empty();
        names.extend(enums);
        imports.push(Import::named(client, names).type_only(type_only));
    }

    if relation_aware {
        let names = dedup(
            model
                .relation_fields()
                .filter_map(|f| f.relation_target())
                .filter(|target| *target != model.name)
                .flat_map(|target| [naming.complete_name(target), naming.related_name(target)]),
        );
        if !names.is_empty() {
            imports.push(Import::named(INDEX_MODULE, names));
        }
    }

    imports
}

/// First occurrence of each name, order preserved.
fn dedup(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Module specifier for importing the client from the output directory.
///
/// Relative paths are taken against the working directory. Collapses to
/// [`CLIENT_ALIAS`] when the client sits in `node_modules/@prisma/client`;
/// otherwise yields an explicit `./` or `../` relative path.
pub fn client_module_specifier(output: &Path, client: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "working directory unavailable, resolving paths as given");
        PathBuf::new()
    });
    client_specifier_from(&cwd, output, client)
}

/// [`client_module_specifier`] with relative paths anchored at `base`.
pub fn client_specifier_from(base: &Path, output: &Path, client: &Path) -> String {
    let relative = relative_path(base, output, client);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts
        .iter()
        .rev()
        .take(3)
        .eq(["client", "@prisma", "node_modules"])
    {
        return CLIENT_ALIAS.to_string();
    }

    let joined = parts.join("/");
    if joined.starts_with("./") || joined.starts_with("../") {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Lexical relative path from directory `from` to `to`, both anchored at `base`
/// when relative.
///
/// Neither path is touched on disk; `.` and resolvable `..` components are
/// folded first.
pub fn relative_path(base: &Path, from: &Path, to: &Path) -> PathBuf {
    let from = base.join(from);
    let to = base.join(to);
    let from = normalize(&from);
    let to = normalize(&to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from.len() {
        out.push("..");
    }
    for part in &to[common..] {
        out.push(part.as_os_str());
    }
    out
}

fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelationModel;
    use crate::dmmf::{Field, ScalarType};

    #[test]
    fn client_in_node_modules_collapses_to_alias() {
        assert_eq!(
            client_module_specifier(
                Path::new("/app/prisma/zod"),
                Path::new("/app/node_modules/@prisma/client")
            ),
            "@prisma/client"
        );
        assert_eq!(
            client_module_specifier(Path::new("/app"), Path::new("/app/node_modules/@prisma/client")),
            "@prisma/client"
        );
    }

    #[test]
    fn custom_client_gets_relative_specifier() {
        assert_eq!(
            client_module_specifier(Path::new("/app/src/zod"), Path::new("/app/src/client")),
            "../client"
        );
        assert_eq!(
            client_module_specifier(Path::new("/app/src"), Path::new("/app/src/generated/client")),
            "./generated/client"
        );
        assert_eq!(
            client_module_specifier(Path::new("prisma/zod"), Path::new("./prisma/../prisma/client")),
            "../client"
        );
    }

    #[test]
    fn relative_path_climbs_and_descends() {
        let base = Path::new("/work");
        assert_eq!(
            relative_path(base, Path::new("/a/b/c"), Path::new("/a/d")),
            PathBuf::from("../../d")
        );
        assert_eq!(relative_path(base, Path::new("/a"), Path::new("/a")), PathBuf::new());
    }

    #[test]
    fn relative_paths_are_anchored_at_base() {
        let base = Path::new("/work/app");
        assert_eq!(
            client_specifier_from(base, Path::new("zod"), Path::new("/work/app/src/client")),
            "../src/client"
        );
        assert_eq!(
            client_specifier_from(base, Path::new("zod"), Path::new("/opt/client")),
            "../../../opt/client"
        );
        assert_eq!(
            client_specifier_from(base, Path::new("../zod"), Path::new("client")),
            "../app/client"
        );
        assert_eq!(
            client_specifier_from(
                base,
                Path::new("/work/app/prisma/zod"),
                Path::new("node_modules/@prisma/client")
            ),
            "@prisma/client"
        );
    }

    #[test]
    fn output_inside_client_climbs_with_explicit_prefix() {
        let base = Path::new("/work");
        assert_eq!(
            client_specifier_from(base, Path::new("/app/client/zod"), Path::new("/app/client")),
            "./.."
        );
        assert_eq!(
            client_specifier_from(base, Path::new("/app/client"), Path::new("/app/client")),
            "./"
        );
    }

    #[test]
    fn enum_import_is_value_import_and_deduplicated() {
        let model = Model::new(
            "Post",
            vec![
                Field::enumeration("status", "Status"),
                Field::enumeration("previous", "Status").optional(),
                Field::enumeration("kind", "Kind"),
            ],
        );
        let imports = model_imports(&model, &GenerationConfig::default(), "@prisma/client");
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[1].names(), ["Status", "Kind"]);
        assert!(!imports[1].type_only);
    }

    #[test]
    fn relation_import_is_type_only_without_enums() {
        let model = Model::new(
            "Post",
            vec![
                Field::scalar("id", ScalarType::Int),
                Field::relation("author", "User"),
                Field::relation("editor", "User").optional(),
                Field::relation("parent", "Post").optional(),
            ],
        );
        let imports = model_imports(&model, &GenerationConfig::default(), "@prisma/client");

        assert_eq!(imports[1].module, "@prisma/client");
        assert_eq!(imports[1].names(), ["Post"]);
        assert!(imports[1].type_only);

        assert_eq!(imports[2].module, "./index");
        assert_eq!(imports[2].names(), ["CompleteUser", "UserModel"]);
    }

    #[test]
    fn disabled_relations_import_only_enums() {
        let config = GenerationConfig {
            relation_model: RelationModel::Disabled,
            ..Default::default()
        };
        let model = Model::new("Post", vec![Field::relation("author", "User")]);
        let imports = model_imports(&model, &config, "@prisma/client");
        assert_eq!(imports, [Import::namespace("zod", "z")]);
    }
}
