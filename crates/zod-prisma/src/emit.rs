//! Per-model declarations.
//!
//! For a model `User` with a `posts Post[]` relation, in `"default"` mode:
//!
//! ```text
//! export const _UserModel = z.object({ id: z.number().int(), ... })
//!
//! export interface CompleteUser extends User {
//!   posts: CompletePost[]
//! }
//!
//! export const UserModel: z.ZodSchema<CompleteUser> = z.lazy(() => _UserModel.extend({
//!   posts: PostModel.array(),
//! }))
//! ```
//!
//! The relation-aware validator is always wrapped in `z.lazy`: `Post` may
//! refer back to `User`, and resolving `PostModel` eagerly would recurse.

use crate::config::GenerationConfig;
use crate::dmmf::{Field, Model};
use crate::docs::DocBlock;
use crate::naming::Naming;
use crate::types::zod_constructor;
use crate::unit::{ConstDecl, Declaration, Initializer, InterfaceDecl, ObjectEntry, Property};

/// Whether `model` gets a relation-aware validator under `config`.
pub fn is_relation_aware(model: &Model, config: &GenerationConfig) -> bool {
    config.relation_model.is_enabled() && model.has_relations()
}

/// Emit the body of a model's unit (everything after the imports).
pub fn emit_model(model: &Model, config: &GenerationConfig) -> Vec<Declaration> {
    let naming = Naming::new(config);
    let mut out = Vec::new();

    let docs = DocBlock::parse(model.documentation.as_deref());
    if docs.has_comment() {
        out.push(Declaration::Comment(docs.comment_lines()));
    }

    // value_fields() excludes relations, so the identity mapping is never consulted.
    let entries = model
        .value_fields()
        .map(|field| object_entry(field, &|name: &str| name.to_string()))
        .collect();
    out.push(Declaration::Const(ConstDecl {
        name: naming.base_name(&model.name),
        annotation: None,
        init: Initializer::Object(entries),
    }));

    if is_relation_aware(model, config) {
        out.push(Declaration::Interface(complete_interface(model, &naming)));

        let related = naming.related_name(&model.name);
        out.push(Declaration::Comment(vec![
            "/**".to_string(),
            format!(
                " * {} contains all relations on your model in addition to the scalars",
                related
            ),
            " *".to_string(),
            " * NOTE: Lazy required in case of potential circular dependencies within schema"
                .to_string(),
            " */".to_string(),
        ]));

        let related_of = |name: &str| naming.related_name(name);
        let entries = model
            .relation_fields()
            .map(|field| object_entry(field, &related_of))
            .collect();
        out.push(Declaration::Const(ConstDecl {
            name: related,
            annotation: Some(format!(
                "z.ZodSchema<{}>",
                naming.complete_name(&model.name)
            )),
            init: Initializer::LazyExtend {
                base: naming.base_name(&model.name),
                entries,
            },
        }));
    }

    out
}

fn object_entry(field: &Field, relation_name: &dyn Fn(&str) -> String) -> ObjectEntry {
    ObjectEntry {
        comment: DocBlock::parse(field.documentation.as_deref()).comment_lines(),
        name: field.name.clone(),
        expr: zod_constructor(field, relation_name),
    }
}

/// `Complete<Model>`: the client type plus every relation, fully loaded.
fn complete_interface(model: &Model, naming: &Naming<'_>) -> InterfaceDecl {
    let properties = model
        .fields
        .iter()
        .filter_map(|field| {
            let target = field.relation_target()?;
            let mut ty = naming.complete_name(target);
            if field.is_list {
                ty.push_str("[]");
            }
            if !field.is_required {
                ty.push_str(" | null");
            }
            Some(Property {
                name: field.name.clone(),
                ty,
            })
        })
        .collect();

    InterfaceDecl {
        name: naming.complete_name(&model.name),
        extends: model.name.clone(),
        properties,
    }
}
