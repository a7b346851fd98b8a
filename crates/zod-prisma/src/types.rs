//! Field to Zod expression mapping.

use crate::dmmf::{Field, FieldKind, ScalarType};
use crate::docs::{Directive, DocBlock};
use std::fmt;

/// The constructor a validator chain starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZodBase {
    String,
    Number,
    BigInt,
    Boolean,
    Date,
    Any,
    Unknown,
    /// `z.nativeEnum(Name)` over a client enum.
    NativeEnum(String),
    /// A generated validator referenced by name.
    Reference(String),
}

/// One link in a validator chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Int,
    Array,
    Nullable,
    Directive(Directive),
}

/// A validator-construction expression: a base plus an ordered modifier chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodExpr {
    pub base: ZodBase,
    pub modifiers: Vec<Modifier>,
}

impl fmt::Display for ZodBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZodBase::String => f.write_str("z.string()"),
            ZodBase::Number => f.write_str("z.number()"),
            ZodBase::BigInt => f.write_str("z.bigint()"),
            ZodBase::Boolean => f.write_str("z.boolean()"),
            ZodBase::Date => f.write_str("z.date()"),
            ZodBase::Any => f.write_str("z.any()"),
            ZodBase::Unknown => f.write_str("z.unknown()"),
            ZodBase::NativeEnum(name) => write!(f, "z.nativeEnum({})", name),
            ZodBase::Reference(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Int => f.write_str("int()"),
            Modifier::Array => f.write_str("array()"),
            Modifier::Nullable => f.write_str("nullable()"),
            Modifier::Directive(d) => write!(f, "{}", d),
        }
    }
}

impl fmt::Display for ZodExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for modifier in &self.modifiers {
            write!(f, ".{}", modifier)?;
        }
        Ok(())
    }
}

/// Base constructor and optional refinement for a scalar tag.
fn scalar_base(ty: &ScalarType) -> (ZodBase, Option<Modifier>) {
    match ty {
        ScalarType::String => (ZodBase::String, None),
        ScalarType::Int => (ZodBase::Number, Some(Modifier::Int)),
        ScalarType::BigInt => (ZodBase::BigInt, None),
        ScalarType::Float | ScalarType::Decimal => (ZodBase::Number, None),
        ScalarType::Boolean => (ZodBase::Boolean, None),
        ScalarType::DateTime => (ZodBase::Date, None),
        ScalarType::Json => (ZodBase::Any, None),
        ScalarType::Bytes => (ZodBase::Unknown, None),
        ScalarType::Other(tag) => {
            tracing::debug!(tag = %tag, "no mapping for scalar type, using z.unknown()");
            (ZodBase::Unknown, None)
        }
    }
}

/// Build the validator expression for `field`.
///
/// `relation_name` resolves a relation's target model to the validator it
/// should reference. Chain order is fixed: base, `array()`, `@zod`
/// directives in document order, then `nullable()`.
pub fn zod_constructor(field: &Field, relation_name: &dyn Fn(&str) -> String) -> ZodExpr {
    let mut modifiers = Vec::new();

    let base = match &field.kind {
        FieldKind::Scalar(ty) => {
            let (base, refinement) = scalar_base(ty);
            modifiers.extend(refinement);
            base
        }
        FieldKind::Enum(name) => ZodBase::NativeEnum(name.clone()),
        FieldKind::Object(model) => ZodBase::Reference(relation_name(model)),
    };

    if field.is_list {
        modifiers.push(Modifier::Array);
    }

    let docs = DocBlock::parse(field.documentation.as_deref());
    modifiers.extend(docs.directives.into_iter().map(Modifier::Directive));

    if !field.is_required {
        modifiers.push(Modifier::Nullable);
    }

    ZodExpr { base, modifiers }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str) -> String {
        name.to_string()
    }

    fn render(field: &Field) -> String {
        zod_constructor(field, &plain).to_string()
    }

    #[test]
    fn scalar_table() {
        let cases = [
            (ScalarType::String, "z.string()"),
            (ScalarType::Int, "z.number().int()"),
            (ScalarType::BigInt, "z.bigint()"),
            (ScalarType::Float, "z.number()"),
            (ScalarType::Decimal, "z.number()"),
            (ScalarType::Boolean, "z.boolean()"),
            (ScalarType::DateTime, "z.date()"),
            (ScalarType::Json, "z.any()"),
            (ScalarType::Bytes, "z.unknown()"),
            (ScalarType::Other("Geometry".into()), "z.unknown()"),
        ];
        for (ty, expected) in cases {
            assert_eq!(render(&Field::scalar("f", ty)), expected);
        }
    }

    #[test]
    fn int_keeps_refinement_before_wrappers() {
        let field = Field::scalar("scores", ScalarType::Int).list().optional();
        insta::assert_snapshot!(render(&field), @"z.number().int().array().nullable()");
    }

    #[test]
    fn directives_sit_between_array_and_nullable() {
        let field = Field::scalar("tags", ScalarType::String)
            .list()
            .optional()
            .with_docs("Free-form tags\n@zod.min(1)\n@zod.max(10)");
        insta::assert_snapshot!(render(&field), @"z.string().array().min(1).max(10).nullable()");
    }

    #[test]
    fn optional_always_ends_nullable() {
        let fields = [
            Field::scalar("a", ScalarType::Json).optional(),
            Field::enumeration("b", "Role").list().optional(),
            Field::relation("c", "User").optional().with_docs("@zod.optional()"),
        ];
        for field in &fields {
            let expr = zod_constructor(field, &plain);
            assert_eq!(expr.modifiers.last(), Some(&Modifier::Nullable));
        }
    }

    #[test]
    fn enum_uses_native_enum() {
        let field = Field::enumeration("role", "Role");
        assert_eq!(render(&field), "z.nativeEnum(Role)");
    }

    #[test]
    fn relation_goes_through_naming_function() {
        let field = Field::relation("author", "User");
        let related = |name: &str| format!("Related{}Model", name);
        assert_eq!(
            zod_constructor(&field, &related).to_string(),
            "RelatedUserModel"
        );

        let posts = Field::relation("posts", "Post").list();
        assert_eq!(
            zod_constructor(&posts, &related).to_string(),
            "RelatedPostModel.array()"
        );
    }

    #[test]
    fn float_has_no_int_refinement() {
        for ty in [ScalarType::Float, ScalarType::Decimal] {
            let expr = zod_constructor(&Field::scalar("x", ty), &plain);
            assert_eq!(expr.base, ZodBase::Number);
            assert!(!expr.modifiers.contains(&Modifier::Int));
        }
    }
}
