//! Data model input.
//!
//! Mirrors the subset of Prisma's DMMF (`datamodel.models`) the generator reads.
//! The JSON shape deserializes directly, so a host can hand over the document it
//! already has.

use serde::Deserialize;

/// An ordered set of models.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datamodel {
    pub models: Vec<Model>,
}

/// One entity type in the source schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    /// Model name (e.g., "User", "Post").
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Documentation comment, including any `@zod` lines.
    #[serde(default)]
    pub documentation: Option<String>,
}

/// An attribute of a model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawField")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub is_list: bool,
    pub is_required: bool,
    pub documentation: Option<String>,
}

/// What a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A built-in scalar.
    Scalar(ScalarType),
    /// A value of the named enum.
    Enum(String),
    /// A relation to the named model.
    Object(String),
}

/// Prisma scalar type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int,
    BigInt,
    Float,
    Decimal,
    Boolean,
    DateTime,
    Json,
    Bytes,
    /// Anything this generator has no mapping for.
    Other(String),
}

impl From<&str> for ScalarType {
    fn from(tag: &str) -> Self {
        match tag {
            "String" => ScalarType::String,
            "Int" => ScalarType::Int,
            "BigInt" => ScalarType::BigInt,
            "Float" => ScalarType::Float,
            "Decimal" => ScalarType::Decimal,
            "Boolean" => ScalarType::Boolean,
            "DateTime" => ScalarType::DateTime,
            "Json" => ScalarType::Json,
            "Bytes" => ScalarType::Bytes,
            other => ScalarType::Other(other.to_string()),
        }
    }
}

/// Wire shape of a DMMF field: `kind` and `type` are separate strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    kind: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    is_list: bool,
    #[serde(default)]
    is_required: bool,
    #[serde(default)]
    documentation: Option<String>,
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        // `unsupported` and any future kinds fall back to an unmapped scalar.
        let kind = match raw.kind.as_str() {
            "enum" => FieldKind::Enum(raw.ty),
            "object" => FieldKind::Object(raw.ty),
            _ => FieldKind::Scalar(ScalarType::from(raw.ty.as_str())),
        };
        Self {
            name: raw.name,
            kind,
            is_list: raw.is_list,
            is_required: raw.is_required,
            documentation: raw.documentation,
        }
    }
}

impl Datamodel {
    /// Parse a DMMF document.
    ///
    /// Accepts the full `{ "datamodel": { "models": [...] } }` document,
    /// a bare `{ "models": [...] }` object, or an array of models.
    pub fn from_json(input: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let models = input
            .pointer("/datamodel/models")
            .or_else(|| input.get("models"))
            .unwrap_or(input);
        Ok(Self {
            models: Vec::<Model>::deserialize(models)?,
        })
    }
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            documentation: None,
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.documentation = Some(docs.into());
        self
    }

    /// Fields that are relations to other models.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Fields that are not relations.
    pub fn value_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_relation())
    }

    pub fn has_relations(&self) -> bool {
        self.fields.iter().any(Field::is_relation)
    }

    /// Enum names referenced by this model, in field order.
    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|f| match &f.kind {
            FieldKind::Enum(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_list: false,
            is_required: true,
            documentation: None,
        }
    }

    pub fn scalar(name: impl Into<String>, ty: ScalarType) -> Self {
        Self::new(name, FieldKind::Scalar(ty))
    }

    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum(enum_name.into()))
    }

    pub fn relation(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Object(model.into()))
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.documentation = Some(docs.into());
        self
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.kind, FieldKind::Object(_))
    }

    /// Target model name for relation fields.
    pub fn relation_target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Object(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_dmmf_document() {
        let input = json!({
            "datamodel": {
                "models": [{
                    "name": "User",
                    "documentation": "A user",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "Int", "isList": false, "isRequired": true },
                        { "name": "role", "kind": "enum", "type": "Role", "isList": false, "isRequired": true },
                        { "name": "posts", "kind": "object", "type": "Post", "isList": true, "isRequired": true },
                        { "name": "geo", "kind": "unsupported", "type": "geometry", "isList": false, "isRequired": false }
                    ]
                }]
            }
        });

        let datamodel = Datamodel::from_json(&input).unwrap();
        assert_eq!(datamodel.models.len(), 1);

        let user = &datamodel.models[0];
        assert_eq!(user.documentation.as_deref(), Some("A user"));
        assert_eq!(user.fields[0].kind, FieldKind::Scalar(ScalarType::Int));
        assert_eq!(user.fields[1].kind, FieldKind::Enum("Role".into()));
        assert_eq!(user.fields[2].kind, FieldKind::Object("Post".into()));
        assert!(user.fields[2].is_list);
        assert_eq!(
            user.fields[3].kind,
            FieldKind::Scalar(ScalarType::Other("geometry".into()))
        );
        assert!(!user.fields[3].is_required);
    }

    #[test]
    fn parse_bare_model_array() {
        let input = json!([{ "name": "Tag", "fields": [] }]);
        let datamodel = Datamodel::from_json(&input).unwrap();
        assert_eq!(datamodel.models[0].name, "Tag");
        assert!(datamodel.models[0].documentation.is_none());
    }

    #[test]
    fn field_helpers_partition_model() {
        let model = Model::new(
            "Post",
            vec![
                Field::scalar("id", ScalarType::String),
                Field::enumeration("status", "Status"),
                Field::relation("author", "User").optional(),
                Field::enumeration("previous", "Status").optional(),
            ],
        );

        assert!(model.has_relations());
        assert_eq!(model.value_fields().count(), 3);
        assert_eq!(model.relation_fields().count(), 1);
        assert_eq!(model.enum_names().collect::<Vec<_>>(), ["Status", "Status"]);
        assert_eq!(model.fields[2].relation_target(), Some("User"));
    }
}
