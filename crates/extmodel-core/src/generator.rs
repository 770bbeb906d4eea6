// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Descriptor assembly.
//!
//! Turns a [`ModelConfig`] into the ordered key/value document the client
//! consumes. Assembly is deterministic and infallible: configuration
//! problems become [`GeneratorWarning`]s, the affected aspect is skipped
//! and everything else still emits. The document's key order follows the
//! order things were configured in, so re-assembling the same config
//! yields a byte-identical document.
//!
//! The assembler never escapes or formats text; serializing the document
//! to the wire format is the caller's business.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    AssociationType, DefaultValue, FieldType, ModelAssociation, ModelConfig,
    ModelField, ModelType, ModelValidation, ReferenceConfig, ValidationType,
    WriteOptions
};

/// Non-fatal problem found while assembling a model descriptor.
///
/// Warnings never abort assembly. The caller decides whether they should
/// block overall success.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum GeneratorWarning {
    /// A validator's parameter list violates its kind's contract. The
    /// validator is emitted anyway.
    #[error("field `{field}`: malformed `{kind}` validation: {reason}")]
    MalformedValidation {
        /// Field the validator applies to.
        field: String,
        /// Kind of the validator.
        kind: ValidationType,
        /// Which part of the contract is violated.
        reason: &'static str
    },

    /// A reference declares both `child` and `parent` ownership. The
    /// reference block is skipped; the rest of the field still emits.
    #[error("field `{field}`: reference declares both `child` and `parent`")]
    ConflictingReferenceOwnership {
        /// Field carrying the reference.
        field: String
    },

    /// `use_null` and `allow_null` are both set and disagree. The
    /// nullability aspect is skipped; the rest of the field still emits.
    #[error("field `{field}`: `use_null` and `allow_null` disagree")]
    ConflictingNullability {
        /// Field carrying the flags.
        field: String
    }
}

/// Result of assembling a model: the document plus any warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedModel {
    /// The assembled descriptor document.
    pub document: Value,

    /// Non-fatal problems found during assembly, in emission order.
    pub warnings: Vec<GeneratorWarning>
}

impl GeneratedModel {
    /// Whether assembly produced no warnings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl ModelConfig {
    /// Assemble the model descriptor document.
    ///
    /// Single pass, order preserving: fields, associations and validators
    /// appear in the order they were supplied. Pure function of `self`.
    #[must_use]
    pub fn assemble(&self) -> GeneratedModel {
        let mut warnings = Vec::new();
        let mut doc = Map::new();

        doc.insert("name".into(), Value::from(self.name.as_str()));
        doc.insert("extend".into(), Value::from(self.extend.as_str()));
        doc.insert(
            "idProperty".into(),
            Value::from(self.id_property.as_str())
        );
        insert_opt(&mut doc, "versionProperty", &self.version_property);
        insert_opt(&mut doc, "clientIdProperty", &self.client_id_property);
        insert_opt(&mut doc, "identifier", &self.identifier);

        let fields = self
            .fields
            .iter()
            .map(|f| field_json(f, &mut warnings))
            .collect::<Vec<_>>();
        doc.insert("fields".into(), Value::Array(fields));

        if !self.has_many.is_empty() {
            let names = self
                .has_many
                .iter()
                .map(|n| Value::from(n.as_str()))
                .collect();
            doc.insert("hasMany".into(), Value::Array(names));
        }

        if !self.associations.is_empty() {
            let associations = self
                .associations
                .iter()
                .map(|a| association_json(a, &self.name))
                .collect();
            doc.insert("associations".into(), Value::Array(associations));
        }

        if !self.validations.is_empty() {
            let validations = self
                .validations
                .iter()
                .map(|v| validation_json(v, &mut warnings))
                .collect();
            doc.insert("validations".into(), Value::Array(validations));
        }

        if let Some(proxy) = proxy_json(self) {
            doc.insert("proxy".into(), proxy);
        }

        GeneratedModel {
            document: Value::Object(doc),
            warnings
        }
    }
}

fn insert_opt(doc: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        doc.insert(key.into(), Value::from(value.as_str()));
    }
}

fn insert_opt_bool(doc: &mut Map<String, Value>, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        doc.insert(key.into(), Value::Bool(value));
    }
}

fn field_json(field: &ModelField, warnings: &mut Vec<GeneratorWarning>) -> Value {
    let resolved = field.resolve_type();
    let mut obj = Map::new();

    obj.insert("name".into(), Value::from(field.name.as_str()));
    obj.insert("type".into(), Value::from(resolved.js_name()));

    match field.resolve_default() {
        DefaultValue::Omit => {}
        DefaultValue::Undefined => {
            obj.insert("defaultValue".into(), Value::Null);
        }
        DefaultValue::Literal(raw) => {
            obj.insert("defaultValue".into(), default_json(raw, &resolved));
        }
    }

    if resolved.standard() == Some(ModelType::Date) {
        insert_opt(&mut obj, "dateFormat", &field.date_format);
    }

    if field.nullability_conflict() {
        warnings.push(GeneratorWarning::ConflictingNullability {
            field: field.name.clone()
        });
    } else if field.effective_allow_null() == Some(true) {
        obj.insert("allowNull".into(), Value::Bool(true));
    }

    insert_opt_bool(&mut obj, "allowBlank", field.allow_blank);
    if field.unique {
        obj.insert("unique".into(), Value::Bool(true));
    }
    insert_opt(&mut obj, "mapping", &field.mapping);
    if !field.persist {
        obj.insert("persist".into(), Value::Bool(false));
    }
    if field.critical {
        obj.insert("critical".into(), Value::Bool(true));
    }
    if !field.depends.is_empty() {
        let depends = field
            .depends
            .iter()
            .map(|d| Value::from(d.as_str()))
            .collect();
        obj.insert("depends".into(), Value::Array(depends));
    }
    insert_opt(&mut obj, "convert", &field.convert);
    insert_opt(&mut obj, "calculate", &field.calculate);

    if let Some(reference) = &field.reference {
        if reference.ownership_conflict() {
            warnings.push(GeneratorWarning::ConflictingReferenceOwnership {
                field: field.name.clone()
            });
        } else if reference.is_configured() {
            obj.insert("reference".into(), reference_json(reference));
        }
    }

    Value::Object(obj)
}

/// Typed default literal. Quoting follows the resolved field type, not
/// the shape of the string; a literal that does not parse as its type is
/// kept as text rather than failing.
fn default_json(raw: &str, resolved: &FieldType<'_>) -> Value {
    let Some(ty) = resolved.standard().filter(|t| t.is_literal()) else {
        return Value::from(raw);
    };
    match ty {
        ModelType::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(raw)),
        ModelType::Float | ModelType::Number => raw
            .parse::<f64>()
            .ok()
            .and_then(|v| serde_json::Number::from_f64(v).map(Value::Number))
            .unwrap_or_else(|| Value::from(raw)),
        ModelType::Boolean => raw
            .parse::<bool>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(raw)),
        _ => Value::from(raw)
    }
}

fn reference_json(reference: &ReferenceConfig) -> Value {
    let mut obj = Map::new();
    insert_opt(&mut obj, "type", &reference.ty);
    insert_opt(&mut obj, "child", &reference.child);
    insert_opt(&mut obj, "parent", &reference.parent);
    insert_opt(&mut obj, "association", &reference.association);
    insert_opt(&mut obj, "role", &reference.role);
    insert_opt(&mut obj, "inverse", &reference.inverse);
    Value::Object(obj)
}

fn association_json(assoc: &ModelAssociation, owner: &str) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), Value::from(assoc.kind.js_name()));
    obj.insert("model".into(), Value::from(assoc.model.as_str()));

    let foreign_key = assoc.foreign_key.clone().unwrap_or_else(|| {
        if assoc.kind == AssociationType::HasMany {
            format!("{}_id", owner.to_lowercase())
        } else {
            format!("{}_id", assoc.property_name)
        }
    });
    obj.insert("foreignKey".into(), Value::from(foreign_key));
    insert_opt(&mut obj, "primaryKey", &assoc.primary_key);

    if assoc.kind.supports_auto_load() {
        if assoc.auto_load {
            obj.insert("autoLoad".into(), Value::Bool(true));
        }
        let name = assoc
            .name
            .clone()
            .unwrap_or_else(|| assoc.property_name.clone());
        obj.insert("name".into(), Value::from(name));
    }

    if assoc.kind.supports_accessors() {
        let setter = assoc.setter_name.clone().unwrap_or_else(|| {
            format!("set{}", capitalize(&assoc.property_name))
        });
        let getter = assoc.getter_name.clone().unwrap_or_else(|| {
            format!("get{}", capitalize(&assoc.property_name))
        });
        obj.insert("setterName".into(), Value::from(setter));
        obj.insert("getterName".into(), Value::from(getter));
    }

    insert_opt(&mut obj, "instanceName", &assoc.instance_name);
    Value::Object(obj)
}

fn validation_json(
    validation: &ModelValidation,
    warnings: &mut Vec<GeneratorWarning>
) -> Value {
    if let Err(reason) = validation.kind.check(&validation.params) {
        warnings.push(GeneratorWarning::MalformedValidation {
            field: validation.field.clone(),
            kind: validation.kind,
            reason
        });
    }

    // For a generic validator the `type` parameter becomes the emitted
    // type and the remaining parameters pass through.
    let generic_type = (validation.kind == ValidationType::Generic)
        .then(|| validation.params.iter().find(|p| p.name == "type"))
        .flatten();

    let mut obj = Map::new();
    let emitted_type = generic_type
        .map(|p| p.value.as_str())
        .unwrap_or_else(|| validation.kind.js_name());
    obj.insert("type".into(), Value::from(emitted_type));
    obj.insert("field".into(), Value::from(validation.field.as_str()));

    for param in &validation.params {
        // `type` and `field` are structural keys of the emitted object,
        // never pass-through parameters.
        if param.name == "type" || param.name == "field" {
            continue;
        }
        obj.insert(param.name.clone(), Value::from(param.value.as_str()));
    }

    Value::Object(obj)
}

fn write_options_json(options: &WriteOptions) -> Value {
    let mut obj = Map::new();
    obj.insert("associated".into(), Value::Bool(options.associated));
    obj.insert("changes".into(), Value::Bool(options.changes));
    obj.insert("critical".into(), Value::Bool(options.critical));
    obj.insert("persist".into(), Value::Bool(options.persist));
    Value::Object(obj)
}

fn proxy_json(model: &ModelConfig) -> Option<Value> {
    let reader_block = model.reader.is_some()
        || model.paging
        || model.root_property.is_some()
        || model.message_property.is_some()
        || model.success_property.is_some()
        || model.total_property.is_some();
    let writer_block = model.writer.is_some()
        || model.write_all_fields.is_some()
        || model.all_data_options.is_some()
        || model.partial_data_options.is_some();
    let has_api = model.read_method.is_some()
        || model.create_method.is_some()
        || model.update_method.is_some()
        || model.destroy_method.is_some();

    if !has_api
        && !reader_block
        && !writer_block
        && !model.disable_paging_parameters
    {
        return None;
    }

    let mut proxy = Map::new();
    proxy.insert("type".into(), Value::from("direct"));
    if model.id_property != "id" {
        proxy.insert(
            "idParam".into(),
            Value::from(model.id_property.as_str())
        );
    }

    let only_read = model.read_method.is_some()
        && model.create_method.is_none()
        && model.update_method.is_none()
        && model.destroy_method.is_none();
    if only_read {
        insert_opt(&mut proxy, "directFn", &model.read_method);
    } else if has_api {
        let mut api = Map::new();
        insert_opt(&mut api, "read", &model.read_method);
        insert_opt(&mut api, "create", &model.create_method);
        insert_opt(&mut api, "update", &model.update_method);
        insert_opt(&mut api, "destroy", &model.destroy_method);
        proxy.insert("api".into(), Value::Object(api));
    }

    if model.disable_paging_parameters {
        proxy.insert("pageParam".into(), Value::Null);
        proxy.insert("startParam".into(), Value::Null);
        proxy.insert("limitParam".into(), Value::Null);
    }

    if reader_block {
        let mut reader = Map::new();
        insert_opt(&mut reader, "type", &model.reader);
        // An explicit root wins over the paging-implied "records".
        let root = model
            .root_property
            .clone()
            .or_else(|| model.paging.then(|| "records".to_string()));
        if let Some(root) = root {
            reader.insert("rootProperty".into(), Value::from(root));
        }
        insert_opt(&mut reader, "messageProperty", &model.message_property);
        insert_opt(&mut reader, "successProperty", &model.success_property);
        insert_opt(&mut reader, "totalProperty", &model.total_property);
        proxy.insert("reader".into(), Value::Object(reader));
    }

    if writer_block {
        let mut writer = Map::new();
        insert_opt(&mut writer, "type", &model.writer);
        insert_opt_bool(&mut writer, "writeAllFields", model.write_all_fields);
        if let Some(options) = &model.all_data_options {
            writer.insert("allDataOptions".into(), write_options_json(options));
        }
        if let Some(options) = &model.partial_data_options {
            writer
                .insert("partialDataOptions".into(), write_options_json(options));
        }
        proxy.insert("writer".into(), Value::Object(writer));
    }

    Some(Value::Object(proxy))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
