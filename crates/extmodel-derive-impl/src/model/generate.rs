// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Code generation for the ExtModel derive macro.
//!
//! Emits a single `impl ExtModel` block. `model_config()` starts from
//! `ModelConfig::default()` and only assigns what the attributes set, so
//! the runtime defaults stay in one place (`extmodel-core`). All paths
//! are absolute (`::extmodel_core::...`) so the generated code works
//! regardless of the caller's imports.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{
    AssociationDef, FieldDef, ModelDef, TargetModel, ValidationDef,
    attrs::WriteOptionsAttr
};

/// Expand a parsed model definition into the `ExtModel` impl.
pub fn expand(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let model_name = model
        .attrs
        .name
        .clone()
        .unwrap_or_else(|| ident.to_string());

    let config_stmts = config_stmts(model);
    let fields = model.fields.iter().map(field_tokens);
    let associations = model.associations.iter().map(association_tokens);
    let validations = model.validations.iter().map(validation_tokens);

    quote! {
        #[automatically_derived]
        impl ::extmodel_core::ExtModel for #ident {
            fn model_name() -> &'static str {
                #model_name
            }

            fn model_config() -> ::extmodel_core::ModelConfig {
                let mut config = ::extmodel_core::ModelConfig::default();
                config.name = #model_name.to_string();
                #(#config_stmts)*
                config.fields = ::std::vec![#(#fields),*];
                config.associations = ::std::vec![#(#associations),*];
                config.validations = ::std::vec![#(#validations),*];
                config
            }
        }
    }
}

fn config_stmts(model: &ModelDef) -> Vec<TokenStream> {
    let attrs = &model.attrs;
    let mut stmts = Vec::new();

    if let Some(v) = &attrs.id_property {
        stmts.push(quote! { config.id_property = #v.to_string(); });
    }
    if let Some(v) = &attrs.extend {
        stmts.push(quote! { config.extend = #v.to_string(); });
    }
    opt_assign(&mut stmts, quote!(version_property), &attrs.version_property);
    opt_assign(
        &mut stmts,
        quote!(client_id_property),
        &attrs.client_id_property
    );
    opt_assign(&mut stmts, quote!(identifier), &attrs.identifier);
    if attrs.paging {
        stmts.push(quote! { config.paging = true; });
    }
    if attrs.disable_paging_parameters {
        stmts.push(quote! { config.disable_paging_parameters = true; });
    }
    opt_assign(&mut stmts, quote!(read_method), &attrs.read_method);
    opt_assign(&mut stmts, quote!(create_method), &attrs.create_method);
    opt_assign(&mut stmts, quote!(update_method), &attrs.update_method);
    opt_assign(&mut stmts, quote!(destroy_method), &attrs.destroy_method);
    opt_assign(&mut stmts, quote!(message_property), &attrs.message_property);
    opt_assign(&mut stmts, quote!(success_property), &attrs.success_property);
    opt_assign(&mut stmts, quote!(total_property), &attrs.total_property);
    opt_assign(&mut stmts, quote!(root_property), &attrs.root_property);
    opt_assign(&mut stmts, quote!(reader), &attrs.reader);
    opt_assign(&mut stmts, quote!(writer), &attrs.writer);
    if let Some(v) = attrs.write_all_fields {
        stmts.push(quote! { config.write_all_fields = Some(#v); });
    }
    if let Some(options) = &attrs.all_data_options {
        let value = write_options_tokens("all_data", options);
        stmts.push(quote! { config.all_data_options = Some(#value); });
    }
    if let Some(options) = &attrs.partial_data_options {
        let value = write_options_tokens("partial_data", options);
        stmts.push(quote! { config.partial_data_options = Some(#value); });
    }
    if !attrs.has_many.is_empty() {
        let targets = attrs.has_many.iter().map(|path| {
            quote! {
                <#path as ::extmodel_core::ExtModel>::model_name().to_string()
            }
        });
        stmts.push(quote! { config.has_many = ::std::vec![#(#targets),*]; });
    }

    stmts
}

fn opt_assign(
    stmts: &mut Vec<TokenStream>,
    field: TokenStream,
    value: &Option<String>
) {
    if let Some(v) = value {
        stmts.push(quote! { config.#field = Some(#v.to_string()); });
    }
}

fn write_options_tokens(base: &str, attr: &WriteOptionsAttr) -> TokenStream {
    let ctor = format_ident!("{base}");
    let mut overrides = Vec::new();
    if let Some(v) = attr.associated {
        overrides.push(quote! { options.associated = #v; });
    }
    if let Some(v) = attr.changes {
        overrides.push(quote! { options.changes = #v; });
    }
    if let Some(v) = attr.critical {
        overrides.push(quote! { options.critical = #v; });
    }
    if let Some(v) = attr.persist {
        overrides.push(quote! { options.persist = #v; });
    }

    quote! {{
        let mut options = ::extmodel_core::WriteOptions::#ctor();
        #(#overrides)*
        options
    }}
}

fn field_tokens(field: &FieldDef) -> TokenStream {
    let name = &field.name;
    let attrs = &field.attrs;
    let mut init = vec![quote! { name: #name.to_string() }];

    if let Some(ty) = attrs.ty {
        let variant = format_ident!("{}", ty.variant());
        init.push(quote! { ty: Some(::extmodel_core::ModelType::#variant) });
    }
    opt_field(&mut init, quote!(custom_type), &attrs.custom_type);
    opt_field(&mut init, quote!(native_type), &field.native_type);
    opt_field(&mut init, quote!(default_value), &attrs.default_value);
    opt_field(&mut init, quote!(date_format), &attrs.date_format);
    if let Some(v) = attrs.use_null {
        init.push(quote! { use_null: Some(#v) });
    }
    if let Some(v) = attrs.allow_null {
        init.push(quote! { allow_null: Some(#v) });
    }
    if let Some(v) = attrs.allow_blank {
        init.push(quote! { allow_blank: Some(#v) });
    }
    if attrs.unique {
        init.push(quote! { unique: true });
    }
    opt_field(&mut init, quote!(mapping), &attrs.mapping);
    if let Some(v) = attrs.persist {
        init.push(quote! { persist: #v });
    }
    if attrs.critical {
        init.push(quote! { critical: true });
    }
    if !attrs.depends.is_empty() {
        let depends = attrs.depends.iter().filter_map(|path| {
            path.segments.last().map(|s| s.ident.to_string())
        });
        init.push(quote! {
            depends: ::std::vec![#(#depends.to_string()),*]
        });
    }
    opt_field(&mut init, quote!(convert), &attrs.convert);
    opt_field(&mut init, quote!(calculate), &attrs.calculate);

    if let Some(reference) = &attrs.reference {
        let mut ref_init = Vec::new();
        opt_field(&mut ref_init, quote!(ty), &reference.ty);
        opt_field(&mut ref_init, quote!(child), &reference.child);
        opt_field(&mut ref_init, quote!(parent), &reference.parent);
        opt_field(&mut ref_init, quote!(association), &reference.association);
        opt_field(&mut ref_init, quote!(role), &reference.role);
        opt_field(&mut ref_init, quote!(inverse), &reference.inverse);
        init.push(quote! {
            reference: Some(::extmodel_core::ReferenceConfig {
                #(#ref_init,)*
                ..::extmodel_core::ReferenceConfig::default()
            })
        });
    }

    quote! {
        ::extmodel_core::ModelField {
            #(#init,)*
            ..::extmodel_core::ModelField::default()
        }
    }
}

fn opt_field(
    init: &mut Vec<TokenStream>,
    field: TokenStream,
    value: &Option<String>
) {
    if let Some(v) = value {
        init.push(quote! { #field: Some(#v.to_string()) });
    }
}

fn association_tokens(assoc: &AssociationDef) -> TokenStream {
    let kind = format_ident!("{}", assoc.kind.variant());
    let property = &assoc.property_name;
    let model = match &assoc.attrs.model {
        TargetModel::Path(path) => quote! {
            <#path as ::extmodel_core::ExtModel>::model_name()
        },
        TargetModel::Name(name) => quote! { #name }
    };

    let mut setters = Vec::new();
    if let Some(v) = &assoc.attrs.foreign_key {
        setters.push(quote! { assoc.foreign_key = Some(#v.to_string()); });
    }
    if let Some(v) = &assoc.attrs.primary_key {
        setters.push(quote! { assoc.primary_key = Some(#v.to_string()); });
    }
    if assoc.attrs.auto_load {
        setters.push(quote! { assoc.auto_load = true; });
    }
    if let Some(v) = &assoc.attrs.name {
        setters.push(quote! { assoc.name = Some(#v.to_string()); });
    }
    if let Some(v) = &assoc.attrs.setter_name {
        setters.push(quote! { assoc.setter_name = Some(#v.to_string()); });
    }
    if let Some(v) = &assoc.attrs.getter_name {
        setters.push(quote! { assoc.getter_name = Some(#v.to_string()); });
    }
    if let Some(v) = &assoc.attrs.instance_name {
        setters.push(quote! { assoc.instance_name = Some(#v.to_string()); });
    }

    quote! {{
        let mut assoc = ::extmodel_core::ModelAssociation::new(
            ::extmodel_core::AssociationType::#kind,
            #property,
            #model
        );
        #(#setters)*
        assoc
    }}
}

fn validation_tokens(validation: &ValidationDef) -> TokenStream {
    let kind = format_ident!("{}", validation.kind);
    let field = &validation.field;
    let params = validation.params.iter().map(|(name, value)| {
        quote! { ::extmodel_core::ValidationParam::new(#name, #value) }
    });

    quote! {
        ::extmodel_core::ModelValidation::new(
            ::extmodel_core::ValidationType::#kind,
            #field,
            ::std::vec![#(#params),*]
        )
    }
}
