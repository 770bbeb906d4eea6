// SPDX-FileCopyrightText: 2026 extmodel contributors
// SPDX-License-Identifier: MIT

//! Shared helpers for attribute parsing and code generation.

use syn::Type;

/// Rust type name used as autodetection input for a member field.
///
/// References are peeled, `Option<T>` unwraps to `T`, and the last path
/// segment's ident is taken, so `&Option<chrono::NaiveDate>` yields
/// `"NaiveDate"`. Non-path types (tuples, arrays, slices) have no name
/// and autodetect as `auto`.
pub fn native_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(reference) => native_type_name(&reference.elem),
        Type::Path(path) => {
            let last = path.path.segments.last()?;
            if last.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(args) =
                    &last.arguments
                    && let Some(syn::GenericArgument::Type(inner)) =
                        args.args.first()
                {
                    return native_type_name(inner);
                }
                return None;
            }
            Some(last.ident.to_string())
        }
        _ => None
    }
}
