//! Attribute parsing utilities

use syn::{Attribute, Field, LitStr, Path};

/// Options from `#[value_object(...)]` on the struct
#[derive(Default)]
pub struct ValueObjectOptions {
    pub constructor: Option<Path>,
    pub unchecked: bool,
    pub name: Option<String>,
}

impl ValueObjectOptions {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("value_object") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("constructor") {
                    let lit: LitStr = meta.value()?.parse()?;
                    options.constructor = Some(lit.parse()?);
                    Ok(())
                } else if meta.path.is_ident("unchecked") {
                    options.unchecked = true;
                    Ok(())
                } else if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(lit, "name must not be empty"));
                    }
                    options.name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported value_object attribute, expected `constructor`, `unchecked` or `name`"))
                }
            })?;
        }

        if options.unchecked && options.constructor.is_some() {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "`unchecked` and `constructor` cannot be combined",
            ));
        }
        Ok(options)
    }
}

/// Whether a field carries the `#[value]` marker
pub fn is_raw_field(field: &Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("value"))
}
