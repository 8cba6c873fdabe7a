use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Field, LitStr, parse_macro_input};

use crate::support::{attrs, diag, utils};

const ATTR: &str = "validate";
const OPTIONS: &[&str] = &["rules", "rename"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// What the derive learned about one field.
struct FieldInfo {
    name: String,
    public: bool,
    rules: String,
}

impl FieldInfo {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| diag::error_spanned(field, "expected a named field"))?;

        let mut name = ident.unraw().to_string();
        let mut rules = Vec::new();

        if let Some(args) = attrs::parse_attrs(&field.attrs, ATTR)? {
            args.reject_unknown(OPTIONS)?;

            rules.extend(args.positional().into_iter().map(LitStr::value));
            rules.extend(args.get_all("rules").into_iter().map(LitStr::value));

            match args.get_all("rename").as_slice() {
                [] => {}
                [rename] => name = rename.value(),
                [_, duplicate, ..] => {
                    return Err(diag::error_spanned(
                        duplicate,
                        "`rename` may only be given once per field",
                    ));
                }
            }
        }

        rules.retain(|r| !r.is_empty());

        Ok(Self {
            name,
            public: matches!(field.vis, syn::Visibility::Public(_)),
            rules: rules.join(";"),
        })
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = utils::require_named_fields(input)?;

    let mut descriptors = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let info = FieldInfo::from_field(field)?;
        let ident = field.ident.as_ref();
        let name = &info.name;
        let rules = &info.rules;
        let visibility = if info.public {
            quote!(::tagcheck::__private::Visibility::Public)
        } else {
            quote!(::tagcheck::__private::Visibility::Private)
        };

        descriptors.push(quote! {
            ::tagcheck::__private::FieldDescriptor::new(
                #name,
                #visibility,
                #rules,
                (&&::tagcheck::__private::Probe(&self.#ident)).field_value(),
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::tagcheck::__private::Inspect for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::tagcheck::__private::Shape<'_> {
                #[allow(unused_imports)]
                use ::tagcheck::__private::{ViaAsFieldValue as _, ViaFallback as _};

                ::tagcheck::__private::Shape::Record(::std::vec![#(#descriptors),*])
            }
        }
    })
}
