use syn::{
    Attribute, Expr, ExprLit, Ident, Lit, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A bare string literal like `"len:4"`.
    Positional(LitStr),
    /// Key-value pair like `rename = "Code"`.
    KeyValue { key: Ident, value: LitStr },
}

impl AttrArgs {
    /// All string values stored under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&LitStr> {
        self.items
            .iter()
            .filter_map(|item| match item {
                AttrItem::KeyValue { key: k, value } if k == key => Some(value),
                _ => None,
            })
            .collect()
    }

    /// All positional string literals, in order.
    pub fn positional(&self) -> Vec<&LitStr> {
        self.items
            .iter()
            .filter_map(|item| match item {
                AttrItem::Positional(lit) => Some(lit),
                AttrItem::KeyValue { .. } => None,
            })
            .collect()
    }

    /// Fails on the first key not listed in `allowed`.
    pub fn reject_unknown(&self, allowed: &[&str]) -> Result<()> {
        for item in &self.items {
            if let AttrItem::KeyValue { key, .. } = item
                && !allowed.iter().any(|a| key == a)
            {
                return Err(diag::error_spanned(
                    key,
                    format!(
                        "unknown option `{key}`; expected one of: {}",
                        allowed.join(", ")
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[validate(...)]` or `#[validate = "..."]`.
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(path) => Err(diag::error_spanned(
            path,
            format!("#[{expected}] needs a rule string, e.g. #[{expected}(\"len:4\")]"),
        )),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Ok(Some(AttrArgs {
                items: vec![AttrItem::Positional(s.clone())],
            })),
            other => Err(diag::error_spanned(
                other,
                format!("#[{expected} = ...] expects a string literal"),
            )),
        },
    }
}

/// Parse all attributes of a given name and merge them in order.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<Option<AttrArgs>> {
    let mut result: Option<AttrArgs> = None;

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result
                .get_or_insert_with(|| AttrArgs { items: vec![] })
                .items
                .extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self(AttrItem::Positional(input.parse()?)));
        }

        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: LitStr = input.parse()?;
        Ok(Self(AttrItem::KeyValue { key, value }))
    }
}
