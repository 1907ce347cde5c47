use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, Generics, Meta, NestedMeta};

// This file hosts the code generating `Stub` impls for structs and enums.
// The generated `from_value` reads the fields of the synthesized value in
// declaration order, which is also the order of the constructor parameters,
// and rejects values of another type or with fields left over.

pub(crate) fn impl_stub_for_input(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        Data::Struct(data) => impl_stub_for_struct(input, data),
        Data::Enum(data) => impl_stub_for_enum(input, data),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Stub cannot be derived for unions",
        )),
    }
}

fn impl_stub_for_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    reject_stub_attrs(&input.attrs)?;
    let name = input.ident.unraw().to_string();
    let params = constructor_params(&data.fields)?;

    let composite = quote! {
        ::stubgen::Composite::single(::stubgen::Constructor::new(#name, ::std::vec![#(#params),*]))
    };
    let body = construct(quote!(Self), &data.fields);
    impl_stub(input, &name, composite, body)
}

fn impl_stub_for_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    reject_stub_attrs(&input.attrs)?;
    let name = input.ident.unraw().to_string();

    let mut primary = None;
    let mut constructors = Vec::with_capacity(data.variants.len());
    let mut arms = Vec::with_capacity(data.variants.len());
    for (i, variant) in data.variants.iter().enumerate() {
        if is_primary(&variant.attrs)? {
            if primary.is_some() {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "only one variant can be marked with `#[stub(primary)]`",
                ));
            }
            primary = Some(i);
        }
        let variant_name = variant.ident.unraw().to_string();
        let params = constructor_params(&variant.fields)?;
        constructors.push(quote! {
            ::stubgen::Constructor::new(#variant_name, ::std::vec![#(#params),*])
        });

        let ident = &variant.ident;
        let construct = construct(quote!(Self::#ident), &variant.fields);
        arms.push(quote! {
            #variant_name => #construct,
        });
    }
    let with_primary = primary.map(|i| quote!(.with_primary(#i)));

    let composite = quote! {
        ::stubgen::Composite::new(::std::vec![#(#constructors),*]) #with_primary
    };
    let body = quote! {
        match &*__constructor {
            #(#arms)*
            other => {
                return ::core::result::Result::Err(::stubgen::StubError::mismatch(
                    &*__type_name,
                    ::std::format!("unknown constructor `{}`", other),
                ));
            }
        }
    };
    impl_stub(input, &name, composite, body)
}

fn impl_stub(input: &DeriveInput, name: &str, composite: TokenStream, body: TokenStream) -> syn::Result<TokenStream> {
    let generics = stub_generics(&input.generics)?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident = &input.ident;
    let type_name = type_name(&input.generics, name);

    Ok(quote! {
        impl #impl_generics ::stubgen::Stub for #ident #ty_generics #where_clause {
            fn descriptor() -> ::stubgen::TypeDescriptor {
                ::stubgen::TypeDescriptor::of::<Self>(#type_name, ::stubgen::TypeDef::Composite(#composite))
            }

            #[allow(unused_mut, unused_variables, unreachable_code)]
            fn from_value(value: ::stubgen::Value) -> ::core::result::Result<Self, ::stubgen::StubError> {
                let __type_name: ::stubgen::Name = ::core::convert::Into::into(#type_name);
                let (__constructor, mut __fields) = value.into_composite(&__type_name)?;
                let __value = #body;
                __fields.finish()?;
                ::core::result::Result::Ok(__value)
            }
        }
    })
}

/// A generic type is named after its type arguments, so that each instance
/// has its own name: `Pair<u8>` and `Pair<String>`.
fn type_name(generics: &Generics, name: &str) -> TokenStream {
    let args = generics.type_params().map(|tp| &tp.ident).collect::<Vec<_>>();
    if args.is_empty() {
        quote!(#name)
    } else {
        quote! {
            ::stubgen::TypeDescriptor::instance_name(#name, &[#(<#args as ::stubgen::Stub>::descriptor()),*])
        }
    }
}

/// Every type parameter must implement `Stub`, and a `Stub` is `'static`.
fn stub_generics(generics: &Generics) -> syn::Result<Generics> {
    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Stub cannot be derived for types with lifetime parameters",
        ));
    }
    let mut generics = generics.clone();
    for tp in generics.type_params_mut() {
        tp.bounds.push(parse_quote!(::stubgen::Stub));
    }
    Ok(generics)
}

fn constructor_params(fields: &Fields) -> syn::Result<Vec<TokenStream>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            reject_stub_attrs(&field.attrs)?;
            let ty = &field.ty;
            let name = match &field.ident {
                Some(ident) => ident.unraw().to_string(),
                None => i.to_string(),
            };
            Ok(quote! { ::stubgen::Param::of::<#ty>(#name) })
        })
        .collect()
}

fn construct(path: TokenStream, fields: &Fields) -> TokenStream {
    match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().map(|f| &f.ident);
            quote! { #path { #(#idents: __fields.next_field()?,)* } }
        }
        Fields::Unnamed(unnamed) => {
            let values = unnamed.unnamed.iter().map(|_| quote!(__fields.next_field()?));
            quote! { #path(#(#values),*) }
        }
        Fields::Unit => path,
    }
}

fn is_primary(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut primary = false;
    for attr in attrs.iter().filter(|attr| attr.path.is_ident("stub")) {
        match attr.parse_meta()? {
            Meta::List(list) => {
                for nested in list.nested.iter() {
                    match nested {
                        NestedMeta::Meta(Meta::Path(path)) if path.is_ident("primary") => primary = true,
                        other => {
                            return Err(syn::Error::new_spanned(other, "unknown argument, expected `primary`"));
                        }
                    }
                }
            }
            other => return Err(syn::Error::new_spanned(other, "expected `#[stub(primary)]`")),
        }
    }
    Ok(primary)
}

fn reject_stub_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|attr| attr.path.is_ident("stub")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "`#[stub(...)]` is only accepted on enum variants",
        )),
        None => Ok(()),
    }
}
