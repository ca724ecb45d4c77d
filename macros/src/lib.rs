//! Procedural macros used by `tinct` to generate its color models.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

fn error(message: &str) -> TokenStream {
    quote! {
        compile_error!(#message);
    }
    .into()
}

/// Generate a color model from a struct with one named field per channel.
///
/// The struct must not be generic and must have 3 or 4 fields. The struct
/// name must match a variant of both `Space` and `Color`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return error("Models must use named fields.");
    }

    if !matches!(input.fields.len(), 3 | 4) {
        return error("Models must have 3 or 4 fields, one for each channel of the color.");
    }

    if !input.generics.params.is_empty() {
        return error("Models can not have generic parameters.");
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let channel_count = field_names.len();

    // Channels are always public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = input.ident.clone();

    let model_impl: TokenStream2 = quote! {
        impl #struct_name {
            /// Create a new color in this model from its channels.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channels of this color in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[crate::color::Component; #channel_count]> for #struct_name {
            fn from(value: [crate::color::Component; #channel_count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl crate::models::Model for #struct_name {
            const SPACE: crate::color::Space = crate::color::Space::#struct_name;

            fn to_color(&self) -> crate::color::Color {
                crate::color::Color::#struct_name(*self)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
