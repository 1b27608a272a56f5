//! Derive macro for converting a `#[repr(u8)]` enum's decode direction
//! (`u8 -> Enum`) without hand-writing a match arm per opcode.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Derives `impl From<u8> for #name`, matching each discriminant by casting
/// every variant back to `u8` and comparing. Panics on an out-of-range byte:
/// a well-formed chunk never produces one.
#[proc_macro_derive(EnumFromU8)]
pub fn enum_from_u8(input: TokenStream) -> TokenStream {
  let ast: DeriveInput = syn::parse(input).unwrap();
  let name = &ast.ident;

  let variants = match &ast.data {
    syn::Data::Enum(e) => e.variants.iter().map(|v| v.ident.clone()),
    _ => panic!("EnumFromU8 can only be used with enums"),
  };

  let gen = quote! {
      impl From<u8> for #name {
          fn from(val: u8) -> Self {
              match val {
                  #(
                      x if x == #name::#variants as u8 => #name::#variants,
                  )*
                  _ => panic!("invalid opcode byte {}", val),
              }
          }
      }
  };

  gen.into()
}
