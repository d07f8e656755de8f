use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Type};

fn unsupported_arg_error_msg(arg_name: &str, arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} ('{}') to be f64, for {}",
        arg_pos, arg_name, fn_name
    )
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "f64"),
        _ => false,
    }
}

/// Turns a fixed-arity numeric function into one the calculator registry accepts.
///
/// ```ignore
/// #[arithmex_fn]
/// fn pow(base: f64, exponent: f64) -> Result<f64, FunctionError> {
///     Ok(base.powf(exponent))
/// }
/// ```
///
/// expands to `fn pow(args: &[f64]) -> Result<f64, FunctionError>` which rejects
/// calls with the wrong number of arguments. `FunctionError` must be in scope.
#[proc_macro_attribute]
pub fn arithmex_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;

    let mut arg_extractions = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return syn::Error::new_spanned(arg, "receivers are not supported")
                .to_compile_error()
                .into();
        };

        let arg_name = match **pat {
            syn::Pat::Ident(ref ident) => &ident.ident,
            _ => {
                return syn::Error::new_spanned(pat, "unsupported argument pattern")
                    .to_compile_error()
                    .into()
            }
        };

        if !is_f64(ty) {
            let msg = unsupported_arg_error_msg(&arg_name.to_string(), i, &fn_name.to_string());
            return syn::Error::new_spanned(ty, msg).to_compile_error().into();
        }

        arg_extractions.push(quote! {
            let #arg_name: f64 = args[#i];
        });
    }

    let args_len = arg_extractions.len();
    let name = fn_name.to_string();
    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(args: &[f64]) #fn_output {
            if args.len() != #args_len {
                return Err(FunctionError::ArgumentCount {
                    name: #name.to_string(),
                    expected: #args_len,
                    actual: args.len(),
                });
            }

            #(#arg_extractions)*

            #fn_body
        }
    };

    TokenStream::from(expanded)
}
