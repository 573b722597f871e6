//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit, LitInt};

/// Derive macro generating the `Solver` impl from `PartSolver` impls.
///
/// # Attributes
///
/// - `#[puzzle_solver(parts = N)]`: Required. The number of parts (1 or 2).
///
/// # Requirements
///
/// The type must implement `PartSolver<N>` for every part `1..=N`.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{PartSolver, PuzzleParser};
/// use advent_solver_macros::PuzzleSolver;
///
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(parts = 2)]
/// struct Day1;
///
/// impl PuzzleParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .expect("PuzzleSolver derive macro requires #[puzzle_solver(...)] attribute");

    let mut parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    if !(1..=2).contains(&parts) {
        panic!("'parts' must be 1 or 2");
    }

    let arms = (1..=parts).map(|n| {
        let lit = LitInt::new(&n.to_string(), proc_macro2::Span::call_site());
        quote! {
            #lit => <Self as ::advent_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::advent_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system.
///
/// Generates an `inventory::submit!` of a `SolverPlugin`, allowing the solver
/// to be discovered and registered automatically.
///
/// # Attributes
///
/// Inside `#[puzzle(...)]`:
///
/// - `day`: Required. The day number (1-25)
/// - `sample`: Required. An expression (usually a `const` path) evaluating to
///   the embedded sample input
/// - `tags`: Optional. Array of string literals for filtering
/// - `expected(part1 = "...", part2 = "...")`: Optional. Expected answers for
///   the real puzzle input; either part may be omitted
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, the generated bound check produces a clear compile-time
/// error.
///
/// # Example
///
/// ```ignore
/// use advent_solver_macros::{PuzzleSolver, RegisterPuzzle};
///
/// const SAMPLE: &str = "3   4\n4   3";
///
/// #[derive(PuzzleSolver, RegisterPuzzle)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(day = 1, sample = SAMPLE, tags = ["lists"], expected(part1 = "1830467"))]
/// struct Day01;
/// ```
#[proc_macro_derive(RegisterPuzzle, attributes(puzzle))]
pub fn derive_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("RegisterPuzzle derive macro requires #[puzzle(...)] attribute");

    let mut day: Option<u8> = None;
    let mut sample: Option<syn::Expr> = None;
    let mut tags: Vec<String> = Vec::new();
    let mut expected_part1: Option<String> = None;
    let mut expected_part2: Option<String> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("sample") {
            sample = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else if meta.path.is_ident("expected") {
            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("part1") {
                    let value: Lit = inner.value()?.parse()?;
                    if let Lit::Str(lit_str) = value {
                        expected_part1 = Some(lit_str.value());
                    }
                } else if inner.path.is_ident("part2") {
                    let value: Lit = inner.value()?.parse()?;
                    if let Lit::Str(lit_str) = value {
                        expected_part2 = Some(lit_str.value());
                    }
                }
                Ok(())
            })?;
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let day = day.expect("Missing required 'day' attribute");
    let sample = sample.expect("Missing required 'sample' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expected_tokens = [expected_part1, expected_part2].map(|opt| match opt {
        Some(s) => quote! { ::std::option::Option::Some(#s) },
        None => quote! { ::std::option::Option::None },
    });
    let [exp1, exp2] = expected_tokens;

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // producing a clearer error message than the submit! expansion would
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                day: #day,
                solver: &#name,
                tags: #tags_array,
                expected: [#exp1, #exp2],
                sample: #sample,
            }
        }
    };

    TokenStream::from(expanded)
}
