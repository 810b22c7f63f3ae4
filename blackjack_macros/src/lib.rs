use proc_macro::TokenStream as TokenStream1;
use quote::ToTokens;

/// This macro is added before a method of `Round` in the impl block.
/// Use this macro to first check if current game phase is exactly the phase in
/// the attribute.
///
/// For example, `#[allowed_phase(PlayerTurn)]` will make a method first check
/// if current game phase is `PlayerTurn`. If not, the method returns
/// `RoundError::WrongPhase` before touching any state. `GamePhase` and
/// `RoundError` must be in scope where the macro is used.
#[proc_macro_attribute]
pub fn allowed_phase(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let phase: syn::Ident = syn::parse(attr).unwrap();
    let function_name = ast.sig.ident.to_string();
    let early_return: syn::Stmt = syn::parse_quote! {
        if self.current_game_phase != GamePhase::#phase {
            return Err(RoundError::WrongPhase {
                operation: #function_name,
                expected: GamePhase::#phase,
                actual: self.current_game_phase,
            });
        }
    };
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}
