/// Number formatting helpers.
///
/// This module renders `f64` values in the two textual forms the interpreter
/// needs: the *display* form printed by programs (`6`, `0.5`) and the
/// *literal* form used by the token listing and the AST printer (`6.0`,
/// `0.5`). Both avoid exponent notation and trailing zeros.
pub mod num;
