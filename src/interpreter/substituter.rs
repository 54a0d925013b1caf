use crate::lexeme::Lexeme;

/// A value supplied for a single-letter variable.
pub type Binding = (char, f64);

/// Replaces bound variables with constants.
///
/// Every `Variable` lexeme whose name appears in `bindings` becomes a
/// `Constant` carrying the bound value. If a name is bound more than once, the
/// first binding wins. Unbound variables are kept as they are; the evaluator
/// reports them. The result has the same length and order as the input, and
/// the input is left untouched.
///
/// # Example
/// ```
/// use rpnsolve::{
///     interpreter::{scanner::scan, substituter::substitute},
///     lexeme::Lexeme,
/// };
///
/// let lexemes = scan("a * b").unwrap();
/// let resolved = substitute(&lexemes, &[('a', 3.0), ('a', 4.0)]);
///
/// assert_eq!(resolved[0], Lexeme::Constant(3.0));
/// assert_eq!(resolved[2], Lexeme::Variable('b'));
/// assert_eq!(lexemes[0], Lexeme::Variable('a'));
/// ```
#[must_use]
pub fn substitute(lexemes: &[Lexeme], bindings: &[Binding]) -> Vec<Lexeme> {
    lexemes.iter()
           .map(|lexeme| match lexeme {
               Lexeme::Variable(name) => {
                   bindings.iter()
                           .find(|(bound, _)| bound == name)
                           .map_or(*lexeme, |&(_, value)| {
                               log::trace!("substituted {name} = {value}");
                               Lexeme::Constant(value)
                           })
               },
               _ => *lexeme,
           })
           .collect()
}
