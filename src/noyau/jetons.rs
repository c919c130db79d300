// src/noyau/jetons.rs
//
// Jetons de la pile RPN.
// - Operand  : nombre saisi par l’hôte
// - Constant : symbole fixe (π), valeur immuable
// - Variable : résolue dans le magasin de variables au moment de l’évaluation
// - Unary    : symbole + fonction T -> T
// - Binary   : symbole + précédence + fonction (T, T) -> T
//
// NOTE:
// - Seul Binary a une précédence "réelle". Tout le reste est à PRECEDENCE_MAX
//   (jamais besoin de parenthèses comme sous-expression).

use std::fmt;

use num_traits::Float;

use super::format::format_nombre;

/// Précédence des jetons qui n’ont pas besoin de parenthèses.
pub const PRECEDENCE_MAX: i32 = i32::MAX;

#[derive(Clone, Debug)]
pub enum Op<T> {
    Operand(T),
    Constant(String, T),
    Variable(String),
    Unary(String, fn(T) -> T),
    Binary(String, i32, fn(T, T) -> T),
}

impl<T> Op<T> {
    /// Clé de registre (symbole affiché).
    /// None pour Operand et Variable : ils ne passent jamais par le registre.
    pub fn cle_registre(&self) -> Option<&str> {
        match self {
            Op::Constant(s, _) | Op::Unary(s, _) | Op::Binary(s, _, _) => Some(s.as_str()),
            Op::Operand(_) | Op::Variable(_) => None,
        }
    }

    pub fn precedence(&self) -> i32 {
        match self {
            Op::Binary(_, p, _) => *p,
            _ => PRECEDENCE_MAX,
        }
    }

    /// Nombre d’opérandes consommés.
    pub fn arite(&self) -> usize {
        match self {
            Op::Operand(_) | Op::Constant(_, _) | Op::Variable(_) => 0,
            Op::Unary(_, _) => 1,
            Op::Binary(_, _, _) => 2,
        }
    }
}

impl<T: Float> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operand(x) => f.write_str(&format_nombre(*x)),
            Op::Constant(s, _) | Op::Variable(s) | Op::Unary(s, _) | Op::Binary(s, _, _) => {
                f.write_str(s)
            }
        }
    }
}

/// Format utilitaire (traces) : pile en texte, base à gauche, sommet à droite.
pub fn format_pile<T: Float>(pile: &[Op<T>]) -> String {
    let morceaux: Vec<String> = pile.iter().map(|op| op.to_string()).collect();
    format!("[{}]", morceaux.join(", "))
}
