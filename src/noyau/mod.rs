//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs    : Op (opérande, constante, variable, unaire, binaire) + précédence
//! - registre.rs  : symbole -> Op (opérateurs connus + π)
//! - variables.rs : nom -> valeur (x, y, z par défaut)
//! - eval.rs      : réduction récursive de la pile -> valeur
//! - format.rs    : réduction récursive de la pile -> infixe parenthésé
//! - cerveau.rs   : CalculatorBrain (pile + registre + variables)

pub mod cerveau;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod registre;
pub mod variables;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use cerveau::CalculatorBrain;
