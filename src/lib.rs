// src/lib.rs
//
// Calculatrice RPN (bibliothèque)
// -------------------------------
// But:
// - Exposer le noyau RPN (CalculatorBrain) à un hôte (UI, CLI, tests...)
// - Aucune UI ici : l’hôte pousse opérandes/opérateurs, relit valeur + description
//
// IMPORTANT:
// - Pas de singleton : chaque hôte construit son propre CalculatorBrain.
// - Mono-thread : si l’hôte est multi-thread, c’est à lui de sérialiser les appels.

pub mod noyau;

// Ré-export pratique : `use calculatrice_rpn::CalculatorBrain;`
pub use noyau::cerveau::CalculatorBrain;
pub use noyau::jetons::Op;
