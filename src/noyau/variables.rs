// src/noyau/variables.rs
//
// Magasin de variables : nom -> valeur.
// - Cycle de vie indépendant de la pile (clear_stack ne touche pas aux variables).
// - Lu par l’évaluateur ; une variable absente => "pas de valeur".

use std::collections::HashMap;

use log::trace;
use num_traits::{Float, NumCast};

/// Variables posées à la construction (l’hôte peut s’en passer).
pub const VARIABLES_DEFAUT: [(&str, f64); 3] = [("x", 10.0), ("y", 5.0), ("z", 1.0)];

#[derive(Clone, Debug)]
pub struct Variables<T> {
    valeurs: HashMap<String, T>,
}

impl<T: Float> Variables<T> {
    pub fn new() -> Self {
        Self {
            valeurs: HashMap::new(),
        }
    }

    /// Magasin pré-rempli avec VARIABLES_DEFAUT.
    pub fn par_defaut() -> Self {
        let mut v = Self::new();
        for (nom, valeur) in VARIABLES_DEFAUT {
            // f64 -> T : toujours représentable pour f32/f64
            if let Some(valeur) = <T as NumCast>::from(valeur) {
                v.definir(nom, valeur);
            }
        }
        v
    }

    /// Pose (ou écrase) une variable.
    pub fn definir(&mut self, nom: impl Into<String>, valeur: T) {
        let nom = nom.into();
        trace!("variable {nom} définie");
        self.valeurs.insert(nom, valeur);
    }

    pub fn get(&self, nom: &str) -> Option<T> {
        self.valeurs.get(nom).copied()
    }

    pub fn contient(&self, nom: &str) -> bool {
        self.valeurs.contains_key(nom)
    }

    pub fn vider(&mut self) {
        self.valeurs.clear();
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }
}

impl<T: Float> Default for Variables<T> {
    fn default() -> Self {
        Self::new()
    }
}
