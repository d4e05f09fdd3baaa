//! Noyau d'évaluation du grapheur
//!
//! Organisation interne :
//! - jetons.rs      : classification (opération, précédence, arité, longueur)
//! - lecture.rs     : littéraux numériques + notation scientifique (lookback)
//! - validation.rs  : pré-validation (parenthèses, longueur, fin de chaîne)
//! - eval.rs        : évaluateur à deux piles (réduction gloutonne)
//! - echantillon.rs : balayage d'un domaine -> suites x/y pour le tracé
//! - erreur.rs      : erreurs de domaine typées

pub mod echantillon;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use echantillon::{echantillons_x, echantillons_y};
pub use erreur::{ErreurDomaine, Resultat};
pub use eval::evaluer;
pub use validation::valider;
