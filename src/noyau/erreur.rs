// src/noyau/erreur.rs
//
// Erreurs de domaine du noyau.
// L'évaluation les remonte telles quelles; l'appelant conserve l'entrée
// d'origine pour correction et affiche le message inchangé.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée : argument négatif")]
    RacineNegative,

    #[error("{fonction} : argument hors de [-1, 1]")]
    ArcHorsDomaine { fonction: &'static str },
}

pub type Resultat<T> = Result<T, ErreurDomaine>;
