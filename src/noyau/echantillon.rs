// src/noyau/echantillon.rs
//
// Échantillonnage d'une expression sur un domaine [xmin, xmax) pour le tracé.
//
// Le pas dérive des bornes : pas = 0.001 * (|xmin| + |xmax|), soit de l'ordre
// de 1000 points par balayage. La suite des x s'arrête STRICTEMENT avant xmax
// (xmax lui-même n'est pas garanti dans la suite).
//
// Garde-fou : xmin == xmax == 0 donne un pas nul et une boucle naïve infinie ;
// ce cas (et tout pas non exploitable) retourne une suite vide.

use tracing::debug;

use super::erreur::Resultat;
use super::eval::evaluer;

/// Rapport pas/bornes du domaine d'échantillonnage.
pub const RATIO_PAS: f64 = 0.001;

/// Pas dérivé des bornes.
pub fn pas_echantillonnage(xmin: f64, xmax: f64) -> f64 {
    RATIO_PAS * (xmin.abs() + xmax.abs())
}

/// Suite des abscisses : xmin, xmin+pas, xmin+2*pas, … tant que < xmax.
pub fn echantillons_x(xmin: f64, xmax: f64) -> Vec<f64> {
    let pas = pas_echantillonnage(xmin, xmax);

    // pas nul (xmin == xmax == 0) ou bornes non finies : rien à échantillonner
    if pas <= 0.0 || !pas.is_finite() {
        return Vec::new();
    }

    let mut xs = Vec::with_capacity(1024);
    let mut x = xmin;
    while x < xmax {
        xs.push(x);
        x += pas;
    }

    debug!(xmin, xmax, pas, nb = xs.len(), "échantillonnage du domaine");
    xs
}

/// Suite des ordonnées : évalue `expr` indépendamment en chaque abscisse de
/// [`echantillons_x`] (mêmes longueur et indexation). La première erreur de
/// domaine interrompt le balayage et est remontée.
pub fn echantillons_y(expr: &str, xmin: f64, xmax: f64) -> Resultat<Vec<f64>> {
    echantillons_x(xmin, xmax)
        .into_iter()
        .map(|x| evaluer(expr, x))
        .collect()
}
