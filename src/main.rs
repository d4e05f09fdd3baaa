// src/main.rs
//
// Grapheur — point d'entrée CLI
// -----------------------------
// Rôle:
// - exposer le noyau (validation, évaluation, échantillonnage) en ligne de
//   commande, pour exercice manuel et scripts
// - `eval`  : une expression + une valeur de x => un résultat
// - `trace` : une expression + [xmin, xmax] => les couples x;y du tracé
//
// IMPORTANT (structure projet):
// - Toute la logique vit dans src/noyau/ ; ici, entrée/sortie seulement.
// - La composition graphique de l'expression et le rendu du tracé sont des
//   collaborateurs externes : ils consomment la même API publique du noyau.

mod noyau;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use noyau::{echantillons_x, echantillons_y, evaluer, valider};

#[derive(Parser)]
#[command(name = "grapheur", version, about = "Noyau d'évaluation d'expressions à une variable")]
struct Cli {
    #[command(subcommand)]
    commande: Commande,
}

#[derive(Subcommand)]
enum Commande {
    /// Évalue une expression pour une valeur de x
    Eval {
        /// Expression (chiffres, '.', x, E±exposant, + - * / ^ mod,
        /// ln log sin cos tan asin acos atan sqrt, parenthèses)
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Valeur liée à la variable x
        #[arg(short, long, default_value_t = 0.0)]
        x: f64,
    },

    /// Échantillonne une expression sur [xmin, xmax) et imprime les couples x;y
    Trace {
        /// Expression contenant la variable x
        #[arg(allow_hyphen_values = true)]
        expression: String,

        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        xmin: f64,

        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        xmax: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.commande {
        Commande::Eval { expression, x } => {
            // pré-validation obligatoire avant évaluation
            if !valider(&expression) {
                eprintln!("expression invalide: {expression:?}");
                std::process::exit(1);
            }

            match evaluer(&expression, x) {
                Ok(v) => println!("{v}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commande::Trace {
            expression,
            xmin,
            xmax,
        } => {
            let xs = echantillons_x(xmin, xmax);
            if xs.is_empty() {
                eprintln!("domaine vide: xmin={xmin} xmax={xmax}");
                std::process::exit(1);
            }

            match echantillons_y(&expression, xmin, xmax) {
                Ok(ys) => {
                    for (x, y) in xs.iter().zip(ys.iter()) {
                        println!("{x};{y}");
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
