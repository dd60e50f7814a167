// src/main.rs
//
// Calculatrice OPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// But:
// - NATIF : `calculatrice "3+4*2"` évalue sans fenêtre (jetons, OPN, résultat)
//           `calculatrice`          ouvre la fenêtre eframe
// - WEB  (wasm32) : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice OPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{Parser, ValueEnum};

    use crate::noyau::{self, ErreurCalc};
    use crate::reglages::{Arithmetique, Lexique, Politique, Reglages, DECIMALES_DEFAUT};

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", version, about = "Infixe -> OPN -> valeur")]
    pub struct Cli {
        /// Expression à évaluer sans fenêtre (ex: "3+4*2/(1-5)").
        pub expression: Option<String>,

        /// Caractères inconnus : ignorés (permissif) ou refusés (strict).
        #[arg(long, value_enum, default_value_t = LexiqueChoix::Permissif)]
        pub lexique: LexiqueChoix,

        /// Opérande gauche manquant : 0 (tolerante) ou erreur (stricte).
        #[arg(long, value_enum, default_value_t = PolitiqueChoix::Tolerante)]
        pub politique: PolitiqueChoix,

        /// Domaine numérique.
        #[arg(long, value_enum, default_value_t = ArithmetiqueChoix::Flottante)]
        pub arithmetique: ArithmetiqueChoix,

        /// L’expression est déjà en OPN (jetons séparés par des espaces).
        #[arg(long)]
        pub opn: bool,

        /// Décimales affichées après "=".
        #[arg(long, default_value_t = DECIMALES_DEFAUT)]
        pub decimales: usize,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    pub enum LexiqueChoix {
        Permissif,
        Strict,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    pub enum PolitiqueChoix {
        Tolerante,
        Stricte,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    pub enum ArithmetiqueChoix {
        Flottante,
        Exacte,
    }

    impl Cli {
        pub fn reglages(&self) -> Reglages {
            Reglages {
                lexique: match self.lexique {
                    LexiqueChoix::Permissif => Lexique::Permissif,
                    LexiqueChoix::Strict => Lexique::Strict,
                },
                politique: match self.politique {
                    PolitiqueChoix::Tolerante => Politique::Tolerante,
                    PolitiqueChoix::Stricte => Politique::Stricte,
                },
                arithmetique: match self.arithmetique {
                    ArithmetiqueChoix::Flottante => Arithmetique::Flottante,
                    ArithmetiqueChoix::Exacte => Arithmetique::Exacte,
                },
                ..Reglages::default()
            }
            .avec_decimales(self.decimales)
        }

        /// Évaluation sans fenêtre : lignes à afficher.
        /// - infixe : jetons, postfixe, résultat
        /// - `--opn` : résultat seul (l’entrée est déjà la démarche)
        pub fn executer(&self, expression: &str) -> Result<Vec<String>, ErreurCalc> {
            let reglages = self.reglages();

            if self.opn {
                let (_, affichage) = noyau::calculer_opn(expression, &reglages)?;
                return Ok(vec![affichage]);
            }

            let r = noyau::calculer(expression, &reglages)?;
            Ok(vec![
                format!("jetons   : {}", r.demarche.jetons),
                format!("postfixe : {}", r.demarche.postfixe),
                r.affichage,
            ])
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn init_journal() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG=calculatrice=debug pour voir jetons/OPN
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    init_journal();

    let cli = cli::Cli::parse();
    let reglages = cli.reglages();
    tracing::debug!(?reglages, "réglages");

    if let Some(expression) = cli.expression.as_deref() {
        let lignes = cli
            .executer(expression)
            .map_err(|e| anyhow::anyhow!("{expression:?}: {e}"))?;
        for ligne in lignes {
            println!("{ligne}");
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 520.0])
            .with_min_inner_size([300.0, 460.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
