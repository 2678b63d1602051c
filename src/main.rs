// src/main.rs
//
// Calculatrice hexa: point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------------
// - NATIF (Linux/Windows/macOS) : traces (RUST_LOG) + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas id="the_canvas_id">
//
// Le noyau (src/noyau) ne dépend d’aucun de ces détails.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice hexa";

/* ------------------------ Police CJK (natif) ------------------------ */

/// Polices système essayées, dans l’ordre, pour afficher l’easter egg (哈哈哈).
#[cfg(not(target_arch = "wasm32"))]
const POLICES_CJK: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Ajoute une police CJK en repli si une est trouvée ; sinon egui garde ses polices.
#[cfg(not(target_arch = "wasm32"))]
fn installer_polices(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let Some((chemin, octets)) = POLICES_CJK
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|o| (*p, o)))
    else {
        tracing::info!("aucune police CJK trouvée, easter egg en glyphes de repli");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_string(), FontData::from_owned(octets).into());

    // en repli (dernière position) : les chiffres gardent la police egui
    for famille in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(famille)
            .or_default()
            .push("cjk".to_string());
    }

    ctx.set_fonts(fonts);
    tracing::debug!(chemin, "police CJK installée");
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Traces sur stderr, filtrées par RUST_LOG (ex: RUST_LOG=calculatrice_hexa=debug).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let [w, h] = app::etat::TAILLE_STANDARD;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([w, h])
            .with_min_inner_size([w, h]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // Contexte egui prêt => polices avant la première frame.
            installer_polices(&cc.egui_ctx);
            Ok(Box::<AppCalc>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage passe par `web::start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Démarrage automatique au chargement de la page :
    /// titre d’onglet, récupération du canvas, WebRunner.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id attendu: the_canvas_id)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
