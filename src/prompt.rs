//! Prompt rendering
//!
//! Renders a snapshot into the natural-language instruction sent to the
//! inference endpoint. This rendering is load-bearing: the verdict
//! extractor depends on the responder reproducing the exact label
//! vocabulary requested here. The 50-word limit is stated twice on
//! purpose so that extractor-side truncation is a fallback rather than
//! the only enforcement.

use std::fmt::Write;

use crate::SystemState;

/// Marker used for metrics the backend did not export.
pub const NOT_AVAILABLE: &str = "no disponible";

fn format_metric(value: Option<f64>, precision: usize, suffix: &str) -> String {
    match value {
        Some(value) => format!("{value:.precision$}{suffix}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Deterministic rendering: the same snapshot always yields the same
/// prompt text.
pub fn render(state: &SystemState) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Eres un analista de operaciones. Evalúa el siguiente estado del sistema y determina si presenta una anomalía."
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Estado del sistema (timestamp: {} ms):", state.timestamp);
    let _ = writeln!(
        prompt,
        "- Uso de CPU (ventana de 5m): {}",
        format_metric(state.cpu_usage_rate_5m, 3, "")
    );
    let _ = writeln!(
        prompt,
        "- Carga media (1m): {}",
        format_metric(state.load_average_1m, 2, "")
    );
    let _ = writeln!(
        prompt,
        "- Memoria disponible: {}",
        format_metric(state.memory_available_mb, 2, " MB")
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Responde usando exactamente este formato, en tres líneas:");
    let _ = writeln!(prompt, "Anomalía Detectada: <Sí|No|Potencial>");
    let _ = writeln!(prompt, "Justificación: <justificación en un máximo de 50 palabras>");
    let _ = writeln!(prompt, "Acción Recomendada: <acción sugerida>");
    let _ = writeln!(prompt);
    let _ = write!(prompt, "La justificación no debe superar las 50 palabras.");

    prompt
}
