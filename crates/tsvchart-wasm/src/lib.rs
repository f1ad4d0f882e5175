use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tsvchart::{ChartType, Dataset, OptionTree};
use wasm_bindgen::prelude::*;

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Maximum input size in bytes (10 MB)
const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Initialize panic hook for better error messages in browser console.
/// Call this once when the module is loaded for improved debugging.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Everything a host needs to replace a chart code block: the placeholder
/// markup and the arguments for the charting library call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBlock {
    pub id: String,
    pub html: String,
    /// `None` when the language names no known chart; the host shows
    /// [`tsvchart::FALLBACK_MESSAGE`] instead of rendering.
    pub chart_type: Option<ChartType>,
    /// Charting library factory, e.g. `barChart`.
    pub factory: Option<String>,
    pub data: Dataset,
    pub options: OptionTree,
}

fn next_block_id() -> String {
    let n = NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed);
    format!("chart-{:010x}", n)
}

fn check_size(input: &str) -> Result<(), String> {
    if input.len() > MAX_INPUT_SIZE {
        return Err(format!(
            "Input exceeds maximum size limit of {} bytes",
            MAX_INPUT_SIZE
        ));
    }
    Ok(())
}

/// Parse `code` and wrap it with a fresh placeholder for `language`.
pub fn build_block(code: &str, language: &str) -> ChartBlock {
    let id = next_block_id();
    let html = format!(r#"<div id="{}" class="chart" />"#, id);
    let chart_type = ChartType::from_language(language);
    let chart = tsvchart::parse(code);
    ChartBlock {
        id,
        html,
        chart_type,
        factory: chart_type.map(ChartType::factory_name),
        data: chart.data,
        options: chart.options,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // plain objects rather than JS Maps, so the charting library can read them
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("conversion error: {}", e)))
}

/// Parse a chart code block into `{ data, options }`
#[wasm_bindgen]
pub fn parse_chart(code: &str) -> Result<JsValue, JsValue> {
    check_size(code).map_err(|e| JsValue::from_str(&e))?;
    to_js(&tsvchart::parse(code))
}

/// Parse a chart code block into a JSON string
#[wasm_bindgen]
pub fn parse_chart_json(code: &str, strict: bool, pretty: bool) -> Result<String, String> {
    check_size(code)?;

    let options = tsvchart::Options { strict };
    let chart = tsvchart::parse_with_options(code, &options)
        .map_err(|e| format!("chart parse error: {}", e))?;

    if pretty {
        serde_json::to_string_pretty(&chart).map_err(|e| format!("JSON encoding error: {}", e))
    } else {
        serde_json::to_string(&chart).map_err(|e| format!("JSON encoding error: {}", e))
    }
}

/// Parse a code block tagged `language` into `{ id, html, chartType, factory, data, options }`
#[wasm_bindgen]
pub fn chart_block(code: &str, language: &str) -> Result<JsValue, JsValue> {
    check_size(code).map_err(|e| JsValue::from_str(&e))?;
    let block = build_block(code, language);
    if block.chart_type.is_none() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "no chart type for language '{}'",
            language
        )));
    }
    to_js(&block)
}

/// Language tags to register the chart replacer for
#[wasm_bindgen]
pub fn default_languages() -> Vec<String> {
    tsvchart::DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

/// Text to show when rendering a chart fails
#[wasm_bindgen]
pub fn fallback_message() -> String {
    tsvchart::FALLBACK_MESSAGE.to_string()
}

/// Get the version of the tsvchart library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_json_simple() {
        let json = parse_chart_json("A\tB\n1\t2\n\nwidth: 700", false, false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["options"]["chart"]["width"], 700);
        assert_eq!(v["data"]["series"][1]["data"][0], "2");
    }

    #[test]
    fn test_parse_chart_json_strict_error() {
        let err = parse_chart_json("A\tB\n1\n", true, false).unwrap_err();
        assert!(err.contains("syntax at line 2"));
    }

    #[test]
    fn test_block_ids_are_unique() {
        let a = build_block("A\n1", "chart");
        let b = build_block("A\n1", "chart");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("chart-"));
        assert_eq!(a.html, format!(r#"<div id="{}" class="chart" />"#, a.id));
    }

    #[test]
    fn test_block_chart_type() {
        let block = build_block("A\n1", "chart:area");
        assert_eq!(block.chart_type, Some(ChartType::Area));
        assert_eq!(block.factory.as_deref(), Some("areaChart"));

        let block = build_block("A\n1", "chart");
        assert_eq!(block.factory.as_deref(), Some("barChart"));

        let block = build_block("A\n1", "chart:radar");
        assert_eq!(block.chart_type, None);
        assert_eq!(block.factory, None);
    }

    #[test]
    fn test_parse_chart_json_size_limit() {
        let large = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = parse_chart_json(&large, false, false);
        assert!(
            result
                .unwrap_err()
                .contains("Input exceeds maximum size limit")
        );
    }
}
