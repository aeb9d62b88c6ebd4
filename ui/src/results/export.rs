use dioxus::prelude::*;

use crate::core::boxplot::BoxPlotStyle;
use crate::core::error::ExportError;
use crate::core::format::format_growth;
use crate::core::marginal::marginal_records;
use crate::core::summary::StatSummary;
use crate::core::svg::{box_plot_document, ChartFrame};
use crate::datasets::ChartPreset;
use crate::t;

/// Fixed canvas used for exported charts, independent of the window size.
const EXPORT_WIDTH: f64 = 960.0;

/// The sweep currently on screen, as handed to the export panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSweep {
    pub title: String,
    /// File name stem, e.g. `length-total`.
    pub slug: String,
    pub series: Vec<StatSummary>,
    pub preset: ChartPreset,
    pub style: BoxPlotStyle,
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ExportKind {
    Json,
    Csv,
    Svg,
    #[cfg(not(target_arch = "wasm32"))]
    Png,
}

#[component]
pub fn ResultsExportPanel(sweep: ExportSweep) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("results-card__meta".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "results-card__meta results-card__meta--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "results-card__meta results-card__meta--error".to_string(),
            err.clone(),
        )),
    };

    let handler = move |kind: ExportKind| {
        let sweep = sweep.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_: MouseEvent| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(working_label(kind)));
            let outcome = run_export(kind, &sweep);
            match outcome {
                Ok(message) => {
                    tracing::info!(?kind, slug = %sweep.slug, "export finished");
                    status_signal.set(ExportStatus::Done(message));
                }
                Err(err) => {
                    tracing::warn!(?kind, %err, "export failed");
                    status_signal.set(ExportStatus::Error(t!("export-failed", reason = err.to_string())));
                }
            }
            busy_signal.set(false);
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let png_button = rsx! {
        button {
            r#type: "button",
            class: "button button--ghost",
            disabled: busy(),
            onclick: handler(ExportKind::Png),
            {t!("export-png")}
        }
    };
    // Browsers get the SVG only; rasterising needs the native renderer.
    #[cfg(target_arch = "wasm32")]
    let png_button = rsx! {};

    rsx! {
        section { class: "results-card results-export",
            div { class: "results-card__header",
                h2 { {t!("export-title")} }
            }
            p { class: "results-card__meta", {t!("export-intro")} }

            div { class: "results-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: handler(ExportKind::Json),
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: handler(ExportKind::Csv),
                    {t!("export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: handler(ExportKind::Svg),
                    {t!("export-svg")}
                }
                {png_button}
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn working_label(kind: ExportKind) -> String {
    match kind {
        ExportKind::Json => t!("export-working-json"),
        ExportKind::Csv => t!("export-working-csv"),
        ExportKind::Svg => t!("export-working-svg"),
        #[cfg(not(target_arch = "wasm32"))]
        ExportKind::Png => t!("export-working-png"),
    }
}

fn run_export(kind: ExportKind, sweep: &ExportSweep) -> Result<String, ExportError> {
    if sweep.series.is_empty() {
        return Err(ExportError::Empty);
    }
    let stamp = timestamp_slug();
    match kind {
        ExportKind::Json => {
            let json = serde_json::to_string_pretty(&sweep.series)?;
            copy_to_clipboard(json.clone())?;
            let filename = format!("crackbench-{}-{stamp}.json", sweep.slug);
            let delivery = download_bytes(&filename, "application/json", json.into_bytes())?;
            Ok(match delivery {
                Some(path) => t!("export-json-saved", path = path),
                None => t!("export-json-copied"),
            })
        }
        ExportKind::Csv => {
            let filename = format!("crackbench-{}-{stamp}.csv", sweep.slug);
            let delivery = download_bytes(&filename, "text/csv", build_csv(&sweep.series).into_bytes())?;
            Ok(saved_message(delivery))
        }
        ExportKind::Svg => {
            let filename = format!("crackbench-{}-{stamp}.svg", sweep.slug);
            let markup = build_svg(sweep)?;
            let delivery = download_bytes(&filename, "image/svg+xml", markup.into_bytes())?;
            Ok(saved_message(delivery))
        }
        #[cfg(not(target_arch = "wasm32"))]
        ExportKind::Png => {
            let filename = format!("crackbench-{}-{stamp}.png", sweep.slug);
            let png = rasterize(&build_svg(sweep)?)?;
            let delivery = download_bytes(&filename, "image/png", png)?;
            Ok(saved_message(delivery))
        }
    }
}

fn saved_message(delivery: Option<String>) -> String {
    match delivery {
        Some(path) => t!("export-saved", path = path),
        None => t!("export-download-started"),
    }
}

/// One row per category; `marginal` and `growth` are blank for the first.
fn build_csv(series: &[StatSummary]) -> String {
    let records = marginal_records(series);
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(series.len() + 1);
    rows.push(
        [
            "category", "min", "q1", "median", "q3", "max", "mean", "n", "marginal", "growth",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );

    for (index, summary) in series.iter().enumerate() {
        let (marginal, growth) = index
            .checked_sub(1)
            .and_then(|i| records.get(i))
            .map(|r| (format!("{:.2}", r.marginal_seconds), format_growth(r.growth)))
            .unwrap_or_default();
        rows.push(vec![
            summary.category.clone(),
            summary.min.to_string(),
            summary.q1.to_string(),
            summary.median.to_string(),
            summary.q3.to_string(),
            summary.max.to_string(),
            summary.mean.map(|m| m.to_string()).unwrap_or_default(),
            summary.sample_size.to_string(),
            marginal,
            growth,
        ]);
    }

    let mut csv = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn build_svg(sweep: &ExportSweep) -> Result<String, ExportError> {
    let scale = sweep
        .preset
        .scale_for(&sweep.series)
        .ok_or_else(|| ExportError::Render("no usable value range".into()))?;
    let frame = ChartFrame::new(EXPORT_WIDTH, sweep.preset.nominal_height);
    Ok(box_plot_document(
        &sweep.title,
        &sweep.series,
        &scale,
        &sweep.style,
        &frame,
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize(svg: &str) -> Result<Vec<u8>, ExportError> {
    const SCALE: f32 = 2.0;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|err| ExportError::Render(err.to_string()))?;

    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * SCALE).ceil() as u32;
    let height = (size.height() as f32 * SCALE).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Render("empty canvas".into()))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(SCALE, SCALE),
        &mut pixmap.as_mut(),
    );
    pixmap
        .encode_png()
        .map_err(|err| ExportError::Render(err.to_string()))
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(ExportError::Browser("window unavailable"))?;
        let document = window
            .document()
            .ok_or(ExportError::Browser("document unavailable"))?;
        let body = document.body().ok_or(ExportError::Browser("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| ExportError::Browser("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| ExportError::Browser("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ExportError::Clipboard("copy blocked by the browser".into()))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

/// Browser: triggers a download and returns `None`. Native: writes into the
/// export directory and returns the file path.
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Browser("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Browser("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Browser("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Browser("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| ExportError::Browser("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(ExportError::Browser("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        fs::write(&path, bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Crackbench", "Crackbench")
        .ok_or(ExportError::ExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Domain;

    fn summary(category: &str, median: f64, mean: Option<f64>) -> StatSummary {
        StatSummary {
            category: category.to_string(),
            min: median / 2.0,
            q1: median * 0.8,
            median,
            q3: median * 1.2,
            max: median * 2.0,
            mean,
            sample_size: 5,
        }
    }

    fn sweep(series: Vec<StatSummary>) -> ExportSweep {
        ExportSweep {
            title: "Length & time".into(),
            slug: "length-total".into(),
            series,
            preset: ChartPreset {
                nominal_height: 450.0,
                domain: Domain::Fixed {
                    y_min: 10.0,
                    y_max: 100_000.0,
                },
            },
            style: BoxPlotStyle::standard(),
        }
    }

    #[test]
    fn csv_has_header_and_blank_first_marginal() {
        let csv = build_csv(&[
            summary("8", 14.0, Some(14.0)),
            summary("9", 20.0, Some(21.0)),
        ]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "category,min,q1,median,q3,max,mean,n,marginal,growth");
        assert!(lines[1].ends_with(",5,,"));
        assert!(lines[2].ends_with(",5,7.00,50.0%"));
    }

    #[test]
    fn csv_leaves_missing_mean_empty() {
        let csv = build_csv(&[summary("Level 1", 30.0, None)]);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[6], "");
        assert_eq!(fields[7], "5");
    }

    #[test]
    fn escape_csv_quotes_special_characters() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn svg_snapshot_uses_export_canvas() {
        let markup = build_svg(&sweep(vec![summary("8", 14.0, Some(15.0))])).unwrap();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains("width='960'"));
        assert!(markup.contains("Length &amp; time"));
    }

    #[test]
    fn empty_sweep_is_rejected() {
        let err = run_export(ExportKind::Csv, &sweep(Vec::new())).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
    }

    #[test]
    fn timestamp_slug_is_compact() {
        let slug = timestamp_slug();
        assert_eq!(slug.len(), 15);
        assert_eq!(slug.as_bytes()[8], b'_');
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn png_rasterises_snapshot() {
        let markup = build_svg(&sweep(vec![summary("8", 14.0, Some(15.0))])).unwrap();
        let png = rasterize(&markup).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
