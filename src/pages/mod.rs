//! HTML pages served next to the API. Both are rendered in the browser;
//! the server only fills in the chart.

pub mod chart;

use axum::response::Html;

use crate::provider::FAST_MODEL_ALIAS;

const BOARD_HTML: &str = include_str!("board.html");
const ASK_HTML: &str = include_str!("ask.html");
const STYLE_CSS: &str = include_str!("style.css");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Info => "banner banner-info",
            BannerKind::Success => "banner banner-success",
            BannerKind::Warning => "banner banner-warning",
            BannerKind::Error => "banner banner-error",
        }
    }
}

pub const MODEL_CHOICES: [&str; 3] = ["gpt-4o", "gpt-4o-mini", FAST_MODEL_ALIAS];

pub fn render_board() -> String {
    BOARD_HTML
        .replace("{{style}}", STYLE_CSS)
        .replace("{{banner_class}}", BannerKind::Success.class())
        .replace("{{chart}}", &chart::render_area_chart(&chart::VISITORS))
}

pub fn render_ask() -> String {
    let options: String = MODEL_CHOICES
        .iter()
        .map(|model| format!(r#"<option value="{model}">{model}</option>"#))
        .collect();
    ASK_HTML
        .replace("{{style}}", STYLE_CSS)
        .replace("{{model_options}}", &options)
        .replace("{{error_class}}", BannerKind::Error.class())
}

pub async fn board() -> Html<String> {
    Html(render_board())
}

pub async fn ask() -> Html<String> {
    Html(render_ask())
}
