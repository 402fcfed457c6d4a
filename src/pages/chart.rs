//! Server-side SVG rendering of the visitors area chart.

#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub month: &'static str,
    pub desktop: u32,
}

pub const VISITORS: [Point; 6] = [
    Point { month: "January", desktop: 186 },
    Point { month: "February", desktop: 305 },
    Point { month: "March", desktop: 237 },
    Point { month: "April", desktop: 73 },
    Point { month: "May", desktop: 209 },
    Point { month: "June", desktop: 214 },
];

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 200.0;
const MARGIN_X: f64 = 12.0;
const MARGIN_TOP: f64 = 10.0;
const AXIS_HEIGHT: f64 = 24.0;
const GRID_LINES: usize = 4;

/// Short x-axis label: the first three characters of the month.
pub fn tick_label(month: &str) -> &str {
    match month.char_indices().nth(3) {
        Some((idx, _)) => &month[..idx],
        None => month,
    }
}

fn plot_bottom() -> f64 {
    HEIGHT - AXIS_HEIGHT
}

fn scale(data: &[Point]) -> Vec<(f64, f64)> {
    let max = data.iter().map(|p| p.desktop).max().unwrap_or(0).max(1) as f64;
    let step = if data.len() > 1 {
        (WIDTH - 2.0 * MARGIN_X) / (data.len() - 1) as f64
    } else {
        0.0
    };
    let span = plot_bottom() - MARGIN_TOP;
    data.iter()
        .enumerate()
        .map(|(i, p)| {
            let x = MARGIN_X + step * i as f64;
            let y = plot_bottom() - (p.desktop as f64 / max) * span;
            (x, y)
        })
        .collect()
}

/// Smooth line through `points` as cubic Béziers (Catmull-Rom tangents).
fn curve(points: &[(f64, f64)]) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut path = format!("M{x0:.1},{y0:.1}");
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];
        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        path.push_str(&format!(
            " C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    path
}

pub fn render_area_chart(data: &[Point]) -> String {
    let points = scale(data);
    let line = curve(&points);
    let bottom = plot_bottom();

    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Area chart of desktop visitors">"#
    );

    let span = bottom - MARGIN_TOP;
    for i in 0..=GRID_LINES {
        let y = MARGIN_TOP + span * i as f64 / GRID_LINES as f64;
        svg.push_str(&format!(
            r#"<line class="grid" x1="0" y1="{y:.1}" x2="{WIDTH}" y2="{y:.1}"/>"#
        ));
    }

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        svg.push_str(&format!(
            r#"<path class="area" d="{line} L{:.1},{bottom:.1} L{:.1},{bottom:.1} Z"/>"#,
            last.0, first.0
        ));
        svg.push_str(&format!(r#"<path class="line" d="{line}"/>"#));
    }

    for (point, (x, y)) in data.iter().zip(&points) {
        svg.push_str(&format!(
            r#"<circle class="dot" cx="{x:.1}" cy="{y:.1}" r="4"><title>{}: {}</title></circle>"#,
            point.month, point.desktop
        ));
        svg.push_str(&format!(
            r#"<text class="tick" x="{x:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            HEIGHT - 6.0,
            tick_label(point.month)
        ));
    }

    svg.push_str("</svg>");
    svg
}
