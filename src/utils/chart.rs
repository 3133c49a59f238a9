//! Horizontal bar chart for the quarter-by-quarter flow.

use crate::utils::formatting::fmt_num;

const BAR: char = '█';

/// One bar per `(label, value)`, scaled so the largest value spans `width`
/// cells. Negative values draw no bar.
pub fn bar_chart(series: &[(&str, f64)], width: usize) -> String {
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_w = series.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, v) in series {
        let cells = if max > 0.0 && *v > 0.0 {
            ((v / max) * width as f64).round() as usize
        } else {
            0
        };

        out.push_str(&format!(
            "{:<label_w$} │{} {}\n",
            label,
            BAR.to_string().repeat(cells),
            fmt_num(*v, 2),
        ));
    }
    out
}
