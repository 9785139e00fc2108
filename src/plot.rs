//! Line charts of the measured timings.

use plotters::prelude::*;

use crate::driver::BenchmarkReport;

const X_LABEL: &str = "input size";
const Y_LABEL: &str = "execution time (seconds)";

/// A named series drawn in one colour.
struct Line<'a> {
    label: &'a str,
    color: RGBColor,
    secs: &'a [f64],
}

/// Writes the three charts into `out_dir`.
///
/// # Returns
/// * Paths of `iterative.svg`, `recursive.svg` and `comparison.svg`, or
///   nothing when the report holds no measurements.
pub fn render_charts<P: AsRef<std::path::Path>>(
    report: &BenchmarkReport,
    out_dir: P,
) -> anyhow::Result<Vec<std::path::PathBuf>> {
    if report.is_empty() {
        return Ok(Vec::new());
    }

    let iterative = Line {
        label: "Iterative",
        color: BLUE,
        secs: &report.iterative_secs,
    };
    let recursive = Line {
        label: "Recursive",
        color: GREEN,
        secs: &report.recursive_secs,
    };

    let charts = [
        ("iterative.svg", "Iterative algorithm time complexity", vec![&iterative]),
        ("recursive.svg", "Recursive algorithm time complexity", vec![&recursive]),
        (
            "comparison.svg",
            "Time comparison: iterative vs recursive",
            vec![&iterative, &recursive],
        ),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (file_name, title, lines) in charts {
        let path = out_dir.as_ref().join(file_name);
        draw_chart(&path, title, &report.sizes, &lines)?;
        written.push(path);
    }
    Ok(written)
}

fn draw_chart(
    path: &std::path::Path,
    title: &str,
    sizes: &[usize],
    lines: &[&Line],
) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{}", e))?;

    let x_min = sizes.first().copied().unwrap_or(0) as f64;
    let mut x_max = sizes.last().copied().unwrap_or(0) as f64;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let mut y_max = lines
        .iter()
        .flat_map(|line| line.secs.iter().copied())
        .fold(0.0_f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1e-9;
    }

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .set_all_label_area_size(60)
        .caption(title, ("sans-serif", 28))
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.05)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .light_line_style(BLACK.mix(0.08))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.2e}", v))
        .draw()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    for line in lines {
        let color = line.color;
        let points = sizes.iter().zip(line.secs).map(|(&s, &t)| (s as f64, t));
        chart
            .draw_series(LineSeries::new(points, &color))
            .map_err(|e| anyhow::anyhow!("{}", e))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    root.present().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}
