//! SVG chart rendering via plotters.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ChartDirective, ChartKind, Palette, RenderError, RenderedFigure};
use crate::table::ResultTable;

const BAR_SIZE: (u32, u32) = (900, 520);
const PIE_SIZE: (u32, u32) = (640, 640);

/// Draw the chart a directive describes over a fetched table.
///
/// Column 0 supplies the category labels, column 1 the measure; the directive
/// already guarantees both columns exist. Fails with [`RenderError`] when the
/// measure column is non-numeric or the table is empty, instead of handing a
/// broken shape to the backend.
pub fn render(table: &ResultTable, directive: &ChartDirective) -> Result<RenderedFigure, RenderError> {
    if table.column_count() < 2 {
        return Err(RenderError::NotEnoughColumns {
            found: table.column_count(),
        });
    }
    if table.row_count() == 0 {
        return Err(RenderError::EmptyTable);
    }

    let labels = table.label_column();
    let values = table
        .numeric_column(1)
        .ok_or_else(|| RenderError::NonNumeric {
            column: directive.y_column.clone(),
        })?;

    let svg = match directive.kind {
        ChartKind::Bar => draw_bar(&labels, &values, directive)?,
        ChartKind::Pie => draw_pie(&labels, &values, directive)?,
    };

    Ok(RenderedFigure { svg })
}

fn draw_bar(
    labels: &[String],
    values: &[f64],
    directive: &ChartDirective,
) -> Result<String, RenderError> {
    let n = values.len();
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    // Keep the baseline in range; profit sums can go negative.
    let y_top = if max > 0.0 { max * 1.1 } else { 1.0 };
    let y_bottom = if min < 0.0 { min * 1.1 } else { 0.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, BAR_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&directive.title, ("sans-serif", 20))
            .margin(14)
            .x_label_area_size(120)
            .y_label_area_size(80)
            .build_cartesian_2d((0..n).into_segmented(), y_bottom..y_top)
            .map_err(backend)?;

        let label_font = TextStyle::from(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .pos(Pos::new(HPos::Left, VPos::Center));

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n + 1)
            .x_label_style(label_font)
            .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .y_desc(directive.y_column.clone())
            .draw()
            .map_err(backend)?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, v)| {
                let color = palette_color(directive.palette, i, n);
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), *v),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, 6, 6);
                bar
            }))
            .map_err(backend)?;

        root.present().map_err(backend)?;
    }
    Ok(svg)
}

fn draw_pie(
    labels: &[String],
    values: &[f64],
    directive: &ChartDirective,
) -> Result<String, RenderError> {
    let n = values.len();
    let colors: Vec<RGBColor> = (0..n).map(|i| palette_color(directive.palette, i, n)).collect();
    let sizes: Vec<f64> = values.to_vec();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PIE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(backend)?;
        let root = root
            .titled(&directive.title, ("sans-serif", 20))
            .map_err(backend)?;

        let center = (PIE_SIZE.0 as i32 / 2, PIE_SIZE.1 as i32 / 2);
        let radius = PIE_SIZE.0 as f64 * 0.32;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, labels);
        pie.start_angle(140.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 12).into_font().color(&BLACK));
        root.draw(&pie).map_err(backend)?;

        root.present().map_err(backend)?;
    }
    Ok(svg)
}

fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Sample the palette gradient at bar `i` of `n`.
fn palette_color(palette: Palette, i: usize, n: usize) -> RGBColor {
    let stops: &[(u8, u8, u8)] = match palette {
        Palette::Coolwarm => &[(59, 76, 192), (221, 221, 221), (180, 4, 38)],
        Palette::Viridis => &[
            (68, 1, 84),
            (59, 82, 139),
            (33, 145, 140),
            (94, 201, 98),
            (253, 231, 37),
        ],
    };

    let t = if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    };
    let scaled = t * (stops.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - idx as f64;

    let (r1, g1, b1) = stops[idx];
    let (r2, g2, b2) = stops[idx + 1];
    RGBColor(lerp(r1, r2, frac), lerp(g1, g2, frac), lerp(b1, b2, frac))
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, ResultTable};
    use crate::viz::{ChartDirective, Classification, RuleSet};

    fn directive_for(label: &str, table: &ResultTable) -> ChartDirective {
        let classification = RuleSet::standard().classify(label);
        ChartDirective::derive(label, classification, table).unwrap()
    }

    fn revenue_table() -> ResultTable {
        ResultTable::new(
            vec!["year".into(), "total_revenue".into()],
            vec![
                vec![Cell::Int(2021), Cell::Text("1000".into())],
                vec![Cell::Int(2022), Cell::Text("1500".into())],
            ],
        )
    }

    #[test]
    fn test_bar_chart_renders_svg() {
        let table = revenue_table();
        let directive = directive_for("10. Total revenue generated per year", &table);
        let figure = render(&table, &directive).unwrap();
        assert!(figure.svg.contains("<svg"));
        assert!(figure.svg.contains(&directive.title));
    }

    #[test]
    fn test_single_row_renders_one_wedge() {
        let table = ResultTable::new(
            vec!["category".into(), "total_discount".into()],
            vec![vec![Cell::Text("Furniture".into()), Cell::Float(420.0)]],
        );
        let directive = directive_for("3. Total discount given for each category", &table);
        assert_eq!(directive.kind, super::ChartKind::Pie);
        let figure = render(&table, &directive).unwrap();
        assert!(figure.svg.contains("<svg"));
        // The sole wedge takes the whole pie.
        assert!(figure.svg.contains("100"));
    }

    #[test]
    fn test_too_few_columns_is_a_render_error() {
        for columns in [Vec::new(), vec!["only".to_string()]] {
            let found = columns.len();
            let table = ResultTable::new(columns, vec![]);
            let directive = ChartDirective {
                kind: super::ChartKind::Bar,
                palette: Palette::Viridis,
                x_column: String::new(),
                y_column: String::new(),
                title: "narrow".into(),
            };
            let err = render(&table, &directive).unwrap_err();
            assert!(
                matches!(err, RenderError::NotEnoughColumns { found: f } if f == found),
                "columns: {found}"
            );
        }
    }

    #[test]
    fn test_empty_table_is_a_render_error() {
        let table = ResultTable::new(vec!["a".into(), "b".into()], vec![]);
        let directive = ChartDirective {
            kind: super::ChartKind::Bar,
            palette: Palette::Viridis,
            x_column: "a".into(),
            y_column: "b".into(),
            title: "empty".into(),
        };
        assert!(matches!(
            render(&table, &directive).unwrap_err(),
            RenderError::EmptyTable
        ));
    }

    #[test]
    fn test_non_numeric_measure_is_a_render_error() {
        let table = ResultTable::new(
            vec!["city".into(), "state".into()],
            vec![vec![
                Cell::Text("Austin".into()),
                Cell::Text("Texas".into()),
            ]],
        );
        let directive = directive_for("18. Top 5 cities with highest product variety", &table);
        let err = render(&table, &directive).unwrap_err();
        assert!(matches!(err, RenderError::NonNumeric { column } if column == "state"));
    }

    #[test]
    fn test_palette_endpoints() {
        assert_eq!(palette_color(Palette::Coolwarm, 0, 5), RGBColor(59, 76, 192));
        assert_eq!(palette_color(Palette::Coolwarm, 4, 5), RGBColor(180, 4, 38));
        // A single bar sits at the start of the gradient.
        assert_eq!(palette_color(Palette::Viridis, 0, 1), RGBColor(68, 1, 84));
    }

    #[test]
    fn test_negative_profit_keeps_baseline_in_range() {
        let table = ResultTable::new(
            vec!["category".into(), "total_profit".into()],
            vec![
                vec![Cell::Text("Furniture".into()), Cell::Float(-250.0)],
                vec![Cell::Text("Technology".into()), Cell::Float(900.0)],
            ],
        );
        let directive = directive_for("6. Total profit per category", &table);
        render(&table, &directive).unwrap();
    }

    #[test]
    fn test_classification_used_verbatim() {
        // Render honors whatever the rule table decided; it never reclassifies.
        let table = revenue_table();
        let classification = Classification {
            kind: super::ChartKind::Pie,
            palette: Palette::Viridis,
        };
        let directive =
            ChartDirective::derive("10. Total revenue generated per year", classification, &table)
                .unwrap();
        let figure = render(&table, &directive).unwrap();
        assert!(figure.svg.contains("<svg"));
    }
}
