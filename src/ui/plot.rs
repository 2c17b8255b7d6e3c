use blooming_insights::stats::CorrelationMatrix;
use blooming_insights::Attribute;
use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text,
};

use crate::color::{attribute_color, contrast_text, heatmap_color};
use crate::state::{AppState, Chart, ChartData};

// ---------------------------------------------------------------------------
// Central panel – active chart
// ---------------------------------------------------------------------------

/// Render the selected chart in the central panel.
pub fn chart(ui: &mut Ui, state: &AppState) {
    let Some(data) = &state.charts else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select at least one species to view the gallery");
        });
        return;
    };

    ui.heading(state.active_chart.title());
    ui.separator();

    match state.active_chart {
        Chart::GrowthJourney => growth_journey(ui, data),
        Chart::PetalMeans => petal_means(ui, state, data),
        Chart::SepalHistogram => sepal_histogram(ui, state, data),
        Chart::SepalPetalScatter => sepal_petal_scatter(ui, state, data),
        Chart::CorrelationHeatmap => correlation_heatmap(ui, &state.matrix),
    }
}

fn growth_journey(ui: &mut Ui, data: &ChartData) {
    Plot::new("growth_journey")
        .legend(Legend::default())
        .x_axis_label("Flower Observation Number")
        .y_axis_label("Measurement (cm)")
        .show(ui, |plot_ui| {
            for series in &data.growth {
                let color = attribute_color(series.attribute);
                let name = series.attribute.short_name();
                let line: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(Line::new(line).name(name).color(color).width(2.5));
                let markers: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(Points::new(markers).name(name).color(color).radius(3.0));
            }
        });
}

fn petal_means(ui: &mut Ui, state: &AppState, data: &ChartData) {
    let labels: Vec<String> = data
        .petal_means
        .iter()
        .map(|(s, _)| s.name().to_string())
        .collect();

    Plot::new("petal_means")
        .x_axis_label("Iris Species")
        .y_axis_label("Average Petal Length (cm)")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (i, &(species, mean)) in data.petal_means.iter().enumerate() {
                let x = i as f64;
                let bar = Bar::new(x, mean)
                    .width(0.6)
                    .name(species.name())
                    .fill(state.color_map.translucent_for(species))
                    .stroke(Stroke::new(2.0, Color32::WHITE));
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(species.name()));
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x, mean + 0.1),
                        RichText::new(format!("{mean:.1}cm")).strong(),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

fn sepal_histogram(ui: &mut Ui, state: &AppState, data: &ChartData) {
    Plot::new("sepal_histogram")
        .legend(Legend::default())
        .x_axis_label("Sepal Length (cm)")
        .y_axis_label("Number of Flowers")
        .show(ui, |plot_ui| {
            for (species, hist) in &data.histograms {
                let width = hist.bin_width();
                let bars: Vec<Bar> = hist
                    .bars()
                    .map(|(centre, count)| {
                        Bar::new(centre, count as f64)
                            .width(width)
                            .stroke(Stroke::new(1.2, Color32::WHITE))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(species.name())
                        .color(state.color_map.translucent_for(*species)),
                );
            }
        });
}

fn sepal_petal_scatter(ui: &mut Ui, state: &AppState, data: &ChartData) {
    Plot::new("sepal_petal_scatter")
        .legend(Legend::default())
        .x_axis_label("Sepal Length (cm)")
        .y_axis_label("Petal Length (cm)")
        .show(ui, |plot_ui| {
            for (species, points) in &data.scatter {
                let series: PlotPoints = points.iter().copied().collect();
                plot_ui.points(
                    Points::new(series)
                        .name(species.name())
                        .color(state.color_map.translucent_for(*species))
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Heatmap: unit squares, row 0 at the top
// ---------------------------------------------------------------------------

fn correlation_heatmap(ui: &mut Ui, matrix: &CorrelationMatrix) {
    let attributes: Vec<Attribute> = matrix.attributes().to_vec();
    let n = attributes.len();
    let cells = blooming_insights::charts::correlation_heatmap(matrix);

    Plot::new("correlation_heatmap")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            for cell in &cells {
                let x = cell.column as f64;
                let y = (n - 1 - cell.row) as f64;
                heatmap_cell(plot_ui, x, y, cell.value);
            }
            for (i, attr) in attributes.iter().enumerate() {
                let y = (n - 1 - i) as f64 + 0.5;
                plot_ui.text(
                    Text::new(PlotPoint::new(-0.1, y), attr.short_name())
                        .anchor(Align2::RIGHT_CENTER),
                );
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64 + 0.5, -0.1), attr.short_name())
                        .anchor(Align2::CENTER_TOP),
                );
            }
        });
}

fn heatmap_cell(plot_ui: &mut PlotUi, x: f64, y: f64, value: f64) {
    let fill = heatmap_color(value);
    let square = PlotPoints::from(vec![[x, y], [x + 1.0, y], [x + 1.0, y + 1.0], [x, y + 1.0]]);
    plot_ui.polygon(
        Polygon::new(square)
            .fill_color(fill)
            .stroke(Stroke::new(1.0, Color32::WHITE)),
    );
    let label = if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{value:.2}")
    };
    plot_ui.text(
        Text::new(PlotPoint::new(x + 0.5, y + 0.5), label).color(contrast_text(fill)),
    );
}
