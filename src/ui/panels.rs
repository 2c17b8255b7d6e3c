use blooming_insights::{Attribute, Species};
use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, Chart};

// ---------------------------------------------------------------------------
// Left side panel – species filter and summary table
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Species");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    let counts = state.dataset.group_counts().clone();
    for (species, count) in counts {
        let mut checked = state.filters.contains(&species);
        let text = RichText::new(format!("{species}  ({count})"))
            .color(state.color_map.color_for(species));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_species(species);
        }
    }

    ui.add_space(8.0);
    ui.heading("Summary");
    ui.separator();

    let Some(charts) = &state.charts else {
        ui.label("No species selected.");
        return;
    };

    ui.label(RichText::new("mean ± std (cm)").weak());
    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::auto())
            .columns(Column::auto(), Attribute::ALL.len())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Species");
                });
                header.col(|ui| {
                    ui.strong("n");
                });
                for attr in Attribute::ALL {
                    header.col(|ui| {
                        ui.strong(attr.short_name());
                    });
                }
            })
            .body(|mut body| {
                for (species, summary) in &charts.summaries {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(species_label(*species));
                        });
                        row.col(|ui| {
                            ui.label(summary.count.to_string());
                        });
                        for attr in Attribute::ALL {
                            row.col(|ui| {
                                let text = summary
                                    .get(attr)
                                    .map(|s| format!("{:.2} ± {:.2}", s.mean, s.std_dev))
                                    .unwrap_or_default();
                                ui.label(text);
                            });
                        }
                    });
                }
            });
    });
}

fn species_label(species: Species) -> &'static str {
    species.name().trim_start_matches("Iris ")
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart tabs and the sample counter.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for chart in Chart::ALL {
            if ui
                .selectable_label(state.active_chart == chart, chart.tab_label())
                .clicked()
            {
                state.active_chart = chart;
            }
        }

        ui.separator();

        ui.label(format!(
            "{} flowers, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
    });
}
