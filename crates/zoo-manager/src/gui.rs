//! Desktop window for zoo-manager.
//!
//! Draws the record form with egui: five labeled inputs, the Add and Delete
//! buttons, and a clickable table of every stored animal. All decisions are
//! made by [`Controller`]; this module only forwards clicks and keystrokes to
//! it and shows any error it returns as a blocking notice.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use tracing::{info, warn};

use crate::config::Config;
use crate::controller::{Controller, Field};
use crate::error::{Error, Result};
use crate::record::TableRow;
use crate::storage::RecordStore;

/// Title of the main window.
pub const WINDOW_TITLE: &str = "Zoo Animal Manager";

/// Open the record window and block until it is closed.
///
/// The controller, and the store inside it, are dropped when the window closes.
///
/// # Errors
///
/// Returns [`Error::Gui`] if the window cannot be created.
pub fn run<S>(config: &Config, controller: Controller<S>) -> Result<()>
where
    S: RecordStore + 'static,
{
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([480.0, 360.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    info!("Launching window");
    let app = ZooApp::new(controller);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| Error::gui(e.to_string()))
}

/// The egui application state.
#[derive(Debug)]
pub struct ZooApp<S> {
    controller: Controller<S>,
    /// Message of the notice currently blocking the form.
    notice: Option<String>,
}

impl<S: RecordStore> ZooApp<S> {
    /// Wrap a controller for display.
    #[must_use]
    pub fn new(controller: Controller<S>) -> Self {
        Self {
            controller,
            notice: None,
        }
    }

    /// The controller behind the window.
    #[must_use]
    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    /// Mutable access to the controller behind the window.
    pub fn controller_mut(&mut self) -> &mut Controller<S> {
        &mut self.controller
    }

    /// The notice currently shown, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handle a click on "Add Animal".
    pub fn press_add(&mut self) {
        let result = self.controller.add().map(drop);
        self.report(result);
    }

    /// Handle a click on "Delete Animal".
    pub fn press_delete(&mut self) {
        let result = self.controller.delete().map(drop);
        self.report(result);
    }

    /// Handle a click on a table row.
    pub fn press_row(&mut self, index: usize) {
        let result = self.controller.select_row(index);
        self.report(result);
    }

    /// Handle Escape: deselect the highlighted row.
    pub fn press_escape(&mut self) {
        self.controller.clear_selection();
    }

    /// Close the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            if err.is_persistence_error() {
                warn!("Storage error: {}", err);
            } else {
                info!("Rejected action: {}", err);
            }
            self.notice = Some(err.to_string());
        }
    }

    /// Draw one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.show_notice(ctx);

        let enabled = self.notice.is_none();
        if enabled && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.press_escape();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                self.form(ui);
                ui.add_space(8.0);
                self.buttons(ui);
                ui.separator();
                self.table(ui);
            });
        });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_notice();
        }
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        let fields = self.controller.fields_mut();
        egui::Grid::new("animal_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for field in Field::ALL {
                    ui.label(field.label());
                    ui.add(
                        egui::TextEdit::singleline(fields.get_mut(field)).desired_width(260.0),
                    );
                    ui.end_row();
                }
            });
    }

    fn buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Animal").clicked() {
                self.press_add();
            }
            if ui.button("Delete Animal").clicked() {
                self.press_delete();
            }
        });
    }

    fn table(&mut self, ui: &mut egui::Ui) {
        let selected = self.controller.selected_index();
        let rows = self.controller.rows();
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(40.0))
            .columns(Column::auto().at_least(80.0), 4)
            .column(Column::remainder())
            .header(24.0, |mut header| {
                for heading in TableRow::COLUMNS {
                    header.col(|ui| {
                        ui.strong(heading);
                    });
                }
            })
            .body(|body| {
                body.rows(22.0, rows.len(), |mut row| {
                    let index = row.index();
                    row.set_selected(selected == Some(index));
                    for cell in rows[index].cells() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some(index);
                    }
                });
            });

        if let Some(index) = clicked {
            self.press_row(index);
        }
    }
}

impl<S: RecordStore> eframe::App for ZooApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
