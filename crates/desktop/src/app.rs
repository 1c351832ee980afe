//! Application state and screen rendering.

use eframe::egui::{self, Align2, Color32, RichText, Vec2};

use stockdesk_catalog::Catalog;
use stockdesk_core::{DomainError, Entity, ProductId};

use crate::dialog::Dialog;
use crate::forms::{AddForm, IdForm, UpdateForm};
use crate::theme;

/// The screen currently shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    AddProduct,
    ViewProducts,
    UpdateProduct,
    DeleteProduct,
    SearchProduct,
}

/// Top-level application state: the catalog plus per-screen form state.
pub struct StockdeskApp {
    catalog: Catalog,
    screen: Screen,
    add_form: AddForm,
    update_form: UpdateForm,
    delete_form: IdForm,
    search_form: IdForm,
    search_result: String,
    dialog: Option<Dialog>,
}

impl StockdeskApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::default(),
            add_form: AddForm::default(),
            update_form: UpdateForm::default(),
            delete_form: IdForm::default(),
            search_form: IdForm::default(),
            search_result: String::new(),
            dialog: None,
        }
    }

    fn menu(&mut self, ui: &mut egui::Ui) {
        let entries = [
            ("1. Add Product", Some(Screen::AddProduct)),
            ("2. View All Products", Some(Screen::ViewProducts)),
            ("3. Update Product", Some(Screen::UpdateProduct)),
            ("4. Delete Product", Some(Screen::DeleteProduct)),
            ("5. Search Product by ID", Some(Screen::SearchProduct)),
            ("6. Exit", None),
        ];

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            for (label, target) in entries {
                let button = egui::Button::new(
                    RichText::new(label)
                        .size(theme::MENU_BUTTON_SIZE)
                        .strong()
                        .color(theme::DARK_BLUE),
                )
                .fill(Color32::WHITE);
                if ui.add_sized([300.0, 50.0], button).clicked() {
                    match target {
                        Some(screen) => self.screen = screen,
                        None => ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close),
                    }
                }
                ui.add_space(10.0);
            }
        });
    }

    fn add_product(&mut self, ui: &mut egui::Ui) {
        screen_title(ui, "Add New Product");

        egui::Grid::new("add_product_form")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label(field_label("Product ID (0XX):"));
                ui.text_edit_singleline(&mut self.add_form.id);
                ui.end_row();

                ui.label(field_label("Name:"));
                ui.text_edit_singleline(&mut self.add_form.name);
                ui.end_row();

                ui.label(field_label("Price (AED 0.00):"));
                ui.text_edit_singleline(&mut self.add_form.price);
                ui.end_row();

                ui.label(field_label("Quantity:"));
                ui.text_edit_singleline(&mut self.add_form.quantity);
                ui.end_row();

                ui.label(field_label("Is Perishable?"));
                ui.checkbox(&mut self.add_form.perishable, "");
                ui.end_row();

                ui.label(field_label("Expiry Date (DD/MM/YYYY):"));
                ui.add_enabled(
                    self.add_form.perishable,
                    egui::TextEdit::singleline(&mut self.add_form.expiry),
                );
                ui.end_row();
            });

        // The expiry field only means something for perishables.
        if !self.add_form.perishable && !self.add_form.expiry.is_empty() {
            self.add_form.expiry.clear();
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Save Product").clicked() {
                self.save_new_product();
            }
            if ui.button("Back to Menu").clicked() {
                self.screen = Screen::Menu;
            }
        });
    }

    fn save_new_product(&mut self) {
        let built = self.add_form.build();
        match built.and_then(|product| {
            let id = product.id().clone();
            self.catalog.add(product)?;
            Ok(id)
        }) {
            Ok(id) => {
                tracing::info!(%id, total = self.catalog.len(), "product added");
                self.add_form.clear();
                self.dialog = Some(Dialog::success("Product added successfully!"));
                self.screen = Screen::Menu;
            }
            Err(err) => {
                tracing::warn!(error = %err, "add product rejected");
                self.dialog = Some(Dialog::error("Input Error", &err));
            }
        }
    }

    fn view_products(&mut self, ui: &mut egui::Ui) {
        screen_title(ui, "Current Inventory List");

        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, theme::DARK_BLUE))
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        if self.catalog.is_empty() {
                            ui.label(body_text("No products in inventory."));
                        } else {
                            for product in self.catalog.iter() {
                                ui.label(
                                    RichText::new(product.summary())
                                        .monospace()
                                        .color(theme::DARK_BLUE),
                                );
                            }
                        }
                    });
            });

        ui.add_space(16.0);
        if ui.button("Back to Menu").clicked() {
            self.screen = Screen::Menu;
        }
    }

    fn update_product(&mut self, ui: &mut egui::Ui) {
        screen_title(ui, "Update Existing Product");

        egui::Grid::new("update_product_form")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label(field_label("Product ID (0XX):"));
                ui.text_edit_singleline(&mut self.update_form.id);
                ui.end_row();

                ui.label(field_label("New Price (AED 0.00):"));
                ui.text_edit_singleline(&mut self.update_form.price);
                ui.end_row();

                ui.label(field_label("New Quantity:"));
                ui.text_edit_singleline(&mut self.update_form.quantity);
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label(field_label(&self.current_info()));

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Update Product").clicked() {
                self.apply_update();
            }
            if ui.button("Back to Menu").clicked() {
                self.screen = Screen::Menu;
            }
        });
    }

    /// Live preview of the targeted product while its id is being typed.
    fn current_info(&self) -> String {
        if self.update_form.id.trim().is_empty() {
            return "Current Info: N/A".to_owned();
        }
        match ProductId::new(&self.update_form.id) {
            Ok(id) => match self.catalog.find(&id) {
                Ok(product) => format!(
                    "Current Price: AED{}, Qty: {}",
                    product.price(),
                    product.quantity()
                ),
                Err(_) => "Current Info: Product Not Found".to_owned(),
            },
            Err(err) => format!("Current Info: {err}"),
        }
    }

    fn apply_update(&mut self) {
        let parsed = self.update_form.parsed();
        match parsed.and_then(|(id, price, quantity)| {
            self.catalog.update(&id, price, quantity)?;
            Ok(id)
        }) {
            Ok(id) => {
                tracing::info!(%id, "product updated");
                self.update_form.clear();
                self.dialog = Some(Dialog::success(format!(
                    "Product ID {id} updated successfully!"
                )));
                self.screen = Screen::Menu;
            }
            Err(err) => {
                tracing::warn!(error = %err, "update rejected");
                let title = match err {
                    DomainError::NotFound => "Update Failed",
                    _ => "Input Error",
                };
                self.dialog = Some(Dialog::error(title, &err));
            }
        }
    }

    fn delete_product(&mut self, ui: &mut egui::Ui) {
        screen_title(ui, "Delete Product by ID");

        ui.horizontal(|ui| {
            ui.label(field_label("Enter Product ID (0XX):"));
            ui.text_edit_singleline(&mut self.delete_form.id);
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Delete Product").clicked() {
                match self.delete_form.parsed() {
                    Ok(id) => self.dialog = Some(Dialog::confirm_delete(id)),
                    Err(err) => self.dialog = Some(Dialog::error("Input Error", &err)),
                }
            }
            if ui.button("Back to Menu").clicked() {
                self.screen = Screen::Menu;
            }
        });
    }

    fn search_product(&mut self, ui: &mut egui::Ui) {
        screen_title(ui, "Search Product by ID");

        ui.horizontal(|ui| {
            ui.label(field_label("Enter Product ID (0XX):"));
            ui.text_edit_singleline(&mut self.search_form.id);
        });

        ui.add_space(8.0);
        if ui.button("Search").clicked() {
            self.run_search();
        }

        ui.add_space(8.0);
        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, theme::DARK_BLUE))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_min_height(80.0);
                ui.label(
                    RichText::new(&self.search_result)
                        .monospace()
                        .color(theme::DARK_BLUE),
                );
            });

        ui.add_space(16.0);
        if ui.button("Back to Menu").clicked() {
            self.screen = Screen::Menu;
        }
    }

    fn run_search(&mut self) {
        let parsed = self.search_form.parsed();
        // Search failures stay inline instead of opening a dialog.
        self.search_result = match parsed.and_then(|id| {
            let product = self.catalog.find(&id)?;
            Ok(product.summary())
        }) {
            Ok(summary) => format!("Product Found:\n{summary}"),
            Err(err) => err.to_string(),
        };
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.clone() else {
            return;
        };

        match dialog {
            Dialog::Success { message } => {
                egui::Window::new("Success")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(body_text(&message));
                        if ui.button("OK").clicked() {
                            self.dialog = None;
                        }
                    });
            }
            Dialog::Error { title, message } => {
                egui::Window::new(title)
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(body_text(&message));
                        if ui.button("OK").clicked() {
                            self.dialog = None;
                        }
                    });
            }
            Dialog::ConfirmDelete { id } => {
                egui::Window::new("Confirm Deletion")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
                    .show(ctx, |ui| {
                        ui.label(body_text(&format!(
                            "Are you sure you want to delete Product ID: {id}?"
                        )));
                        ui.horizontal(|ui| {
                            if ui.button("Yes").clicked() {
                                self.confirm_delete(&id);
                            }
                            if ui.button("No").clicked() {
                                self.dialog = None;
                            }
                        });
                    });
            }
        }
    }

    fn confirm_delete(&mut self, id: &ProductId) {
        match self.catalog.remove(id) {
            Ok(removed) => {
                tracing::info!(%id, name = removed.name(), total = self.catalog.len(), "product deleted");
                self.delete_form.clear();
                self.dialog = Some(Dialog::success(format!(
                    "Product ID {id} deleted successfully!"
                )));
                self.screen = Screen::Menu;
            }
            Err(err) => {
                tracing::warn!(error = %err, "delete rejected");
                self.dialog = Some(Dialog::error("Deletion Failed", &err));
            }
        }
    }
}

impl eframe::App for StockdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(theme::PALE_BLUE)
                    .inner_margin(egui::Margin::symmetric(10.0, 20.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Welcome to the Stockdesk Inventory Management System")
                            .size(theme::HEADING_SIZE)
                            .strong()
                            .color(theme::DARK_BLUE),
                    );
                });
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(theme::PALE_BLUE)
                    .inner_margin(egui::Margin::symmetric(10.0, 5.0)),
            )
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(body_text(&format!("Total Items: {}", self.catalog.len())));
                });
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme::PALE_BLUE)
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| match self.screen {
                Screen::Menu => self.menu(ui),
                Screen::AddProduct => self.add_product(ui),
                Screen::ViewProducts => self.view_products(ui),
                Screen::UpdateProduct => self.update_product(ui),
                Screen::DeleteProduct => self.delete_product(ui),
                Screen::SearchProduct => self.search_product(ui),
            });

        self.show_dialog(ctx);
    }
}

fn screen_title(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(theme::SUBHEADING_SIZE)
                .strong()
                .color(theme::DARK_BLUE),
        );
    });
    ui.add_space(16.0);
}

fn field_label(text: &str) -> RichText {
    RichText::new(text)
        .size(theme::BODY_SIZE)
        .color(theme::DARK_BLUE)
}

fn body_text(text: &str) -> RichText {
    RichText::new(text)
        .size(theme::BODY_SIZE)
        .color(theme::DARK_BLUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_catalog::Catalog;

    #[test]
    fn new_app_starts_on_the_menu_with_no_dialog() {
        let app = StockdeskApp::new(Catalog::seeded().unwrap());
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.dialog.is_none());
        assert_eq!(app.catalog.len(), 5);
    }

    #[test]
    fn save_new_product_adds_and_returns_to_menu() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());
        app.screen = Screen::AddProduct;
        app.add_form.id = "06".to_owned();
        app.add_form.name = "Crisps".to_owned();
        app.add_form.price = "1.75".to_owned();
        app.add_form.quantity = "20".to_owned();

        app.save_new_product();

        assert_eq!(app.catalog.len(), 6);
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.add_form.id.is_empty());
        assert!(matches!(app.dialog, Some(Dialog::Success { .. })));
    }

    #[test]
    fn save_duplicate_keeps_form_and_reports_input_error() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());
        app.add_form.id = "01".to_owned();
        app.add_form.name = "Water Again".to_owned();
        app.add_form.price = "1.00".to_owned();
        app.add_form.quantity = "5".to_owned();

        app.save_new_product();

        assert_eq!(app.catalog.len(), 5);
        assert_eq!(app.add_form.id, "01");
        match &app.dialog {
            Some(Dialog::Error { title, .. }) => assert_eq!(title, "Input Error"),
            other => panic!("expected Error dialog, got {other:?}"),
        }
    }

    #[test]
    fn apply_update_to_unknown_id_titles_dialog_update_failed() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());
        app.update_form.id = "99".to_owned();
        app.update_form.price = "4.25".to_owned();
        app.update_form.quantity = "10".to_owned();

        app.apply_update();

        match &app.dialog {
            Some(Dialog::Error { title, .. }) => assert_eq!(title, "Update Failed"),
            other => panic!("expected Error dialog, got {other:?}"),
        }
    }

    #[test]
    fn current_info_previews_known_products() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());
        app.update_form.id = "01".to_owned();
        assert_eq!(app.current_info(), "Current Price: AED1.00, Qty: 50");

        app.update_form.id = "99".to_owned();
        assert_eq!(app.current_info(), "Current Info: Product Not Found");

        app.update_form.id.clear();
        assert_eq!(app.current_info(), "Current Info: N/A");
    }

    #[test]
    fn confirm_delete_removes_and_reports_success() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());
        let id = ProductId::new("03").unwrap();

        app.confirm_delete(&id);

        assert_eq!(app.catalog.len(), 4);
        assert!(matches!(app.dialog, Some(Dialog::Success { .. })));
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn run_search_reports_inline_results_and_failures() {
        let mut app = StockdeskApp::new(Catalog::seeded().unwrap());

        app.search_form.id = "02".to_owned();
        app.run_search();
        assert!(app.search_result.starts_with("Product Found:\n"));
        assert!(app.search_result.contains("Biscuit"));

        app.search_form.id = "99".to_owned();
        app.run_search();
        assert_eq!(app.search_result, "product not found in catalog");
    }
}
