// app module - window shell, menu bar and action dispatch
use super::{dialogs, surface::TextSurface, themes};
use crate::core::actions::Action;
use crate::core::confirm::{self, ConfirmOutcome};
use crate::core::document::Document;
use crate::core::session::{Session, SESSION_FILE};
use egui::{Context, RichText, ViewportCommand};
use std::path::Path;

pub struct EditorApp {
    doc: Document,
    surface: TextSurface,
    theme: &'static themes::Theme,
    status_bar_visible: bool,
    close_allowed: bool,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, theme: &'static themes::Theme) -> Self {
        themes::apply(theme, &cc.egui_ctx);

        let doc = Document::new();
        let surface = TextSurface::new(&doc.text);
        Self {
            doc,
            surface,
            theme,
            status_bar_visible: true,
            close_allowed: false,
        }
    }

    fn menu_bar(&mut self, ctx: &Context) {
        let mut selected_theme: Option<&'static themes::Theme> = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open (Ctrl+O)").clicked() {
                        self.handle_action(Action::Open, ctx);
                        ui.close();
                    }

                    if ui.button("Save (Ctrl+S)").clicked() {
                        self.handle_action(Action::Save, ctx);
                        ui.close();
                    }

                    if ui.button("Save As...").clicked() {
                        self.handle_action(Action::SaveAs, ctx);
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Exit").clicked() {
                        self.handle_action(Action::Exit, ctx);
                        ui.close();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Undo (Ctrl+Z)").clicked() {
                        self.handle_action(Action::Undo, ctx);
                        ui.close();
                    }

                    if ui.button("Redo (Ctrl+Y)").clicked() {
                        self.handle_action(Action::Redo, ctx);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    // hiding the bar keeps its state, it just leaves the layout
                    ui.checkbox(&mut self.status_bar_visible, "Status Bar");
                });

                ui.menu_button("Themes", |ui| {
                    for theme in themes::ALL {
                        let active = std::ptr::eq(self.theme, theme);
                        if ui.radio(active, theme.name).clicked() {
                            selected_theme = Some(theme);
                            ui.close();
                        }
                    }
                });
            });
        });

        if let Some(theme) = selected_theme {
            self.select_theme(theme, ctx);
        }
    }

    fn status_bar(&mut self, ctx: &Context) {
        let frame = egui::Frame::new()
            .fill(self.theme.status_background)
            .inner_margin(egui::Margin::symmetric(10, 4));

        egui::TopBottomPanel::bottom("status_bar")
            .frame(frame)
            .show(ctx, |ui| {
                let (line, column) = self.surface.line_col();
                ui.label(
                    RichText::new(format!("Line {}, Column {}", line, column))
                        .color(self.theme.status_foreground),
                );
            });
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        let mut pending = Vec::new();

        ctx.input_mut(|i| {
            let shortcuts = [
                (egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::O), Action::Open),
                (egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::S), Action::Save),
                (egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::Z), Action::Undo),
                (egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::Y), Action::Redo),
            ];

            for (shortcut, action) in shortcuts {
                if i.consume_shortcut(&shortcut) {
                    pending.push(action);
                }
            }
        });

        for action in pending {
            self.handle_action(action, ctx);
        }
    }

    // Centralized action handler
    fn handle_action(&mut self, action: Action, ctx: &Context) {
        match action {
            Action::Open => self.open(ctx),
            Action::Save => self.save(ctx),
            Action::SaveAs => self.save_as(ctx),
            // routed through the close request so Exit and the window's
            // close button share one confirmation path
            Action::Exit => ctx.send_viewport_cmd(ViewportCommand::Close),
            Action::Undo => {
                if self.surface.undo(ctx, &mut self.doc.text) {
                    self.doc.has_unsaved_changes = true;
                }
            }
            Action::Redo => {
                if self.surface.redo(ctx, &mut self.doc.text) {
                    self.doc.has_unsaved_changes = true;
                }
            }
        }
    }

    fn open(&mut self, ctx: &Context) {
        match confirm::resolve(self.doc.has_unsaved_changes, dialogs::ask_save_changes) {
            ConfirmOutcome::Abort => return,
            ConfirmOutcome::Proceed { save_first } => {
                if save_first {
                    self.save(ctx);
                }
            }
        }

        let Some(path) = dialogs::pick_open_path() else {
            return;
        };

        match Document::load(&path) {
            Ok(doc) => {
                self.surface.reset(&doc.text);
                self.doc = doc;
                ctx.send_viewport_cmd(ViewportCommand::Title(self.doc.title()));
                log::info!("opened {}", path.display());
            }
            Err(e) => dialogs::show_error(&e.to_string()),
        }
    }

    fn save(&mut self, ctx: &Context) {
        if self.doc.path.is_none() {
            self.save_as(ctx);
            return;
        }

        match self.doc.write() {
            Ok(()) => {
                if let Some(path) = &self.doc.path {
                    log::info!("saved {}", path.display());
                }
            }
            Err(e) => dialogs::show_error(&e.to_string()),
        }
    }

    fn save_as(&mut self, ctx: &Context) {
        let Some(path) = dialogs::pick_save_path() else {
            return;
        };

        // path is associated before the write, like the reference editor
        self.doc.set_path(path);
        self.save(ctx);
        ctx.send_viewport_cmd(ViewportCommand::Title(self.doc.title()));
    }

    fn select_theme(&mut self, theme: &'static themes::Theme, ctx: &Context) {
        self.theme = theme;
        themes::apply(theme, ctx);
    }

    fn handle_close_request(&mut self, ctx: &Context) {
        if self.close_allowed || !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }

        match confirm::resolve(self.doc.has_unsaved_changes, dialogs::ask_save_changes) {
            ConfirmOutcome::Abort => {
                ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            }
            ConfirmOutcome::Proceed { save_first } => {
                if save_first {
                    self.save(ctx);
                }
                if let Err(e) = Session::new(self.theme.name).save_to(Path::new(SESSION_FILE)) {
                    log::error!("failed to save session: {}", e);
                }
                self.close_allowed = true;
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);
        self.handle_shortcuts(ctx);
        self.menu_bar(ctx);

        if self.status_bar_visible {
            self.status_bar(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.surface.show(ui, &mut self.doc.text) {
                self.doc.has_unsaved_changes = true;
            }
        });
    }
}
