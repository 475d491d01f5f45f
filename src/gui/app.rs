use super::theme;
use crate::config::Config;
use crate::editor::{Editor, StackChange};
use crate::history::ActionKind;
use crate::ui::{entry_label, Animation};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

const ENTRANCE_SLIDE: f32 = 40.0;

pub struct GuiApp {
    editor: Editor,
    config: Config,
    status_message: String,
    entrance: Animation,
    flash: Option<(ActionKind, Animation)>,
    jump_undo: bool,
    jump_redo: bool,
    last_change: Rc<Cell<Option<StackChange>>>,
}

impl GuiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, text: &str, config: Config) -> Self {
        Self::with_config(text, config)
    }

    pub fn with_config(text: &str, config: Config) -> Self {
        let mut editor = Editor::with_config(text, &config);

        let last_change = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_change);
        editor.subscribe(move |change| sink.set(Some(*change)));

        Self {
            editor,
            entrance: Animation::new(Instant::now(), config.animation.entrance()),
            config,
            status_message: String::new(),
            flash: None,
            jump_undo: false,
            jump_redo: false,
            last_change,
        }
    }

    /// Take the shortcuts out of the input queue before the text edit
    /// widget sees them, so its built-in undo never runs.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (redo_shift, undo, redo) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z),
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z),
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y),
            )
        });

        if undo {
            self.undo();
        }
        if redo || redo_shift {
            self.redo();
        }
    }

    fn undo(&mut self) {
        if !self.editor.undo() {
            self.status_message = "Nothing to undo".to_string();
        }
    }

    fn redo(&mut self) {
        if !self.editor.redo() {
            self.status_message = "Nothing to redo".to_string();
        }
    }

    fn drain_changes(&mut self, now: Instant) {
        if let Some(change) = self.last_change.take() {
            match change.kind {
                ActionKind::Edit => self.status_message.clear(),
                ActionKind::Undo | ActionKind::Redo => {
                    self.status_message = change.kind.label().to_string();
                    self.flash = Some((
                        change.kind,
                        Animation::new(now, self.config.animation.flash()),
                    ));
                }
            }
        }
    }

    fn flashing(&self, now: Instant) -> Option<ActionKind> {
        self.flash
            .filter(|(_, anim)| anim.is_running_at(now))
            .map(|(kind, _)| kind)
    }

    fn editor_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.vertical_centered(|ui| {
            ui.heading("Text Editor");
        });
        ui.add_space(8.0);

        let mut buffer = self.editor.text().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut buffer)
                .hint_text(self.config.placeholder.as_str())
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.editor.edit(buffer);
        }

        ui.add_space(8.0);
        let flashing = self.flashing(now);
        ui.horizontal(|ui| {
            let can_undo = self.editor.can_undo();
            let undo = button("Undo (Ctrl+Z)", flashing == Some(ActionKind::Undo));
            if ui.add_enabled(can_undo, undo).clicked() {
                self.undo();
            }

            let can_redo = self.editor.can_redo();
            let redo = button("Redo (Ctrl+Y)", flashing == Some(ActionKind::Redo));
            if ui.add_enabled(can_redo, redo).clicked() {
                self.redo();
            }
        });
    }

    fn stack_panel(
        ui: &mut egui::Ui,
        id: &str,
        title: &str,
        entries: &[String],
        empty_label: &str,
        jump: &mut bool,
    ) {
        egui::Frame::none()
            .fill(theme::PANEL_BG)
            .inner_margin(8.0)
            .rounding(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(format!("{} ({})", title, entries.len()));
                    if !entries.is_empty() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Newest ⬇").clicked() {
                                *jump = true;
                            }
                        });
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt(id)
                    .max_height(200.0)
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        let newest = entries.len().checked_sub(1);
                        for (index, entry) in entries.iter().enumerate() {
                            let color = if Some(index) == newest {
                                theme::NEWEST_TEXT
                            } else {
                                theme::ENTRY_TEXT
                            };
                            let response = ui.colored_label(color, entry_label(entry, empty_label));
                            if Some(index) == newest && *jump {
                                response.scroll_to_me(Some(egui::Align::BOTTOM));
                                *jump = false;
                            }
                        }
                    });
            });
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_shortcuts(ctx);

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = if !self.status_message.is_empty() {
                self.status_message.clone()
            } else {
                format!(
                    "{} lines | {} chars | undo {} | redo {}",
                    self.editor.line_count(),
                    self.editor.text().chars().count(),
                    self.editor.undo_stack().len(),
                    self.editor.redo_stack().len(),
                )
            };
            ui.label(status);
        });

        let entrance = self.entrance.progress_at(now);
        let width = ctx.screen_rect().width() * 0.4;

        egui::SidePanel::right("stacks")
            .exact_width(width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space((1.0 - entrance) * ENTRANCE_SLIDE);
                let empty_label = self.config.empty_label.as_str();
                Self::stack_panel(
                    ui,
                    "undo_stack",
                    "Undo Stack",
                    self.editor.undo_stack(),
                    empty_label,
                    &mut self.jump_undo,
                );
                ui.add_space(12.0);
                Self::stack_panel(
                    ui,
                    "redo_stack",
                    "Redo Stack",
                    self.editor.redo_stack(),
                    empty_label,
                    &mut self.jump_redo,
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.editor_panel(ui, now);
        });

        self.drain_changes(now);

        if self.entrance.is_running_at(now) || self.flashing(now).is_some() {
            ctx.request_repaint();
        }
    }
}

fn button(label: &str, flashing: bool) -> egui::Button<'static> {
    let button = egui::Button::new(label.to_string());
    match button_fill(flashing) {
        Some(fill) => button.fill(fill),
        None => button,
    }
}

/// Highlight for a flashing button, whether or not its stack is now empty
fn button_fill(flashing: bool) -> Option<egui::Color32> {
    flashing.then_some(theme::ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_emptying_the_stack_still_flashes() {
        let mut app = GuiApp::with_config("", Config::default());
        let now = Instant::now();

        app.editor.edit("a");
        app.drain_changes(now);
        app.undo();
        app.drain_changes(now);

        assert!(!app.editor.can_undo());
        let flashing = app.flashing(now);
        assert_eq!(flashing, Some(ActionKind::Undo));
        assert_eq!(
            button_fill(flashing == Some(ActionKind::Undo)),
            Some(theme::ACCENT)
        );
        assert_eq!(app.status_message, "Undo");
    }
}
