use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use shared::domain::TaskFilter;
use storage::MemorySessionStore;
use task_core::{LatestFrame, RenderState, TaskListController};

use crate::config::Settings;
use crate::controller::events::TaskIntent;
use crate::controller::orchestration::{
    apply_intent, dispatch_intent, IntentOutcome, IntentSink, INTENT_QUEUE_CAPACITY,
};
use crate::ui::task_row::{show_task_row, EditBuffer};

pub type AppController = TaskListController<MemorySessionStore, LatestFrame>;

pub struct TaskListApp {
    controller: AppController,
    intent_tx: Sender<TaskIntent>,
    intent_rx: Receiver<TaskIntent>,
    new_task_draft: String,
    edit: Option<EditBuffer>,
    status_banner: Option<String>,
    focus_new_task: bool,
}

impl TaskListApp {
    pub fn new(store: MemorySessionStore, settings: &Settings) -> Self {
        let mut controller = TaskListController::new(store, LatestFrame::new());
        if settings.initial_filter != TaskFilter::All {
            controller.set_filter(settings.initial_filter);
        }

        let (intent_tx, intent_rx) = bounded(INTENT_QUEUE_CAPACITY);
        Self {
            controller,
            intent_tx,
            intent_rx,
            new_task_draft: String::new(),
            edit: None,
            status_banner: None,
            focus_new_task: true,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    #[cfg(test)]
    pub fn new_task_draft_mut(&mut self) -> &mut String {
        &mut self.new_task_draft
    }

    #[cfg(test)]
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn queue(&mut self, intent: TaskIntent) {
        dispatch_intent(&self.intent_tx, intent, &mut self.status_banner);
    }

    /// Applies every queued intent; returns how many ran.
    pub fn drain_intents(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(intent) = self.intent_rx.try_recv() {
            drained += 1;
            match apply_intent(&mut self.controller, intent) {
                IntentOutcome::Added(id) => {
                    tracing::debug!(task_id = %id, "new task field cleared");
                    self.new_task_draft.clear();
                    self.focus_new_task = true;
                }
                IntentOutcome::ReloadRequested => self.reload(),
                IntentOutcome::Applied | IntentOutcome::Ignored => {}
            }
        }
        if drained > 0 {
            self.sync_edit_buffer();
        }
        drained
    }

    /// Rebuilds the controller from the same session store, dropping transient UI state.
    fn reload(&mut self) {
        let store = self.controller.store().clone();
        self.controller = TaskListController::new(store, LatestFrame::new());
        self.edit = None;
        self.status_banner = None;
        tracing::info!(tasks = self.controller.tasks().len(), "reloaded task list from session store");
    }

    /// Keeps the edit buffer pointed at the controller's edit target.
    fn sync_edit_buffer(&mut self) {
        let frame = self.current_frame();
        let Some(editing) = frame.editing.as_ref() else {
            self.edit = None;
            return;
        };
        if self.edit.as_ref().is_some_and(|edit| &edit.id == editing) {
            return;
        }
        self.edit = frame
            .rows
            .iter()
            .find(|row| &row.id == editing)
            .map(EditBuffer::for_row);
    }

    fn current_frame(&self) -> RenderState {
        self.controller
            .view()
            .frame()
            .cloned()
            .unwrap_or_else(|| self.controller.render())
    }

    fn show_header(&mut self, ctx: &egui::Context, frame: &RenderState) {
        egui::TopBottomPanel::top("task_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("📋 Task List");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("⟳ Reload")
                        .on_hover_text("Reload tasks saved in this session")
                        .clicked()
                    {
                        self.queue(TaskIntent::Reload);
                    }
                });
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let field_width = (ui.available_width() - 60.0).max(120.0);
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.new_task_draft)
                        .id_salt("new_task_input")
                        .hint_text("What needs to be done?")
                        .desired_width(field_width),
                );
                if self.focus_new_task {
                    self.focus_new_task = false;
                    response.request_focus();
                }
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    let text = self.new_task_draft.clone();
                    self.queue(TaskIntent::Add { text });
                }
            });

            ui.horizontal(|ui| {
                for filter in TaskFilter::ALL {
                    if ui
                        .selectable_label(frame.filter == filter, filter.label())
                        .clicked()
                    {
                        self.queue(TaskIntent::SetFilter(filter));
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_footer(&mut self, ctx: &egui::Context, frame: &RenderState) {
        egui::TopBottomPanel::bottom("task_footer").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_status_banner(ui);
            ui.horizontal(|ui| {
                ui.weak(frame.summary_text());
                if frame.show_clear_completed {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Clear completed").clicked() {
                            self.queue(TaskIntent::ClearCompleted);
                        }
                    });
                }
            });
            ui.add_space(4.0);
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.status_banner.clone() else {
            return;
        };
        ui.horizontal_wrapped(|ui| {
            ui.colored_label(egui::Color32::from_rgb(175, 96, 96), message);
            if ui.small_button("Dismiss").clicked() {
                self.status_banner = None;
            }
        });
    }

    fn show_task_list(&mut self, ctx: &egui::Context, frame: &RenderState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = frame.empty_message {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).size(16.0).weak());
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut sink = IntentSink::new(&self.intent_tx, &mut self.status_banner);
                    for row in &frame.rows {
                        show_task_row(ui, row, self.edit.as_mut(), &mut sink);
                        ui.separator();
                    }
                });
        });
    }
}

impl eframe::App for TaskListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self.current_frame();

        self.show_header(ctx, &frame);
        self.show_footer(ctx, &frame);
        self.show_task_list(ctx, &frame);

        if self.drain_intents() > 0 {
            ctx.request_repaint();
        }
    }
}
