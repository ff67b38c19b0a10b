//! One list item: status slot, text or edit field, and its action buttons.

use eframe::egui;
use egui::text::{CCursor, CCursorRange};
use shared::domain::{TaskId, TaskStatus};
use task_core::TaskRow;

use crate::controller::{events::TaskIntent, orchestration::IntentSink};

const PENDING_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 158, 46);
const COMPLETED_COLOR: egui::Color32 = egui::Color32::from_rgb(72, 170, 108);

/// Text being edited for the row in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: TaskId,
    pub text: String,
    /// Set until the field has been focused and its text selected once.
    pub focus_pending: bool,
}

impl EditBuffer {
    pub fn for_row(row: &TaskRow) -> Self {
        Self {
            id: row.id.clone(),
            text: row.text.clone(),
            focus_pending: true,
        }
    }
}

pub fn show_task_row(
    ui: &mut egui::Ui,
    row: &TaskRow,
    edit: Option<&mut EditBuffer>,
    sink: &mut IntentSink<'_>,
) {
    ui.horizontal(|ui| match edit {
        Some(edit) if row.is_editing && edit.id == row.id => show_editing(ui, row, edit, sink),
        _ => show_display(ui, row, sink),
    });
}

fn show_display(ui: &mut egui::Ui, row: &TaskRow, sink: &mut IntentSink<'_>) {
    let indicator = match row.status {
        TaskStatus::Completed => egui::RichText::new(row.indicator).color(COMPLETED_COLOR),
        TaskStatus::Pending => egui::RichText::new(row.indicator).color(PENDING_COLOR),
        TaskStatus::Todo => egui::RichText::new(row.indicator),
    };
    if ui
        .button(indicator)
        .on_hover_text("Toggle complete")
        .clicked()
    {
        sink.send(TaskIntent::ToggleComplete { id: row.id.clone() });
    }

    let text = match row.status {
        TaskStatus::Completed => egui::RichText::new(&row.text).strikethrough().weak(),
        TaskStatus::Pending => egui::RichText::new(&row.text).color(PENDING_COLOR),
        TaskStatus::Todo => egui::RichText::new(&row.text),
    };
    ui.label(text);

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Delete").clicked() {
            sink.send(TaskIntent::Delete { id: row.id.clone() });
        }
        if ui.button("Complete").clicked() {
            sink.send(TaskIntent::SetStatus {
                id: row.id.clone(),
                status: TaskStatus::Completed,
            });
        }
        if ui.button("Pending").clicked() {
            sink.send(TaskIntent::SetStatus {
                id: row.id.clone(),
                status: TaskStatus::Pending,
            });
        }
        if ui.button("Edit").clicked() {
            sink.send(TaskIntent::BeginEdit { id: row.id.clone() });
        }
    });
}

fn show_editing(ui: &mut egui::Ui, row: &TaskRow, edit: &mut EditBuffer, sink: &mut IntentSink<'_>) {
    let field_width = (ui.available_width() - 130.0).max(120.0);
    let output = egui::TextEdit::singleline(&mut edit.text)
        .id_salt(("edit_task", row.id.as_str()))
        .desired_width(field_width)
        .show(ui);

    let lost_focus = output.response.lost_focus();
    if edit.focus_pending {
        focus_and_select_all(ui, output, edit);
    }

    let (enter, escape) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });
    if lost_focus && enter {
        sink.send(TaskIntent::CommitEdit {
            id: row.id.clone(),
            text: edit.text.clone(),
        });
        return;
    }
    if lost_focus && escape {
        sink.send(TaskIntent::CancelEdit);
        return;
    }

    if ui.button("Save").clicked() {
        sink.send(TaskIntent::CommitEdit {
            id: row.id.clone(),
            text: edit.text.clone(),
        });
    }
    if ui.button("Cancel").clicked() {
        sink.send(TaskIntent::CancelEdit);
    }
}

/// Post-render hook for a freshly opened edit field. Touches only egui state.
fn focus_and_select_all(ui: &mut egui::Ui, output: egui::text_edit::TextEditOutput, edit: &mut EditBuffer) {
    edit.focus_pending = false;
    output.response.request_focus();

    let mut state = output.state;
    let end = edit.text.chars().count();
    state
        .cursor
        .set_char_range(Some(CCursorRange::two(CCursor::new(0), CCursor::new(end))));
    state.store(ui.ctx(), output.response.id);
    ui.ctx().request_repaint();
}
