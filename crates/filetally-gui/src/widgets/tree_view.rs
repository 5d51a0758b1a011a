/// Virtualised tree view — the main results widget.
///
/// Only renders rows visible in the viewport, giving O(1) rendering
/// cost regardless of tree size. Uses the flat `visible_rows` list
/// maintained by `AppState`.
use crate::state::{AppPhase, AppState, RowKind};
use egui::{Rect, Sense, Ui, Vec2};
use filetally_core::analysis::format_count;

/// Height of each row in pixels.
const ROW_HEIGHT: f32 = 24.0;

/// Indentation per depth level in pixels.
const INDENT_PX: f32 = 20.0;

/// Width reserved on the right for the Type and Items columns.
pub const RIGHT_COLUMNS_WIDTH: f32 = 170.0;

/// Draw the virtualised tree view.
pub fn tree_view(ui: &mut Ui, state: &mut AppState) {
    if state.report.is_none() {
        let message = if state.phase == AppPhase::Scanning {
            "Scanning... results will appear when the walk finishes"
        } else {
            "No scan results. Enter a folder path and click Scan."
        };
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(message).color(ui.visuals().weak_text_color()));
        });
        return;
    }

    // ── Render the tree and collect deferred actions ────────────
    // The render pass borrows state immutably; mutations are applied after.
    let (toggle_row, new_selection) = render_tree_rows(ui, state);

    if let Some(row_idx) = new_selection {
        if row_idx < state.visible_rows.len() {
            state.selected_path = Some(state.visible_rows[row_idx].path.clone());
        }
    }
    if let Some(row_idx) = toggle_row {
        state.toggle_expand(row_idx);
    }
}

/// Render the virtualised tree rows. Returns (toggle_row, new_selection)
/// indices for deferred state mutation.
fn render_tree_rows(ui: &mut Ui, state: &AppState) -> (Option<usize>, Option<usize>) {
    let report = match state.report {
        Some(ref r) => r,
        None => return (None, None),
    };

    // ── Extract theme-adaptive colours once ─────────────────────────────
    let is_dark = ui.visuals().dark_mode;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_selection = ui.visuals().selection.bg_fill;
    let color_hover = if is_dark {
        egui::Color32::from_rgb(0x35, 0x35, 0x4a)
    } else {
        egui::Color32::from_rgba_unmultiplied(
            color_selection.r(),
            color_selection.g(),
            color_selection.b(),
            40,
        )
    };
    // Icon colours are kept vivid (they read fine on both themes).
    let color_folder = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    let color_file = egui::Color32::from_rgb(0x89, 0xb4, 0xfa);

    let total_rows = state.visible_rows.len();
    let total_height = total_rows as f32 * ROW_HEIGHT;

    let mut toggle_row: Option<usize> = None;
    let mut new_selection: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Reserve the full virtual height so the scrollbar is correct.
            let (response, mut painter) = ui.allocate_painter(
                Vec2::new(ui.available_width(), total_height),
                Sense::click(),
            );

            let viewport = ui.clip_rect();
            let top_y = response.rect.top();

            // Determine visible range.
            let first_visible = ((viewport.top() - top_y) / ROW_HEIGHT).floor().max(0.0) as usize;
            let last_visible = ((viewport.bottom() - top_y) / ROW_HEIGHT)
                .ceil()
                .min(total_rows as f32) as usize;

            // Render only visible rows.
            for row_idx in first_visible..last_visible {
                if row_idx >= state.visible_rows.len() {
                    break;
                }

                let row = &state.visible_rows[row_idx];

                let row_rect = Rect::from_min_size(
                    egui::pos2(response.rect.left(), top_y + row_idx as f32 * ROW_HEIGHT),
                    Vec2::new(response.rect.width(), ROW_HEIGHT),
                );

                // Skip if completely outside viewport.
                if !viewport.intersects(row_rect) {
                    continue;
                }

                // Selection highlight.
                let is_selected = state.selected_path.as_deref() == Some(row.path.as_path());
                if is_selected {
                    painter.rect_filled(row_rect, 0.0, color_selection);
                }

                // Hover highlight.
                let row_response = ui.interact(
                    row_rect,
                    ui.id().with(("tree_row", row_idx)),
                    Sense::click(),
                );

                if row_response.hovered() && !is_selected {
                    painter.rect_filled(row_rect, 0.0, color_hover);
                }

                // Click handling.
                if row_response.clicked() {
                    new_selection = Some(row_idx);
                }
                if row_response.double_clicked() && row.kind == RowKind::Folder {
                    toggle_row = Some(row_idx);
                }

                // Context menu.
                row_response.context_menu(|ui| {
                    if ui.button("📋 Copy Path").clicked() {
                        ui.ctx().copy_text(row.path.to_string_lossy().into_owned());
                        ui.close_menu();
                    }
                });

                // Tooltip with the full name when hovered (useful for
                // truncated names).
                if row_response.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        ui.id().with(("tree_tip", row_idx)),
                        |ui| {
                            ui.label(row.name.as_str());
                        },
                    );
                }

                // Draw row content.
                let indent = INDENT_PX * row.depth as f32;
                let text_x = row_rect.left() + indent + 4.0;
                let text_y = row_rect.center().y;

                // Expand/collapse arrow for folders.
                if row.kind == RowKind::Folder {
                    let arrow_text = if row.is_expanded { "▼" } else { "▶" };
                    let arrow_rect = Rect::from_min_size(
                        egui::pos2(row_rect.left() + indent - 14.0, row_rect.top()),
                        Vec2::new(16.0, ROW_HEIGHT),
                    );
                    let arrow_response =
                        ui.interact(arrow_rect, ui.id().with(("arrow", row_idx)), Sense::click());
                    if arrow_response.clicked() {
                        toggle_row = Some(row_idx);
                    }
                    painter.text(
                        egui::pos2(row_rect.left() + indent - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        arrow_text,
                        egui::FontId::proportional(11.0),
                        color_weak,
                    );
                }

                // Icon.
                let (icon, icon_color) = match row.kind {
                    RowKind::Folder => ("📁", color_folder),
                    RowKind::File => ("📄", color_file),
                };
                painter.text(
                    egui::pos2(text_x, text_y),
                    egui::Align2::LEFT_CENTER,
                    icon,
                    egui::FontId::proportional(13.0),
                    icon_color,
                );

                // File/folder name — rendered with proper text clipping.
                let name_x = text_x + 20.0;
                let right_area_start = row_rect.right() - RIGHT_COLUMNS_WIDTH;
                let max_name_w = (right_area_start - name_x - 4.0).max(20.0);

                let name_font = egui::FontId::proportional(13.0);
                let name_galley =
                    painter.layout_no_wrap(row.name.to_string(), name_font, color_normal);

                // If the text fits, draw it directly. Otherwise, clip and
                // add an ellipsis.
                let text_width = name_galley.size().x;
                if text_width <= max_name_w {
                    painter.galley(
                        egui::pos2(name_x, text_y - name_galley.size().y / 2.0),
                        name_galley,
                        color_normal,
                    );
                } else {
                    let clip = Rect::from_min_size(
                        egui::pos2(name_x, row_rect.top()),
                        Vec2::new(max_name_w - 12.0, ROW_HEIGHT),
                    );
                    let prev_clip = painter.clip_rect();
                    painter.set_clip_rect(prev_clip.intersect(clip));
                    painter.galley(
                        egui::pos2(name_x, text_y - name_galley.size().y / 2.0),
                        name_galley,
                        color_normal,
                    );
                    painter.set_clip_rect(prev_clip);

                    painter.text(
                        egui::pos2(name_x + max_name_w - 12.0, text_y),
                        egui::Align2::LEFT_CENTER,
                        "…",
                        egui::FontId::proportional(13.0),
                        color_weak,
                    );
                }

                // Type column.
                let kind_text = match row.kind {
                    RowKind::Folder => "Folder",
                    RowKind::File => "File",
                };
                painter.text(
                    egui::pos2(right_area_start, text_y),
                    egui::Align2::LEFT_CENTER,
                    kind_text,
                    egui::FontId::proportional(12.0),
                    color_weak,
                );

                // Items column: immediate child count for folders.
                if row.kind == RowKind::Folder {
                    if let Some(entry) = report.result.entry(&row.path) {
                        let items_text =
                            format!("{} items", format_count(entry.item_count() as u64));
                        painter.text(
                            egui::pos2(right_area_start + 70.0, text_y),
                            egui::Align2::LEFT_CENTER,
                            &items_text,
                            egui::FontId::proportional(11.0),
                            color_weak,
                        );
                    }
                }
            }
        });

    (toggle_row, new_selection)
}
