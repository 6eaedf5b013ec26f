use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::ops::router::PickerEvent;
use crate::tui::app::App;

/// What a screen cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    /// Row inside the panel, counted from the panel's first visible row
    PanelRow(u16),
    /// Panel border or padding
    Panel,
    Outside,
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Classify a cell against the last rendered layout
pub fn hit_test(app: &App, column: u16, row: u16) -> Hit {
    let pos = Position::new(column, row);
    if app.trigger_area.contains(pos) {
        return Hit::Trigger;
    }
    if let Some(panel) = app.panel_area.filter(|_| app.picker_open()) {
        let body = inner(panel);
        if body.contains(pos) {
            return Hit::PanelRow(row - body.y);
        }
        if panel.contains(pos) {
            return Hit::Panel;
        }
    }
    Hit::Outside
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let hit = hit_test(app, mouse.column, mouse.row);
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::Trigger => picker.dispatch(PickerEvent::TriggerClick),
            Hit::PanelRow(r) => {
                let surface = picker.surface();
                let pos = r as f64 * surface.item_extent();
                // The payload travels as text, the way a rendered item carries it
                let raw = surface
                    .value_at(pos)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                picker.dispatch(PickerEvent::ItemClick(raw));
            }
            Hit::Panel => {}
            Hit::Outside => picker.dispatch(PickerEvent::OutsideClick),
        },
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if hit == Hit::Outside {
                return;
            }
            let notches = if mouse.kind == MouseEventKind::ScrollDown {
                1
            } else {
                -1
            };
            picker.dispatch(PickerEvent::Wheel {
                notches,
                modifier: mouse.modifiers != KeyModifiers::NONE,
            });
        }
        _ => {}
    }
}
