//! Playback and view controls.
//!
//! Both the UI panel and the keyboard shortcuts send [`Control`] events, and [`apply_controls`] is the only place
//! that acts on them.

use crate::scene::OrbitPath;
use bevy_egui::{EguiContexts, egui};
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::*;
use orrery_sim::{BodyTable, CameraTarget, Playback, SpeedDivisor};

#[derive(Debug, Clone, PartialEq, Event)]
pub enum Control {
    SetPaused(bool),
    TogglePaused,
    /// Set the speed slider.
    SetSpeed(u32),
    /// Move the speed slider by a number of steps.
    NudgeSpeed(i32),
    /// Point the camera at `"free"`, `"sun"`, or a body by name.
    SetCameraTarget(String),
    SetOrbitPathsVisible(bool),
    ToggleOrbitPaths,
}

/// Whether the orbit paths are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct OrbitPathsVisible(pub bool);

pub fn apply_controls(
    mut events: EventReader<Control>,
    table: Res<BodyTable>,
    mut playback: ResMut<Playback>,
    mut target: ResMut<CameraTarget>,
    mut orbits_visible: ResMut<OrbitPathsVisible>,
    mut orbits: Query<&mut Visibility, With<OrbitPath>>,
) {
    for event in events.read() {
        match event {
            Control::SetPaused(paused) => {
                playback.set_paused(*paused);
                debug!(paused, "set paused");
            }
            Control::TogglePaused => {
                playback.toggle_paused();
                debug!(paused = playback.is_paused(), "toggled pause");
            }
            Control::SetSpeed(slider) => match playback.set_speed(*slider) {
                Ok(()) => debug!(divisor = playback.divisor.get(), "set speed"),
                Err(err) => warn!("ignoring speed change: {err}"),
            },
            Control::NudgeSpeed(steps) => {
                playback.nudge_speed(*steps);
                debug!(divisor = playback.divisor.get(), "nudged speed");
            }
            Control::SetCameraTarget(name) => match table.resolve_target(name) {
                Ok(new) => {
                    *target = new;
                    debug!("camera target is now {}", table.target_name(new));
                }
                Err(err) => warn!("ignoring camera target: {err}"),
            },
            Control::SetOrbitPathsVisible(visible) => orbits_visible.0 = *visible,
            Control::ToggleOrbitPaths => orbits_visible.0 = !orbits_visible.0,
        }
    }
    if orbits_visible.is_changed() {
        let visibility = if orbits_visible.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        for mut v in orbits.iter_mut() {
            v.set_if_neq(visibility);
        }
    }
}

/// Keyboard shortcuts.
///
/// Space pauses, O toggles orbit paths, F frees the camera, 0 targets the sun, the other digits target bodies in
/// table order, and +/- change the speed.
pub fn keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    table: Res<BodyTable>,
    mut controls: EventWriter<Control>,
) {
    const DIGITS: [KeyCode; 10] = [
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    if keyboard.just_pressed(KeyCode::Space) {
        controls.write(Control::TogglePaused);
    }
    if keyboard.just_pressed(KeyCode::KeyO) {
        controls.write(Control::ToggleOrbitPaths);
    }
    if keyboard.just_pressed(KeyCode::KeyF) {
        controls.write(Control::SetCameraTarget("free".to_string()));
    }
    if keyboard.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        controls.write(Control::NudgeSpeed(1));
    }
    if keyboard.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        controls.write(Control::NudgeSpeed(-1));
    }
    for (n, key) in DIGITS.into_iter().enumerate() {
        if !keyboard.just_pressed(key) {
            continue;
        }
        let name = match n {
            0 => "sun",
            n => match table.get(n - 1) {
                Some(body) => body.name,
                None => continue,
            },
        };
        controls.write(Control::SetCameraTarget(name.to_string()));
    }
}

pub fn ui_system(
    mut contexts: EguiContexts,
    table: Res<BodyTable>,
    playback: Res<Playback>,
    target: Res<CameraTarget>,
    orbits_visible: Res<OrbitPathsVisible>,
    mut controls: EventWriter<Control>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::Window::new("Controls").show(ctx, |ui| {
        let label = if playback.is_paused() {
            "Resume"
        } else {
            "Pause"
        };
        if ui.button(label).clicked() {
            controls.write(Control::SetPaused(!playback.is_paused()));
        }

        let mut slider = playback.divisor.slider();
        if ui
            .add(egui::Slider::new(&mut slider, SpeedDivisor::SLIDER_RANGE).text("Speed"))
            .changed()
        {
            controls.write(Control::SetSpeed(slider));
        }

        let mut show = orbits_visible.0;
        let changed = ui
            .horizontal(|ui| {
                ui.label("Orbit paths: ");
                ui.add(switch(&mut show)).changed()
            })
            .inner;
        if changed {
            controls.write(Control::SetOrbitPathsVisible(show));
        }

        let mut selected = *target;
        egui::ComboBox::from_label("Camera target")
            .selected_text(table.target_name(selected))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, CameraTarget::Free, "Free");
                ui.selectable_value(&mut selected, CameraTarget::Sun, "Sun");
                for (idx, body) in table.iter().enumerate() {
                    ui.selectable_value(&mut selected, CameraTarget::Body(idx), body.name);
                }
            });
        if selected != *target {
            let name = match selected {
                CameraTarget::Free => "free",
                CameraTarget::Sun => "sun",
                CameraTarget::Body(idx) => table.target_name(CameraTarget::Body(idx)),
            };
            controls.write(Control::SetCameraTarget(name.to_string()));
        }

        let focused = match *target {
            CameraTarget::Body(idx) => table.get(idx),
            _ => None,
        };
        if let Some(body) = focused {
            ui.separator();
            egui::Grid::new("body_info").show(ui, |ui| {
                ui.label("Distance from the sun");
                ui.label(format!("{:.3e} km", body.real_distance_km()));
                ui.end_row();
                ui.label("Orbital phase");
                ui.label(format!(
                    "{:.1}°",
                    body.initial_angle.rem_euclid(std::f64::consts::TAU).to_degrees()
                ));
                ui.end_row();
                ui.label("Axial tilt");
                ui.label(format!("{:.2}°", body.axial_tilt));
                ui.end_row();
            });
        }
    });
    Ok(())
}

/// An on/off switch.
fn switch(on: &mut bool) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| {
        let size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
        let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click());
        if response.clicked() {
            *on = !*on;
            response.mark_changed();
        }
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), *on, "")
        });
        if !ui.is_rect_visible(rect) {
            return response;
        }
        let t = ui.ctx().animate_bool_responsive(response.id, *on);
        let visuals = ui.style().interact_selectable(&response, *on);
        let rect = rect.expand(visuals.expansion);
        let radius = rect.height() / 2.0;
        let painter = ui.painter();
        painter.rect(
            rect,
            radius,
            visuals.bg_fill,
            visuals.bg_stroke,
            egui::StrokeKind::Inside,
        );
        let knob = egui::pos2(
            egui::lerp((rect.left() + radius)..=(rect.right() - radius), t),
            rect.center().y,
        );
        painter.circle(knob, radius * 0.75, visuals.bg_fill, visuals.fg_stroke);
        response
    }
}
