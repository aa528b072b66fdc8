//! AI Launchpad - popup launcher for a curated catalog of AI tools
//! Built with egui for native Wayland support

mod catalog;
mod launcher;
mod ordering;
mod settings;
mod store;
mod theme;

use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, CursorIcon, RichText, Rounding, Stroke, Vec2};

use catalog::{ToolCategory, ToolRecord};
use launcher::LaunchDispatcher;
use ordering::group_by_category;
use settings::Settings;
use store::SettingsStore;
use theme::Theme;

// ═══════════════════════════════════════════════════════════════════════════
// UI SPACING CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════

/// Horizontal padding from the panel edge
const PANEL_PADDING: f32 = 14.0;
/// Spacing between category groups
const SECTION_SPACING: f32 = 14.0;
/// Spacing between rows within a group
const ROW_SPACING: f32 = 5.0;

/// How long the "copied" checkmark stays on a row
const COPIED_INDICATOR: Duration = Duration::from_millis(2000);
/// How long a freshly launched row stays highlighted
const LAUNCH_FLASH: Duration = Duration::from_millis(1200);

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 640.0])
            .with_min_inner_size([340.0, 520.0])
            .with_title("AI Launchpad"),
        ..Default::default()
    };

    eframe::run_native(
        "AI Launchpad",
        options,
        Box::new(|cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(39, 39, 42);
            style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 54);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(AiLaunchpad::new()))
        }),
    )
}

struct AiLaunchpad {
    settings: Settings,
    store: SettingsStore,
    dispatcher: LaunchDispatcher,

    show_settings_dialog: bool,
    /// Tool id whose URL was just copied, with the copy time
    copied: Option<(String, Instant)>,
    /// Tool id that was just launched, for the row flash
    launched: Option<(String, Instant)>,
}

impl AiLaunchpad {
    fn new() -> Self {
        let store = SettingsStore::new();
        let mut settings = store.load().unwrap_or_default();
        settings.reconcile();
        log::info!(
            "loaded settings: {} tools enabled, master {}",
            settings.enabled_ids().len(),
            if settings.is_extension_enabled { "on" } else { "off" }
        );

        Self {
            settings,
            store,
            dispatcher: LaunchDispatcher::new(),
            show_settings_dialog: false,
            copied: None,
            launched: None,
        }
    }

    /// Persist the complete settings object. Called after every
    /// transition; failures are logged inside the store.
    fn persist(&self) {
        self.store.save(&self.settings);
    }

    fn launch_tool(&mut self, tool: ToolRecord) {
        self.dispatcher.launch(&self.settings, tool.url);
        self.launched = Some((tool.id.to_string(), Instant::now()));
    }

    /// Global shortcuts: Cmd/Ctrl+Shift+P toggles the master switch,
    /// Cmd/Ctrl+Shift+L launches everything enabled. Consuming the key
    /// keeps the combination away from other widgets.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let combo = egui::Modifiers::COMMAND | egui::Modifiers::SHIFT;
        if ctx.input_mut(|i| i.consume_key(combo, egui::Key::P)) {
            self.settings.toggle_master();
            self.persist();
        }
        if ctx.input_mut(|i| i.consume_key(combo, egui::Key::L)) {
            self.dispatcher.launch_all(&self.settings);
        }
    }

    /// Drop expired transient indicators
    fn tick_indicators(&mut self) {
        if self
            .copied
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= COPIED_INDICATOR)
        {
            self.copied = None;
        }
        if self
            .launched
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= LAUNCH_FLASH)
        {
            self.launched = None;
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Panels
    // ───────────────────────────────────────────────────────────────────────

    fn show_header(&mut self, ui: &mut egui::Ui, theme: Theme) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        RichText::new("AI")
                            .size(17.0)
                            .strong()
                            .color(theme.fg_bright),
                    );
                    ui.label(
                        RichText::new("LAUNCHPAD")
                            .size(17.0)
                            .strong()
                            .italics()
                            .color(theme.accent),
                    );
                });
                ui.label(
                    RichText::new("UNIFIED COMMAND")
                        .size(8.0)
                        .strong()
                        .color(theme.fg_dim),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let gear = ui
                    .add(
                        egui::Button::new(RichText::new("⚙").size(14.0).color(theme.fg_dim))
                            .fill(theme.card_bg)
                            .rounding(Rounding::same(6.0))
                            .min_size(Vec2::new(26.0, 26.0)),
                    )
                    .on_hover_text("System settings");
                if gear.hovered() {
                    ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                }
                if gear.clicked() {
                    self.show_settings_dialog = true;
                }
            });
        });
    }

    fn show_tool_list(&mut self, ui: &mut egui::Ui, theme: Theme) {
        let master_on = self.settings.is_extension_enabled;
        let groups = group_by_category(&self.settings.tool_order, catalog::all_tools());

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(4.0);
                for (category, tools) in &groups {
                    if tools.is_empty() {
                        continue;
                    }
                    self.show_category_header(ui, *category, theme);

                    if !self.settings.is_collapsed(*category) {
                        ui.add_enabled_ui(master_on, |ui| {
                            if !master_on {
                                ui.set_opacity(0.2);
                            }
                            for tool in tools {
                                self.show_tool_row(ui, **tool, theme);
                                ui.add_space(ROW_SPACING);
                            }
                        });
                    }
                    ui.add_space(SECTION_SPACING);
                }
            });
    }

    /// Category headers stay interactive with the master switch off;
    /// collapsing is a navigation action, not a tool action.
    fn show_category_header(&mut self, ui: &mut egui::Ui, category: ToolCategory, theme: Theme) {
        let chevron = if self.settings.is_collapsed(category) {
            "▸"
        } else {
            "▾"
        };
        let header = ui.add(
            egui::Button::new(
                RichText::new(format!("{chevron}  {}", category.label().to_uppercase()))
                    .size(9.0)
                    .strong()
                    .color(theme.fg_dim),
            )
            .frame(false)
            .min_size(Vec2::new(ui.available_width(), 18.0)),
        );
        if header.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if header.clicked() {
            self.settings.toggle_category(category);
            self.persist();
        }
        ui.add_space(3.0);
    }

    fn show_tool_row(&mut self, ui: &mut egui::Ui, tool: ToolRecord, theme: Theme) {
        let master_on = self.settings.is_extension_enabled;
        let enabled = self.settings.is_enabled(tool.id);
        let flashing = self
            .launched
            .as_ref()
            .is_some_and(|(id, _)| id == tool.id);

        let fill = if flashing {
            theme.accent_dim
        } else {
            theme.card_bg
        };

        let frame = egui::Frame::none()
            .fill(fill)
            .rounding(Rounding::same(9.0))
            .stroke(Stroke::new(1.0, theme.border_dim))
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    // Drag handle; reordering is a tool action and gated.
                    if master_on {
                        let handle = ui.add(
                            egui::Button::new(
                                RichText::new("⠿").size(12.0).color(theme.fg_faint),
                            )
                            .frame(false)
                            .sense(egui::Sense::drag()),
                        );
                        handle.dnd_set_drag_payload(tool.id.to_string());
                        if handle.hovered() {
                            ui.ctx().set_cursor_icon(CursorIcon::Grab);
                        }
                        if handle.dragged() {
                            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
                        }
                    } else {
                        ui.add_space(16.0);
                    }

                    self.show_monogram(ui, tool, theme);

                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 1.0;
                        ui.add(
                            egui::Label::new(
                                RichText::new(tool.name)
                                    .size(13.0)
                                    .strong()
                                    .color(theme.fg),
                            )
                            .truncate(),
                        );
                        ui.add(
                            egui::Label::new(
                                RichText::new(tool.description.to_uppercase())
                                    .size(8.0)
                                    .color(theme.fg_dim),
                            )
                            .truncate(),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle = toggle_switch(ui, enabled, theme, master_on);
                        if toggle.clicked() && self.settings.toggle_tool(tool.id) {
                            self.persist();
                        }

                        let launch = ui
                            .add(
                                egui::Button::new(
                                    RichText::new("↗").size(14.0).color(theme.fg_dim),
                                )
                                .frame(false),
                            )
                            .on_hover_text("Launch tool");
                        if launch.clicked() {
                            self.launch_tool(tool);
                        }

                        let copied = self
                            .copied
                            .as_ref()
                            .is_some_and(|(id, _)| id == tool.id);
                        let (icon, color) = if copied {
                            ("✔", theme.accent)
                        } else {
                            ("⧉", theme.fg_faint)
                        };
                        let copy = ui
                            .add(
                                egui::Button::new(RichText::new(icon).size(12.0).color(color))
                                    .frame(false),
                            )
                            .on_hover_text("Copy URL");
                        if copy.clicked() {
                            ui.ctx().copy_text(tool.url.to_string());
                            self.copied = Some((tool.id.to_string(), Instant::now()));
                        }
                    });
                });
            });

        // The whole card doubles as the drop target for drag moves.
        let response = frame.response;
        if master_on {
            if let Some(source) = response.dnd_hover_payload::<String>() {
                if *source != tool.id {
                    ui.painter().hline(
                        response.rect.x_range(),
                        response.rect.top() - 2.0,
                        Stroke::new(2.0, theme.accent),
                    );
                }
            }
            if let Some(source) = response.dnd_release_payload::<String>() {
                if self.settings.apply_reorder(&source, tool.id) {
                    self.persist();
                }
            }
        }
    }

    fn show_monogram(&self, ui: &mut egui::Ui, tool: ToolRecord, theme: Theme) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(26.0), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 6.0, theme.input_bg);
            ui.painter()
                .rect_stroke(rect, 6.0, Stroke::new(1.0, theme.border));
            let initial = tool.name.chars().next().unwrap_or('?');
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initial,
                egui::FontId::proportional(12.0),
                theme.fg_dim,
            );
        }
    }

    fn show_footer(&mut self, ui: &mut egui::Ui, theme: Theme) {
        let master_on = self.settings.is_extension_enabled;

        ui.horizontal(|ui| {
            let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
            let select_all = ui.add_enabled(
                master_on,
                egui::Button::new(
                    RichText::new("SELECT ALL").size(8.0).strong().color(theme.fg_dim),
                )
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.0, theme.border_dim))
                .rounding(Rounding::same(5.0))
                .min_size(Vec2::new(half, 20.0)),
            );
            if select_all.clicked() && self.settings.select_all() {
                self.persist();
            }

            let clear_all = ui.add_enabled(
                master_on,
                egui::Button::new(
                    RichText::new("CLEAR ALL").size(8.0).strong().color(theme.fg_dim),
                )
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.0, theme.border_dim))
                .rounding(Rounding::same(5.0))
                .min_size(Vec2::new(half, 20.0)),
            );
            if clear_all.clicked() && self.settings.clear_all() {
                self.persist();
            }
        });

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            let power = ui
                .add(
                    egui::Button::new(RichText::new("⏻").size(16.0).color(if master_on {
                        Color32::BLACK
                    } else {
                        theme.fg_faint
                    }))
                    .fill(if master_on { theme.accent } else { theme.card_bg })
                    .stroke(Stroke::new(1.0, theme.border))
                    .rounding(Rounding::same(19.0))
                    .min_size(Vec2::new(38.0, 38.0)),
                )
                .on_hover_text("Master power");
            if power.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
            if power.clicked() {
                self.settings.toggle_master();
                self.persist();
            }
            ui.label(
                RichText::new(if master_on { "SYSTEM ONLINE" } else { "SYSTEM OFFLINE" })
                    .size(7.0)
                    .strong()
                    .color(if master_on { theme.accent } else { theme.fg_faint }),
            );
        });

        ui.add_space(6.0);
        let launch = ui.add_enabled(
            master_on,
            egui::Button::new(
                RichText::new("Launch Selected Tools  ➜")
                    .size(12.0)
                    .strong()
                    .color(if master_on { Color32::BLACK } else { theme.fg_faint }),
            )
            .fill(if master_on { theme.fg_bright } else { theme.card_bg })
            .rounding(Rounding::same(10.0))
            .min_size(Vec2::new(ui.available_width(), 36.0)),
        );
        if launch.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if launch.clicked() {
            self.dispatcher.launch_all(&self.settings);
        }
    }

    fn show_settings_window(&mut self, ctx: &egui::Context, theme: Theme) {
        let mut open = self.show_settings_dialog;
        egui::Window::new(RichText::new("SYSTEM SETTINGS").size(12.0).strong())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_width(280.0);
                ui.add_space(4.0);

                ui.label(
                    RichText::new("ACCENT THEME")
                        .size(9.0)
                        .strong()
                        .color(theme.fg_dim),
                );
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    for accent in theme::accent_palette() {
                        let color = theme::accent_or_default(accent.value);
                        let selected = self.settings.accent_color == accent.value;
                        let swatch = ui
                            .add(
                                egui::Button::new("")
                                    .fill(color)
                                    .stroke(if selected {
                                        Stroke::new(2.0, Color32::WHITE)
                                    } else {
                                        Stroke::new(1.0, theme.border)
                                    })
                                    .rounding(Rounding::same(13.0))
                                    .min_size(Vec2::splat(26.0)),
                            )
                            .on_hover_text(accent.name);
                        if swatch.hovered() {
                            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                        }
                        if swatch.clicked() {
                            self.settings.set_accent_color(accent.value);
                            self.persist();
                        }
                    }
                });

                ui.add_space(12.0);
                ui.label(
                    RichText::new("KEYBOARD SHORTCUTS")
                        .size(9.0)
                        .strong()
                        .color(theme.fg_dim),
                );
                ui.add_space(6.0);
                shortcut_row(ui, theme, "Toggle master power", "Ctrl/Cmd + Shift + P");
                shortcut_row(ui, theme, "Launch selected", "Ctrl/Cmd + Shift + L");

                ui.add_space(12.0);
                ui.label(
                    RichText::new("ABOUT")
                        .size(9.0)
                        .strong()
                        .color(theme.fg_dim),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(
                        "Launches tools in 1000x800 popup windows. Drag rows to reorder. \
                         Preferences persist locally.",
                    )
                    .size(9.0)
                    .color(theme.fg_dim),
                );
            });
        self.show_settings_dialog = open;
    }
}

impl eframe::App for AiLaunchpad {
    /// Settings are saved after every transition already; this is the
    /// belt-and-braces write on the way out.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("saving settings on exit");
        self.persist();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_indicators();
        self.handle_shortcuts(ctx);

        let theme = Theme::from_accent(&self.settings.accent_color);

        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = theme.bg;
        visuals.window_fill = theme.panel_bg;
        visuals.window_stroke = Stroke::new(1.0, theme.border);
        visuals.faint_bg_color = theme.input_bg;
        visuals.extreme_bg_color = theme.bg;
        visuals.widgets.inactive.bg_fill = theme.input_bg;
        visuals.widgets.hovered.bg_fill = theme.card_hover_bg;
        visuals.widgets.active.bg_fill = theme.accent_dim;
        visuals.selection.bg_fill = theme.accent_dim;
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(theme.bg)
                    .inner_margin(egui::Margin::symmetric(PANEL_PADDING, 10.0)),
            )
            .show(ctx, |ui| {
                self.show_header(ui, theme);
            });

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(theme.bg)
                    .inner_margin(egui::Margin::symmetric(PANEL_PADDING, 8.0)),
            )
            .show(ctx, |ui| {
                self.show_footer(ui, theme);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme.bg)
                    .inner_margin(egui::Margin::symmetric(PANEL_PADDING, 2.0)),
            )
            .show(ctx, |ui| {
                self.show_tool_list(ui, theme);
            });

        if self.show_settings_dialog {
            self.show_settings_window(ctx, theme);
        }

        // Keep repainting while a transient indicator is live so it
        // reverts without further input.
        if self.copied.is_some() || self.launched.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Small animated toggle in the accent color
fn toggle_switch(ui: &mut egui::Ui, on: bool, theme: Theme, interactive: bool) -> egui::Response {
    let sense = if interactive {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(Vec2::new(34.0, 18.0), sense);

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, on);
        let radius = rect.height() / 2.0;
        let bg = if on { theme.accent } else { theme.toggle_off };
        ui.painter().rect_filled(rect, radius, bg);
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter().circle_filled(
            egui::pos2(knob_x, rect.center().y),
            radius - 3.0,
            Color32::WHITE,
        );
    }
    if interactive && response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }
    response
}

fn shortcut_row(ui: &mut egui::Ui, theme: Theme, label: &str, keys: &str) {
    egui::Frame::none()
        .fill(theme.card_bg)
        .rounding(Rounding::same(5.0))
        .inner_margin(egui::Margin::symmetric(8.0, 5.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).size(10.0).color(theme.fg));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::Frame::none()
                        .fill(theme.input_bg)
                        .rounding(Rounding::same(4.0))
                        .inner_margin(egui::Margin::symmetric(5.0, 2.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(keys).size(9.0).strong().color(theme.fg_bright),
                            );
                        });
                });
            });
        });
}
