//! Main window of the desktop host

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{GameBoard, Side};
use crate::config::Difficulty;
use crate::engine::SearchType;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;

const BOARD_SIZES: [u8; 4] = [9, 13, 15, 19];

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Black => "BLACK",
        Side::White => "WHITE",
    }
}

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start a new game in `mode`, keeping the board size
    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::with_size(mode, self.state.board_size());
    }

    fn difficulty(&self) -> Difficulty {
        match self.state.mode {
            GameMode::PvE { difficulty, .. } => difficulty,
            GameMode::PvP { .. } => Difficulty::Easy,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let difficulty = self.difficulty();
                    for human_side in [Side::Black, Side::White] {
                        let label = format!("New Game (PvE - {})", side_name(human_side));
                        if ui.button(label).clicked() {
                            self.new_game(GameMode::PvE { human_side, difficulty });
                            ui.close_menu();
                        }
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP { show_suggestions: false });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Board", |ui| {
                    for size in BOARD_SIZES {
                        let selected = self.state.board_size() == size;
                        if ui.radio(selected, format!("{size}x{size}")).clicked() {
                            self.state.resize(size);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("AI", |ui| {
                    if let GameMode::PvE { human_side, difficulty } = self.state.mode {
                        for level in Difficulty::ALL {
                            if ui.radio(difficulty == level, level.name()).clicked() {
                                self.new_game(GameMode::PvE { human_side, difficulty: level });
                                ui.close_menu();
                            }
                        }
                    } else {
                        ui.label("Hints use the Easy preset");
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_side, difficulty } => {
                            format!("PvE - You: {} - {}", side_name(human_side), difficulty.name())
                        }
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    if Self::render_game_over_card(ui, result) {
                        self.state.reset();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let (fill, text) = match turn {
                Side::Black => (BLACK_STONE, TEXT_PRIMARY),
                Side::White => (WHITE_STONE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{}", self.state.board.stone_count() + 1),
                    egui::FontId::proportional(14.0),
                    text,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(side_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                // colour relative to the current preset's budget
                let budget = self.difficulty().config().time_limit_ms.max(1) as f32 / 1000.0;
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.5 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if let GameMode::PvP { show_suggestions } = &mut self.state.mode {
                    ui.checkbox(show_suggestions, "Auto hint");
                    if ui.button("Hint").clicked() {
                        self.state.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            let kind = match result.search_type {
                SearchType::Critical(kind) => format!("Critical {kind:?}"),
                SearchType::AlphaBeta => format!("Alpha-Beta d{}", result.depth),
            };
            ui.label(RichText::new(kind).size(11.0).strong().color(TIMER_NORMAL));
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!(
                    "cutoffs {}  TT hits {:.1}%",
                    result.stats.cutoffs,
                    result.stats.tt_hit_rate()
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> ({}, {})", pos.x, pos.y))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    /// Returns true when "New Game" was clicked
    fn render_game_over_card(ui: &mut egui::Ui, result: GameResult) -> bool {
        let headline = match result {
            GameResult::Win { winner, .. } => format!("{} WINS!", side_name(winner)),
            GameResult::Draw => "DRAW".to_string(),
        };

        let mut restart = false;
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    restart = ui.button(RichText::new("New Game").size(14.0).strong()).clicked();
                });
            });
        restart
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_line = match self.state.game_over {
                Some(GameResult::Win { line, .. }) => line,
                _ => None,
            };
            let overlay = BoardOverlay {
                current_turn: self.state.current_turn,
                last_move: self.state.last_move(),
                suggested_move: self.state.suggested_move,
                winning_line,
                accepts_input: self.state.game_over.is_none() && self.state.is_human_turn(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.state.board, &overlay) {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::H) && matches!(self.state.mode, GameMode::PvP { .. }) {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.game_over.is_none() {
            if self.state.is_ai_turn() {
                self.state.start_ai_thinking();
            } else if let GameMode::PvP { show_suggestions: true } = self.state.mode {
                if self.state.suggested_move.is_none() {
                    self.state.request_suggestion();
                }
            }
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
