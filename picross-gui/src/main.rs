use eframe::egui;
use picross_core::{COLUMNS, PLAYFIELD, ROWS};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod editor_state;
mod services;

use editor_state::{EditSession, EditorAction, EditorState};
use services::rom_service::RomService;

const CELL_SIZE: f32 = 20.0;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("picross_gui=info,picross_core=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([420.0, 300.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Mario's Picross Puzzle Editor",
        options,
        Box::new(|_cc| Ok(Box::new(PuzzleEditorApp::default()))),
    )
}

#[derive(Default)]
struct PuzzleEditorApp {
    state: EditorState,
    rom_service: RomService,

    // Settings
    skip_check: bool,

    // Messages
    status_message: String,
    error_message: String,
}

impl PuzzleEditorApp {
    fn handle(&mut self, action: EditorAction) {
        match action {
            EditorAction::OpenRom => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Game Boy ROM", &["gb"])
                    .add_filter("All files", &["*"])
                    .pick_file()
                {
                    self.handle(EditorAction::RomSelected(path));
                }
            }
            EditorAction::RomSelected(path) => self.open_rom(&path),
            EditorAction::SaveRomAs => {
                let EditorState::Editing(session) = &self.state else {
                    return;
                };
                let file_name = session
                    .rom
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "mariop.gb".to_string());

                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Game Boy ROM", &["gb"])
                    .add_filter("All files", &["*"])
                    .set_file_name(file_name)
                    .save_file()
                {
                    self.save_rom(&path);
                }
            }
            EditorAction::CloseRom => {
                self.state = EditorState::Welcome;
                self.clear_messages();
            }
            EditorAction::PreviousPuzzle => self.with_session(EditSession::prev),
            EditorAction::NextPuzzle => self.with_session(EditSession::next),
            EditorAction::ToggleCell { row, col } => {
                self.with_session(|s| s.toggle_cell(row, col));
            }
            EditorAction::Revert => {
                self.with_session(EditSession::revert);
                self.status_message = "Reverted all edits".to_string();
            }
        }
    }

    fn with_session(&mut self, f: impl FnOnce(&mut EditSession)) {
        if let EditorState::Editing(session) = &mut self.state {
            f(session);
        }
    }

    fn clear_messages(&mut self) {
        self.error_message.clear();
        self.status_message.clear();
    }

    fn open_rom(&mut self, path: &Path) {
        self.clear_messages();

        match self.rom_service.load(path, self.skip_check) {
            Ok(rom) => {
                self.status_message = match rom.identity {
                    Some(known) => format!(
                        "✓ Loaded {} ({})\n{} puzzles",
                        path.display(),
                        known.region,
                        rom.puzzles.len().saturating_sub(1)
                    ),
                    None => format!(
                        "⚠ Loaded unrecognized ROM {}\n{} puzzles",
                        path.display(),
                        rom.puzzles.len().saturating_sub(1)
                    ),
                };
                self.state = EditorState::Editing(EditSession::new(rom));
            }
            Err(e) => {
                self.error_message = format!("Failed to open ROM: {:?}", e);
            }
        }
    }

    fn save_rom(&mut self, path: &Path) {
        self.clear_messages();

        let EditorState::Editing(session) = &mut self.state else {
            return;
        };

        match self.rom_service.save(&session.rom, &session.puzzles, path) {
            Ok(()) => {
                session.is_modified = false;
                self.status_message = format!("✓ Saved ROM to: {}", path.display());
            }
            Err(e) => {
                self.error_message = format!("Failed to save ROM: {:?}", e);
            }
        }
    }

    fn show_welcome(skip_check: &mut bool, ui: &mut egui::Ui) -> Option<EditorAction> {
        let mut action = None;

        ui.group(|ui| {
            ui.heading("Open a ROM");
            ui.add_space(5.0);
            ui.label("Pick a Mario's Picross (Game Boy) ROM to edit its puzzles.");
            ui.checkbox(skip_check, "Skip ROM check");
            ui.add_space(10.0);

            if ui.button("📂 Open ROM...").clicked() {
                action = Some(EditorAction::OpenRom);
            }
        });

        action
    }

    fn show_editor(session: &EditSession, ui: &mut egui::Ui) -> Option<EditorAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("💾 Save ROM as...").clicked() {
                action = Some(EditorAction::SaveRomAs);
            }
            if ui
                .add_enabled(session.is_modified, egui::Button::new("↺ Revert"))
                .clicked()
            {
                action = Some(EditorAction::Revert);
            }
            if ui.button("✖ Close").clicked() {
                action = Some(EditorAction::CloseRom);
            }
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                action = Some(EditorAction::PreviousPuzzle);
            }
            ui.label(format!(
                "Puzzle #{} / {}",
                session.current,
                session.last_number()
            ));
            if ui.button("▶").clicked() {
                action = Some(EditorAction::NextPuzzle);
            }
            if let Some(puzzle) = session.puzzle() {
                ui.label(format!("{}x{}", puzzle.width, puzzle.height));
            }
            if session.is_modified {
                ui.colored_label(egui::Color32::YELLOW, "modified");
            }
        });

        ui.add_space(10.0);

        if let Some(cell) = Self::show_grid(session, ui) {
            action = Some(cell);
        }

        action
    }

    /// Paints the puzzle grid and reports a click as a toggle
    fn show_grid(session: &EditSession, ui: &mut egui::Ui) -> Option<EditorAction> {
        let puzzle = session.puzzle()?;

        let size = egui::vec2(COLUMNS as f32 * CELL_SIZE, ROWS as f32 * CELL_SIZE);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let origin = response.rect.min;

        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let rect = egui::Rect::from_min_size(
                    origin + egui::vec2(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE),
                    egui::vec2(CELL_SIZE, CELL_SIZE),
                )
                .shrink(1.0);

                let fill = match (puzzle.cell(row, col), col < PLAYFIELD) {
                    (true, true) => egui::Color32::from_gray(100),
                    (false, true) => egui::Color32::from_gray(200),
                    (true, false) => egui::Color32::from_gray(140),
                    (false, false) => egui::Color32::from_gray(60),
                };
                painter.rect_filled(rect, 0.0, fill);
            }
        }

        // declared puzzle area
        let declared = egui::Rect::from_min_size(
            origin,
            egui::vec2(
                (puzzle.width as usize).min(COLUMNS) as f32 * CELL_SIZE,
                (puzzle.height as usize).min(ROWS) as f32 * CELL_SIZE,
            ),
        );
        painter.rect_stroke(
            declared,
            0.0,
            egui::Stroke::new(2.0, egui::Color32::LIGHT_BLUE),
            egui::StrokeKind::Middle,
        );

        if !response.clicked() {
            return None;
        }

        let pos = response.interact_pointer_pos()? - origin;
        let row = (pos.y / CELL_SIZE) as usize;
        let col = (pos.x / CELL_SIZE) as usize;
        (pos.x >= 0.0 && pos.y >= 0.0 && row < ROWS && col < COLUMNS)
            .then_some(EditorAction::ToggleCell { row, col })
    }
}

impl eframe::App for PuzzleEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let version = env!("CARGO_PKG_VERSION");
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Mario's Picross Puzzle Editor v{}", version));

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            action = match &self.state {
                EditorState::Welcome => Self::show_welcome(&mut self.skip_check, ui),
                EditorState::Editing(session) => Self::show_editor(session, ui),
            };

            ui.add_space(15.0);

            // Status messages
            if !self.error_message.is_empty() {
                ui.group(|ui| {
                    ui.colored_label(egui::Color32::RED, "Error");
                    ui.label(&self.error_message);
                });
            }

            if !self.status_message.is_empty() {
                ui.group(|ui| {
                    ui.colored_label(egui::Color32::GREEN, "Success");
                    ui.label(&self.status_message);
                });
            }
        });

        if let Some(action) = action {
            self.handle(action);
        }
    }
}
