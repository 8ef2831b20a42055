use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const FRAME_FILL: Color32 = Color32::LIGHT_GRAY;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    pub const CELL_SIZE: f32 = 14.;
    pub const CELL_GAP: f32 = 1.;
    pub const CELL_ROUNDING: f32 = 1.;
    pub const CELL_STROKE_WIDTH: f32 = 0.2;
    pub const CELL_STROKE_COLOR: Color32 = Color32::from_gray(60);
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0, 200, 0);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
    pub const BOARD_BACKGROUND: Color32 = Color32::BLACK;
}
