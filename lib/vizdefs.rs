use tabbycat::attributes::Color;

pub const FONT: &str = "DejaVu Sans";
pub const FONTSIZE: f64 = 10.0; // pt
pub const MODPLUS_FONTSIZE: f64 = 16.0; // pt
pub const CIRCLE_HEIGHT: f64 = 0.12; // in
pub const NODE_MARGIN: f64 = 0.025; // in

pub const BOX_COLOR   : Color = Color::Rgb(250, 205, 115); // yellow
pub const CTRL_COLOR  : Color = Color::Black;
pub const ANTI_COLOR  : Color = Color::White;
