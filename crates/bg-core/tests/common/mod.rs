// Recording Surface shared by the integration tests.

#![allow(dead_code)]
use glam::DVec2;
use trading_bg_core::{Paint, Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Save,
    Restore,
    GlobalAlpha(f64),
    Shadow(Rgba, f64),
    Fill(Paint),
    Stroke(Paint),
    LineWidth(f64),
    Font(String),
    FillRect(f64, f64, f64, f64),
    FillPolygon(Vec<DVec2>),
    StrokePath(Vec<DVec2>, bool),
    Text(String, f64, f64),
}

#[derive(Default)]
pub struct Recorder {
    pub cmds: Vec<Cmd>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }

    pub fn texts(&self) -> usize {
        self.count(|c| matches!(c, Cmd::Text(..)))
    }

    pub fn polygons(&self) -> usize {
        self.count(|c| matches!(c, Cmd::FillPolygon(..)))
    }

    pub fn strokes(&self) -> usize {
        self.count(|c| matches!(c, Cmd::StrokePath(..)))
    }

    /// Every coordinate and numeric argument is finite.
    pub fn all_finite(&self) -> bool {
        let pt = |p: &DVec2| p.x.is_finite() && p.y.is_finite();
        self.cmds.iter().all(|c| match c {
            Cmd::GlobalAlpha(a) | Cmd::LineWidth(a) => a.is_finite(),
            Cmd::Shadow(_, b) => b.is_finite(),
            Cmd::FillRect(x, y, w, h) => [x, y, w, h].iter().all(|v| v.is_finite()),
            Cmd::FillPolygon(p) | Cmd::StrokePath(p, _) => p.iter().all(pt),
            Cmd::Text(_, x, y) => x.is_finite() && y.is_finite(),
            _ => true,
        })
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.cmds.push(Cmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(Cmd::Restore);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.cmds.push(Cmd::GlobalAlpha(alpha));
    }
    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.cmds.push(Cmd::Shadow(color, blur));
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.cmds.push(Cmd::Fill(paint.clone()));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.cmds.push(Cmd::Stroke(paint.clone()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.cmds.push(Cmd::LineWidth(width));
    }
    fn set_font(&mut self, font: &str) {
        self.cmds.push(Cmd::Font(font.to_string()));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.cmds.push(Cmd::FillRect(x, y, w, h));
    }
    fn fill_polygon(&mut self, points: &[DVec2]) {
        self.cmds.push(Cmd::FillPolygon(points.to_vec()));
    }
    fn stroke_path(&mut self, points: &[DVec2], closed: bool) {
        self.cmds.push(Cmd::StrokePath(points.to_vec(), closed));
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.cmds.push(Cmd::Text(text.to_string(), x, y));
    }
}
