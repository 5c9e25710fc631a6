//! Rendering straight from per-cell series, no HDF5 involved

mod common;

use common::{dark_near, dark_pixels, png_dimensions, read_luma, ScratchDir};
use hydro1d_plot::render::{render_figure, FigureStyle, PanelSet, RenderError};

const N: usize = 10;

/// Gas at rest with d=1, p=1, gamma=1.4, so specific internal energy is 2.5
struct Uniform {
    density: Vec<f64>,
    velocity: Vec<f64>,
    pressure: Vec<f64>,
    energy: Vec<f64>,
}

impl Uniform {
    fn new() -> Self {
        Self {
            density: vec![1.0; N],
            velocity: vec![0.0; N],
            pressure: vec![1.0; N],
            energy: vec![2.5; N],
        }
    }

    fn panels(&self) -> PanelSet<'_> {
        PanelSet {
            density: &self.density,
            velocity: &self.velocity,
            pressure: &self.pressure,
            specific_internal_energy: &self.energy,
        }
    }
}

/// 400x400 without labels: 200x200 panels, plot area spans pixels 10..190
fn square_style() -> FigureStyle {
    FigureStyle {
        width: 400,
        height: 400,
        labels: false,
        ..FigureStyle::default()
    }
}

/// Pixel row of `value` inside a panel whose plot area starts at `top`
fn row(value: f64, min: f64, max: f64, top: u32) -> u32 {
    top + ((max - value) / (max - min) * 180.0).round() as u32
}

#[test]
fn test_markers_land_at_their_values() {
    let dir = ScratchDir::new("markers");
    let path = dir.join("uniform.png");
    let data = Uniform::new();
    let style = square_style();
    render_figure(&path, N, &data.panels(), &style).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_dimensions(&bytes), (400, 400));
    let img = read_luma(&path);

    // Cell 5 of 10 sits mid-panel
    let x_left = 100;
    let x_right = 300;

    let density_y = row(1.0, 0.0, 1.1, 10);
    let velocity_y = row(0.0, -0.1, 1.1, 10);
    let pressure_y = row(1.0, 0.0, 1.1, 210);
    let energy_y = row(2.5, 1.5, 3.7, 210);
    assert_eq!(density_y, 26);
    assert_eq!(energy_y, 308);

    assert!(dark_near(&img, x_left, density_y), "no density marker");
    assert!(dark_near(&img, x_right, velocity_y), "no velocity marker");
    assert!(dark_near(&img, x_left, pressure_y), "no pressure marker");
    assert!(dark_near(&img, x_right, energy_y), "no energy marker");

    // Away from the markers the panels are blank
    assert_eq!(dark_pixels(&img, 15..185, 100..101), 0);
    assert_eq!(dark_pixels(&img, 215..385, 60..61), 0);
    assert_eq!(dark_pixels(&img, 15..185, 300..301), 0);
    assert_eq!(dark_pixels(&img, 215..385, 360..361), 0);
}

#[test]
fn test_out_of_range_values_are_left_off() {
    let dir = ScratchDir::new("clip");
    let path = dir.join("clip.png");
    let mut data = Uniform::new();
    data.pressure = vec![40.0; N];
    data.energy = vec![100.0; N];
    render_figure(&path, N, &data.panels(), &square_style()).unwrap();

    let img = read_luma(&path);
    assert!(dark_near(&img, 100, 26));
    assert_eq!(dark_pixels(&img, 13..187, 213..387), 0, "pressure panel not empty");
    assert_eq!(dark_pixels(&img, 213..387, 213..387), 0, "energy panel not empty");
}

#[test]
fn test_panels_are_framed() {
    let dir = ScratchDir::new("frame");
    let path = dir.join("frame.png");
    let data = Uniform::new();
    render_figure(&path, N, &data.panels(), &square_style()).unwrap();

    let img = read_luma(&path);
    // Top and bottom edges of the bottom-right frame
    assert!(dark_pixels(&img, 250..350, 208..213) > 50);
    assert!(dark_pixels(&img, 250..350, 387..392) > 50);
}

#[test]
fn test_labels_render_when_fonts_are_available() {
    let dir = ScratchDir::new("labels");
    let path = dir.join("labels.png");
    let data = Uniform::new();
    let style = FigureStyle {
        labels: true,
        ..square_style()
    };

    match render_figure(&path, N, &data.panels(), &style) {
        Ok(()) => {}
        Err(RenderError::Draw(msg)) => {
            eprintln!("skipping labelled render, text drawing failed: {}", msg);
            return;
        }
        Err(other) => panic!("unexpected error: {:?}", other),
    }

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_dimensions(&bytes), (400, 400));

    // Tick labels fill the y label area left of the density plot area
    let img = read_luma(&path);
    assert!(dark_pixels(&img, 10..45, 15..160) > 0, "no tick labels drawn");
}
