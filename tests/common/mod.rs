//! Helpers shared by the integration tests

#![allow(dead_code)]

use hydro1d_plot::render::FigureStyle;
use hydro1d_plot::snapshot::{GridDims, Snapshot};
use hydro1d_plot::PlotterConfig;
use std::ops::Range;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Unique directory under the system temp dir, removed on drop
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!("hydro1d_plot_{}_{}", tag, Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// `n` cells of gas at rest: d=1, E=2.5, gamma=1.4
pub fn uniform_snapshot(n: usize) -> Snapshot {
    Snapshot {
        path: PathBuf::new(),
        dims: GridDims::new_1d(n),
        gamma: 1.4,
        density: vec![1.0; n],
        momentum_x: vec![0.0; n],
        momentum_y: vec![0.0; n],
        momentum_z: vec![0.0; n],
        energy: vec![2.5; n],
        gas_energy: None,
        dual_energy_flag: None,
    }
}

/// Small, font-free figures writing into `output_dir`
pub fn test_config(output_dir: &Path) -> PlotterConfig {
    PlotterConfig {
        output_dir: output_dir.to_path_buf(),
        style: FigureStyle {
            width: 240,
            height: 200,
            labels: false,
            ..FigureStyle::default()
        },
        ..PlotterConfig::default()
    }
}

/// Width and height from a PNG's IHDR chunk
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    assert!(bytes.len() > 24, "PNG too short");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "missing PNG signature");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

/// Decode a rendered figure to grayscale
pub fn read_luma(path: &Path) -> image::GrayImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("cannot decode {}: {}", path.display(), e))
        .to_luma8()
}

/// Number of near-black pixels inside the given window
pub fn dark_pixels(img: &image::GrayImage, xs: Range<u32>, ys: Range<u32>) -> usize {
    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .filter(|&(x, y)| x < img.width() && y < img.height())
        .filter(|&(x, y)| img.get_pixel(x, y).0[0] < 100)
        .count()
}

/// Whether a marker covers the neighbourhood of `(x, y)`
pub fn dark_near(img: &image::GrayImage, x: u32, y: u32) -> bool {
    dark_pixels(img, x.saturating_sub(2)..x + 3, y.saturating_sub(2)..y + 3) > 0
}
