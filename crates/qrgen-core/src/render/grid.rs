//! Module matrix of an encoded symbol and its raster/terminal renderings.

use super::{OptionsError, RenderOptions};
use image::RgbImage;

/// Square matrix of dark (`true`) and light (`false`) modules, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from row-major modules. Returns `None` unless
    /// `modules.len() == width * width`.
    pub fn new(width: usize, modules: Vec<bool>) -> Option<Self> {
        (width.checked_mul(width) == Some(modules.len())).then_some(Self { width, modules })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (`x`, `y`) is dark. Out-of-range coordinates are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Paints the grid into an RGB image: each module becomes a
    /// `module_size`×`module_size` block inside a `border`-module quiet zone.
    pub fn rasterize(&self, options: &RenderOptions) -> Result<RgbImage, OptionsError> {
        let side = options.image_side(self.width as u32)?;
        let mut img = RgbImage::from_pixel(side, side, options.background.to_rgb());
        let dark = options.foreground.to_rgb();
        let size = options.module_size;
        let offset = options.border * size;

        for y in 0..self.width {
            for x in 0..self.width {
                if !self.is_dark(x, y) {
                    continue;
                }
                let px0 = offset + x as u32 * size;
                let py0 = offset + y as u32 * size;
                for dy in 0..size {
                    for dx in 0..size {
                        img.put_pixel(px0 + dx, py0 + dy, dark);
                    }
                }
            }
        }
        Ok(img)
    }

    /// Renders the grid with Unicode half blocks, two module rows per line,
    /// surrounded by a `quiet`-module light margin. Dark modules are drawn as
    /// blocks, so the preview is meant for light-on-dark terminals to invert.
    pub fn to_terminal_string(&self, quiet: usize) -> String {
        let span = self.width + 2 * quiet;
        let dark_at = |x: usize, y: usize| -> bool {
            x >= quiet && y >= quiet && self.is_dark(x - quiet, y - quiet)
        };

        let mut out = String::with_capacity((span + 1) * span.div_ceil(2) * 3);
        for y in (0..span).step_by(2) {
            for x in 0..span {
                let ch = match (dark_at(x, y), dark_at(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn checker(width: usize) -> ModuleGrid {
        let modules = (0..width * width).map(|i| (i / width + i % width) % 2 == 0).collect();
        ModuleGrid::new(width, modules).unwrap()
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert!(ModuleGrid::new(3, vec![false; 8]).is_none());
        assert!(ModuleGrid::new(3, vec![false; 9]).is_some());
    }

    #[test]
    fn out_of_range_is_light() {
        let g = checker(3);
        assert!(g.is_dark(0, 0));
        assert!(!g.is_dark(3, 0));
        assert!(!g.is_dark(0, 99));
    }

    #[test]
    fn rasterize_places_modules_inside_border() {
        let g = checker(3);
        let opts = RenderOptions {
            module_size: 2,
            border: 1,
            foreground: Color::rgb(10, 20, 30),
            background: Color::rgb(200, 210, 220),
            ..RenderOptions::default()
        };
        let img = g.rasterize(&opts).unwrap();
        assert_eq!(img.dimensions(), (10, 10));
        let fg = image::Rgb([10, 20, 30]);
        let bg = image::Rgb([200, 210, 220]);
        // border
        assert_eq!(*img.get_pixel(0, 0), bg);
        assert_eq!(*img.get_pixel(9, 9), bg);
        // module (0,0) is dark and spans pixels 2..4
        assert_eq!(*img.get_pixel(2, 2), fg);
        assert_eq!(*img.get_pixel(3, 3), fg);
        // module (1,0) is light
        assert_eq!(*img.get_pixel(4, 2), bg);
    }

    #[test]
    fn rasterize_without_border() {
        let g = ModuleGrid::new(1, vec![true]).unwrap();
        let opts = RenderOptions {
            module_size: 3,
            border: 0,
            ..RenderOptions::default()
        };
        let img = g.rasterize(&opts).unwrap();
        assert_eq!(img.dimensions(), (3, 3));
        assert!(img.pixels().all(|p| *p == image::Rgb([0, 0, 0])));
    }

    #[test]
    fn terminal_string_shape() {
        let g = ModuleGrid::new(2, vec![true, false, false, true]).unwrap();
        let s = g.to_terminal_string(1);
        let lines: Vec<&str> = s.lines().collect();
        // span 4 → 2 lines of 4 chars
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.chars().count() == 4));
        assert_eq!(lines[0], " ▄  ");
        assert_eq!(lines[1], "  ▀ ");
    }
}
