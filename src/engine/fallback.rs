use image::{Rgb, RgbImage};

use crate::frame::Frame;

/// Linear cross-dissolve of two frames at the given mix weight
///
/// Both inputs are resized to the smaller of the two frames' width and
/// height so shapes always match, then combined per pixel as
/// `(1 - alpha) * source + alpha * target`. This is the required behavior
/// whenever the morph engine is unavailable or declines a frame.
pub fn cross_dissolve(source: &Frame, target: &Frame, alpha: f32) -> Frame {
    let width = source.width().min(target.width());
    let height = source.height().min(target.height());

    let source = source.resize_to(width, height);
    let target = target.resize_to(width, height);
    let alpha = alpha.clamp(0.0, 1.0);

    let buffer = RgbImage::from_fn(width, height, |x, y| {
        let s = source.as_image().get_pixel(x, y);
        let t = target.as_image().get_pixel(x, y);
        let mut mixed = [0u8; 3];
        for c in 0..3 {
            let value = (1.0 - alpha) * s[c] as f32 + alpha * t[c] as f32;
            mixed[c] = (value + 0.5) as u8;
        }
        Rgb(mixed)
    });

    Frame::new(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> Frame {
        Frame::new(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_alpha_zero_is_pure_source() {
        let source = solid(8, 8, [200, 0, 0]);
        let target = solid(8, 8, [0, 0, 200]);

        let blended = cross_dissolve(&source, &target, 0.0);
        assert_eq!(blended.as_image(), source.as_image());
    }

    #[test]
    fn test_alpha_one_is_pure_target() {
        let source = solid(8, 8, [200, 0, 0]);
        let target = solid(8, 8, [0, 0, 200]);

        let blended = cross_dissolve(&source, &target, 1.0);
        assert_eq!(blended.as_image(), target.as_image());
    }

    #[test]
    fn test_midpoint_is_even_mix() {
        let source = solid(4, 4, [100, 0, 0]);
        let target = solid(4, 4, [0, 0, 200]);

        let blended = cross_dissolve(&source, &target, 0.5);
        let pixel = blended.as_image().get_pixel(0, 0);
        assert_eq!(pixel[0], 50);
        assert_eq!(pixel[1], 0);
        assert_eq!(pixel[2], 100);
    }

    #[test]
    fn test_mismatched_sizes_shrink_to_common_minimum() {
        let source = solid(10, 4, [255, 255, 255]);
        let target = solid(6, 8, [0, 0, 0]);

        let blended = cross_dissolve(&source, &target, 0.5);
        assert_eq!(blended.width(), 6);
        assert_eq!(blended.height(), 4);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let source = solid(4, 4, [80, 80, 80]);
        let target = solid(4, 4, [160, 160, 160]);

        let below = cross_dissolve(&source, &target, -0.5);
        let above = cross_dissolve(&source, &target, 1.5);
        assert_eq!(below.as_image(), source.as_image());
        assert_eq!(above.as_image(), target.as_image());
    }
}
