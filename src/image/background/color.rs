use image::{Rgba, RgbaImage};

/// Sample the background reference color from the top-left pixel.
///
/// Returns `None` for an empty image.
pub(super) fn sample_background(img: &RgbaImage) -> Option<Rgba<u8>> {
    img.pixels().next().copied()
}

/// Euclidean distance between two colors in RGB space, ignoring alpha.
#[inline]
pub(super) fn color_distance(c1: &Rgba<u8>, c2: &Rgba<u8>) -> f64 {
    let dr = i32::from(c1[0]) - i32::from(c2[0]);
    let dg = i32::from(c1[1]) - i32::from(c2[1]);
    let db = i32::from(c1[2]) - i32::from(c2[2]);
    f64::from(dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::{color_distance, sample_background};

    #[test]
    fn distance_ignores_alpha() {
        let a = Rgba([10, 20, 30, 255]);
        let b = Rgba([10, 20, 30, 0]);
        assert_eq!(color_distance(&a, &b), 0.0);
    }

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        let a = Rgba([0, 0, 0, 255]);
        let b = Rgba([3, 4, 0, 255]);
        assert_eq!(color_distance(&a, &b), 5.0);
        assert_eq!(color_distance(&b, &a), 5.0);

        let white = Rgba([255, 255, 255, 255]);
        let grey = Rgba([200, 200, 200, 255]);
        assert!((color_distance(&white, &grey) - 95.2628).abs() < 1e-3);
    }

    #[test]
    fn samples_top_left_pixel() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        img.put_pixel(0, 0, Rgba([9, 8, 7, 6]));
        assert_eq!(sample_background(&img), Some(Rgba([9, 8, 7, 6])));
    }

    #[test]
    fn empty_image_has_no_background() {
        assert_eq!(sample_background(&RgbaImage::new(0, 0)), None);
        assert_eq!(sample_background(&RgbaImage::new(4, 0)), None);
    }
}
