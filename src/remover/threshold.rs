use image::Rgba;
use image::RgbaImage;

/// Red, green and blue must all be strictly above this to count as near-white
pub const THRESHOLD: u8 = 240;

/// Replacement for near-white pixels: white color channels, zero alpha
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Check whether a pixel is near-white, alpha is not considered
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    pixel[0] > THRESHOLD && pixel[1] > THRESHOLD && pixel[2] > THRESHOLD
}

/// Replace every near-white pixel with transparent white, in raster order
/// Returns the number of pixels that matched
pub fn clear_near_white(image: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        if is_near_white(pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }
    cleared
}
