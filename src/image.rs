//! Distance maps of `GrayImage`s

use crate::errors::Result;
use crate::float_types::Real;
use crate::transform::{distance_transform, squared_distance_transform};
use ::image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

/// Field of `f32` distances, one per pixel.
pub type DistanceField = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Builds a mask from a grayscale image: pixels `>= threshold` are objects (`1`),
/// everything else is background (`0`).
///
/// Rows of the returned array are image rows (`y`), columns are `x`.
pub fn mask_from_gray(img: &GrayImage, threshold: u8) -> Array2<u8> {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        (img.get_pixel(x as u32, y as u32)[0] >= threshold) as u8
    })
}

/// Euclidean distance of every pixel, saturating at 255.
///
/// With `background = true` background pixels measure their distance to the
/// nearest object pixel; otherwise object pixels measure their distance to
/// the nearest background pixel.
///
/// # Example
/// ```no_run
/// # use parabolic_edt::image::distance_image;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("glyph.png")?.to_luma8();
/// let dist = distance_image(&img, 128, true)?;
/// dist.save("glyph_distance.png")?;
/// # Ok(())
/// # }
/// ```
pub fn distance_image(img: &GrayImage, threshold: u8, background: bool) -> Result<GrayImage> {
    let (width, height) = img.dimensions();
    let mask = mask_from_gray(img, threshold);
    let mut dist = Array2::<u8>::zeros(mask.raw_dim());
    distance_transform(&mask, &mut dist, background, None)?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        Luma([dist[[y as usize, x as usize]]])
    }))
}

/// Euclidean distance of every pixel as a real-valued field.
///
/// `pixel_pitch` is `[row pitch, column pitch]`, i.e. `[dy, dx]`.
pub fn distance_field(
    img: &GrayImage,
    threshold: u8,
    background: bool,
    pixel_pitch: Option<[Real; 2]>,
) -> Result<DistanceField> {
    let (width, height) = img.dimensions();
    let mask = mask_from_gray(img, threshold);
    let mut dist = Array2::<f32>::zeros(mask.raw_dim());
    distance_transform(&mask, &mut dist, background, pixel_pitch.as_ref().map(|p| p.as_slice()))?;
    Ok(DistanceField::from_fn(width, height, |x, y| {
        Luma([dist[[y as usize, x as usize]]])
    }))
}

/// Squared Euclidean distance of every pixel, saturating at `u16::MAX`.
pub fn squared_distance_image(
    img: &GrayImage,
    threshold: u8,
    background: bool,
) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>> {
    let (width, height) = img.dimensions();
    let mask = mask_from_gray(img, threshold);
    let mut dist = Array2::<u16>::zeros(mask.raw_dim());
    squared_distance_transform(&mask, &mut dist, background, None)?;
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        Luma([dist[[y as usize, x as usize]]])
    }))
}
