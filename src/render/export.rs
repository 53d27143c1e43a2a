use std::io::Cursor;

use crate::foundation::error::{PlotError, PlotResult};
use crate::render::surface::FrameRGBA;

/// Encode a frame as PNG bytes.
///
/// Premultiplied frames are converted back to straight alpha first, since PNG stores
/// unassociated alpha.
pub fn encode_png(frame: &FrameRGBA) -> PlotResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(PlotError::export(format!(
            "frame byte length {} does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }

    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| PlotError::export("frame buffer does not fit its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PlotError::export(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// Download name derived from the plot title: whitespace runs become `-`, lowercased,
/// suffixed with `-plot.png`.
pub fn export_file_name(title: &str) -> String {
    let stem = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{stem}-plot.png")
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
