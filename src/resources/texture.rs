use anyhow::Context as _;
use image::{Rgba, RgbaImage};

use crate::data_structures::texture;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("No window"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("Page origin is not readable"))?;
    let base = reqwest::Url::parse(&format!("{}/assets/", origin))?;
    Ok(base.join(file_name)?)
}

/// Reads `assets/<file_name>`: from disk natively, over HTTP relative to the
/// page origin on the web.
pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url)
            .await?
            .error_for_status()
            .with_context(|| format!("Could not fetch {}", file_name))?
            .bytes()
            .await?
            .to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        std::fs::read(&path).with_context(|| format!("Could not read {}", path.display()))?
    };

    Ok(data)
}

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<texture::Texture> {
    let data = load_binary(file_name).await?;
    texture::Texture::from_bytes(device, queue, &data, file_name)
}

/// A white arrow pointing up on a dark blue square, so the orientation of
/// each cube face is visible without shipping an image file.
pub fn arrow_image(size: u32) -> image::DynamicImage {
    let size = size.max(8);
    let background = Rgba([32, 48, 96, 255]);
    let arrow = Rgba([255, 255, 255, 255]);
    let img = RgbaImage::from_fn(size, size, |x, y| {
        // normalised coordinates, v grows upwards
        let u = (x as f32 + 0.5) / size as f32;
        let v = 1.0 - (y as f32 + 0.5) / size as f32;
        let shaft = (u - 0.5).abs() < 0.1 && (0.15..0.55).contains(&v);
        let head = (0.55..0.85).contains(&v) && (u - 0.5).abs() < (0.85 - v);
        if shaft || head { arrow } else { background }
    });
    image::DynamicImage::ImageRgba8(img)
}
