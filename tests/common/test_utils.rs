use instant::Duration;
use webgpu_sandbox::{
    config::Config,
    context::Gpu,
    demos::{DemoKind, Target},
    render::{FrameTargets, encode_frame},
};

pub(crate) const SIZE: u32 = 256;
pub(crate) const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

pub(crate) type Frame = image::ImageBuffer<image::Rgba<u8>, Vec<u8>>;

/// Builds `kind` against an offscreen target, renders one frame `elapsed`
/// into the animation and reads it back.
pub(crate) fn render_demo(kind: DemoKind, elapsed: Duration) -> anyhow::Result<Frame> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(render_demo_async(Config::new(kind), elapsed))
}

pub(crate) async fn render_demo_async(config: Config, elapsed: Duration) -> anyhow::Result<Frame> {
    let gpu = Gpu::headless().await?;
    let target = Target {
        format: FORMAT,
        width: SIZE,
        height: SIZE,
        sample_count: config.sample_count(),
    };
    let mut demo = config.demo.build(&gpu, &target, &config).await?;
    demo.on_resize(&gpu, &target);
    demo.on_update(&gpu, elapsed);

    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some("test_target"),
        size: extent(),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let targets = FrameTargets::new(&gpu.device, &target, &demo.attachments());
    let frame = encode_frame(
        &gpu.device,
        &targets,
        &demo.attachments(),
        demo.on_render(),
        &view,
    );

    let u32_size = std::mem::size_of::<u32>() as u32;
    let output_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
        size: (u32_size * SIZE * SIZE) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        label: None,
        mapped_at_creation: false,
    });
    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &output_buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(u32_size * SIZE),
                rows_per_image: Some(SIZE),
            },
        },
        extent(),
    );
    gpu.queue.submit([frame, encoder.finish()]);

    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    let buffer_slice = output_buffer.slice(..);
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        tx.send(result).unwrap();
    });
    gpu.device
        .poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: Some(std::time::Duration::from_secs(3)),
        })
        .unwrap();
    rx.receive().await.unwrap()?;
    let data = buffer_slice.get_mapped_range().to_vec();
    Ok(Frame::from_raw(SIZE, SIZE, data).unwrap())
}

fn extent() -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: SIZE,
        height: SIZE,
        depth_or_array_layers: 1,
    }
}

pub(crate) fn rgba(colour: wgpu::Color) -> image::Rgba<u8> {
    let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    image::Rgba([
        f_to_u8(colour.r),
        f_to_u8(colour.g),
        f_to_u8(colour.b),
        f_to_u8(colour.a),
    ])
}

/// Channel-wise comparison allowing for rounding in the blend units.
pub(crate) fn close_to(pixel: &image::Rgba<u8>, expected: &image::Rgba<u8>) -> bool {
    pixel
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, b)| a.abs_diff(*b) <= 1)
}


macro_rules! assert_pixel {
    ($frame:expr, $x:expr, $y:expr, $expected:expr) => {{
        let pixel = $frame.get_pixel($x, $y);
        assert!(
            $crate::common::test_utils::close_to(pixel, &$expected),
            "pixel ({}, {}) was {:?}, expected {:?}",
            $x,
            $y,
            pixel,
            $expected
        );
    }};
}


macro_rules! assert_not_pixel {
    ($frame:expr, $x:expr, $y:expr, $expected:expr) => {{
        let pixel = $frame.get_pixel($x, $y);
        assert!(
            !$crate::common::test_utils::close_to(pixel, &$expected),
            "pixel ({}, {}) should not be {:?}",
            $x,
            $y,
            $expected
        );
    }};
}
