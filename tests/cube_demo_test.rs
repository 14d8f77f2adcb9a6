#[cfg(feature = "integration-tests")]
#[macro_use]
mod common;

#[cfg(feature = "integration-tests")]
mod cubes {
    use instant::Duration;
    use webgpu_sandbox::{Config, DemoKind, render::Attachments};

    use crate::common::test_utils::{SIZE, render_demo, render_demo_async, rgba};

    fn assert_cube_in_the_middle(kind: DemoKind, elapsed: Duration) {
        let frame = render_demo(kind, elapsed).unwrap();
        let gray = rgba(Attachments::GRAY);

        assert_pixel!(frame, 0, 0, gray);
        assert_pixel!(frame, SIZE - 1, SIZE - 1, gray);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, gray);
    }

    #[test]
    fn cube_is_visible_while_rotating() {
        for millis in [0, 400, 1300, 2700] {
            assert_cube_in_the_middle(DemoKind::Cube, Duration::from_millis(millis));
        }
    }

    #[test]
    fn matrix_cube_is_visible_while_rotating() {
        for millis in [0, 400, 1300, 2700] {
            assert_cube_in_the_middle(DemoKind::CubeMatrix, Duration::from_millis(millis));
        }
    }

    #[test]
    fn matrix_cube_is_small_at_camera_distance() {
        let frame = render_demo(DemoKind::CubeMatrix, Duration::from_millis(500)).unwrap();
        let gray = rgba(Attachments::GRAY);
        // a 2 unit cube 20 units away spans well under a quarter of the view
        assert_pixel!(frame, SIZE / 2, SIZE / 4, gray);
        assert_pixel!(frame, SIZE / 4, SIZE / 2, gray);
    }

    #[test]
    fn textured_cube_samples_the_generated_arrow() {
        let frame = render_demo(DemoKind::CubeTexture, Duration::from_millis(250)).unwrap();
        let gray = rgba(Attachments::GRAY);

        assert_pixel!(frame, 0, 0, gray);
        let centre = frame.get_pixel(SIZE / 2, SIZE / 2);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, gray);
        // the arrow is white or dark blue, never the vertex colours
        assert!(centre[2] >= centre[0], "{centre:?}");
    }

    #[test]
    fn textured_cube_loads_its_image_from_assets() {
        let file_name = format!("test_red_{}.png", std::process::id());
        let path = std::path::Path::new("./assets").join(&file_name);
        std::fs::create_dir_all("./assets").unwrap();
        image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let config = Config {
            texture: Some(file_name),
            ..Config::new(DemoKind::CubeTexture)
        };
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let frame = runtime.block_on(render_demo_async(config, Duration::from_millis(250)));
        std::fs::remove_file(&path).unwrap();
        let frame = frame.unwrap();

        assert_pixel!(frame, 0, 0, rgba(Attachments::GRAY));
        assert_pixel!(frame, SIZE / 2, SIZE / 2, image::Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn missing_texture_files_fail_the_build() {
        let config = Config {
            texture: Some("no_such_texture.png".to_string()),
            ..Config::new(DemoKind::CubeTexture)
        };
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let err = runtime
            .block_on(render_demo_async(config, Duration::ZERO))
            .unwrap_err();
        assert!(format!("{err:#}").contains("no_such_texture.png"));
    }

    #[test]
    fn cube_accepts_multisampling() {
        let config = Config {
            sample_count: Some(4),
            ..Config::new(DemoKind::Cube)
        };
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let frame = runtime
            .block_on(render_demo_async(config, Duration::from_millis(800)))
            .unwrap();
        let gray = rgba(Attachments::GRAY);

        assert_pixel!(frame, 0, 0, gray);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, gray);
    }
}
