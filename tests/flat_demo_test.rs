#[cfg(feature = "integration-tests")]
#[macro_use]
mod common;

#[cfg(feature = "integration-tests")]
mod flat {
    use instant::Duration;
    use webgpu_sandbox::{DemoKind, render::Attachments};

    use crate::common::test_utils::{SIZE, render_demo, rgba};

    #[test]
    fn triangle_is_drawn_over_the_clear_colour() {
        let frame = render_demo(DemoKind::Triangle, Duration::ZERO).unwrap();
        let sky = rgba(Attachments::SKY);

        assert_pixel!(frame, 0, 0, sky);
        assert_pixel!(frame, SIZE - 1, 0, sky);
        assert_pixel!(frame, 0, SIZE - 1, sky);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, sky);
    }

    #[test]
    fn triangle_interpolates_vertex_colours() {
        let frame = render_demo(DemoKind::Triangle, Duration::ZERO).unwrap();
        // near the apex the red vertex dominates
        let top = frame.get_pixel(SIZE / 2, SIZE / 2 - 60);
        assert!(top[0] > 180 && top[1] < 80 && top[2] < 80, "{top:?}");
        // bottom left corner of the triangle leans green
        let left = frame.get_pixel(SIZE / 4 + 4, SIZE * 4 / 5 - 3);
        assert!(left[1] > left[0] && left[1] > left[2], "{left:?}");
    }

    #[test]
    fn square_covers_the_middle_of_the_frame() {
        let frame = render_demo(DemoKind::Square, Duration::ZERO).unwrap();
        let sky = rgba(Attachments::SKY);

        assert_pixel!(frame, 2, 2, sky);
        assert_pixel!(frame, SIZE - 3, SIZE - 3, sky);
        // both triangles of the index buffer are drawn
        assert_not_pixel!(frame, SIZE / 4, SIZE / 4, sky);
        assert_not_pixel!(frame, SIZE * 3 / 4, SIZE * 3 / 4, sky);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, sky);
    }

    #[test]
    fn msaa_resolves_into_the_single_sampled_target() {
        let frame = render_demo(DemoKind::TriangleMsaa, Duration::ZERO).unwrap();
        let plain = render_demo(DemoKind::Triangle, Duration::ZERO).unwrap();
        let sky = rgba(Attachments::SKY);

        assert_pixel!(frame, 0, 0, sky);
        assert_not_pixel!(frame, SIZE / 2, SIZE / 2, sky);
        // away from the edges the resolve matches the single sampled render
        assert_pixel!(frame, SIZE / 2, SIZE / 2, *plain.get_pixel(SIZE / 2, SIZE / 2));
    }
}
