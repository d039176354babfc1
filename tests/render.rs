use nalgebra::{Point2, Point3, Vector3, Vector4};
use pinhole_rasterizer::core::framebuffer::FrameBuffer;
use pinhole_rasterizer::core::math::interpolation::{edge_values, is_covered};
use pinhole_rasterizer::core::rasterizer::Rasterizer;
use pinhole_rasterizer::io::config::{Config, MotionConfig};
use pinhole_rasterizer::scene::loader::build_scene;
use pinhole_rasterizer::{Camera, ImageDimensions, Mesh, Shape, TransformFactory, Transformable};

const BACKGROUND: [u8; 3] = [1, 2, 3];

fn canonical_camera() -> Camera {
    Camera::new(
        "canonical",
        Vector3::new(0.0, 0.0, -5.0),
        Vector3::zeros(),
        ImageDimensions::new(72, 128),
        1.0,
        0.0,
    )
}

/// Interpolating a constant color may land a hair below it before truncation.
fn roughly(a: [u8; 3], b: [u8; 3]) -> bool {
    a.iter().zip(&b).all(|(&x, &y)| x.abs_diff(y) <= 1)
}

/// A large flat triangle in the plane `z`, in a single color.
fn flat_triangle(name: &str, z: f32, color: [u8; 3]) -> Shape {
    let mesh = Mesh::new(
        vec![
            Vector4::new(-3.0, -2.0, 0.0, 1.0),
            Vector4::new(3.0, -2.0, 0.0, 1.0),
            Vector4::new(0.0, 2.0, 0.0, 1.0),
        ],
        vec![[0, 1], [0, 2], [1, 2]],
        vec![color; 3],
    );
    Shape::new(name, mesh, Vector3::new(0.0, 0.0, z), Vector3::zeros())
}

#[test]
fn test_depth_test_ignores_draw_order() {
    let camera = canonical_camera();
    let near = flat_triangle("near", 0.0, [200, 0, 0]);
    let far = flat_triangle("far", 1.0, [0, 0, 200]);

    let near_first = camera.raster([&near, &far], BACKGROUND);
    let far_first = camera.raster([&far, &near], BACKGROUND);

    assert_eq!(near_first, far_first);
    assert!(roughly(near_first.get_pixel(64, 36).0, [200, 0, 0]));
}

#[test]
fn test_farther_triangle_shows_where_uncovered() {
    let camera = canonical_camera();
    let near = flat_triangle("near", 0.0, [200, 0, 0]);
    let mut far = flat_triangle("far", 1.0, [0, 0, 200]);
    // Push the far triangle sideways so it pokes out to the right.
    far.compose_transform(&TransformFactory::translation(2.0, 0.0, 0.0));

    let frame = camera.raster([&near, &far], BACKGROUND);
    assert!(frame.pixels().any(|p| roughly(p.0, [200, 0, 0])));
    assert!(frame.pixels().any(|p| roughly(p.0, [0, 0, 200])));
    assert!(frame.pixels().any(|p| p.0 == BACKGROUND));
}

#[test]
fn test_interior_pixels_blend_vertex_colors() {
    let mut fb = FrameBuffer::new(64, 48, BACKGROUND);
    let tri = [
        Point3::new(10.0, 10.0, 3.0),
        Point3::new(50.0, 12.0, 4.0),
        Point3::new(20.0, 40.0, 5.0),
    ];
    let colors = [
        Vector3::new(255.0, 0.0, 0.0),
        Vector3::new(0.0, 255.0, 0.0),
        Vector3::new(0.0, 0.0, 255.0),
    ];
    Rasterizer::new().rasterize_triangle(&fb, &tri, &colors);
    let frame = fb.to_image();

    let corners = tri.map(|p| Point2::new(p.x, p.y));
    let mut inside = 0;
    for (x, y, pixel) in frame.enumerate_pixels() {
        let w = edge_values(Point2::new(x as f32, y as f32), &corners);
        let strictly_inside =
            (w.x > 0.0 && w.y > 0.0 && w.z > 0.0) || (w.x < 0.0 && w.y < 0.0 && w.z < 0.0);

        if strictly_inside {
            inside += 1;
            // Weights sum to one and each vertex contributes 255 in total,
            // so the truncated channels sum to just under 255.
            let sum: u32 = pixel.0.iter().map(|&c| c as u32).sum();
            assert!((252..=255).contains(&sum), "pixel ({x}, {y}) = {:?}", pixel.0);
        } else if !is_covered(&w) {
            assert_eq!(pixel.0, BACKGROUND, "pixel ({x}, {y}) outside");
        }
    }
    assert!(inside > 100);
}

#[test]
fn test_rendering_is_idempotent() {
    let context = build_scene(&Config::default()).unwrap();
    let first = context.camera.raster(&context.shapes, BACKGROUND);
    let second = context.camera.raster(&context.shapes, BACKGROUND);
    assert_eq!(first, second);
    assert!(first.pixels().any(|p| p.0 != BACKGROUND));
}

#[test]
fn test_moving_the_camera_changes_the_frame() {
    let mut config = Config::default();
    config.camera.motion = Some(MotionConfig {
        translation: [0.0; 3],
        rotation: [0.0, 0.0, 30.0],
    });

    let mut context = build_scene(&config).unwrap();
    let before = context.camera.raster(&context.shapes, BACKGROUND);
    context.advance();
    let after = context.camera.raster(&context.shapes, BACKGROUND);
    assert_ne!(before, after);
}

#[test]
fn test_snap_mask_is_half_open() {
    // Height 64 with f = 1 and the camera 4 units away gives exact pixel
    // coordinates: x = 16 * x_world + 64, y = 16 * y_world + 32.
    let camera = Camera::new(
        "snap",
        Vector3::new(0.0, 0.0, -4.0),
        Vector3::zeros(),
        ImageDimensions::new(64, 128),
        1.0,
        0.0,
    );

    let frame = camera.snap(&[
        Vector4::new(-4.0, -2.0, 0.0, 1.0), // (0, 0)
        Vector4::new(0.0, 0.0, 0.0, 1.0),   // (64, 32)
        Vector4::new(4.0, 0.0, 0.0, 1.0),   // x == width
        Vector4::new(0.0, 2.0, 0.0, 1.0),   // y == height
        Vector4::new(0.0, 0.0, -4.0, 1.0),  // on the camera plane
    ]);

    let lit: Vec<(u32, u32)> = frame
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 == [255, 255, 255])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(lit, vec![(0, 0), (64, 32)]);
    assert_eq!(frame.dimensions(), (128, 64));
}

#[test]
fn test_cube_behind_camera_does_not_panic() {
    let camera = canonical_camera();
    let cube = Shape::new(
        "behind",
        Mesh::cube(2.0, vec![[255, 255, 255]; 8]),
        Vector3::new(0.0, 0.0, -10.0),
        Vector3::zeros(),
    );
    let straddling = Shape::new(
        "straddling",
        Mesh::cube(2.0, vec![[255, 255, 255]; 8]),
        Vector3::new(0.0, 0.0, -5.0),
        Vector3::zeros(),
    );
    let frame = camera.raster([&cube, &straddling], BACKGROUND);
    assert_eq!(frame.dimensions(), (128, 72));
}

#[test]
fn test_bundled_scene_renders_strictly() {
    let mut config = Config::load("scene.toml").unwrap();
    config.render.strict = true;
    let context = build_scene(&config).unwrap();
    assert_eq!(context.shapes.len(), 3);
    assert_eq!(context.shapes[2].triangles(), &[[0, 1, 2]]);

    let frame = context.camera.raster(&context.shapes, config.render.background);
    assert!(frame.pixels().any(|p| p.0 != config.render.background));
}
