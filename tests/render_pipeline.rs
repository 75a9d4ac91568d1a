use softrender::math::vec2::Vec2;
use softrender::mesh::Face;
use softrender::render::{barycentric, transform_vertices};
use softrender::prelude::*;
use softrender::RenderError;

/// One triangle in the z = 1 plane, facing the default camera at (0, 0, 2).
fn facing_triangle() -> Mesh {
    Mesh::new(
        vec![
            Vec3::new(-0.5, -0.5, 1.0),
            Vec3::new(0.5, -0.5, 1.0),
            Vec3::new(0.0, 0.5, 1.0),
        ],
        vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
        vec![Vec3::FORWARD; 3],
        vec![Face::uniform(0, 1, 2)],
    )
}

fn red_texture() -> Texture {
    Texture::solid(16, 16, [255, 0, 0, 255]).unwrap()
}

fn render(mesh: &Mesh, light: Vec3, size: u32) -> (Framebuffer, RenderStats) {
    let mut fb = Framebuffer::new(size, size).unwrap();
    let stats = render_model(mesh, &red_texture(), light, &mut fb).unwrap();
    (fb, stats)
}

/// Screen-space corners of `mesh` under the default camera in a square target.
fn screen_corners(mesh: &Mesh, size: u32) -> [Vec2; 3] {
    let mvpv = Camera::default().view_matrix().unwrap()
        * Projection::default().matrix()
        * RenderConfig::viewport_matrix(size, size);
    let screen = transform_vertices(mesh.positions(), &mvpv);
    [0, 1, 2].map(|i| Vec2::new(screen[i].screen.x, screen[i].screen.y))
}

#[test]
fn facing_triangle_covers_exactly_its_inside_pixels() {
    let mesh = facing_triangle();
    let (fb, stats) = render(&mesh, Vec3::FORWARD, 64);
    let [a, b, c] = screen_corners(&mesh, 64);

    assert!(stats.pixels_written > 0);
    assert_eq!(fb.pixel(32, 32), Some([255, 0, 0, 255]));

    let mut inside_count = 0;
    for y in 0..64 {
        for x in 0..64 {
            let inside = barycentric(Vec2::new(x as f32, y as f32), a, b, c)
                .is_some_and(|l| l.iter().all(|&w| w >= 0.0));
            let written = fb.pixel(x, y) != Some([0, 0, 0, 0]);
            assert_eq!(written, inside, "coverage mismatch at ({x}, {y})");
            inside_count += usize::from(inside);
        }
    }
    assert_eq!(inside_count, stats.pixels_written);
}

#[test]
fn reused_renderer_starts_each_frame_with_empty_depth() {
    let renderer = Renderer::new(RenderConfig::default().with_size(48, 48)).unwrap();
    let mut fb = renderer.framebuffer().unwrap();
    let first = renderer
        .render(&facing_triangle(), &red_texture(), &mut fb)
        .unwrap();
    let after_first = fb.clone();
    let second = renderer
        .render(&facing_triangle(), &red_texture(), &mut fb)
        .unwrap();

    assert!(first.pixels_written > 0);
    assert_eq!(second.pixels_written, first.pixels_written);
    assert_eq!(first.depth_rejections, 0);
    assert_eq!(second.depth_rejections, 0);
    assert_eq!(fb, after_first);
}

#[test]
fn pixel_count_matches_written_pixels() {
    let (fb, stats) = render(&facing_triangle(), Vec3::FORWARD, 64);
    let drawn = fb
        .as_bytes()
        .chunks_exact(4)
        .filter(|p| *p != [0, 0, 0, 0])
        .count();
    assert_eq!(drawn, stats.pixels_written);
}

#[test]
fn rendering_twice_is_deterministic() {
    let (first, _) = render(&facing_triangle(), Vec3::new(1.0, 1.0, 1.0), 48);
    let (second, _) = render(&facing_triangle(), Vec3::new(1.0, 1.0, 1.0), 48);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn default_light_gives_half_intensity() {
    let (fb, _) = render(&facing_triangle(), Vec3::RIGHT, 64);
    assert_eq!(fb.pixel(32, 32), Some([128, 0, 0, 255]));
}

#[test]
fn light_behind_surface_gives_black() {
    let (fb, _) = render(&facing_triangle(), -Vec3::FORWARD, 64);
    assert_eq!(fb.pixel(32, 32), Some([0, 0, 0, 255]));
}

#[test]
fn nearer_triangle_occludes_farther_one() {
    let mut mesh_positions = facing_triangle().positions().to_vec();
    // A second, larger copy further from the camera
    mesh_positions.extend([
        Vec3::new(-0.9, -0.9, 0.0),
        Vec3::new(0.9, -0.9, 0.0),
        Vec3::new(0.0, 0.9, 0.0),
    ]);
    let mesh = Mesh::new(
        mesh_positions,
        vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)],
        vec![Vec3::FORWARD; 6],
        vec![
            Face::new([0, 1, 2].map(|v| softrender::mesh::FaceVertex::new(v, 0))),
            Face::new([3, 4, 5].map(|v| softrender::mesh::FaceVertex::new(v, 1))),
        ],
    );
    // Bottom-left texel red, top-right texel blue
    let texture = Texture::from_rgba(
        2,
        2,
        vec![
            255, 0, 0, 255, 0, 0, 0, 255, //
            0, 0, 0, 255, 0, 0, 255, 255,
        ],
    )
    .unwrap();

    let mut fb = Framebuffer::new(64, 64).unwrap();
    let stats = render_model(&mesh, &texture, Vec3::FORWARD, &mut fb).unwrap();

    // Near face drawn first, so the far face loses where they overlap
    assert!(stats.depth_rejections > 0);
    assert_eq!(fb.pixel(32, 32), Some([255, 0, 0, 255]));
}

#[test]
fn configured_culling_is_reported() {
    let config = RenderConfig::default()
        .with_size(32, 32)
        .with_backface_culling(true);
    let renderer = Renderer::new(config).unwrap();
    let mut fb = renderer.framebuffer().unwrap();
    let stats = renderer
        .render(&facing_triangle(), &red_texture(), &mut fb)
        .unwrap();
    assert_eq!(stats.faces, 1);
    assert_eq!(stats.faces_culled, 0);
    assert!(stats.pixels_written > 0);
}

#[test]
fn callback_sink_receives_pixels() {
    let mut writes = 0usize;
    let stats = {
        let mut sink = FnSink::new(32, 32, |_, _, rgba| {
            assert_eq!(rgba[3], 255);
            writes += 1;
        });
        render_model(&facing_triangle(), &red_texture(), Vec3::FORWARD, &mut sink).unwrap()
    };
    assert_eq!(writes, stats.pixels_written);
}

#[test]
fn camera_at_target_is_rejected() {
    let camera = Camera::new(Vec3::ZERO, Vec3::ZERO, Vec3::UP);
    let renderer = Renderer::new(RenderConfig::default().with_camera(camera)).unwrap();
    let mut fb = Framebuffer::new(8, 8).unwrap();
    assert!(matches!(
        renderer.render(&facing_triangle(), &red_texture(), &mut fb),
        Err(RenderError::DegenerateVector(_))
    ));
}

#[test]
fn flattening_model_transform_is_singular() {
    let mut model = Transform::default();
    model.set_scale(Vec3::new(1.0, 1.0, 0.0));
    let renderer = Renderer::new(RenderConfig::default().with_model(model)).unwrap();
    let mut fb = Framebuffer::new(8, 8).unwrap();
    assert!(matches!(
        renderer.render(&facing_triangle(), &red_texture(), &mut fb),
        Err(RenderError::SingularMatrix)
    ));
}

#[test]
fn out_of_range_face_is_rejected() {
    let mesh = Mesh::new(
        facing_triangle().positions().to_vec(),
        vec![Vec2::ZERO],
        vec![Vec3::FORWARD; 3],
        vec![Face::uniform(0, 1, 2)],
    );
    let mut fb = Framebuffer::new(8, 8).unwrap();
    assert!(matches!(
        render_model(&mesh, &red_texture(), Vec3::FORWARD, &mut fb),
        Err(RenderError::IndexOutOfRange { .. })
    ));
}

#[test]
fn empty_mesh_renders_nothing() {
    let (fb, stats) = render(&Mesh::default(), Vec3::FORWARD, 8);
    assert_eq!(stats, RenderStats::default());
    assert!(fb.as_bytes().iter().all(|&b| b == 0));
}
