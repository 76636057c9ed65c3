//! Polygon Editor - live-edited procedural polygon meshes.
//!
//! Demonstrates driving `PolygonShape` parameters from a UI panel and the
//! resulting mesh, texture tiling and collision boundary.
//!
//! Controls:
//! - Side panel: side count, outer/inner radius, texture repeat
//! - Inner radius 0 draws a filled polygon, anything else a ring
//! - Setting inner above outer radius shows the clamp in action
//!
//! Run with: `cargo run -p bevy_polygon_mesh --example polygon_editor --features visual_debug`

use bevy::asset::RenderAssetUsages;
use bevy::camera::ScalingMode;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::sprite_render::{ColorMaterial, MeshMaterial2d};
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use bevy_polygon_mesh::params::{MAX_SIDES, MIN_OUTER_RADIUS, MIN_SIDES};
use bevy_polygon_mesh::{
  PolygonBoundary, PolygonMeshConfig, PolygonMeshPlugin, PolygonParameters, PolygonShape,
};

const CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/polygon.config.toml");
const CHECKER_SIZE: u32 = 64;
const CHECKER_CELLS: u32 = 8;
const MAX_RADIUS: f32 = 6.0;
const MAX_REPEAT: u32 = 8;

/// Marker for the polygon the side panel edits.
#[derive(Component)]
struct EditedPolygon;

fn main() {
  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Polygon Editor - PolygonMesh".to_string(),
        resolution: (1280, 720).into(),
        ..default()
      }),
      ..default()
    }))
    .add_plugins(PolygonMeshPlugin::from_file(CONFIG_PATH))
    .add_plugins(EguiPlugin::default())
    .add_systems(Startup, setup)
    .add_systems(EguiPrimaryContextPass, ui_system)
    .add_systems(Update, spin_minimal_polygon)
    .run();
}

/// Creates a checkerboard texture that tiles across UV space.
fn create_checker_texture(images: &mut Assets<Image>) -> Handle<Image> {
  let cell = CHECKER_SIZE / CHECKER_CELLS;
  let mut data = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
  for y in 0..CHECKER_SIZE {
    for x in 0..CHECKER_SIZE {
      let light = ((x / cell) + (y / cell)) % 2 == 0;
      let value = if light { 230 } else { 60 };
      data.extend_from_slice(&[value, value, value, 255]);
    }
  }

  let mut image = Image::new(
    Extent3d {
      width: CHECKER_SIZE,
      height: CHECKER_SIZE,
      depth_or_array_layers: 1,
    },
    TextureDimension::D2,
    data,
    TextureFormat::Rgba8UnormSrgb,
    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
  );

  // Repeat addressing so uv_repeat_count tiles instead of clamping
  image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
    address_mode_u: ImageAddressMode::Repeat,
    address_mode_v: ImageAddressMode::Repeat,
    ..default()
  });

  images.add(image)
}

fn setup(
  mut commands: Commands,
  config: Res<PolygonMeshConfig>,
  mut images: ResMut<Assets<Image>>,
  mut materials: ResMut<Assets<ColorMaterial>>,
) {
  commands.spawn((
    Camera2d,
    Projection::Orthographic(OrthographicProjection {
      scaling_mode: ScalingMode::FixedVertical {
        viewport_height: 2.5 * MAX_RADIUS,
      },
      ..OrthographicProjection::default_2d()
    }),
  ));

  let checker = create_checker_texture(&mut images);

  commands.spawn((
    EditedPolygon,
    PolygonShape::from_config(&config),
    PolygonBoundary::default(),
    MeshMaterial2d(materials.add(ColorMaterial::from(checker))),
    Transform::from_xyz(-2.0, 0.0, 0.0),
  ));

  // Minimal variant: filled, no texture repeat, no collision boundary
  commands.spawn((
    PolygonShape::new(PolygonParameters::filled(5, 1.5)),
    MeshMaterial2d(materials.add(Color::srgb(0.290, 0.565, 0.886))),
    Transform::from_xyz(MAX_RADIUS + 1.0, 0.0, 0.0),
  ));
}

fn spin_minimal_polygon(
  time: Res<Time>,
  mut query: Query<&mut Transform, (With<PolygonShape>, Without<EditedPolygon>)>,
) {
  for mut transform in query.iter_mut() {
    transform.rotate_z(0.5 * time.delta_secs());
  }
}

fn ui_system(
  mut contexts: EguiContexts,
  mut config: ResMut<PolygonMeshConfig>,
  mut shapes: Query<(&mut PolygonShape, Option<&PolygonBoundary>), With<EditedPolygon>>,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };
  let Ok((mut shape, boundary)) = shapes.single_mut() else {
    return;
  };

  egui::SidePanel::left("polygon_panel")
    .resizable(false)
    .show(ctx, |ui| {
      ui.heading("Polygon");
      ui.separator();

      let mut params = shape.params;
      ui.add(egui::Slider::new(&mut params.side_count, MIN_SIDES..=MAX_SIDES).text("Sides"));
      ui.add(
        egui::Slider::new(&mut params.outer_radius, MIN_OUTER_RADIUS..=MAX_RADIUS)
          .text("Outer radius"),
      );
      ui.add(egui::Slider::new(&mut params.inner_radius, 0.0..=MAX_RADIUS).text("Inner radius"));
      ui.add(egui::Slider::new(&mut params.uv_repeat_count, 1..=MAX_REPEAT).text("Texture repeat"));

      if params != shape.params {
        shape.params = params;
      }

      ui.separator();
      ui.label(format!("Mode: {:?}", shape.params.mode()));
      if let Some(boundary) = boundary {
        ui.label(format!("Boundary points: {}", boundary.geometry.point_count()));
      }

      ui.separator();
      ui.checkbox(&mut config.debug_gizmos, "Show boundary");
      ui.checkbox(&mut config.change_detection, "Rebuild only on change");
    });
}
