use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use rand::Rng;

use super::palette::BackgroundPalette;
use super::settings::CloudSettings;

/// Dense, low-opacity cloud that slowly drifts.
#[derive(Component)]
pub struct DustCloud;

/// Sparse bright cloud that stays still.
#[derive(Component)]
pub struct StarCloud;

/// CPU-side point data. Counts are fixed at generation time.
#[derive(Debug, Clone)]
pub struct PointCloudData {
    positions: Vec<Vec3>,
    colors: Option<Vec<LinearRgba>>,
}

impl PointCloudData {
    /// Uniform positions in the cube `[-half_extent, half_extent]^3`.
    pub fn uniform_cube<R: Rng + ?Sized>(rng: &mut R, count: usize, half_extent: f32) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    sample_axis(rng, half_extent),
                    sample_axis(rng, half_extent),
                    sample_axis(rng, half_extent),
                )
            })
            .collect();

        Self {
            positions,
            colors: None,
        }
    }

    /// Uniform positions plus one colour per point, each blended between the
    /// palette endpoints at its own random factor.
    pub fn gradient_cube<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        half_extent: f32,
        palette: &BackgroundPalette,
    ) -> Self {
        let mut cloud = Self::uniform_cube(rng, count, half_extent);
        let colors = (0..count)
            .map(|_| palette.blend(rng.random_range(0.0..=1.0)))
            .collect();
        cloud.colors = Some(colors);
        cloud
    }

    pub fn dust<R: Rng + ?Sized>(
        rng: &mut R,
        settings: &CloudSettings,
        palette: &BackgroundPalette,
    ) -> Self {
        Self::gradient_cube(rng, settings.count, settings.half_extent, palette)
    }

    pub fn stars<R: Rng + ?Sized>(rng: &mut R, settings: &CloudSettings) -> Self {
        Self::uniform_cube(rng, settings.count, settings.half_extent)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[LinearRgba]> {
        self.colors.as_deref()
    }

    /// Expand every point into a four-vertex quad that the sprite shader turns
    /// to face the camera. All four corners share the point's centre; the UV
    /// selects the corner. Clouds without colours get white vertices so the
    /// material tint alone decides their colour.
    pub fn to_sprite_mesh(&self) -> Mesh {
        const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        let vertex_count = self.positions.len() * 4;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        let mut colors = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity(self.positions.len() * 6);

        for (i, center) in self.positions.iter().enumerate() {
            let color = self
                .colors
                .as_ref()
                .map_or(LinearRgba::WHITE, |c| c[i])
                .to_f32_array();
            let base = (i * 4) as u32;

            for corner in CORNERS {
                positions.push(center.to_array());
                uvs.push(corner);
                colors.push(color);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> f32 {
    rng.random_range(-half_extent..=half_extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::ParticleFieldSettings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn palette() -> BackgroundPalette {
        BackgroundPalette {
            primary: Color::srgb(1.0, 0.2, 0.0),
            accent: Color::srgb(0.0, 0.4, 1.0),
        }
    }

    #[test]
    fn dust_points_stay_inside_their_cube() {
        let settings = ParticleFieldSettings::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dust = PointCloudData::dust(&mut rng, &settings.dust, &palette());

        assert_eq!(dust.len(), 1500);
        assert!(
            dust.positions()
                .iter()
                .all(|p| p.abs().max_element() <= 5.0)
        );
    }

    #[test]
    fn star_points_stay_inside_their_cube() {
        let settings = ParticleFieldSettings::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let stars = PointCloudData::stars(&mut rng, &settings.stars);

        assert_eq!(stars.len(), 100);
        assert!(stars.colors().is_none());
        assert!(
            stars
                .positions()
                .iter()
                .all(|p| p.abs().max_element() <= 7.5)
        );
    }

    #[test]
    fn points_actually_spread_across_the_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dust = PointCloudData::uniform_cube(&mut rng, 1500, 5.0);
        let max = dust
            .positions()
            .iter()
            .fold(0.0f32, |acc, p| acc.max(p.abs().max_element()));
        assert!(max > 4.5);
    }

    #[test]
    fn dust_colours_lie_on_the_palette_gradient() {
        let palette = palette();
        let start = palette.primary.to_linear();
        let end = palette.accent.to_linear();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let dust = PointCloudData::gradient_cube(&mut rng, 1500, 5.0, &palette);
        let colors = dust.colors().unwrap();

        assert_eq!(colors.len(), dust.len());
        for color in colors {
            // Recover t from the red channel, then check the others agree.
            let t = (color.red - start.red) / (end.red - start.red);
            assert!((-1e-4..=1.0 + 1e-4).contains(&t), "t = {t}");
            let green = start.green + (end.green - start.green) * t;
            let blue = start.blue + (end.blue - start.blue) * t;
            assert!((color.green - green).abs() < 1e-4);
            assert!((color.blue - blue).abs() < 1e-4);
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        let a = PointCloudData::uniform_cube(&mut ChaCha8Rng::seed_from_u64(9), 10, 1.0);
        let b = PointCloudData::uniform_cube(&mut ChaCha8Rng::seed_from_u64(9), 10, 1.0);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn sprite_mesh_has_four_vertices_per_point() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let dust = PointCloudData::gradient_cube(&mut rng, 12, 5.0, &palette());
        let mesh = dust.to_sprite_mesh();

        assert_eq!(mesh.count_vertices(), 48);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(72));
        assert_eq!(
            mesh.attribute(Mesh::ATTRIBUTE_COLOR).map(|c| c.len()),
            Some(48)
        );
    }

    #[test]
    fn empty_cloud_builds_empty_mesh() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let cloud = PointCloudData::uniform_cube(&mut rng, 0, 5.0);
        assert!(cloud.is_empty());
        assert_eq!(cloud.to_sprite_mesh().count_vertices(), 0);
    }
}
