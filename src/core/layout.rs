use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

// Static instance placement for every mesh group in the scene. Per-frame
// motion is applied on top as one transform per group.

pub const SWARM_COUNT: usize = 1000;
pub const SWARM_RADIUS_MIN: f32 = 10.0;
pub const SWARM_RADIUS_SPAN: f32 = 20.0;
pub const SWARM_HEIGHT: f32 = 10.0;
pub const SWARM_SIZE: f32 = 0.05;

pub const SHELL_COUNT: usize = 800;
pub const SHELL_RADIUS: f32 = 6.0;
pub const SHELL_SIZE: f32 = 0.2;
pub const GOLDEN_ANGLE: f32 = 2.399;

pub const HERO_RADIUS: f32 = 2.0;
pub const HERO_EDGE_COUNT: usize = 30;
pub const HERO_EDGE_THICKNESS: f32 = 0.02;
pub const INNER_RADIUS: f32 = 1.0;

pub const GRID_EXTENT: f32 = 100.0;
pub const GRID_DIVISIONS: usize = 100;
pub const GRID_Y: f32 = -5.0;
pub const GRID_LINE_THICKNESS: f32 = 0.015;

/// Which per-frame transform an instance follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceGroup {
    Hero = 0,
    Inner = 1,
    Swarm = 2,
    Shell = 3,
    Grid = 4,
}

pub const GROUP_COUNT: usize = 5;

/// Palette slot resolved by the shader from the active mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Accent = 0,
    Secondary = 1,
    Dim = 2,
}

#[derive(Clone, Copy, Debug)]
pub struct InstanceDesc {
    pub model: Mat4,
    pub group: InstanceGroup,
    pub tint: Tint,
    pub emissive: f32,
}

/// Wire shell of struts along the icosahedron edges, around a solid inner core.
pub fn hero_core() -> Vec<InstanceDesc> {
    let mut out: Vec<InstanceDesc> = icosahedron_edges()
        .into_iter()
        .map(|(a, b)| InstanceDesc {
            model: strut(a * HERO_RADIUS, b * HERO_RADIUS, HERO_EDGE_THICKNESS),
            group: InstanceGroup::Hero,
            tint: Tint::Accent,
            emissive: 0.3,
        })
        .collect();
    out.push(InstanceDesc {
        model: Mat4::from_scale(Vec3::splat(INNER_RADIUS)),
        group: InstanceGroup::Inner,
        tint: Tint::Secondary,
        emissive: 1.0,
    });
    out
}

/// Unit-circumradius icosahedron edges as vertex pairs.
pub fn icosahedron_edges() -> Vec<(Vec3, Vec3)> {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let mut verts = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            verts.push(Vec3::new(0.0, a, b));
            verts.push(Vec3::new(a, b, 0.0));
            verts.push(Vec3::new(b, 0.0, a));
        }
    }
    // Unnormalised edge length is 2.
    let mut edges = Vec::with_capacity(HERO_EDGE_COUNT);
    for (i, a) in verts.iter().enumerate() {
        for b in verts.iter().skip(i + 1) {
            if (a.distance(*b) - 2.0).abs() < 1e-3 {
                edges.push((a.normalize(), b.normalize()));
            }
        }
    }
    edges
}

/// Octahedron stretched from `a` to `b` with a square cross-section.
fn strut(a: Vec3, b: Vec3, thickness: f32) -> Mat4 {
    let span = b - a;
    let rot = Quat::from_rotation_arc(Vec3::X, span.normalize());
    Mat4::from_scale_rotation_translation(
        Vec3::new(span.length() * 0.5, thickness, thickness),
        rot,
        (a + b) * 0.5,
    )
}

/// Ring of particles around the core, reproducible for a given seed.
pub fn swarm(count: usize, seed: u64) -> Vec<InstanceDesc> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let r = SWARM_RADIUS_MIN + rng.gen::<f32>() * SWARM_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let y = (rng.gen::<f32>() - 0.5) * SWARM_HEIGHT;
            let rot = Quat::from_euler(EulerRot::XYZ, rng.gen(), rng.gen(), rng.gen());
            InstanceDesc {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(SWARM_SIZE),
                    rot,
                    Vec3::new(r * theta.cos(), y, r * theta.sin()),
                ),
                group: InstanceGroup::Swarm,
                tint: Tint::Accent,
                emissive: 1.0,
            }
        })
        .collect()
}

/// Golden-angle spiral on a sphere, every instance facing the origin.
pub fn dyson_shell(count: usize, seed: u64) -> Vec<InstanceDesc> {
    let mut rng = StdRng::seed_from_u64(seed);
    let last = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| {
            let theta = i as f32 * GOLDEN_ANGLE;
            let y = 1.0 - (i as f32 / last) * 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let pos = Vec3::new(theta.cos() * r, y, theta.sin() * r) * SHELL_RADIUS;
            let facing = facing_origin(pos);
            let scale = SHELL_SIZE * (1.0 + rng.gen::<f32>());
            InstanceDesc {
                model: Mat4::from_scale_rotation_translation(Vec3::splat(scale), facing, pos),
                group: InstanceGroup::Shell,
                tint: Tint::Secondary,
                emissive: 0.2,
            }
        })
        .collect()
}

/// Floor grid drawn as thin stretched instances; the two centre lines use the accent.
pub fn floor_grid() -> Vec<InstanceDesc> {
    let half = GRID_EXTENT * 0.5;
    let step = GRID_EXTENT / GRID_DIVISIONS as f32;
    let mut out = Vec::with_capacity((GRID_DIVISIONS + 1) * 2);
    for i in 0..=GRID_DIVISIONS {
        let offset = -half + i as f32 * step;
        let centre = i == GRID_DIVISIONS / 2;
        let tint = if centre { Tint::Accent } else { Tint::Dim };
        let thin = Vec3::new(half, GRID_LINE_THICKNESS, GRID_LINE_THICKNESS);
        // Line running along x.
        out.push(InstanceDesc {
            model: Mat4::from_scale_rotation_translation(
                thin,
                Quat::IDENTITY,
                Vec3::new(0.0, GRID_Y, offset),
            ),
            group: InstanceGroup::Grid,
            tint,
            emissive: 0.6,
        });
        // Line running along z.
        out.push(InstanceDesc {
            model: Mat4::from_scale_rotation_translation(
                thin,
                Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                Vec3::new(offset, GRID_Y, 0.0),
            ),
            group: InstanceGroup::Grid,
            tint,
            emissive: 0.6,
        });
    }
    out
}

/// Every instance in draw order.
pub fn full_scene(seed: u64) -> Vec<InstanceDesc> {
    let mut all = floor_grid();
    all.extend(hero_core());
    all.extend(dyson_shell(SHELL_COUNT, seed));
    all.extend(swarm(SWARM_COUNT, seed.wrapping_add(1)));
    all
}

fn facing_origin(pos: Vec3) -> Quat {
    let fwd = (-pos).normalize_or_zero();
    if fwd == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    // Mirrors a right-handed look-at where -Z points at the target.
    let up = if fwd.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    let view = Mat4::look_to_rh(Vec3::ZERO, fwd, up);
    Quat::from_mat4(&view.inverse())
}
