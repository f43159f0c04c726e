#![allow(dead_code)]

use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterator over vertex positions
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.chunks_exact(9).map(|v| Vec3::new(v[0], v[1], v[2]))
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Debug, Default)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Primitive generators for campus models ───────────────────

/// Axis-aligned box centered on the origin
pub fn cuboid(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let (hw, hh, hd) = (w * 0.5, h * 0.5, d * 0.5);

    let faces: [([Vec3; 4], Vec3); 6] = [
        // +Z
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // -Z
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // +X
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // -X
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // +Y
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // -Y
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut mesh = MeshData::default();
    for (quad, normal) in &faces {
        let base = mesh.vertex_count() as u32;
        for v in quad {
            push_vert(&mut mesh.vertices, *v, *normal, color);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Upright cylinder centered on the origin
pub fn cylinder(radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let hh = height * 0.5;
    let mut mesh = MeshData::default();

    for i in 0..segments {
        let a0 = i as f32 * std::f32::consts::TAU / segments as f32;
        let a1 = (i + 1) as f32 * std::f32::consts::TAU / segments as f32;
        let n0 = Vec3::new(a0.cos(), 0.0, a0.sin());
        let n1 = Vec3::new(a1.cos(), 0.0, a1.sin());

        let base = mesh.vertex_count() as u32;
        push_vert(&mut mesh.vertices, Vec3::new(radius * n0.x, -hh, radius * n0.z), n0, color);
        push_vert(&mut mesh.vertices, Vec3::new(radius * n1.x, -hh, radius * n1.z), n1, color);
        push_vert(&mut mesh.vertices, Vec3::new(radius * n1.x, hh, radius * n1.z), n1, color);
        push_vert(&mut mesh.vertices, Vec3::new(radius * n0.x, hh, radius * n0.z), n0, color);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    cap(&mut mesh, radius, hh, segments, Vec3::Y, color, false);
    cap(&mut mesh, radius, -hh, segments, Vec3::NEG_Y, color, true);
    mesh
}

/// Upright cone centered on the origin. Four segments make a pyramid roof.
pub fn cone(radius: f32, height: f32, segments: u32, color: [f32; 3]) -> MeshData {
    let hh = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    for i in 0..segments {
        let a0 = i as f32 * std::f32::consts::TAU / segments as f32;
        let a1 = (i + 1) as f32 * std::f32::consts::TAU / segments as f32;
        let n0 = Vec3::new(a0.cos(), slope, a0.sin()).normalize();
        let n1 = Vec3::new(a1.cos(), slope, a1.sin()).normalize();
        let apex_n = (n0 + n1).normalize();

        let base = mesh.vertex_count() as u32;
        push_vert(&mut mesh.vertices, Vec3::new(0.0, hh, 0.0), apex_n, color);
        push_vert(&mut mesh.vertices, Vec3::new(radius * a0.cos(), -hh, radius * a0.sin()), n0, color);
        push_vert(&mut mesh.vertices, Vec3::new(radius * a1.cos(), -hh, radius * a1.sin()), n1, color);
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    cap(&mut mesh, radius, -hh, segments, Vec3::NEG_Y, color, true);
    mesh
}

/// UV sphere centered on the origin
pub fn sphere(radius: f32, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let mut mesh = MeshData::default();

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            push_vert(&mut mesh.vertices, n * radius, n, color);
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            mesh.indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    mesh
}

/// Horizontal plane at y = 0, facing up (the campus ground)
pub fn ground_plane(width: f32, depth: f32, color: [f32; 3]) -> MeshData {
    let (hw, hd) = (width * 0.5, depth * 0.5);
    let mut mesh = MeshData::default();
    for v in [
        Vec3::new(-hw, 0.0, hd),
        Vec3::new(hw, 0.0, hd),
        Vec3::new(hw, 0.0, -hd),
        Vec3::new(-hw, 0.0, -hd),
    ] {
        push_vert(&mut mesh.vertices, v, Vec3::Y, color);
    }
    mesh.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
    mesh
}

/// Square grid of helper lines on the ground plane
pub fn grid(half_extent: f32, step: f32, opacity: f32) -> LineMeshData {
    let mut lines = LineMeshData::default();
    let minor = [0.22_f32, 0.22, 0.22, opacity];
    let origin = [0.08_f32, 0.08, 0.08, opacity];

    let count = (half_extent / step) as i32;
    for i in -count..=count {
        let f = i as f32 * step;
        let color = if i == 0 { origin } else { minor };
        push_line_vert(&mut lines.vertices, f, -half_extent, color);
        push_line_vert(&mut lines.vertices, f, half_extent, color);
        push_line_vert(&mut lines.vertices, -half_extent, f, color);
        push_line_vert(&mut lines.vertices, half_extent, f, color);
    }
    lines
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, x: f32, z: f32, c: [f32; 4]) {
    // A hair above the ground so lines do not z-fight the plane
    v.extend_from_slice(&[x, 0.02, z, c[0], c[1], c[2], c[3]]);
}

fn cap(
    mesh: &mut MeshData,
    radius: f32,
    y: f32,
    segments: u32,
    normal: Vec3,
    color: [f32; 3],
    reversed: bool,
) {
    let center = mesh.vertex_count() as u32;
    push_vert(&mut mesh.vertices, Vec3::new(0.0, y, 0.0), normal, color);

    for i in 0..segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        push_vert(
            &mut mesh.vertices,
            Vec3::new(radius * angle.cos(), y, radius * angle.sin()),
            normal,
            color,
        );
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        if reversed {
            mesh.indices
                .extend_from_slice(&[center, center + 1 + next, center + 1 + i]);
        } else {
            mesh.indices
                .extend_from_slice(&[center, center + 1 + i, center + 1 + next]);
        }
    }
}
