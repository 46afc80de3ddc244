use smol_str::SmolStr;

/// A point of the shared vertex pool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Bit pattern used to detect coincident vertices (`-0.0` equals `0.0`).
    pub(crate) fn key(&self) -> [u64; 3] {
        let bits = |v: f64| if v == 0.0 { 0u64 } else { v.to_bits() };
        [bits(self.x), bits(self.y), bits(self.z)]
    }
}

/// A triangle as three indices into a vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    /// Directed edges in winding order, reversed when `orientation` is false.
    pub fn edges(&self, orientation: bool) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        if orientation {
            [(a, b), (b, c), (c, a)]
        } else {
            [(b, a), (c, b), (a, c)]
        }
    }
}

/// A named triangulated surface; triangle indices point into the model's vertex pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mesh {
    pub name: SmolStr,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(name: impl Into<SmolStr>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }
}
