use crate::float_types::Real;
use crate::volume::TriangleMesh;
use nalgebra::Point3;
use std::io::{Cursor, Error, ErrorKind};

impl TriangleMesh {
	/// Read an ASCII or binary STL into an indexed mesh.
	///
	/// ```rust
	/// # use balance_point::volume::TriangleMesh;
	/// # use balance_point::traits::VolumeSource;
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let bytes = TriangleMesh::cuboid(1.0, 2.0, 3.0).to_stl_binary()?;
	/// let mesh = TriangleMesh::from_stl(&bytes)?;
	/// assert!((mesh.volume()? - 6.0).abs() < 1e-5);
	/// # Ok(())
	/// # }
	/// ```
	pub fn from_stl(stl_data: &[u8]) -> std::io::Result<Self> {
		let mut cursor = Cursor::new(stl_data);
		let stl = stl_io::read_stl(&mut cursor)?;

		let vertices = stl
			.vertices
			.iter()
			.map(|v| Point3::new(v[0] as Real, v[1] as Real, v[2] as Real))
			.collect();
		let indices = stl
			.faces
			.iter()
			.map(|face| face.vertices.map(|i| i as u32))
			.collect();

		Ok(TriangleMesh::new(vertices, indices))
	}

	/// Export to binary STL. Facet normals are recomputed from the winding.
	///
	/// Fails with `ErrorKind::InvalidData` if a triangle refers to a missing vertex.
	pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
		use stl_io::{Normal, Triangle, Vertex, write_stl};

		#[allow(clippy::unnecessary_cast)]
		let triangles: Vec<Triangle> = self
			.triangles()
			.map_err(|err| Error::new(ErrorKind::InvalidData, err))?
			.map(|(tri, normal)| {
				let n = normal.try_normalize(0.0).unwrap_or(normal);
				Triangle {
					normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
					vertices: tri.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
				}
			})
			.collect();

		let mut cursor = Cursor::new(Vec::new());
		write_stl(&mut cursor, triangles.iter())?;
		Ok(cursor.into_inner())
	}
}
