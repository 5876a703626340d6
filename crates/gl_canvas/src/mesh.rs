// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::mem;

use gl::types::{GLenum, GLuint};

use crate::{context::GlContext, gl_check};

/// Quad topology: two triangles.
pub const QUAD_VERTEX_COUNT: usize = 6;

/// The one vertex layout this layer draws. Field order is the
/// attribute binding order: slot 0 position, slot 1 UV, slot 2 packed
/// color.
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
	pub pos: [f32; 2],
	pub uv: [f32; 2],
	pub color: [u8; 4],
}

#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub const fn new(x: f32, y: f32) -> Self {
		Point { x, y }
	}
}

impl From<[f32; 2]> for Point {
	fn from([x, y]: [f32; 2]) -> Self {
		Point { x, y }
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Usage {
	Static,
	Dynamic,
}

impl Usage {
	fn gl_usage(&self) -> GLenum {
		match self {
			Self::Static => gl::STATIC_DRAW,
			Self::Dynamic => gl::DYNAMIC_DRAW,
		}
	}
}

/// Same vertex buffer either way; only the draw primitive differs.
/// Line loops are used for outline/selection rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topology {
	Triangles,
	LineLoop,
}

impl Topology {
	pub(crate) fn gl_mode(&self) -> GLenum {
		match self {
			Self::Triangles => gl::TRIANGLES,
			Self::LineLoop => gl::LINE_LOOP,
		}
	}
}

/// A small dynamically-updatable mesh over one vertex buffer.
///
/// Capacity is fixed at creation; [`Mesh::retransform`] overwrites the
/// buffer in place and is the only mutation path. Created once per
/// on-screen quad, repositioned many times.
pub struct Mesh {
	vbo: GLuint,
	vertex_count: usize,
	topology: Topology,
}

impl Mesh {
	/// Allocate a 6-vertex buffer with the given usage hint and write
	/// the initial rectangle geometry.
	pub fn quad<G: GlContext>(gl: &G, pos: Point, size: Point, usage: Usage) -> Self {
		let vbo = gl_check!(gl, gl.gen_buffer());
		gl_check!(gl, gl.bind_buffer(gl::ARRAY_BUFFER, vbo));
		gl_check!(
			gl,
			gl.buffer_data(
				gl::ARRAY_BUFFER,
				QUAD_VERTEX_COUNT * mem::size_of::<Vertex>(),
				None,
				usage.gl_usage(),
			)
		);

		let mesh = Mesh {
			vbo,
			vertex_count: QUAD_VERTEX_COUNT,
			topology: Topology::Triangles,
		};
		mesh.retransform(gl, pos, size);
		mesh
	}

	/// Overwrite the full buffer with two counter-clockwise triangles
	/// covering the rectangle, UV corners in [0,1]², white tint.
	///
	/// Never grows or reallocates the buffer.
	pub fn retransform<G: GlContext>(&self, gl: &G, pos: Point, size: Point) {
		const WHITE: [u8; 4] = [0xff; 4];

		let (x1, x2) = (pos.x, pos.x + size.x);
		let (y1, y2) = (pos.y, pos.y + size.y);

		#[rustfmt::skip]
		let vertices = [
			Vertex { pos: [x1, y2], uv: [0.0, 1.0], color: WHITE },
			Vertex { pos: [x1, y1], uv: [0.0, 0.0], color: WHITE },
			Vertex { pos: [x2, y2], uv: [1.0, 1.0], color: WHITE },
			Vertex { pos: [x2, y1], uv: [1.0, 0.0], color: WHITE },
			Vertex { pos: [x2, y2], uv: [1.0, 1.0], color: WHITE },
			Vertex { pos: [x1, y1], uv: [0.0, 0.0], color: WHITE },
		];

		gl_check!(gl, gl.bind_buffer(gl::ARRAY_BUFFER, self.vbo));
		gl_check!(
			gl,
			gl.buffer_sub_data(gl::ARRAY_BUFFER, 0, bytemuck::cast_slice(&vertices))
		);
	}

	pub fn vbo(&self) -> GLuint {
		self.vbo
	}

	pub fn vertex_count(&self) -> usize {
		self.vertex_count
	}

	pub fn topology(&self) -> Topology {
		self.topology
	}

	pub fn set_topology(&mut self, topology: Topology) {
		self.topology = topology;
	}
}
