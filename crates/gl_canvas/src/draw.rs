// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::mem;

use gl::types::{GLint, GLuint};

use crate::{
	context::GlContext,
	gl_check,
	mesh::{Mesh, Vertex},
	shader::{Shader, SLOT_NOT_FOUND},
};

#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Color { r, g, b, a }
	}
}

/// One uniform argument, matched by position against the slot table of
/// the bound program.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UniformValue {
	Float(f32),
	Vec2(crate::mesh::Point),
	/// Column-major.
	Matrix4([f32; 16]),
	Color(Color),
}

/// Used only when drawing line loops.
pub const LINE_WIDTH: f32 = 2.0;

/// Issue exactly one draw call, leaving all GPU global state as found.
///
/// Blending is forced on with source-over equation/function, face
/// culling and depth testing off, scissor testing per `scissor`. The
/// previously bound program and 2D texture are snapshotted up front
/// and restored on every exit path, along with unbinding the vertex
/// buffer and disabling scissor and blend. A failing GL call mid
/// sequence is logged by the sentinel and does not skip restoration.
///
/// `uniforms` must have exactly as many entries as the program
/// declared at compile time; a mismatch is a caller bug and panics.
/// An entry whose slot did not resolve is consumed without an upload
/// so later entries stay aligned with their slots.
pub fn draw<G: GlContext>(
	gl: &G,
	mesh: &Mesh,
	shader: &Shader,
	scissor: bool,
	uniforms: &[UniformValue],
) {
	assert_eq!(
		uniforms.len(),
		shader.uniform_count(),
		"uniform argument count does not match the count declared at compile time",
	);

	let _state = StateGuard::save(gl);

	gl_check!(gl, gl.enable(gl::BLEND));
	gl_check!(gl, gl.blend_equation(gl::FUNC_ADD));
	gl_check!(gl, gl.blend_func(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA));
	gl_check!(gl, gl.disable(gl::CULL_FACE));
	gl_check!(gl, gl.disable(gl::DEPTH_TEST));
	match scissor {
		true => gl_check!(gl, gl.enable(gl::SCISSOR_TEST)),
		false => gl_check!(gl, gl.disable(gl::SCISSOR_TEST)),
	}

	gl_check!(gl, gl.bind_buffer(gl::ARRAY_BUFFER, mesh.vbo()));
	gl_check!(gl, gl.use_program(shader.handle));

	for (i, value) in uniforms.iter().enumerate() {
		let slot = shader.uniform_slot(i);
		if slot == SLOT_NOT_FOUND {
			continue
		}

		match value {
			UniformValue::Float(v) => gl_check!(gl, gl.uniform_1f(slot, *v)),
			UniformValue::Vec2(v) => gl_check!(gl, gl.uniform_2f(slot, v.x, v.y)),
			UniformValue::Matrix4(m) => gl_check!(gl, gl.uniform_matrix_4fv(slot, m)),
			UniformValue::Color(c) => gl_check!(gl, gl.uniform_4f(slot, c.r, c.g, c.b, c.a)),
		}
	}

	set_vertex_attribs(gl, shader);

	gl_check!(gl, gl.line_width(LINE_WIDTH));
	gl_check!(
		gl,
		gl.draw_arrays(mesh.topology().gl_mode(), 0, mesh.vertex_count() as GLint)
	);
}

/// Configure the attribute streams at the fixed [`Vertex`] offsets.
///
/// The color stream only exists when the program declared a third
/// attribute. Unresolved slots are skipped entirely.
fn set_vertex_attribs<G: GlContext>(gl: &G, shader: &Shader) {
	let stride = mem::size_of::<Vertex>();

	if let Some(slot) = shader.resolved_attrib(0) {
		gl_check!(gl, gl.enable_vertex_attrib_array(slot));
		gl_check!(
			gl,
			gl.vertex_attrib_pointer(
				slot,
				2,
				gl::FLOAT,
				false,
				stride,
				mem::offset_of!(Vertex, pos),
			)
		);
	}

	if let Some(slot) = shader.resolved_attrib(1) {
		gl_check!(gl, gl.enable_vertex_attrib_array(slot));
		gl_check!(
			gl,
			gl.vertex_attrib_pointer(
				slot,
				2,
				gl::FLOAT,
				false,
				stride,
				mem::offset_of!(Vertex, uv),
			)
		);
	}

	if let Some(slot) = shader.resolved_attrib(2) {
		gl_check!(gl, gl.enable_vertex_attrib_array(slot));
		gl_check!(
			gl,
			gl.vertex_attrib_pointer(
				slot,
				4,
				gl::UNSIGNED_BYTE,
				true,
				stride,
				mem::offset_of!(Vertex, color),
			)
		);
	}
}

/// Snapshot of the global state a draw touches, restored on drop so no
/// exit path can skip it.
struct StateGuard<'g, G: GlContext> {
	gl: &'g G,
	program: GLint,
	texture: GLint,
}

impl<'g, G: GlContext> StateGuard<'g, G> {
	fn save(gl: &'g G) -> Self {
		StateGuard {
			gl,
			program: gl_check!(gl, gl.get_integer(gl::CURRENT_PROGRAM)),
			texture: gl_check!(gl, gl.get_integer(gl::TEXTURE_BINDING_2D)),
		}
	}
}

impl<G: GlContext> Drop for StateGuard<'_, G> {
	fn drop(&mut self) {
		let gl = self.gl;
		gl_check!(gl, gl.bind_buffer(gl::ARRAY_BUFFER, 0));
		gl_check!(gl, gl.use_program(self.program as GLuint));
		gl_check!(gl, gl.disable(gl::SCISSOR_TEST));
		gl_check!(gl, gl.disable(gl::BLEND));
		gl_check!(gl, gl.bind_texture(gl::TEXTURE_2D, self.texture as GLuint));
	}
}
