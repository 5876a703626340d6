// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::{GLenum, GLint, GLuint};

pub mod raw;

#[cfg(test)]
pub(crate) mod mock;

pub use raw::RawGl;

/// The subset of OpenGL 2.1 this crate calls, as one injected seam.
///
/// Every component takes `&impl GlContext` instead of calling `gl::`
/// directly, so the whole layer can run against [`RawGl`] in production
/// and a software context in tests. Methods map one to one onto GL
/// entry points and inherit their semantics; implementations must not
/// add error handling of their own (the error sentinel drains the GL
/// error state after each call).
pub trait GlContext {
	/// `glGetError` - drains and returns one pending error code
	fn get_error(&self) -> GLenum;
	/// `glGetString` - `None` if the driver returns no string
	/// (e.g. function pointers were never loaded)
	fn get_string(&self, name: GLenum) -> Option<String>;
	/// `glGetIntegerv` with a single-integer query
	fn get_integer(&self, name: GLenum) -> GLint;

	fn create_program(&self) -> GLuint;
	fn create_shader(&self, ty: GLenum) -> GLuint;
	fn shader_source(&self, shader: GLuint, source: &str);
	fn compile_shader(&self, shader: GLuint);
	fn shader_compile_status(&self, shader: GLuint) -> bool;
	fn shader_info_log(&self, shader: GLuint) -> String;
	fn attach_shader(&self, program: GLuint, shader: GLuint);
	fn link_program(&self, program: GLuint);
	fn program_link_status(&self, program: GLuint) -> bool;
	fn program_info_log(&self, program: GLuint) -> String;
	fn use_program(&self, program: GLuint);
	fn attrib_location(&self, program: GLuint, name: &str) -> GLint;
	fn uniform_location(&self, program: GLuint, name: &str) -> GLint;

	fn gen_buffer(&self) -> GLuint;
	fn bind_buffer(&self, target: GLenum, buffer: GLuint);
	/// `glBufferData` - `None` reserves `size` bytes without an upload
	fn buffer_data(&self, target: GLenum, size: usize, data: Option<&[u8]>, usage: GLenum);
	fn buffer_sub_data(&self, target: GLenum, offset: usize, data: &[u8]);

	fn enable(&self, cap: GLenum);
	fn disable(&self, cap: GLenum);
	fn blend_equation(&self, mode: GLenum);
	fn blend_func(&self, sfactor: GLenum, dfactor: GLenum);

	fn uniform_1f(&self, location: GLint, v: f32);
	fn uniform_2f(&self, location: GLint, x: f32, y: f32);
	fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32);
	/// `glUniformMatrix4fv` with one column-major matrix, no transpose
	fn uniform_matrix_4fv(&self, location: GLint, matrix: &[f32; 16]);

	fn enable_vertex_attrib_array(&self, index: GLuint);
	fn vertex_attrib_pointer(
		&self,
		index: GLuint,
		size: GLint,
		ty: GLenum,
		normalized: bool,
		stride: usize,
		offset: usize,
	);

	fn line_width(&self, width: f32);
	fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLint);

	fn gen_texture(&self) -> GLuint;
	fn bind_texture(&self, target: GLenum, texture: GLuint);
	fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint);
	/// `glTexImage2D` at level 0, internal format RGBA8, format RGBA,
	/// type UNSIGNED_BYTE - `None` allocates undefined contents
	fn tex_image_2d_rgba(&self, width: GLint, height: GLint, data: Option<&[u8]>);
}
