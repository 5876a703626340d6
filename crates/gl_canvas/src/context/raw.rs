// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	ffi::{c_void, CStr, CString},
	marker::PhantomData,
};

use gl::types::{GLboolean, GLchar, GLenum, GLint, GLsizei, GLsizeiptr, GLuint};

use super::GlContext;

/// Production [`GlContext`] backed by the process-wide `gl` function
/// pointers.
///
/// The `*const` marker keeps this type `!Send`/`!Sync`: GL contexts are
/// owned by one thread, and confining the handle to the loading thread
/// is the only concurrency discipline this layer needs.
pub struct RawGl {
	_thread_bound: PhantomData<*const ()>,
}

impl RawGl {
	/// Resolve the GL function pointers through `loader`.
	///
	/// # SAFETY
	/// * `loader` must return pointers valid for the GL context that is
	///   current on this thread
	/// * the returned handle must only be used on this thread, while
	///   that context stays current
	pub unsafe fn load<F: FnMut(&'static str) -> *const c_void>(loader: F) -> Self {
		gl::load_with(loader);
		RawGl {
			_thread_bound: PhantomData,
		}
	}
}

/// Reads a driver info log the way the driver reports its length.
///
/// # SAFETY
/// * `object` must name a live shader or program object
unsafe fn read_info_log(
	object: GLuint,
	get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
	get_log: unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
	let mut log_length = 0 as GLint;
	get_iv(object, gl::INFO_LOG_LENGTH, &mut log_length);

	if log_length <= 1 {
		return String::new()
	}

	let mut log = Vec::<u8>::with_capacity(log_length as usize);
	get_log(object, log_length, &mut log_length, log.as_mut_ptr() as *mut GLchar);
	// the driver always writes a null terminator. Subtracting one removes it.
	log.set_len((log_length - 1) as usize);

	// The OpenGL driver should not be returning invalid utf8.
	String::from_utf8(log)
		.expect("OpenGL driver returned invalid utf8 string while reading an info log")
}

fn name_cstring(name: &str) -> CString {
	CString::new(name).expect("attribute or uniform name contains a nul byte")
}

impl GlContext for RawGl {
	fn get_error(&self) -> GLenum {
		unsafe { gl::GetError() }
	}

	fn get_string(&self, name: GLenum) -> Option<String> {
		let ptr = unsafe { gl::GetString(name) };
		if ptr.is_null() {
			return None
		}

		Some(
			unsafe { CStr::from_ptr(ptr as *const GLchar) }
				.to_str()
				.expect("OpenGL driver returned a non UTF8 string for a string query")
				.to_owned(),
		)
	}

	fn get_integer(&self, name: GLenum) -> GLint {
		let mut value = 0 as GLint;
		unsafe { gl::GetIntegerv(name, &mut value) };
		value
	}

	fn create_program(&self) -> GLuint {
		unsafe { gl::CreateProgram() }
	}

	fn create_shader(&self, ty: GLenum) -> GLuint {
		unsafe { gl::CreateShader(ty) }
	}

	fn shader_source(&self, shader: GLuint, source: &str) {
		let src_ptr = source.as_bytes().as_ptr() as *const GLchar;
		let len = source.len() as GLint;
		unsafe { gl::ShaderSource(shader, 1, &src_ptr, &len) };
	}

	fn compile_shader(&self, shader: GLuint) {
		unsafe { gl::CompileShader(shader) };
	}

	fn shader_compile_status(&self, shader: GLuint) -> bool {
		let mut compile_status = 0 as GLint;
		unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status) };
		compile_status == gl::TRUE as GLint
	}

	fn shader_info_log(&self, shader: GLuint) -> String {
		unsafe { read_info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog) }
	}

	fn attach_shader(&self, program: GLuint, shader: GLuint) {
		unsafe { gl::AttachShader(program, shader) };
	}

	fn link_program(&self, program: GLuint) {
		unsafe { gl::LinkProgram(program) };
	}

	fn program_link_status(&self, program: GLuint) -> bool {
		let mut link_status = 0 as GLint;
		unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut link_status) };
		link_status == gl::TRUE as GLint
	}

	fn program_info_log(&self, program: GLuint) -> String {
		unsafe { read_info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog) }
	}

	fn use_program(&self, program: GLuint) {
		unsafe { gl::UseProgram(program) };
	}

	fn attrib_location(&self, program: GLuint, name: &str) -> GLint {
		let name = name_cstring(name);
		unsafe { gl::GetAttribLocation(program, name.as_ptr()) }
	}

	fn uniform_location(&self, program: GLuint, name: &str) -> GLint {
		let name = name_cstring(name);
		unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
	}

	fn gen_buffer(&self) -> GLuint {
		let mut buffer = 0 as GLuint;
		unsafe { gl::GenBuffers(1, &mut buffer) };
		buffer
	}

	fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
		unsafe { gl::BindBuffer(target, buffer) };
	}

	fn buffer_data(&self, target: GLenum, size: usize, data: Option<&[u8]>, usage: GLenum) {
		let ptr = match data {
			Some(data) => data.as_ptr() as *const c_void,
			None => std::ptr::null(),
		};
		unsafe { gl::BufferData(target, size as GLsizeiptr, ptr, usage) };
	}

	fn buffer_sub_data(&self, target: GLenum, offset: usize, data: &[u8]) {
		unsafe {
			gl::BufferSubData(
				target,
				offset as GLsizeiptr,
				data.len() as GLsizeiptr,
				data.as_ptr() as *const c_void,
			)
		};
	}

	fn enable(&self, cap: GLenum) {
		unsafe { gl::Enable(cap) };
	}

	fn disable(&self, cap: GLenum) {
		unsafe { gl::Disable(cap) };
	}

	fn blend_equation(&self, mode: GLenum) {
		unsafe { gl::BlendEquation(mode) };
	}

	fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
		unsafe { gl::BlendFunc(sfactor, dfactor) };
	}

	fn uniform_1f(&self, location: GLint, v: f32) {
		unsafe { gl::Uniform1f(location, v) };
	}

	fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
		unsafe { gl::Uniform2f(location, x, y) };
	}

	fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32) {
		unsafe { gl::Uniform4f(location, x, y, z, w) };
	}

	fn uniform_matrix_4fv(&self, location: GLint, matrix: &[f32; 16]) {
		unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.as_ptr()) };
	}

	fn enable_vertex_attrib_array(&self, index: GLuint) {
		unsafe { gl::EnableVertexAttribArray(index) };
	}

	fn vertex_attrib_pointer(
		&self,
		index: GLuint,
		size: GLint,
		ty: GLenum,
		normalized: bool,
		stride: usize,
		offset: usize,
	) {
		unsafe {
			gl::VertexAttribPointer(
				index,
				size,
				ty,
				match normalized {
					true => gl::TRUE,
					false => gl::FALSE,
				} as GLboolean,
				stride as GLsizei,
				offset as *const c_void,
			)
		};
	}

	fn line_width(&self, width: f32) {
		unsafe { gl::LineWidth(width) };
	}

	fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLint) {
		unsafe { gl::DrawArrays(mode, first, count) };
	}

	fn gen_texture(&self) -> GLuint {
		let mut texture = 0 as GLuint;
		unsafe { gl::GenTextures(1, &mut texture) };
		texture
	}

	fn bind_texture(&self, target: GLenum, texture: GLuint) {
		unsafe { gl::BindTexture(target, texture) };
	}

	fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint) {
		unsafe { gl::TexParameteri(target, pname, param) };
	}

	fn tex_image_2d_rgba(&self, width: GLint, height: GLint, data: Option<&[u8]>) {
		let ptr = match data {
			Some(data) => data.as_ptr() as *const c_void,
			None => std::ptr::null(),
		};
		unsafe {
			gl::TexImage2D(
				gl::TEXTURE_2D,
				0,
				gl::RGBA8 as GLint,
				width,
				height,
				0,
				gl::RGBA,
				gl::UNSIGNED_BYTE,
				ptr,
			)
		};
	}
}
