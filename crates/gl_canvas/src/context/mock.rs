// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Software [`GlContext`] used by the unit tests.
//!
//! Tracks enough driver state (object names, bindings, buffer
//! contents, capability toggles) to verify the layer's contracts, and
//! records every upload and draw so tests can assert on call order.
//! Attribute and uniform names resolve against the attached shader
//! source text: a name is "found" when it appears as an identifier
//! token in any attached source.

use std::{
	cell::RefCell,
	collections::{HashMap, HashSet, VecDeque},
};

use gl::types::{GLenum, GLint, GLuint};

use super::GlContext;

#[derive(Clone, Debug, PartialEq)]
pub enum UniformUpload {
	Float(f32),
	Vec2(f32, f32),
	Vec4(f32, f32, f32, f32),
	Matrix4([f32; 16]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttribPointer {
	pub index: GLuint,
	pub size: GLint,
	pub ty: GLenum,
	pub normalized: bool,
	pub stride: usize,
	pub offset: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
	pub mode: GLenum,
	pub first: GLint,
	pub count: GLint,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
	pub width: GLint,
	pub height: GLint,
	pub seeded: bool,
}

#[derive(Default)]
struct ShaderObject {
	source: String,
	compiled_ok: bool,
}

#[derive(Default)]
struct Program {
	attached_sources: String,
	locations: HashMap<String, GLint>,
	next_location: GLint,
	linked: bool,
}

#[derive(Default)]
struct State {
	version: Option<String>,
	extensions: Option<String>,
	pending_errors: VecDeque<GLenum>,
	next_name: GLuint,

	shaders: HashMap<GLuint, ShaderObject>,
	programs: HashMap<GLuint, Program>,
	current_program: GLuint,

	buffers: HashMap<GLuint, Vec<u8>>,
	buffer_allocations: HashMap<GLuint, u32>,
	bound_array_buffer: GLuint,

	enabled: HashSet<GLenum>,
	cap_events: Vec<(GLenum, bool)>,
	blend_equation: GLenum,
	blend_func: (GLenum, GLenum),

	uniform_uploads: Vec<(GLint, UniformUpload)>,
	enabled_attrib_arrays: Vec<GLuint>,
	attrib_pointers: Vec<AttribPointer>,
	line_width: f32,
	draws: Vec<DrawCall>,

	textures: HashMap<GLuint, TextureImage>,
	bound_texture_2d: GLuint,
	tex_params: Vec<(GLenum, GLenum, GLint)>,
}

pub struct MockGl {
	state: RefCell<State>,
}

impl MockGl {
	/// A context that passes the capability probe.
	pub fn new() -> Self {
		let mock = MockGl {
			state: RefCell::new(State {
				next_name: 1,
				..State::default()
			}),
		};
		mock.set_version(Some("2.1.0 mock driver"));
		mock.set_extensions(Some("GL_ARB_framebuffer_object GL_ARB_texture_float"));
		mock
	}

	pub fn set_version(&self, version: Option<&str>) {
		self.state.borrow_mut().version = version.map(str::to_owned);
	}

	pub fn set_extensions(&self, extensions: Option<&str>) {
		self.state.borrow_mut().extensions = extensions.map(str::to_owned);
	}

	/// Queue an error code for a later `get_error` to drain.
	pub fn push_error(&self, error: GLenum) {
		self.state.borrow_mut().pending_errors.push_back(error);
	}

	pub fn pending_error_count(&self) -> usize {
		self.state.borrow().pending_errors.len()
	}

	pub fn current_program(&self) -> GLuint {
		self.state.borrow().current_program
	}

	pub fn bound_array_buffer(&self) -> GLuint {
		self.state.borrow().bound_array_buffer
	}

	pub fn bound_texture_2d(&self) -> GLuint {
		self.state.borrow().bound_texture_2d
	}

	pub fn buffer_contents(&self, buffer: GLuint) -> Vec<u8> {
		self.state.borrow().buffers[&buffer].clone()
	}

	/// Number of `buffer_data` allocations made against `buffer`.
	pub fn allocation_count(&self, buffer: GLuint) -> u32 {
		self.state.borrow().buffer_allocations.get(&buffer).copied().unwrap_or(0)
	}

	pub fn is_enabled(&self, cap: GLenum) -> bool {
		self.state.borrow().enabled.contains(&cap)
	}

	/// Every `enable`/`disable` call in order, as `(cap, enabled)`.
	pub fn cap_events(&self) -> Vec<(GLenum, bool)> {
		self.state.borrow().cap_events.clone()
	}

	pub fn blend_state(&self) -> (GLenum, (GLenum, GLenum)) {
		let state = self.state.borrow();
		(state.blend_equation, state.blend_func)
	}

	pub fn uniform_uploads(&self) -> Vec<(GLint, UniformUpload)> {
		self.state.borrow().uniform_uploads.clone()
	}

	pub fn enabled_attrib_arrays(&self) -> Vec<GLuint> {
		self.state.borrow().enabled_attrib_arrays.clone()
	}

	pub fn attrib_pointers(&self) -> Vec<AttribPointer> {
		self.state.borrow().attrib_pointers.clone()
	}

	pub fn draws(&self) -> Vec<DrawCall> {
		self.state.borrow().draws.clone()
	}

	pub fn line_width(&self) -> f32 {
		self.state.borrow().line_width
	}

	pub fn texture_image(&self, texture: GLuint) -> Option<TextureImage> {
		self.state.borrow().textures.get(&texture).cloned()
	}

	pub fn tex_params(&self) -> Vec<(GLenum, GLenum, GLint)> {
		self.state.borrow().tex_params.clone()
	}

	fn alloc_name(state: &mut State) -> GLuint {
		let name = state.next_name;
		state.next_name += 1;
		name
	}
}

/// `name` appears in `source` as a full identifier token.
fn declares_identifier(source: &str, name: &str) -> bool {
	source
		.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
		.any(|token| token == name)
}

fn resolve_location(program: &mut Program, name: &str) -> GLint {
	if !declares_identifier(&program.attached_sources, name) {
		return -1
	}

	match program.locations.get(name) {
		Some(location) => *location,
		None => {
			let location = program.next_location;
			program.next_location += 1;
			program.locations.insert(name.to_owned(), location);
			location
		},
	}
}

impl GlContext for MockGl {
	fn get_error(&self) -> GLenum {
		self.state.borrow_mut().pending_errors.pop_front().unwrap_or(gl::NO_ERROR)
	}

	fn get_string(&self, name: GLenum) -> Option<String> {
		let state = self.state.borrow();
		match name {
			gl::VERSION => state.version.clone(),
			gl::EXTENSIONS => state.extensions.clone(),
			_ => None,
		}
	}

	fn get_integer(&self, name: GLenum) -> GLint {
		let state = self.state.borrow();
		match name {
			gl::CURRENT_PROGRAM => state.current_program as GLint,
			gl::TEXTURE_BINDING_2D => state.bound_texture_2d as GLint,
			gl::ARRAY_BUFFER_BINDING => state.bound_array_buffer as GLint,
			_ => 0,
		}
	}

	fn create_program(&self) -> GLuint {
		let mut state = self.state.borrow_mut();
		let name = Self::alloc_name(&mut state);
		state.programs.insert(name, Program::default());
		name
	}

	fn create_shader(&self, _ty: GLenum) -> GLuint {
		let mut state = self.state.borrow_mut();
		let name = Self::alloc_name(&mut state);
		state.shaders.insert(name, ShaderObject::default());
		name
	}

	fn shader_source(&self, shader: GLuint, source: &str) {
		let mut state = self.state.borrow_mut();
		state
			.shaders
			.get_mut(&shader)
			.expect("shader_source on unknown shader")
			.source = source.to_owned();
	}

	fn compile_shader(&self, shader: GLuint) {
		let mut state = self.state.borrow_mut();
		let shader = state.shaders.get_mut(&shader).expect("compile_shader on unknown shader");
		// the `#error` directive is the mock's compile failure switch
		shader.compiled_ok = !shader.source.contains("#error");
	}

	fn shader_compile_status(&self, shader: GLuint) -> bool {
		self.state.borrow().shaders[&shader].compiled_ok
	}

	fn shader_info_log(&self, shader: GLuint) -> String {
		match self.state.borrow().shaders[&shader].compiled_ok {
			true => String::new(),
			false => "mock compile error".to_owned(),
		}
	}

	fn attach_shader(&self, program: GLuint, shader: GLuint) {
		let mut state = self.state.borrow_mut();
		let source = state.shaders[&shader].source.clone();
		let program = state.programs.get_mut(&program).expect("attach_shader on unknown program");
		program.attached_sources.push('\n');
		program.attached_sources.push_str(&source);
	}

	fn link_program(&self, program: GLuint) {
		self.state
			.borrow_mut()
			.programs
			.get_mut(&program)
			.expect("link_program on unknown program")
			.linked = true;
	}

	fn program_link_status(&self, program: GLuint) -> bool {
		self.state.borrow().programs[&program].linked
	}

	fn program_info_log(&self, _program: GLuint) -> String {
		String::new()
	}

	fn use_program(&self, program: GLuint) {
		self.state.borrow_mut().current_program = program;
	}

	fn attrib_location(&self, program: GLuint, name: &str) -> GLint {
		let mut state = self.state.borrow_mut();
		let program = state
			.programs
			.get_mut(&program)
			.expect("attrib_location on unknown program");
		resolve_location(program, name)
	}

	fn uniform_location(&self, program: GLuint, name: &str) -> GLint {
		let mut state = self.state.borrow_mut();
		let program = state
			.programs
			.get_mut(&program)
			.expect("uniform_location on unknown program");
		resolve_location(program, name)
	}

	fn gen_buffer(&self) -> GLuint {
		let mut state = self.state.borrow_mut();
		let name = Self::alloc_name(&mut state);
		state.buffers.insert(name, Vec::new());
		name
	}

	fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
		if target == gl::ARRAY_BUFFER {
			self.state.borrow_mut().bound_array_buffer = buffer;
		}
	}

	fn buffer_data(&self, target: GLenum, size: usize, data: Option<&[u8]>, _usage: GLenum) {
		let mut state = self.state.borrow_mut();
		if target != gl::ARRAY_BUFFER {
			return
		}

		let bound = state.bound_array_buffer;
		if bound == 0 {
			state.pending_errors.push_back(gl::INVALID_OPERATION);
			return
		}

		let contents = match data {
			Some(data) => data.to_vec(),
			None => vec![0; size],
		};
		state.buffers.insert(bound, contents);
		*state.buffer_allocations.entry(bound).or_insert(0) += 1;
	}

	fn buffer_sub_data(&self, target: GLenum, offset: usize, data: &[u8]) {
		if target != gl::ARRAY_BUFFER {
			return
		}

		let mut state = self.state.borrow_mut();
		let bound = state.bound_array_buffer;
		let error = match state.buffers.get_mut(&bound) {
			None => Some(gl::INVALID_OPERATION),
			Some(buffer) => match buffer.get_mut(offset..offset + data.len()) {
				Some(slice) => {
					slice.copy_from_slice(data);
					None
				},
				// write past the allocated store
				None => Some(gl::INVALID_VALUE),
			},
		};

		if let Some(error) = error {
			state.pending_errors.push_back(error);
		}
	}

	fn enable(&self, cap: GLenum) {
		let mut state = self.state.borrow_mut();
		state.enabled.insert(cap);
		state.cap_events.push((cap, true));
	}

	fn disable(&self, cap: GLenum) {
		let mut state = self.state.borrow_mut();
		state.enabled.remove(&cap);
		state.cap_events.push((cap, false));
	}

	fn blend_equation(&self, mode: GLenum) {
		self.state.borrow_mut().blend_equation = mode;
	}

	fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
		self.state.borrow_mut().blend_func = (sfactor, dfactor);
	}

	fn uniform_1f(&self, location: GLint, v: f32) {
		self.state
			.borrow_mut()
			.uniform_uploads
			.push((location, UniformUpload::Float(v)));
	}

	fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
		self.state
			.borrow_mut()
			.uniform_uploads
			.push((location, UniformUpload::Vec2(x, y)));
	}

	fn uniform_4f(&self, location: GLint, x: f32, y: f32, z: f32, w: f32) {
		self.state
			.borrow_mut()
			.uniform_uploads
			.push((location, UniformUpload::Vec4(x, y, z, w)));
	}

	fn uniform_matrix_4fv(&self, location: GLint, matrix: &[f32; 16]) {
		self.state
			.borrow_mut()
			.uniform_uploads
			.push((location, UniformUpload::Matrix4(*matrix)));
	}

	fn enable_vertex_attrib_array(&self, index: GLuint) {
		self.state.borrow_mut().enabled_attrib_arrays.push(index);
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
		self.state.borrow_mut().attrib_pointers.push(AttribPointer {
			index,
			size,
			ty,
			normalized,
			stride,
			offset,
		});
	}

	fn line_width(&self, width: f32) {
		self.state.borrow_mut().line_width = width;
	}

	fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLint) {
		self.state.borrow_mut().draws.push(DrawCall { mode, first, count });
	}

	fn gen_texture(&self) -> GLuint {
		let mut state = self.state.borrow_mut();
		Self::alloc_name(&mut state)
	}

	fn bind_texture(&self, target: GLenum, texture: GLuint) {
		if target == gl::TEXTURE_2D {
			self.state.borrow_mut().bound_texture_2d = texture;
		}
	}

	fn tex_parameter_i(&self, target: GLenum, pname: GLenum, param: GLint) {
		self.state.borrow_mut().tex_params.push((target, pname, param));
	}

	fn tex_image_2d_rgba(&self, width: GLint, height: GLint, data: Option<&[u8]>) {
		let mut state = self.state.borrow_mut();
		let bound = state.bound_texture_2d;
		if bound == 0 {
			state.pending_errors.push_back(gl::INVALID_OPERATION);
			return
		}

		state.textures.insert(
			bound,
			TextureImage {
				width,
				height,
				seeded: data.is_some(),
			},
		);
	}
}
