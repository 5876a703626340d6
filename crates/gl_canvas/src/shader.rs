// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::{GLenum, GLint, GLuint};

use crate::{context::GlContext, error::CallSite, gl_check};

/// Slot tables are fixed-size; a program never declares more than this
/// many attributes or uniforms.
pub const MAX_SLOTS: usize = 8;
/// Location for a name the driver could not resolve. Valid table
/// contents - consumers skip the slot instead of failing.
pub const SLOT_NOT_FOUND: GLint = -1;

pub enum ShaderStage {
	Vertex,
	Fragment,
}

impl ShaderStage {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}

	fn name(&self) -> &'static str {
		match self {
			Self::Vertex => "vertex",
			Self::Fragment => "fragment",
		}
	}
}

/// A linked program with its attribute and uniform locations resolved
/// in declaration order.
///
/// Lives for the process lifetime; GL program objects are owned by the
/// application's GPU-resource lifetime and this layer never deletes
/// them.
pub struct Shader {
	pub handle: GLuint,
	attrib_count: usize,
	uniform_count: usize,
	attribs: [GLint; MAX_SLOTS],
	uniforms: [GLint; MAX_SLOTS],
}

impl Shader {
	/// Compile and link a vertex + fragment pair, then resolve the
	/// named attribute and uniform slots.
	///
	/// Compile, link, and name-lookup failures are reported on the log
	/// channel and do not fail the call: the returned program may
	/// render visibly broken, which the caller can see and act on.
	/// Unresolved names are stored as [`SLOT_NOT_FOUND`] and skipped at
	/// draw time.
	///
	/// Name lists longer than [`MAX_SLOTS`] are a caller bug and panic.
	pub fn compile<G: GlContext>(
		gl: &G,
		site: CallSite,
		vertex_src: &str,
		fragment_src: &str,
		attrib_names: &[&str],
		uniform_names: &[&str],
	) -> Self {
		assert!(
			attrib_names.len() <= MAX_SLOTS,
			"{} attribute names exceed the {MAX_SLOTS}-slot table",
			attrib_names.len(),
		);
		assert!(
			uniform_names.len() <= MAX_SLOTS,
			"{} uniform names exceed the {MAX_SLOTS}-slot table",
			uniform_names.len(),
		);

		let handle = gl_check!(gl, gl.create_program());
		let vertex = compile_stage(gl, site, ShaderStage::Vertex, vertex_src);
		let fragment = compile_stage(gl, site, ShaderStage::Fragment, fragment_src);

		gl_check!(gl, gl.attach_shader(handle, vertex));
		gl_check!(gl, gl.attach_shader(handle, fragment));
		gl_check!(gl, gl.link_program(handle));

		if !gl_check!(gl, gl.program_link_status(handle)) {
			let log = gl_check!(gl, gl.program_info_log(handle));
			log::error!(target: "OpenGL", "Link error in shader program in {site}");
			log::error!(target: "OpenGL", "{log}");
		}

		let mut shader = Shader {
			handle,
			attrib_count: attrib_names.len(),
			uniform_count: uniform_names.len(),
			attribs: [SLOT_NOT_FOUND; MAX_SLOTS],
			uniforms: [SLOT_NOT_FOUND; MAX_SLOTS],
		};

		for (i, name) in attrib_names.iter().enumerate() {
			shader.attribs[i] = gl_check!(gl, gl.attrib_location(handle, name));
			if shader.attribs[i] == SLOT_NOT_FOUND {
				log::warn!(target: "OpenGL", "Attribute {name} not found in shader at {site}");
			}
		}

		for (i, name) in uniform_names.iter().enumerate() {
			shader.uniforms[i] = gl_check!(gl, gl.uniform_location(handle, name));
			if shader.uniforms[i] == SLOT_NOT_FOUND {
				log::warn!(target: "OpenGL", "Uniform {name} not found in shader at {site}");
			}
		}

		shader
	}

	pub fn attrib_count(&self) -> usize {
		self.attrib_count
	}

	pub fn uniform_count(&self) -> usize {
		self.uniform_count
	}

	/// Location stored for the `index`th declared attribute, which may
	/// be [`SLOT_NOT_FOUND`].
	pub fn attrib_slot(&self, index: usize) -> GLint {
		self.attribs[index]
	}

	/// Location stored for the `index`th declared uniform, which may
	/// be [`SLOT_NOT_FOUND`].
	pub fn uniform_slot(&self, index: usize) -> GLint {
		self.uniforms[index]
	}

	/// The `index`th attribute as a bindable location: `None` when the
	/// attribute was not declared or did not resolve.
	pub(crate) fn resolved_attrib(&self, index: usize) -> Option<GLuint> {
		if index >= self.attrib_count {
			return None
		}

		match self.attribs[index] {
			SLOT_NOT_FOUND => None,
			slot => Some(slot as GLuint),
		}
	}
}

fn compile_stage<G: GlContext>(
	gl: &G,
	site: CallSite,
	stage: ShaderStage,
	source: &str,
) -> GLuint {
	let handle = gl_check!(gl, gl.create_shader(stage.gl_type()));
	gl_check!(gl, gl.shader_source(handle, source));
	gl_check!(gl, gl.compile_shader(handle));

	if !gl_check!(gl, gl.shader_compile_status(handle)) {
		let log = gl_check!(gl, gl.shader_info_log(handle));
		log::error!(
			target: "OpenGL",
			"Compilation error in {} shader in {site}",
			stage.name(),
		);
		log::error!(target: "OpenGL", "{log}");
	}

	handle
}
