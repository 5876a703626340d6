// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::{GLint, GLuint};

use crate::{context::GlContext, gl_check};

/// Allocate a 2D RGBA8 texture with linear min/mag filtering.
///
/// `None` reserves storage with undefined contents, for render targets
/// and deferred uploads. The new texture is left bound to
/// `GL_TEXTURE_2D`. When pixels are given their length must be exactly
/// `width * height * 4`; anything else is a caller bug and panics.
pub fn allocate<G: GlContext>(gl: &G, width: i32, height: i32, data: Option<&[u8]>) -> GLuint {
	if let Some(data) = data {
		assert_eq!(
			data.len(),
			width as usize * height as usize * 4,
			"pixel data does not match an RGBA8 {width}x{height} image",
		);
	}

	let texture = gl_check!(gl, gl.gen_texture());
	gl_check!(gl, gl.bind_texture(gl::TEXTURE_2D, texture));
	gl_check!(
		gl,
		gl.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint)
	);
	gl_check!(
		gl,
		gl.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint)
	);
	gl_check!(gl, gl.tex_image_2d_rgba(width, height, data));

	texture
}
