// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Visual end-to-end: an animated textured quad plus a line-loop
//! outline, drawn through the full probe/compile/allocate/draw path.

use gl_canvas::{
	call_site,
	draw::{self, Color, UniformValue},
	mesh::{Mesh, Point, Topology, Usage},
	probe,
	shader::Shader,
	texture,
};
use gl_canvas_tests::WINDOW_SIZE;

const VERTEX_SRC: &str = "\
	#version 120\n\
	uniform mat4 u_proj;\n\
	attribute vec2 position;\n\
	attribute vec2 uv;\n\
	attribute vec4 color;\n\
	varying vec2 frag_uv;\n\
	varying vec4 frag_color;\n\
	void main() {\n\
		frag_uv = uv;\n\
		frag_color = color;\n\
		gl_Position = u_proj * vec4(position, 0.0, 1.0);\n\
	}\n";

const FRAGMENT_SRC: &str = "\
	#version 120\n\
	uniform sampler2D u_texture;\n\
	uniform vec4 u_tint;\n\
	varying vec2 frag_uv;\n\
	varying vec4 frag_color;\n\
	void main() {\n\
		gl_FragColor = texture2D(u_texture, frag_uv) * frag_color * u_tint;\n\
	}\n";

/// Pixel-space orthographic projection, y down, column-major.
fn ortho(width: f32, height: f32) -> [f32; 16] {
	#[rustfmt::skip]
	let matrix = [
		2.0 / width, 0.0, 0.0, 0.0,
		0.0, -2.0 / height, 0.0, 0.0,
		0.0, 0.0, -1.0, 0.0,
		-1.0, 1.0, 0.0, 1.0,
	];
	matrix
}

fn checkerboard(size: usize, cell: usize) -> Vec<u8> {
	let mut pixels = Vec::with_capacity(size * size * 4);
	for y in 0..size {
		for x in 0..size {
			let lit = (x / cell + y / cell) % 2 == 0;
			let value = if lit { 0xff } else { 0x60 };
			pixels.extend_from_slice(&[value, value, value, 0xff]);
		}
	}
	pixels
}

fn main() {
	gl_canvas_tests::view_window(true, |gl| {
		if !probe::init(gl) {
			std::process::exit(1);
		}
		log::info!("capability probe passed");

		let shader = Shader::compile(
			gl,
			call_site!(),
			VERTEX_SRC,
			FRAGMENT_SRC,
			&["position", "uv", "color"],
			&["u_proj", "u_tint"],
		);

		let quad = Mesh::quad(gl, Point::new(300.0, 300.0), Point::new(400.0, 400.0), Usage::Dynamic);
		let mut outline =
			Mesh::quad(gl, Point::new(300.0, 300.0), Point::new(400.0, 400.0), Usage::Dynamic);
		outline.set_topology(Topology::LineLoop);

		let texture = texture::allocate(gl, 64, 64, Some(&checkerboard(64, 8)));
		let projection = ortho(WINDOW_SIZE.0 as f32, WINDOW_SIZE.1 as f32);

		let mut anim_t = 0.0f32;

		// loop
		move |gl| {
			anim_t += 0.008;

			let wobble = anim_t.sin() * 100.0;
			let pos = Point::new(300.0 + wobble, 300.0);
			let size = Point::new(400.0, 400.0);
			quad.retransform(gl, pos, size);
			outline.retransform(gl, Point::new(pos.x - 8.0, pos.y - 8.0), Point::new(416.0, 416.0));

			unsafe {
				gl::ClearColor(0.2, 0.2, 0.2, 1.0);
				gl::Clear(gl::COLOR_BUFFER_BIT);
				gl::BindTexture(gl::TEXTURE_2D, texture);
			}

			draw::draw(
				gl,
				&quad,
				&shader,
				false,
				&[
					UniformValue::Matrix4(projection),
					UniformValue::Color(Color::new(1.0, 1.0, 1.0, 1.0)),
				],
			);
			draw::draw(
				gl,
				&outline,
				&shader,
				false,
				&[
					UniformValue::Matrix4(projection),
					UniformValue::Color(Color::new(1.0, 0.6, 0.1, 1.0)),
				],
			);
		}
	});
}
