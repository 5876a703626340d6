// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl_canvas::context::RawGl;
use glfw::{Context, WindowHint};

pub const WINDOW_SIZE: (u32, u32) = (1000, 1000);

pub fn view_window<I: FnOnce(&RawGl) -> L, L: FnMut(&RawGl)>(vsync: bool, test: I) {
	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).unwrap();
	glfw.window_hint(WindowHint::ContextVersion(2, 1));

	let (mut window, events) = glfw
		.create_window(WINDOW_SIZE.0, WINDOW_SIZE.1, "test", glfw::WindowMode::Windowed)
		.unwrap();

	window.make_current();

	if !vsync {
		glfw.set_swap_interval(glfw::SwapInterval::None);
	}

	window.set_size_polling(true);

	// SAFETY: the context was just made current on this thread and the
	// returned handle never leaves it
	let gl = unsafe { RawGl::load(|p| window.get_proc_address(p)) };

	env_logger::init();

	let mut test_loop = test(&gl);
	while !window.should_close() {
		test_loop(&gl);

		window.swap_buffers();
		glfw.poll_events();
		for (_, event) in glfw::flush_messages(&events) {
			match event {
				glfw::WindowEvent::Size(width, height) => unsafe {
					gl::Viewport(0, 0, width, height);
				},
				_ => {},
			}
		}
	}
}
