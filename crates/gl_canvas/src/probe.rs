// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use thiserror::Error;

use crate::context::GlContext;

/// Minimum GL version this layer renders against.
pub const REQUIRED_VERSION: (u32, u32) = (2, 1);
/// Required for the render-target textures the application draws into.
pub const REQUIRED_EXTENSION: &str = "GL_ARB_framebuffer_object";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
	#[error("OpenGL function loading failed")]
	FunctionsUnavailable,
	#[error(
		"this hardware doesn't support OpenGL {}.{}",
		REQUIRED_VERSION.0,
		REQUIRED_VERSION.1
	)]
	UnsupportedVersion,
	#[error("this hardware doesn't support OpenGL extension {0}")]
	MissingExtension(&'static str),
}

/// One-shot capability gate, run once at startup before any rendering.
///
/// Checks in order: the context answers string queries at all (function
/// pointers resolved), the version meets [`REQUIRED_VERSION`], and
/// [`REQUIRED_EXTENSION`] is advertised. Short-circuits on the first
/// failure. Read-only against the context, so calling it again on a
/// valid context always passes.
pub fn probe<G: GlContext>(gl: &G) -> Result<(), CapabilityError> {
	let version = gl.get_string(gl::VERSION).ok_or(CapabilityError::FunctionsUnavailable)?;

	if !version_at_least(&version, REQUIRED_VERSION) {
		return Err(CapabilityError::UnsupportedVersion)
	}

	let extensions = gl
		.get_string(gl::EXTENSIONS)
		.ok_or(CapabilityError::FunctionsUnavailable)?;
	if !extensions.split(' ').any(|extension| extension == REQUIRED_EXTENSION) {
		return Err(CapabilityError::MissingExtension(REQUIRED_EXTENSION))
	}

	Ok(())
}

/// Boundary gate with the bool contract callers expect at startup;
/// the failing capability is reported on the log channel.
pub fn init<G: GlContext>(gl: &G) -> bool {
	match probe(gl) {
		Ok(()) => true,
		Err(error) => {
			log::error!(target: "OpenGL", "{error}");
			false
		},
	}
}

/// Leading `major.minor` of a `GL_VERSION` string, which may carry a
/// vendor suffix ("2.1.0 NVIDIA 390.25", "2.1 Mesa 20.0.8", ...).
fn version_at_least(version: &str, (major, minor): (u32, u32)) -> bool {
	let mut parts = version.split(|c: char| !c.is_ascii_digit());
	let found_major = parts.next().and_then(|part| part.parse::<u32>().ok());
	let found_minor = parts.next().and_then(|part| part.parse::<u32>().ok());

	match (found_major, found_minor) {
		(Some(found_major), Some(found_minor)) => (found_major, found_minor) >= (major, minor),
		_ => false,
	}
}
