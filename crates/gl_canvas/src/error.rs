// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::fmt;

use gl::types::GLenum;
use thiserror::Error;

use crate::context::GlContext;

/// The GL error categories, plus a catch-all for codes outside the
/// 2.1 + framebuffer-object set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GlErrorKind {
	#[error("Invalid enum")]
	InvalidEnum,
	#[error("Invalid value")]
	InvalidValue,
	#[error("Invalid operation")]
	InvalidOperation,
	#[error("Invalid framebuffer operation")]
	InvalidFramebufferOperation,
	#[error("Out of memory")]
	OutOfMemory,
	#[error("Stack underflow")]
	StackUnderflow,
	#[error("Stack overflow")]
	StackOverflow,
	#[error("Undefined error")]
	Undefined,
}

impl GlErrorKind {
	/// `None` for `GL_NO_ERROR`.
	pub fn from_raw(error: GLenum) -> Option<Self> {
		match error {
			gl::NO_ERROR => None,
			gl::INVALID_ENUM => Some(Self::InvalidEnum),
			gl::INVALID_VALUE => Some(Self::InvalidValue),
			gl::INVALID_OPERATION => Some(Self::InvalidOperation),
			gl::INVALID_FRAMEBUFFER_OPERATION => Some(Self::InvalidFramebufferOperation),
			gl::OUT_OF_MEMORY => Some(Self::OutOfMemory),
			gl::STACK_UNDERFLOW => Some(Self::StackUnderflow),
			gl::STACK_OVERFLOW => Some(Self::StackOverflow),
			_ => Some(Self::Undefined),
		}
	}
}

/// A caller location carried into shader compilation so driver
/// diagnostics point at the call site, not this crate.
#[derive(Copy, Clone, Debug)]
pub struct CallSite {
	pub file: &'static str,
	pub line: u32,
}

impl fmt::Display for CallSite {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.file, self.line)
	}
}

/// The [`CallSite`] of the expansion location.
#[macro_export]
macro_rules! call_site {
	() => {
		$crate::error::CallSite {
			file: file!(),
			line: line!(),
		}
	};
}

/// Drains one pending error code and reports it without aborting.
///
/// Silent on no-error. Anything else is logged with the call site and
/// execution continues: a UI frame rendered wrong beats a crashed
/// session.
pub fn check_error<G: GlContext>(gl: &G, expr: &str, file: &str, line: u32) {
	if let Some(kind) = GlErrorKind::from_raw(gl.get_error()) {
		log::error!(target: "OpenGL", "{kind} in {file}:{line}");
		log::error!(target: "OpenGL", "    --- Expression: {expr}");
	}
}

/// Wraps one GL call with the error sentinel.
///
/// The call's value flows through unchanged; [`check_error`] runs right
/// after it with the stringified expression and the expansion site.
#[macro_export]
macro_rules! gl_check {
	($gl:expr, $call:expr) => {{
		let result = $call;
		$crate::error::check_error($gl, stringify!($call), file!(), line!());
		result
	}};
}
