// Copyright (C) 2026 the gl_canvas authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Immediate-mode 2D quad rendering over OpenGL 2.1.
//!
//! Sits between a UI toolkit's draw output and the GL driver: compiles
//! shader programs, keeps small dynamically-updatable quad meshes,
//! binds per-draw uniform state, and issues draw calls while leaving
//! the surrounding GPU state exactly as found.
//!
//! Everything runs against a [`context::GlContext`], usually
//! [`context::RawGl`] loaded from the window's proc-address loader.
//! All calls must stay on the thread owning the GL context; GL errors
//! are drained after every call and logged (target `"OpenGL"`) rather
//! than raised, so a broken frame degrades instead of crashing.

pub mod context;
pub mod draw;
pub mod error;
pub mod mesh;
pub mod probe;
pub mod shader;
pub mod texture;
