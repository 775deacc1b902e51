// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by the search surfaces and the anchor code.
//!
//! URL joining against the site base path lives here because every surface
//! needs it: result links, thumbnails, the index location, the search
//! endpoint, and the page URL written back into history.

pub mod html;
pub mod path;
