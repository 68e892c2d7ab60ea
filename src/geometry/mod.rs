// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Geometry module - box corners and wireframe assembly

mod oriented_box;
mod wireframe;

pub use oriented_box::{
    compute_corners, corner_stages, CornerStages, OrientedBox, Vertex8, MAIN_CATEGORY,
    MAIN_HEIGHT, MAIN_LENGTH, MAIN_WIDTH,
};
pub use wireframe::{build_edges, Wireframe};
