// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Boxscope Team

//! Color identifiers used in the category table

use crate::error::{Result, VisualizerError};
use image::Rgb;

/// 8-bit RGB color resolved from a color identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    /// Parse a named color (case-insensitive, matplotlib basics and single-letter
    /// aliases) or a `#rrggbb` hex string
    pub fn parse(identifier: &str) -> Result<Self> {
        let name = identifier.trim().to_ascii_lowercase();
        if let Some(hex) = name.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| unknown(identifier));
        }

        let rgb = match name.as_str() {
            "black" | "k" => [0, 0, 0],
            "white" | "w" => [255, 255, 255],
            "red" | "r" => [255, 0, 0],
            "green" | "g" => [0, 128, 0],
            "blue" | "b" => [0, 0, 255],
            "cyan" | "c" => [0, 191, 191],
            "magenta" | "m" => [191, 0, 191],
            "yellow" | "y" => [191, 191, 0],
            "orange" => [255, 165, 0],
            "purple" => [128, 0, 128],
            "brown" => [165, 42, 42],
            "pink" => [255, 192, 203],
            "gray" | "grey" => [128, 128, 128],
            "lightgray" | "lightgrey" => [211, 211, 211],
            "olive" => [128, 128, 0],
            "navy" => [0, 0, 128],
            "lime" => [0, 255, 0],
            _ => return Err(unknown(identifier)),
        };
        Ok(Self(rgb))
    }

    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb(self.0)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb8([channel(0)?, channel(2)?, channel(4)?]))
}

fn unknown(identifier: &str) -> VisualizerError {
    VisualizerError::Backend(format!("unrecognized color \"{identifier}\""))
}
