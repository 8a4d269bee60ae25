//! Scene descriptions: colliders described by their factory parameters
//!
//! A description is configuration, not collider state. Building one runs the
//! same validating factories as code does.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::math::Vec2;
use crate::physics::{Collider, ColliderError, SceneError};

/// A collider described by its factory parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeDesc {
    /// See [`Collider::circle`]
    Circle {
        /// Center
        position: Vec2,
        /// Radius
        radius: f32,
    },
    /// See [`Collider::rectangle`]
    Rectangle {
        /// Center
        position: Vec2,
        /// Width and height
        size: Vec2,
    },
    /// See [`Collider::polygon`]
    Polygon {
        /// Origin of the vertices
        position: Vec2,
        /// Vertices relative to the origin
        vertices: Vec<Vec2>,
    },
    /// See [`Collider::capsule`]
    Capsule {
        /// Start of the horizontal segment
        position: Vec2,
        /// Segment length
        length: f32,
        /// Full thickness
        thickness: f32,
    },
    /// See [`Collider::line`]
    Line {
        /// First endpoint
        start: Vec2,
        /// Second endpoint
        end: Vec2,
    },
}

impl ShapeDesc {
    /// Build the described collider
    pub fn build(&self) -> Result<Collider, ColliderError> {
        match self {
            Self::Circle { position, radius } => Collider::circle(*position, *radius),
            Self::Rectangle { position, size } => Collider::rectangle(*position, *size),
            Self::Polygon { position, vertices } => Collider::polygon(*position, vertices.clone()),
            Self::Capsule { position, length, thickness } => {
                Collider::capsule(*position, *length, *thickness)
            }
            Self::Line { start, end } => Collider::line(*start, *end),
        }
    }
}

/// A described collider with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShape {
    /// Name used in logs and lookups
    pub name: String,
    /// Shape description
    pub shape: ShapeDesc,
}

impl NamedShape {
    /// Create a named shape description
    pub fn new(name: impl Into<String>, shape: ShapeDesc) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Collider scene: static colliders, a movable probe and the path it follows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Cursor positions visited by the probe, in order
    pub cursor_path: Vec<Vec2>,

    /// Shape moved along the cursor path
    pub probe: ShapeDesc,

    /// Colliders placed in the scene
    pub colliders: Vec<NamedShape>,
}

impl Default for SceneConfig {
    /// One collider of each kind in a row, probed by a circle sweeping across them
    fn default() -> Self {
        let triangle = vec![
            Vec2::new(0.0, -50.0),
            Vec2::new(-50.0, 50.0),
            Vec2::new(50.0, 50.0),
        ];

        Self {
            cursor_path: (0..=24)
                .map(|step| Vec2::new(100.0 + step as f32 * 50.0, 200.0))
                .collect(),
            probe: ShapeDesc::Circle {
                position: Vec2::new(100.0, 200.0),
                radius: 25.0,
            },
            colliders: vec![
                NamedShape::new("circle", ShapeDesc::Circle {
                    position: Vec2::new(200.0, 200.0),
                    radius: 50.0,
                }),
                NamedShape::new("rectangle", ShapeDesc::Rectangle {
                    position: Vec2::new(400.0, 200.0),
                    size: Vec2::new(100.0, 80.0),
                }),
                NamedShape::new("triangle", ShapeDesc::Polygon {
                    position: Vec2::new(600.0, 200.0),
                    vertices: triangle,
                }),
                NamedShape::new("capsule", ShapeDesc::Capsule {
                    position: Vec2::new(800.0, 200.0),
                    length: 100.0,
                    thickness: 40.0,
                }),
                NamedShape::new("line", ShapeDesc::Line {
                    start: Vec2::new(1000.0, 150.0),
                    end: Vec2::new(1000.0, 250.0),
                }),
            ],
        }
    }
}

impl SceneConfig {
    /// Build the probe collider described by the scene
    pub fn build_probe(&self) -> Result<Collider, SceneError> {
        self.probe.build().map_err(SceneError::InvalidProbe)
    }
}

impl Config for SceneConfig {}
