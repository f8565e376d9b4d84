//! Physical materials and their fixed property table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The material a shape is made of. Selects density, restitution and the
/// friction coefficients from a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// No material: zero density, friction and restitution.
    Unspecified,
    #[default]
    Solid,
    Ice,
    Wood,
    Metal,
    Rubber,
}

/// Coefficients looked up for a [`Material`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialProperties {
    pub density: f64,
    /// Coefficient of restitution. Range [0, 1].
    pub restitution: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
}

impl MaterialProperties {
    pub const fn new(density: f64, restitution: f64, static_friction: f64, dynamic_friction: f64) -> Self {
        Self {
            density,
            restitution,
            static_friction,
            dynamic_friction,
        }
    }
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Unspecified,
        Material::Solid,
        Material::Ice,
        Material::Wood,
        Material::Metal,
        Material::Rubber,
    ];

    pub fn properties(self) -> MaterialProperties {
        match self {
            Material::Unspecified => MaterialProperties::new(0.0, 0.0, 0.0, 0.0),
            Material::Solid => MaterialProperties::new(500.0, 0.7, 0.03, 0.01),
            Material::Ice => MaterialProperties::new(100.0, 0.3, 0.001, 0.0005),
            Material::Wood => MaterialProperties::new(700.0, 0.2, 0.05, 0.03),
            Material::Metal => MaterialProperties::new(2000.0, 0.1, 0.03, 0.02),
            Material::Rubber => MaterialProperties::new(200.0, 0.8, 0.05, 0.04),
        }
    }
}
